//! TypeScript type mapper implementation.

use routegen_codegen::TypeMapper;
use routegen_core::ParamKind;

/// Maps parameter kinds to the types Next.js puts in `router.query`.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_param_type(&self, kind: ParamKind) -> &'static str {
        match kind {
            ParamKind::Dynamic => "string",
            ParamKind::CatchAll => "string[]",
            ParamKind::OptionalCatchAll => "string[]",
        }
    }

    fn is_optional_param(&self, kind: ParamKind) -> bool {
        match kind {
            ParamKind::Dynamic => false,
            ParamKind::CatchAll => false,
            ParamKind::OptionalCatchAll => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_param_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_param_type(ParamKind::Dynamic), "string");
        assert_eq!(mapper.map_param_type(ParamKind::CatchAll), "string[]");
        assert_eq!(mapper.map_param_type(ParamKind::OptionalCatchAll), "string[]");
    }

    #[test]
    fn test_only_optional_catch_all_is_optional() {
        let mapper = TypeScriptTypeMapper;

        assert!(!mapper.is_optional_param(ParamKind::Dynamic));
        assert!(!mapper.is_optional_param(ParamKind::CatchAll));
        assert!(mapper.is_optional_param(ParamKind::OptionalCatchAll));
    }
}
