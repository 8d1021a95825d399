//! Module augmentations for `next/link` and `next/router`.
//!
//! Both bodies are fixed; only the name of the route union varies.

use crate::{ast::DeclareModule, code_file::RawCode};

const TYPE_NAME_PLACEHOLDER: &str = "{routes}";

const LINK_BODY: &str = r#"import type { LinkProps as NextLinkProps } from "next/link";
import type { PropsWithChildren, MouseEventHandler } from "react";

interface LinkProps extends Omit<NextLinkProps, "href"> {
  href: {routes};
}

declare function Link(
  props: PropsWithChildren<LinkProps>
): DetailedReactHTMLElement<
  {
    onMouseEnter?: MouseEventHandler<Element> | undefined;
    onClick: MouseEventHandler;
    href?: string | undefined;
    ref?: any;
  },
  HTMLElement
>;

export default Link;"#;

const ROUTER_BODY: &str = r#"import type { NextRouter } from "next/router";

type TransitionOptions = Parameters<NextRouter["push"]>[2];

interface Router extends Omit<NextRouter, "push" | "replace"> {
  push(
    url: {routes},
    as?: {routes},
    options?: TransitionOptions
  ): Promise<boolean>;
  replace(
    url: {routes},
    as?: {routes},
    options?: TransitionOptions
  ): Promise<boolean>;
}

export function useRouter(): Router;"#;

/// `declare module "next/link"` with `href` constrained to `type_name`.
pub fn link_module(type_name: &str) -> DeclareModule {
    DeclareModule::new("next/link").body(RawCode::new(
        LINK_BODY.replace(TYPE_NAME_PLACEHOLDER, type_name),
    ))
}

/// `declare module "next/router"` with `push`/`replace` taking `type_name`.
pub fn router_module(type_name: &str) -> DeclareModule {
    DeclareModule::new("next/router").body(RawCode::new(
        ROUTER_BODY.replace(TYPE_NAME_PLACEHOLDER, type_name),
    ))
}

#[cfg(test)]
mod tests {
    use routegen_codegen::CodeBuilder;

    use super::*;

    fn render(module: &DeclareModule) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(module);
        builder.build()
    }

    #[test]
    fn test_link_module_uses_type_name() {
        let code = render(&link_module("AppRoutes"));

        assert!(code.starts_with("declare module \"next/link\" {\n"));
        assert!(code.contains("\n    href: AppRoutes;\n"));
        assert!(!code.contains(TYPE_NAME_PLACEHOLDER));
        assert!(code.ends_with("\n  export default Link;\n}\n"));
    }

    #[test]
    fn test_router_module_uses_type_name() {
        let code = render(&router_module("Routes"));

        assert_eq!(code.matches("url: Routes,").count(), 2);
        assert_eq!(code.matches("as?: Routes,").count(), 2);
        assert!(code.contains("\n  export function useRouter(): Router;\n}\n"));
    }

    #[test]
    fn test_blank_lines_have_no_indent() {
        let code = render(&router_module("Routes"));
        assert!(!code.lines().any(|line| !line.is_empty() && line.trim().is_empty()));
    }
}
