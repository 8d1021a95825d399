//! Per-route rendering of union alternatives.

use routegen_codegen::TypeMapper;
use routegen_core::{Query, Route};

use crate::{
    ast::{Field, ObjectLiteral, TypeLiteral, single_quoted},
    type_mapper::TypeScriptTypeMapper,
};

/// Render a query map as an inline type literal, e.g. `{ id: string; }`.
///
/// Fields follow map order. An empty map renders as the empty string.
pub fn query_fragment(query: &Query) -> String {
    let mapper = TypeScriptTypeMapper;
    query
        .iter()
        .map(|(name, &kind)| {
            let field = Field::new(name.as_str(), mapper.map_param_type(kind));
            if mapper.is_optional_param(kind) {
                field.optional()
            } else {
                field
            }
        })
        .collect::<TypeLiteral>()
        .render()
}

/// The union alternatives contributed by one route.
///
/// A route with parameters contributes its `{ pathname, query }` object.
/// A static route contributes the object and the bare pathname string.
pub fn route_alternatives(route: &Route) -> Vec<String> {
    let pathname = single_quoted(&route.pathname);
    let query = query_fragment(&route.query);

    if query.is_empty() {
        vec![
            ObjectLiteral::new().property("pathname", pathname.as_str()).render(),
            pathname,
        ]
    } else {
        vec![
            ObjectLiteral::new()
                .property("pathname", pathname)
                .property("query", query)
                .render(),
        ]
    }
}
