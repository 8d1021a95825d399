//! TypeScript syntax builders for route declarations.
//!
//! These provide a small API for constructing the TypeScript that ends up in
//! the declaration file, rendered via CodeBuilder.

mod declare_module;
mod literal;
mod types;

pub use declare_module::DeclareModule;
pub use literal::single_quoted;
pub use types::{Field, ObjectLiteral, TypeLiteral, Union};
