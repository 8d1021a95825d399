//! TypeScript declaration generator for routegen.
//!
//! This crate renders extracted routes as a `.d.ts` file. The file declares a
//! union of every legal navigation target and augments `next/link` and
//! `next/router` so `href`, `push` and `replace` only accept that union.
//!
//! # Usage
//!
//! ```ignore
//! use routegen_codegen_typescript::{Generator, LanguageCodegen};
//! use std::path::Path;
//!
//! let generator = Generator::new(&routes).type_name("Routes");
//!
//! // Preview without writing
//! let files = generator.preview();
//!
//! // Write nextjs-routes.d.ts into the project
//! let result = generator.generate(Path::new("."))?;
//! ```

mod augment;
mod code_file;
mod declaration;
mod generator;
mod type_mapper;

pub mod ast;

pub use code_file::{CodeFile, RawCode};
pub use declaration::{query_fragment, route_alternatives};
pub use generator::{DEFAULT_OUTPUT_PATH, DEFAULT_TYPE_NAME, Generator};
pub use routegen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::TypeScriptTypeMapper;
