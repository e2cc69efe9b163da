//! Source file parsing.
//!
//! - `module`: TS/TSX/JS/JSX parser (uses swc, lowers into a `SyntaxTree`)

pub mod module;

pub use module::{SourceModule, parse_module_file, parse_module_source};
