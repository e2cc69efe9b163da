//! Extraction-and-matching engine.
//!
//! ## Pipeline
//!
//! 1. **Provider** (`project`): scan the source root, parse each file with swc and
//!    lower it into a `SyntaxTree`.
//! 2. **Extraction** (`extract`): `LocaleKeyExtractor` flattens locale modules into
//!    `TranslationEntry`s; `ReferenceExtractor` collects `TranslationReference`s from
//!    translation calls in every module.
//! 3. **Matching** (`matcher`): key-path set difference into missing and unused keys.
//!
//! `analysis::analyze` runs steps 2 and 3 over a loaded `Project`.

pub mod analysis;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod matcher;
pub mod parsers;
pub mod project;
pub mod syntax;

pub use analysis::{Analysis, analyze};
pub use data::{SourceLocation, TranslationEntry, TranslationReference};
pub use extract::{LocaleKeyExtractor, ReferenceExtractor};
pub use matcher::{DuplicatePolicy, KeyMatch, match_keys};
pub use parsers::SourceModule;
pub use project::{Project, load_project};
