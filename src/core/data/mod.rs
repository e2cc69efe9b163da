//! Data produced by extraction and consumed by matching and reporting.
//!
//! ## Module Structure
//!
//! - `entry`: `TranslationEntry` (a key defined in a locale module)
//! - `reference`: `TranslationReference` (a key used at a translation call-site)
//! - `source`: `SourceLocation` (file + zero-based line)

pub mod entry;
pub mod reference;
pub mod source;

pub use entry::TranslationEntry;
pub use reference::TranslationReference;
pub use source::SourceLocation;
