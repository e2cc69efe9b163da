//! Extraction of defined keys (locale modules) and used keys (call-sites).
//!
//! Both extractors are pure functions of their configuration and the module
//! set: running them twice over the same modules yields the same output.

pub mod locale;
pub mod reference;

pub use locale::LocaleKeyExtractor;
pub use reference::ReferenceExtractor;
