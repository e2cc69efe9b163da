//! i18n-keys - find missing and unused translation keys
//!
//! Extracts translation keys defined in locale modules (nested object literals
//! under a locale directory) and cross-references them against every call of the
//! translation function across a JS/TS source tree.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction-and-matching engine
//! - `issues`: Issue types for reporting

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
