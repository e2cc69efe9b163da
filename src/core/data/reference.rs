use std::fmt;

use serde::Serialize;

use super::SourceLocation;

/// A translation key used at a call-site of the translation function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationReference {
    /// Key after default-namespace normalization (`foo` -> `common.foo`).
    pub key_path: String,
    pub location: SourceLocation,
}

impl TranslationReference {
    pub fn new(key_path: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            key_path: key_path.into(),
            location,
        }
    }
}

/// Renders as `<keyPath> <file>:<line>`.
impl fmt::Display for TranslationReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key_path, self.location)
    }
}
