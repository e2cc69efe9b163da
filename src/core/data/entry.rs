use std::fmt;

use serde::Serialize;

use super::SourceLocation;

/// A localized string defined in a locale module.
///
/// For matching, only `key_path` matters: a reference is satisfied by an entry
/// under any language. `(language, key_path)` identifies an entry when
/// duplicates are collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    /// Language tag taken from the locale module's file name (e.g. `en`).
    pub language: String,
    /// Dotted path of nested object keys (e.g. `page.title`). Never empty.
    pub key_path: String,
    /// Literal string content, unescaped, placeholders left as-is.
    pub value: String,
    pub location: SourceLocation,
}

impl TranslationEntry {
    pub fn new(
        language: impl Into<String>,
        key_path: impl Into<String>,
        value: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            language: language.into(),
            key_path: key_path.into(),
            value: value.into(),
            location,
        }
    }

    /// Identity used when collapsing duplicate definitions.
    pub fn identity(&self) -> (&str, &str) {
        (&self.language, &self.key_path)
    }
}

/// Renders as `<language> <keyPath>`.
impl fmt::Display for TranslationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.language, self.key_path)
    }
}
