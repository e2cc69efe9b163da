//! Set difference between defined and referenced keys.
//!
//! Matching compares `key_path` only. Language and value never participate, so
//! a reference is satisfied by a definition in any language.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{TranslationEntry, TranslationReference};

/// How repeated definitions and references are treated before matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// One reference per call-site literal, one entry per definition.
    #[default]
    Keep,
    /// First entry per `(language, key_path)`, first reference per `key_path`.
    Collapse,
}

impl DuplicatePolicy {
    pub fn apply_entries(self, entries: Vec<TranslationEntry>) -> Vec<TranslationEntry> {
        match self {
            DuplicatePolicy::Keep => entries,
            DuplicatePolicy::Collapse => {
                let keep: Vec<bool> = {
                    let mut seen: HashSet<(&str, &str)> = HashSet::new();
                    entries.iter().map(|e| seen.insert(e.identity())).collect()
                };
                entries
                    .into_iter()
                    .zip(keep)
                    .filter_map(|(entry, keep)| keep.then_some(entry))
                    .collect()
            }
        }
    }

    pub fn apply_references(
        self,
        references: Vec<TranslationReference>,
    ) -> Vec<TranslationReference> {
        match self {
            DuplicatePolicy::Keep => references,
            DuplicatePolicy::Collapse => {
                let mut seen: HashSet<String> = HashSet::new();
                references
                    .into_iter()
                    .filter(|r| seen.insert(r.key_path.clone()))
                    .collect()
            }
        }
    }
}

/// Outcome of matching. Both lists keep the order of their input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMatch {
    /// References whose key is not defined in any language.
    pub missing: Vec<TranslationReference>,
    /// Entries whose key is never referenced.
    pub unused: Vec<TranslationEntry>,
}

impl KeyMatch {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }
}

pub fn match_keys(entries: &[TranslationEntry], references: &[TranslationReference]) -> KeyMatch {
    let defined: HashSet<&str> = entries.iter().map(|e| e.key_path.as_str()).collect();
    let used: HashSet<&str> = references.iter().map(|r| r.key_path.as_str()).collect();

    KeyMatch {
        missing: references
            .iter()
            .filter(|r| !defined.contains(r.key_path.as_str()))
            .cloned()
            .collect(),
        unused: entries
            .iter()
            .filter(|e| !used.contains(e.key_path.as_str()))
            .cloned()
            .collect(),
    }
}
