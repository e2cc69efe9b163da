//! The full pipeline over a loaded project: extract, deduplicate, match.

use tracing::info;

use crate::config::Config;
use crate::core::{
    KeyMatch, LocaleKeyExtractor, Project, ReferenceExtractor, TranslationEntry,
    TranslationReference, match_keys,
};
use crate::issues::{Issue, MissingTranslationIssue, UnusedTranslationIssue};

/// Everything one analysis run produced.
#[derive(Debug, Default)]
pub struct Analysis {
    pub entries: Vec<TranslationEntry>,
    pub references: Vec<TranslationReference>,
    pub key_match: KeyMatch,
    pub source_module_count: usize,
    pub locale_module_count: usize,
}

impl Analysis {
    /// Missing translations followed by unused translations, in match order.
    pub fn issues(&self) -> Vec<Issue> {
        let missing = self.key_match.missing.iter().map(|reference| {
            Issue::MissingTranslation(MissingTranslationIssue {
                reference: reference.clone(),
            })
        });
        let unused = self.key_match.unused.iter().map(|entry| {
            Issue::UnusedTranslation(UnusedTranslationIssue {
                entry: entry.clone(),
            })
        });
        missing.chain(unused).collect()
    }
}

pub fn analyze(project: &Project, config: &Config) -> Analysis {
    let locale_extractor = LocaleKeyExtractor::from_config(config);
    let reference_extractor = ReferenceExtractor::from_config(config);

    let entries = config
        .duplicates
        .apply_entries(locale_extractor.extract(&project.modules));
    let references = config
        .duplicates
        .apply_references(reference_extractor.extract(&project.modules));
    let key_match = match_keys(&entries, &references);

    let locale_module_count = project
        .modules
        .iter()
        .filter(|m| locale_extractor.is_locale_module(&m.full_path))
        .count();

    info!(
        clean = key_match.is_clean(),
        entries = entries.len(),
        references = references.len(),
        missing = key_match.missing.len(),
        unused = key_match.unused.len(),
        "analysis finished"
    );

    Analysis {
        entries,
        references,
        key_match,
        source_module_count: project.modules.len(),
        locale_module_count,
    }
}
