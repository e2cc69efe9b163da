//! Findings produced by an analysis run.
//!
//! Each issue carries everything the reporters need, so text and JSON output
//! are rendered from the same values.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::{TranslationEntry, TranslationReference};

/// A key referenced in code but defined in no locale module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTranslationIssue {
    pub reference: TranslationReference,
}

/// A key defined in a locale module but never referenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnusedTranslationIssue {
    pub entry: TranslationEntry,
}

/// A source file that could not be read or parsed. Analysis continues without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

/// Common interface for rendering issues.
#[enum_dispatch]
pub trait Report {
    /// One-line rendering used by the text report.
    fn summary_line(&self) -> String;
}

impl Report for MissingTranslationIssue {
    /// `<normalizedKey> <file>:<line>`
    fn summary_line(&self) -> String {
        self.reference.to_string()
    }
}

impl Report for UnusedTranslationIssue {
    /// `<language> <keyPath>`
    fn summary_line(&self) -> String {
        self.entry.to_string()
    }
}

impl Report for ParseErrorIssue {
    fn summary_line(&self) -> String {
        format!("{} {}", self.file_path, self.error)
    }
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    UnusedTranslation(UnusedTranslationIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    /// Missing and unused translations; parse errors are diagnostics, not findings.
    pub fn is_finding(&self) -> bool {
        match self {
            Issue::MissingTranslation(_) | Issue::UnusedTranslation(_) => true,
            Issue::ParseError(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::SourceLocation;

    #[test]
    fn test_missing_summary_line() {
        let issue = Issue::from(MissingTranslationIssue {
            reference: TranslationReference::new(
                "common.missingKey",
                SourceLocation::new("src/app.tsx", 4),
            ),
        });
        assert_eq!(issue.summary_line(), "common.missingKey src/app.tsx:4");
        assert!(issue.is_finding());
    }

    #[test]
    fn test_unused_summary_line() {
        let issue = Issue::from(UnusedTranslationIssue {
            entry: TranslationEntry::new(
                "en",
                "page.footer",
                "Footer",
                SourceLocation::new("shared/locales/en.ts", 9),
            ),
        });
        assert_eq!(issue.summary_line(), "en page.footer");
        assert!(issue.is_finding());
    }

    #[test]
    fn test_parse_error_is_not_a_finding() {
        let issue = Issue::from(ParseErrorIssue {
            file_path: "src/broken.ts".to_string(),
            error: "line 1: Expression expected".to_string(),
        });
        assert!(!issue.is_finding());
        assert_eq!(issue.summary_line(), "src/broken.ts line 1: Expression expected");
    }

    #[test]
    fn test_issue_serializes_with_rule_tag() {
        let issue = Issue::from(ParseErrorIssue {
            file_path: "src/broken.ts".to_string(),
            error: "boom".to_string(),
        });
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["rule"], "parse-error");
        assert_eq!(json["filePath"], "src/broken.ts");
    }
}
