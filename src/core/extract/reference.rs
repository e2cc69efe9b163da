use tracing::debug;

use crate::config::Config;
use crate::core::{
    SourceLocation, SourceModule, TranslationReference,
    syntax::{NodeKind, visit_all},
};

/// Collects key arguments of every call whose leading token is the
/// translation function name.
///
/// Matching is purely syntactic: any call named like the translation function
/// counts, whatever it is bound to. Every plain string argument of a matched
/// call yields a reference, so `t("key", "fallback")` yields two.
#[derive(Debug, Clone)]
pub struct ReferenceExtractor {
    function_name: String,
    separator: String,
    default_namespace: String,
}

impl ReferenceExtractor {
    pub fn new(
        function_name: impl Into<String>,
        separator: impl Into<String>,
        default_namespace: impl Into<String>,
    ) -> Self {
        Self {
            function_name: function_name.into(),
            separator: separator.into(),
            default_namespace: default_namespace.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.translation_fn_name,
            &config.namespace_separator,
            &config.default_namespace,
        )
    }

    /// Prefix keys without a separator with the default namespace.
    ///
    /// `hello` -> `common.hello`; `page.title` stays as is.
    pub fn normalize_key(&self, key: &str) -> String {
        if key.contains(self.separator.as_str()) {
            key.to_string()
        } else {
            format!("{}{}{}", self.default_namespace, self.separator, key)
        }
    }

    /// References from every module, in module order then source order.
    pub fn extract(&self, modules: &[SourceModule]) -> Vec<TranslationReference> {
        let mut references = Vec::new();
        for module in modules {
            let before = references.len();
            self.extract_module(module, &mut references);
            if references.len() > before {
                debug!(
                    path = %module.path,
                    references = references.len() - before,
                    "extracted references"
                );
            }
        }
        references
    }

    pub fn extract_module(&self, module: &SourceModule, references: &mut Vec<TranslationReference>) {
        let tree = &module.tree;
        visit_all(tree, tree.root(), NodeKind::CallExpression, |call, node| {
            if node.text() != Some(self.function_name.as_str()) {
                return;
            }
            for (_, arg) in tree.children(call) {
                match arg.kind {
                    NodeKind::StringLiteral | NodeKind::TemplateLiteral => {
                        let Some(text) = arg.text() else {
                            continue;
                        };
                        references.push(TranslationReference::new(
                            self.normalize_key(text),
                            SourceLocation::new(&module.path, arg.line),
                        ));
                    }
                    NodeKind::Module
                    | NodeKind::ObjectLiteral
                    | NodeKind::PropertyAssignment
                    | NodeKind::TemplateExpression
                    | NodeKind::CallExpression
                    | NodeKind::Identifier
                    | NodeKind::Other => {}
                }
            }
        });
    }
}
