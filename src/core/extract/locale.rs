use tracing::debug;

use crate::config::Config;
use crate::core::{
    SourceLocation, SourceModule, TranslationEntry,
    syntax::{NodeId, NodeKind, SyntaxNode, SyntaxTree, find_first},
};

/// Flattens the first object literal of each locale module into dotted keys.
#[derive(Debug, Clone)]
pub struct LocaleKeyExtractor {
    locale_dir_marker: String,
    separator: String,
}

impl LocaleKeyExtractor {
    pub fn new(locale_dir_marker: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            locale_dir_marker: locale_dir_marker.into(),
            separator: separator.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.locale_dir_marker, &config.namespace_separator)
    }

    /// Whether `full_path` lies under the locale directory marker. The full
    /// path is used so a source root inside the locale tree still matches.
    pub fn is_locale_module(&self, full_path: &str) -> bool {
        full_path.contains(&self.locale_dir_marker)
    }

    /// Language tag of a locale module: the text between the marker and the
    /// next `.` (`shared/locales/en.ts` -> `en`).
    pub fn language_of<'p>(&self, path: &'p str) -> Option<&'p str> {
        let (_, rest) = path.split_once(self.locale_dir_marker.as_str())?;
        rest.split('.').next().filter(|lang| !lang.is_empty())
    }

    /// Entries of every locale module, in module order then declaration order.
    pub fn extract(&self, modules: &[SourceModule]) -> Vec<TranslationEntry> {
        let mut entries = Vec::new();
        for module in modules.iter().filter(|m| self.is_locale_module(&m.full_path)) {
            let Some(language) = self.language_of(&module.full_path) else {
                debug!(path = %module.path, "locale module without a language tag, skipping");
                continue;
            };
            let before = entries.len();
            self.extract_module(module, language, &mut entries);
            debug!(
                path = %module.path,
                language,
                entries = entries.len() - before,
                "extracted locale module"
            );
        }
        entries
    }

    /// Flatten `module`'s first object literal under `language`.
    ///
    /// A module without any object literal contributes nothing.
    pub fn extract_module(
        &self,
        module: &SourceModule,
        language: &str,
        entries: &mut Vec<TranslationEntry>,
    ) {
        let tree = &module.tree;
        let Some(object) = find_first(tree, tree.root(), NodeKind::ObjectLiteral) else {
            return;
        };

        // Work stack of (property, parent key path). Properties are pushed in
        // reverse so they pop in declaration order, depth first.
        let mut stack: Vec<(NodeId, String)> = Vec::new();
        push_properties(tree, object, "", &mut stack);

        while let Some((property, prefix)) = stack.pop() {
            let mut parts = tree.children(property);
            let (Some((_, name)), Some((value_id, value))) = (parts.next(), parts.next()) else {
                continue;
            };
            let Some(name) = property_name(name) else {
                continue;
            };
            let key_path = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{}{}{}", prefix, self.separator, name)
            };

            match value.kind {
                NodeKind::ObjectLiteral => push_properties(tree, value_id, &key_path, &mut stack),
                NodeKind::StringLiteral | NodeKind::TemplateLiteral => {
                    if key_path.is_empty() {
                        continue;
                    }
                    entries.push(TranslationEntry::new(
                        language,
                        key_path,
                        value.text().unwrap_or_default(),
                        SourceLocation::new(&module.path, value.line),
                    ));
                }
                NodeKind::Module
                | NodeKind::PropertyAssignment
                | NodeKind::TemplateExpression
                | NodeKind::CallExpression
                | NodeKind::Identifier
                | NodeKind::Other => {}
            }
        }
    }
}

fn push_properties(
    tree: &SyntaxTree,
    object: NodeId,
    prefix: &str,
    stack: &mut Vec<(NodeId, String)>,
) {
    let properties: Vec<NodeId> = tree
        .children(object)
        .filter(|(_, node)| node.kind == NodeKind::PropertyAssignment)
        .map(|(id, _)| id)
        .collect();
    stack.extend(
        properties
            .into_iter()
            .rev()
            .map(|id| (id, prefix.to_string())),
    );
}

fn property_name(name: &SyntaxNode) -> Option<&str> {
    match name.kind {
        NodeKind::StringLiteral | NodeKind::TemplateLiteral | NodeKind::Identifier => name.text(),
        NodeKind::Module
        | NodeKind::ObjectLiteral
        | NodeKind::PropertyAssignment
        | NodeKind::TemplateExpression
        | NodeKind::CallExpression
        | NodeKind::Other => None,
    }
}
