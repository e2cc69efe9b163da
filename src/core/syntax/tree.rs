/// Kind of a lowered syntax node.
///
/// The set is closed: extractors match on it exhaustively, so adding a kind
/// forces every consumer to decide what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of a module. Only ever the root.
    Module,
    /// `{ ... }` expression. Children are its properties in declaration order.
    ObjectLiteral,
    /// `name: value` property. Children are `[name, value]`, where the name is a
    /// `StringLiteral` (quoted key) or an `Identifier` (bare or numeric key).
    PropertyAssignment,
    /// `'text'` or `"text"`. Text is the unescaped value.
    StringLiteral,
    /// `` `text` `` without substitutions. Text is the cooked value.
    TemplateLiteral,
    /// `` `a ${b}` `` with at least one substitution.
    TemplateExpression,
    /// `callee(args)`. Children are the callee followed by each argument.
    /// Text is the callee's leading identifier token, if it has one.
    CallExpression,
    /// Identifier reference or property-name identifier. Text is the name.
    Identifier,
    /// Any other expression or unsupported property shape.
    Other,
}

impl NodeKind {
    /// Literal kinds whose text is usable as a translation key or value.
    pub fn is_plain_literal(self) -> bool {
        match self {
            NodeKind::StringLiteral | NodeKind::TemplateLiteral => true,
            NodeKind::Module
            | NodeKind::ObjectLiteral
            | NodeKind::PropertyAssignment
            | NodeKind::TemplateExpression
            | NodeKind::CallExpression
            | NodeKind::Identifier
            | NodeKind::Other => false,
        }
    }
}

/// Index of a node inside its `SyntaxTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Literal content, identifier text, or a call's leading token.
    pub text: Option<String>,
    /// Zero-based line where the node starts.
    pub line: usize,
    pub children: Vec<NodeId>,
}

impl SyntaxNode {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Arena-backed syntax tree. Node 0 is always the `Module` root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![SyntaxNode {
                kind: NodeKind::Module,
                text: None,
                line: 0,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.0]
    }

    /// Immediate children of `id`, in source order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SyntaxNode)> {
        self.node(id)
            .children
            .iter()
            .map(move |&child| (child, self.node(child)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Append a node as the last child of `parent`.
    pub fn push(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        text: Option<String>,
        line: usize,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SyntaxNode {
            kind,
            text,
            line,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}
