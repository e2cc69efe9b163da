//! Depth-first, pre-order traversal over a `SyntaxTree`.
//!
//! Traversal uses an explicit work stack, so arbitrarily deep trees cannot
//! exhaust the call stack. A node is yielded before any of its descendants,
//! and siblings are yielded in source order.

use super::{NodeId, NodeKind, SyntaxNode, SyntaxTree};

/// Pre-order iterator over `start` and all of its descendants.
pub struct PreOrder<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl<'a> PreOrder<'a> {
    pub fn new(tree: &'a SyntaxTree, start: NodeId) -> Self {
        Self {
            tree,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (NodeId, &'a SyntaxNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack.extend(node.children.iter().rev().copied());
        Some((id, node))
    }
}

/// First node of `kind` at or below `start`, in pre-order.
pub fn find_first(tree: &SyntaxTree, start: NodeId, kind: NodeKind) -> Option<NodeId> {
    PreOrder::new(tree, start)
        .find(|(_, node)| node.kind == kind)
        .map(|(id, _)| id)
}

/// Invoke `on_each` for every node of `kind` at or below `start`, in pre-order.
pub fn visit_all<'a, F>(tree: &'a SyntaxTree, start: NodeId, kind: NodeKind, mut on_each: F)
where
    F: FnMut(NodeId, &'a SyntaxNode),
{
    PreOrder::new(tree, start)
        .filter(|(_, node)| node.kind == kind)
        .for_each(|(id, node)| on_each(id, node));
}
