//! Closed syntax model the extractors run on.
//!
//! Parsed swc modules are lowered into a `SyntaxTree`: an arena of nodes whose
//! kind is one of a handful of variants. Every expression in the source becomes
//! exactly one node, so parent/child relations match the source syntax for the
//! expressions we care about, while statements and declarations are flattened away.
//!
//! ## Module Structure
//!
//! - `tree`: `SyntaxTree`, `SyntaxNode`, `NodeKind`, `NodeId`
//! - `walk`: pre-order traversal (`find_first`, `visit_all`)
//! - `lower`: swc AST -> `SyntaxTree`

pub mod lower;
pub mod tree;
pub mod walk;

pub use lower::lower_module;
pub use tree::{NodeId, NodeKind, SyntaxNode, SyntaxTree};
pub use walk::{PreOrder, find_first, visit_all};
