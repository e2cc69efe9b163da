//! Lowering of a parsed swc `Module` into a `SyntaxTree`.
//!
//! Statements, declarations, patterns and JSX structure are transparent: only
//! expressions (and object properties) become nodes, attached to the nearest
//! enclosing expression node. Each expression maps to exactly one node, so a
//! literal wrapped in parentheses, a ternary or an `as` cast is *not* an
//! immediate child of the surrounding call.

use std::mem;

use swc_common::{SourceMap, Span, Spanned};
use swc_ecma_ast::{
    Callee, Expr, ExprOrSpread, Lit, Module, OptChainBase, Prop, PropName, PropOrSpread, Str, Tpl,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::{NodeId, NodeKind, SyntaxTree};

/// Lower `module` into a fresh `SyntaxTree`, resolving lines through `source_map`.
pub fn lower_module(module: &Module, source_map: &SourceMap) -> SyntaxTree {
    let tree = SyntaxTree::new();
    let parent = tree.root();
    let mut builder = TreeBuilder {
        source_map,
        tree,
        parent,
    };
    module.visit_with(&mut builder);
    builder.tree
}

struct TreeBuilder<'a> {
    source_map: &'a SourceMap,
    tree: SyntaxTree,
    parent: NodeId,
}

impl TreeBuilder<'_> {
    fn line_of(&self, span: Span) -> usize {
        self.source_map
            .lookup_char_pos(span.lo)
            .line
            .saturating_sub(1)
    }

    fn leaf(&mut self, kind: NodeKind, text: Option<String>, span: Span) -> NodeId {
        let line = self.line_of(span);
        self.tree.push(self.parent, kind, text, line)
    }

    /// Push a node and lower everything `children` visits underneath it.
    fn branch<F>(&mut self, kind: NodeKind, text: Option<String>, span: Span, children: F)
    where
        F: FnOnce(&mut Self),
    {
        let id = self.leaf(kind, text, span);
        let outer = mem::replace(&mut self.parent, id);
        children(self);
        self.parent = outer;
    }

    fn lower_prop(&mut self, prop: &PropOrSpread) {
        match prop {
            PropOrSpread::Spread(spread) => {
                self.branch(NodeKind::Other, None, spread.span(), |b| {
                    b.visit_expr(&spread.expr)
                });
            }
            PropOrSpread::Prop(prop) => match &**prop {
                Prop::KeyValue(kv) => match &kv.key {
                    PropName::Computed(_) => {
                        self.branch(NodeKind::Other, None, kv.span(), |b| {
                            kv.visit_children_with(b)
                        });
                    }
                    key => {
                        self.branch(NodeKind::PropertyAssignment, None, kv.span(), |b| {
                            b.lower_prop_name(key);
                            b.visit_expr(&kv.value);
                        });
                    }
                },
                // Shorthand, assignment, method and accessor properties.
                other => {
                    self.branch(NodeKind::Other, None, other.span(), |b| {
                        other.visit_children_with(b)
                    });
                }
            },
        }
    }

    fn lower_prop_name(&mut self, key: &PropName) {
        match key {
            PropName::Ident(ident) => {
                self.leaf(NodeKind::Identifier, Some(ident.sym.to_string()), ident.span);
            }
            PropName::Str(s) => {
                self.leaf(NodeKind::StringLiteral, str_value(s), s.span);
            }
            PropName::Num(num) => {
                self.leaf(NodeKind::Identifier, Some(num.value.to_string()), num.span);
            }
            PropName::BigInt(big) => {
                self.leaf(NodeKind::Identifier, Some(big.value.to_string()), big.span);
            }
            PropName::Computed(computed) => {
                self.branch(NodeKind::Other, None, computed.span, |b| {
                    b.visit_expr(&computed.expr)
                });
            }
        }
    }

    fn lower_template(&mut self, tpl: &Tpl) {
        if tpl.exprs.is_empty() {
            let text = tpl
                .quasis
                .first()
                .map(|quasi| match quasi.cooked.as_ref().and_then(|c| c.as_str()) {
                    Some(cooked) => cooked.to_string(),
                    None => quasi.raw.to_string(),
                })
                .unwrap_or_default();
            self.leaf(NodeKind::TemplateLiteral, Some(text), tpl.span);
        } else {
            self.branch(NodeKind::TemplateExpression, None, tpl.span, |b| {
                tpl.exprs.iter().for_each(|expr| b.visit_expr(expr))
            });
        }
    }
}

impl Visit for TreeBuilder<'_> {
    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Object(obj) => {
                self.branch(NodeKind::ObjectLiteral, None, obj.span, |b| {
                    obj.props.iter().for_each(|prop| b.lower_prop(prop))
                });
            }
            Expr::Lit(Lit::Str(s)) => {
                self.leaf(NodeKind::StringLiteral, str_value(s), s.span);
            }
            Expr::Tpl(tpl) => self.lower_template(tpl),
            Expr::Call(call) => {
                self.branch(
                    NodeKind::CallExpression,
                    leading_token(&call.callee),
                    call.span,
                    |b| call.visit_children_with(b),
                );
            }
            Expr::OptChain(chain) => match &*chain.base {
                OptChainBase::Call(call) => {
                    self.branch(
                        NodeKind::CallExpression,
                        leading_identifier(&call.callee),
                        chain.span,
                        |b| call.visit_children_with(b),
                    );
                }
                OptChainBase::Member(member) => {
                    self.branch(NodeKind::Other, None, chain.span, |b| {
                        member.visit_children_with(b)
                    });
                }
            },
            Expr::Ident(ident) => {
                self.leaf(NodeKind::Identifier, Some(ident.sym.to_string()), ident.span);
            }
            _ => {
                self.branch(NodeKind::Other, None, expr.span(), |b| {
                    expr.visit_children_with(b)
                });
            }
        }
    }

    fn visit_expr_or_spread(&mut self, arg: &ExprOrSpread) {
        match arg.spread {
            Some(dots) => {
                let span = Span::new(dots.lo, arg.expr.span().hi);
                self.branch(NodeKind::Other, None, span, |b| b.visit_expr(&arg.expr));
            }
            None => self.visit_expr(&arg.expr),
        }
    }
}

/// Unescaped value of a string literal. Lone surrogates yield `None`.
fn str_value(s: &Str) -> Option<String> {
    s.value.as_str().map(str::to_string)
}

/// Text of the first token of a call's callee, when that token is a name.
///
/// `t("k")`, `t.raw("k")`, `t!("k")` and `t<X>("k")` all lead with `t`;
/// `i18n.t("k")` leads with `i18n`; `(t)("k")` has no leading name.
fn leading_token(callee: &Callee) -> Option<String> {
    match callee {
        Callee::Super(_) => Some("super".to_string()),
        Callee::Import(_) => Some("import".to_string()),
        Callee::Expr(expr) => leading_identifier(expr),
    }
}

fn leading_identifier(expr: &Expr) -> Option<String> {
    let mut current = expr;
    loop {
        current = match current {
            Expr::Ident(ident) => return Some(ident.sym.to_string()),
            Expr::This(_) => return Some("this".to_string()),
            Expr::Member(member) => &*member.obj,
            Expr::SuperProp(_) => return Some("super".to_string()),
            Expr::TsNonNull(non_null) => &*non_null.expr,
            Expr::TsInstantiation(inst) => &*inst.expr,
            Expr::Call(call) => match &call.callee {
                Callee::Expr(callee) => &**callee,
                other => return leading_token(other),
            },
            Expr::OptChain(chain) => match &*chain.base {
                OptChainBase::Member(member) => &*member.obj,
                OptChainBase::Call(call) => &*call.callee,
            },
            _ => return None,
        };
    }
}
