//! Pre-order/post-order tree walker.

use crate::ast::Node;

/// Visitor trait for walking the syntax tree.
///
/// `visit` calls `enter`, then visits every child in lexical order, then calls
/// `exit`. Override `enter`/`exit` to hook node kinds; override `visit` to wrap
/// a whole subtree (for example to save and restore state around it).
///
/// Mutable state that must follow the walk is passed explicitly as `Context`.
pub trait Visitor: Sized {
    type Context;

    fn visit(&mut self, node: &Node, cx: &mut Self::Context) {
        self.enter(node, cx);
        walk_children(self, node, cx);
        self.exit(node, cx);
    }

    fn enter(&mut self, _node: &Node, _cx: &mut Self::Context) {}

    fn exit(&mut self, _node: &Node, _cx: &mut Self::Context) {}
}

/// Visits the children of `node` in lexical order.
pub fn walk_children<V: Visitor>(visitor: &mut V, node: &Node, cx: &mut V::Context) {
    for child in node.children() {
        visitor.visit(child, cx);
    }
}
