//! Type inference rules, applied when a node is entered.

use crate::analyzer::context::AnalysisContext;
use crate::analyzer::core::Analyzer;
use decaf_ast::{Node, NodeKind, OperatorClass, UnaryOperator};
use decaf_core::DecafType;

impl Analyzer<'_> {
    /// Computes and records the type of `node`.
    ///
    /// Names that do not resolve become `Void`; the lookup failure itself is
    /// reported when the node is left.
    pub(crate) fn infer_node(&self, node: &Node, cx: &AnalysisContext) {
        let ty = match &node.kind {
            NodeKind::Literal(literal) => literal.ty(),
            NodeKind::VarDecl { ty, .. } => *ty,
            NodeKind::FuncDecl { return_type, .. } => *return_type,
            NodeKind::Location { name, .. } => self
                .lookup(cx, name)
                .map_or(DecafType::Void, |symbol| symbol.ty),
            NodeKind::Conditional { .. } | NodeKind::WhileLoop { .. } => DecafType::Bool,
            NodeKind::Return { .. } => cx
                .current_function()
                .and_then(|name| self.lookup_function(cx, name))
                .map_or(DecafType::Void, |function| function.ty),
            NodeKind::FuncCall { name, .. } => self
                .lookup(cx, name)
                .filter(|symbol| symbol.is_function())
                .map_or(DecafType::Void, |function| function.ty),
            NodeKind::BinaryOp { op, .. } => match op.class() {
                OperatorClass::Logical | OperatorClass::Equality | OperatorClass::Relational => {
                    DecafType::Bool
                }
                OperatorClass::Arithmetic => DecafType::Int,
            },
            NodeKind::UnaryOp { op, .. } => match op {
                UnaryOperator::Neg => DecafType::Int,
                UnaryOperator::Not => DecafType::Bool,
            },
            NodeKind::Program { .. }
            | NodeKind::Block { .. }
            | NodeKind::Break
            | NodeKind::Continue
            | NodeKind::Assignment { .. } => DecafType::Void,
        };

        Self::infer(node, ty);
    }
}
