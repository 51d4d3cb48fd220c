//! Statement checks.

use crate::analyzer::context::AnalysisContext;
use crate::analyzer::core::Analyzer;
use crate::error::SemanticError;
use decaf_ast::{Node, NodeKind};
use decaf_core::DecafType;

impl Analyzer<'_> {
    /// Checks that break/continue sit inside a while loop.
    pub(crate) fn check_loop_control(&mut self, node: &Node, cx: &AnalysisContext) {
        if cx.in_loop() {
            return;
        }
        match node.kind {
            NodeKind::Break => self.report(SemanticError::BreakOutsideLoop { line: node.line }),
            NodeKind::Continue => {
                self.report(SemanticError::ContinueOutsideLoop { line: node.line })
            }
            _ => {}
        }
    }

    /// Checks that an assigned value has the location's type.
    pub(crate) fn check_assignment(&mut self, node: &Node) {
        let NodeKind::Assignment { location, value } = &node.kind else {
            return;
        };
        let expected = Self::type_of(location);
        let found = Self::type_of(value);

        if expected != found {
            let name = match &location.kind {
                NodeKind::Location { name, .. } => name.clone(),
                _ => location.kind_name().to_string(),
            };
            self.report(SemanticError::AssignmentMismatch {
                name,
                expected,
                found,
                line: node.line,
            });
        }
    }

    /// Checks a return statement against the enclosing function's type,
    /// which was recorded as the statement's own type.
    pub(crate) fn check_return(&mut self, node: &Node) {
        let NodeKind::Return { value } = &node.kind else {
            return;
        };
        let expected = Self::type_of(node);

        let found = match value {
            Some(value) => Self::type_of(value),
            None if expected.is_void() => return,
            None => DecafType::Void,
        };

        // A void value comes from a name that did not resolve; that was
        // already reported.
        if value.is_some() && found.is_void() {
            return;
        }

        if expected != found {
            self.report(SemanticError::ReturnMismatch {
                expected,
                found,
                line: node.line,
            });
        }
    }

    /// Checks that an if/while condition is a bool.
    pub(crate) fn check_condition(&mut self, node: &Node) {
        let condition = match &node.kind {
            NodeKind::Conditional { condition, .. } | NodeKind::WhileLoop { condition, .. } => {
                condition
            }
            _ => return,
        };
        let found = Self::type_of(condition);

        if found != DecafType::Bool {
            self.report(SemanticError::InvalidCondition {
                found,
                line: node.line,
            });
        }
    }
}
