//! Expression checks, applied when a node is left.

use crate::analyzer::context::AnalysisContext;
use crate::analyzer::core::Analyzer;
use crate::error::SemanticError;
use decaf_ast::{Literal, Node, NodeKind, OperatorClass, UnaryOperator};
use decaf_core::DecafType;

impl Analyzer<'_> {
    /// Checks a variable reference: it must resolve, arrays need an index,
    /// and literal indices must be in range.
    pub(crate) fn check_location(&mut self, node: &Node, cx: &AnalysisContext) {
        let NodeKind::Location { name, index } = &node.kind else {
            return;
        };

        let Some(symbol) = self.lookup(cx, name) else {
            self.report(SemanticError::UndefinedSymbol {
                name: name.clone(),
                line: node.line,
            });
            return;
        };

        let Some(index) = index else {
            if symbol.length > 1 {
                self.report(SemanticError::ArrayAsScalar {
                    name: name.clone(),
                    line: node.line,
                });
            }
            return;
        };

        let index_type = Self::type_of(index);
        if index_type != DecafType::Int && !index_type.is_void() {
            self.report(SemanticError::NonIntIndex {
                name: name.clone(),
                found: index_type,
                line: node.line,
            });
        }

        if !self.options.check_array_bounds {
            return;
        }
        if let Some(value) =
            literal_index(index).filter(|value| *value < 0 || *value >= symbol.length)
        {
            self.report(SemanticError::IndexOutOfBounds {
                name: name.clone(),
                index: value,
                line: node.line,
            });
        }
    }

    /// Checks a call: the callee must be a function and the arguments must
    /// match its parameters.
    pub(crate) fn check_call(&mut self, node: &Node, cx: &AnalysisContext) {
        let NodeKind::FuncCall { name, arguments } = &node.kind else {
            return;
        };

        let Some(symbol) = self.lookup(cx, name) else {
            self.report(SemanticError::UndefinedSymbol {
                name: name.clone(),
                line: node.line,
            });
            return;
        };

        if !symbol.is_function() {
            self.report(SemanticError::NotAFunction {
                name: name.clone(),
                line: node.line,
            });
            return;
        }

        if arguments.len() != symbol.parameters.len() {
            self.report(SemanticError::ArgumentCount {
                name: name.clone(),
                expected: symbol.parameters.len(),
                found: arguments.len(),
                line: node.line,
            });
            return;
        }

        for (position, (argument, expected)) in
            arguments.iter().zip(&symbol.parameters).enumerate()
        {
            let found = Self::type_of(argument);
            // A void argument already has its own diagnostic.
            if found != *expected && !found.is_void() {
                self.report(SemanticError::ArgumentType {
                    name: name.clone(),
                    position: position + 1,
                    expected: *expected,
                    found,
                    line: node.line,
                });
            }
        }
    }

    /// Checks operand types of a binary operator.
    pub(crate) fn check_binary(&mut self, node: &Node) {
        let NodeKind::BinaryOp { op, left, right } = &node.kind else {
            return;
        };
        let left = Self::type_of(left);
        let right = Self::type_of(right);

        let required = match op.class() {
            OperatorClass::Equality => {
                if left != right {
                    self.report(SemanticError::EqualityMismatch {
                        op: *op,
                        left,
                        right,
                        line: node.line,
                    });
                }
                return;
            }
            OperatorClass::Logical => DecafType::Bool,
            OperatorClass::Relational | OperatorClass::Arithmetic => DecafType::Int,
        };

        if left != required || right != required {
            self.report(SemanticError::OperandMismatch {
                op: *op,
                expected: required,
                left,
                right,
                line: node.line,
            });
        }
    }

    /// Checks the operand type of a unary operator.
    pub(crate) fn check_unary(&mut self, node: &Node) {
        let NodeKind::UnaryOp { op, operand } = &node.kind else {
            return;
        };
        let expected = Self::type_of(node);
        let found = Self::type_of(operand);

        if expected != found {
            self.report(SemanticError::UnaryMismatch {
                op: *op,
                expected,
                found,
                line: node.line,
            });
        }
    }
}

/// Value of an index that is a literal integer, possibly negated.
///
/// Anything else is only known at run time.
fn literal_index(index: &Node) -> Option<i64> {
    match &index.kind {
        NodeKind::Literal(Literal::Int(value)) => Some(*value),
        NodeKind::UnaryOp {
            op: UnaryOperator::Neg,
            operand,
        } => match &operand.kind {
            NodeKind::Literal(Literal::Int(value)) => value.checked_neg(),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_index() {
        assert_eq!(literal_index(&Node::int(1, 4)), Some(4));
        assert_eq!(
            literal_index(&Node::unary(1, UnaryOperator::Neg, Node::int(1, 2))),
            Some(-2)
        );
        assert_eq!(literal_index(&Node::location(1, "i")), None);
        assert_eq!(
            literal_index(&Node::unary(1, UnaryOperator::Not, Node::int(1, 2))),
            None
        );
    }
}
