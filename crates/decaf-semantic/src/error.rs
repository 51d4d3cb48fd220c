//! Defects reported by semantic analysis.

use decaf_ast::{BinaryOperator, UnaryOperator};
use decaf_core::{Category, DecafType, Diagnostic};
use thiserror::Error;

/// Every defect the analysis can find.
///
/// The `Display` text is the message stored in the diagnostic list.
#[derive(Error, Debug, Clone, PartialEq, Eq, miette::Diagnostic)]
pub enum SemanticError {
    #[error("Null tree")]
    #[diagnostic(code(decaf::semantic::null_tree))]
    NullTree,

    #[error("Void variable '{name}' on line {line}")]
    #[diagnostic(code(decaf::semantic::void_variable))]
    VoidVariable { name: String, line: usize },

    #[error("Invalid variable name '{name}' on line {line}")]
    #[diagnostic(code(decaf::semantic::reserved_name))]
    ReservedName { name: String, line: usize },

    #[error(
        "Invalid array declaration '{name}' on line {line}. Array length must be greater than 0 but was {length}"
    )]
    #[diagnostic(code(decaf::semantic::array_length))]
    InvalidArrayLength {
        name: String,
        line: usize,
        length: i64,
    },

    #[error("Duplicate symbol '{name}' on line {line}")]
    #[diagnostic(code(decaf::semantic::duplicate))]
    DuplicateSymbol { name: String, line: usize },

    #[error("Symbol '{name}' undefined on line {line}")]
    #[diagnostic(code(decaf::semantic::undefined))]
    UndefinedSymbol { name: String, line: usize },

    #[error("Symbol '{name}' on line {line} is not a function")]
    #[diagnostic(code(decaf::semantic::not_a_function))]
    NotAFunction { name: String, line: usize },

    #[error("Invalid array access on line {line}. Array '{name}' used as scalar")]
    #[diagnostic(code(decaf::semantic::array_as_scalar))]
    ArrayAsScalar { name: String, line: usize },

    #[error("Array access '{name}[{index}]' on line {line} is invalid")]
    #[diagnostic(code(decaf::semantic::index_out_of_bounds))]
    IndexOutOfBounds {
        name: String,
        index: i64,
        line: usize,
    },

    #[error(
        "Invalid array index on line {line}. Expected index of '{name}' to be of type 'int', but was '{found}'"
    )]
    #[diagnostic(code(decaf::semantic::index_type))]
    NonIntIndex {
        name: String,
        found: DecafType,
        line: usize,
    },

    #[error("Invalid break on line {line}")]
    #[diagnostic(code(decaf::semantic::break_outside_loop))]
    BreakOutsideLoop { line: usize },

    #[error("Invalid continue on line {line}")]
    #[diagnostic(code(decaf::semantic::continue_outside_loop))]
    ContinueOutsideLoop { line: usize },

    #[error(
        "Type mismatch on line {line}. Expected '{name}' to be of type '{expected}', but was '{found}'"
    )]
    #[diagnostic(code(decaf::semantic::assignment_type))]
    AssignmentMismatch {
        name: String,
        expected: DecafType,
        found: DecafType,
        line: usize,
    },

    #[error(
        "Invalid condition on line {line}. Expected condition to be of type 'bool', but was '{found}'"
    )]
    #[diagnostic(code(decaf::semantic::condition_type))]
    InvalidCondition { found: DecafType, line: usize },

    #[error(
        "Invalid binary operation on line {line}. Expected '{expected} {op} {expected}' but was '{left} {op} {right}'"
    )]
    #[diagnostic(code(decaf::semantic::operand_type))]
    OperandMismatch {
        op: BinaryOperator,
        expected: DecafType,
        left: DecafType,
        right: DecafType,
        line: usize,
    },

    #[error(
        "Invalid binary operation on line {line}. Expected values to be of the same type, but was '{left} {op} {right}'"
    )]
    #[diagnostic(code(decaf::semantic::operand_type))]
    EqualityMismatch {
        op: BinaryOperator,
        left: DecafType,
        right: DecafType,
        line: usize,
    },

    #[error(
        "Invalid unary operation on line {line}. Expected '{op}{expected}' but was '{op}{found}'"
    )]
    #[diagnostic(code(decaf::semantic::operand_type))]
    UnaryMismatch {
        op: UnaryOperator,
        expected: DecafType,
        found: DecafType,
        line: usize,
    },

    #[error(
        "Type mismatch on line {line}. Expected return type to be '{expected}', but was '{found}'"
    )]
    #[diagnostic(code(decaf::semantic::return_type))]
    ReturnMismatch {
        expected: DecafType,
        found: DecafType,
        line: usize,
    },

    #[error(
        "Invalid call to '{name}' on line {line}. Expected {expected} arguments, but was given {found}"
    )]
    #[diagnostic(code(decaf::semantic::argument_count))]
    ArgumentCount {
        name: String,
        expected: usize,
        found: usize,
        line: usize,
    },

    #[error(
        "Invalid argument type on line {line}. Expected argument {position} of '{name}' to be of type '{expected}', but was '{found}'"
    )]
    #[diagnostic(code(decaf::semantic::argument_type))]
    ArgumentType {
        name: String,
        position: usize,
        expected: DecafType,
        found: DecafType,
        line: usize,
    },

    #[error("Program does not contain a {name} function")]
    #[diagnostic(code(decaf::semantic::missing_main))]
    MissingMain { name: String },

    #[error("Main method on line {line} should not have any parameters")]
    #[diagnostic(code(decaf::semantic::main_parameters))]
    MainHasParameters { line: usize },
}

impl SemanticError {
    /// Source line of the defect. Whole-program defects have none.
    pub fn line(&self) -> Option<usize> {
        match self {
            SemanticError::NullTree | SemanticError::MissingMain { .. } => None,
            SemanticError::VoidVariable { line, .. }
            | SemanticError::ReservedName { line, .. }
            | SemanticError::InvalidArrayLength { line, .. }
            | SemanticError::DuplicateSymbol { line, .. }
            | SemanticError::UndefinedSymbol { line, .. }
            | SemanticError::NotAFunction { line, .. }
            | SemanticError::ArrayAsScalar { line, .. }
            | SemanticError::IndexOutOfBounds { line, .. }
            | SemanticError::NonIntIndex { line, .. }
            | SemanticError::BreakOutsideLoop { line }
            | SemanticError::ContinueOutsideLoop { line }
            | SemanticError::AssignmentMismatch { line, .. }
            | SemanticError::InvalidCondition { line, .. }
            | SemanticError::OperandMismatch { line, .. }
            | SemanticError::EqualityMismatch { line, .. }
            | SemanticError::UnaryMismatch { line, .. }
            | SemanticError::ReturnMismatch { line, .. }
            | SemanticError::ArgumentCount { line, .. }
            | SemanticError::ArgumentType { line, .. }
            | SemanticError::MainHasParameters { line } => Some(*line),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            SemanticError::NullTree => Category::Fatal,
            SemanticError::UndefinedSymbol { .. } => Category::Lookup,
            SemanticError::NonIntIndex { .. }
            | SemanticError::AssignmentMismatch { .. }
            | SemanticError::InvalidCondition { .. }
            | SemanticError::OperandMismatch { .. }
            | SemanticError::EqualityMismatch { .. }
            | SemanticError::UnaryMismatch { .. }
            | SemanticError::ReturnMismatch { .. }
            | SemanticError::ArgumentCount { .. }
            | SemanticError::ArgumentType { .. } => Category::Type,
            SemanticError::VoidVariable { .. }
            | SemanticError::ReservedName { .. }
            | SemanticError::InvalidArrayLength { .. }
            | SemanticError::DuplicateSymbol { .. }
            | SemanticError::NotAFunction { .. }
            | SemanticError::ArrayAsScalar { .. }
            | SemanticError::IndexOutOfBounds { .. }
            | SemanticError::BreakOutsideLoop { .. }
            | SemanticError::ContinueOutsideLoop { .. }
            | SemanticError::MissingMain { .. }
            | SemanticError::MainHasParameters { .. } => Category::Structural,
        }
    }
}

impl From<SemanticError> for Diagnostic {
    fn from(error: SemanticError) -> Self {
        Diagnostic::new(error.category(), error.line(), error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_message() {
        let error = SemanticError::OperandMismatch {
            op: BinaryOperator::Add,
            expected: DecafType::Int,
            left: DecafType::Bool,
            right: DecafType::Int,
            line: 4,
        };
        assert_eq!(
            error.to_string(),
            "Invalid binary operation on line 4. Expected 'int + int' but was 'bool + int'"
        );
    }

    #[test]
    fn test_unary_message() {
        let error = SemanticError::UnaryMismatch {
            op: UnaryOperator::Not,
            expected: DecafType::Bool,
            found: DecafType::Int,
            line: 2,
        };
        assert_eq!(
            error.to_string(),
            "Invalid unary operation on line 2. Expected '!bool' but was '!int'"
        );
    }

    #[test]
    fn test_conversion_keeps_line_and_category() {
        let diagnostic: Diagnostic = SemanticError::UndefinedSymbol {
            name: "y".to_string(),
            line: 7,
        }
        .into();
        assert_eq!(diagnostic.message(), "Symbol 'y' undefined on line 7");
        assert_eq!(diagnostic.line(), Some(7));
        assert_eq!(diagnostic.category(), Category::Lookup);

        let diagnostic: Diagnostic = SemanticError::NullTree.into();
        assert_eq!(diagnostic.line(), None);
        assert_eq!(diagnostic.category(), Category::Fatal);
    }

    #[test]
    fn test_missing_main_message() {
        let error = SemanticError::MissingMain {
            name: "main".to_string(),
        };
        assert_eq!(error.to_string(), "Program does not contain a main function");
    }
}
