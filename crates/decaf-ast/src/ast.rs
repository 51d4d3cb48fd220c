//! Abstract Syntax Tree (AST) definitions for Decaf.

use crate::symbol_table::ScopeId;
use decaf_core::DecafType;
use std::cell::Cell;
use std::fmt;

/// A node of the syntax tree.
///
/// The line is fixed by the parser. The inferred type is filled in by each
/// analysis run and read back by code generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub line: usize,
    pub kind: NodeKind,
    inferred: Cell<Option<DecafType>>,
}

/// Function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: DecafType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: DecafType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Node variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Whole compilation unit: global variables, then functions
    Program {
        variables: Vec<Node>,
        functions: Vec<Node>,
        scope: Option<ScopeId>,
    },

    /// Variable declaration: `type name;` or `type name[length];`
    VarDecl {
        name: String,
        ty: DecafType,
        array_length: Option<i64>,
    },

    /// Function declaration: `def type name(params) block`
    FuncDecl {
        name: String,
        return_type: DecafType,
        parameters: Vec<Parameter>,
        body: Box<Node>,
        scope: Option<ScopeId>,
    },

    /// Braced block: local declarations, then statements
    Block {
        variables: Vec<Node>,
        statements: Vec<Node>,
        scope: Option<ScopeId>,
    },

    /// Variable reference, optionally indexed: `name` or `name[index]`
    Location {
        name: String,
        index: Option<Box<Node>>,
    },

    Literal(Literal),

    BinaryOp {
        op: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },

    UnaryOp {
        op: UnaryOperator,
        operand: Box<Node>,
    },

    /// `if (condition) then_block [else else_block]`
    Conditional {
        condition: Box<Node>,
        then_block: Box<Node>,
        else_block: Option<Box<Node>>,
    },

    /// `while (condition) body`
    WhileLoop {
        condition: Box<Node>,
        body: Box<Node>,
    },

    Break,

    Continue,

    /// `return [value];`
    Return { value: Option<Box<Node>> },

    /// `location = value;`
    Assignment {
        location: Box<Node>,
        value: Box<Node>,
    },

    /// `name(arguments...)`
    FuncCall { name: String, arguments: Vec<Node> },
}

/// Literal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl Literal {
    /// Returns the type the literal carries.
    pub const fn ty(&self) -> DecafType {
        match self {
            Literal::Int(_) => DecafType::Int,
            Literal::Bool(_) => DecafType::Bool,
            Literal::Str(_) => DecafType::Str,
        }
    }
}

/// Operator families that share a typing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    /// `||`, `&&`
    Logical,
    /// `==`, `!=`
    Equality,
    /// `<`, `<=`, `>=`, `>`
    Relational,
    /// `+`, `-`, `*`, `/`, `%`
    Arithmetic,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Or,
    And,
    Eq,
    Neq,
    Lt,
    Le,
    Ge,
    Gt,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOperator {
    pub const fn class(self) -> OperatorClass {
        match self {
            BinaryOperator::Or | BinaryOperator::And => OperatorClass::Logical,
            BinaryOperator::Eq | BinaryOperator::Neq => OperatorClass::Equality,
            BinaryOperator::Lt | BinaryOperator::Le | BinaryOperator::Ge | BinaryOperator::Gt => {
                OperatorClass::Relational
            }
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::Mod => OperatorClass::Arithmetic,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
            BinaryOperator::Eq => "==",
            BinaryOperator::Neq => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric negation: `-x`
    Neg,
    /// Logical negation: `!x`
    Not,
}

impl UnaryOperator {
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Neg => "-",
            UnaryOperator::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Node {
    pub fn new(line: usize, kind: NodeKind) -> Self {
        Self {
            line,
            kind,
            inferred: Cell::new(None),
        }
    }

    pub fn program(variables: Vec<Node>, functions: Vec<Node>) -> Self {
        Self::new(
            1,
            NodeKind::Program {
                variables,
                functions,
                scope: None,
            },
        )
    }

    pub fn var_decl(line: usize, name: impl Into<String>, ty: DecafType) -> Self {
        Self::new(
            line,
            NodeKind::VarDecl {
                name: name.into(),
                ty,
                array_length: None,
            },
        )
    }

    pub fn array_decl(line: usize, name: impl Into<String>, ty: DecafType, length: i64) -> Self {
        Self::new(
            line,
            NodeKind::VarDecl {
                name: name.into(),
                ty,
                array_length: Some(length),
            },
        )
    }

    pub fn func_decl(
        line: usize,
        name: impl Into<String>,
        return_type: DecafType,
        parameters: Vec<Parameter>,
        body: Node,
    ) -> Self {
        Self::new(
            line,
            NodeKind::FuncDecl {
                name: name.into(),
                return_type,
                parameters,
                body: Box::new(body),
                scope: None,
            },
        )
    }

    pub fn block(line: usize, variables: Vec<Node>, statements: Vec<Node>) -> Self {
        Self::new(
            line,
            NodeKind::Block {
                variables,
                statements,
                scope: None,
            },
        )
    }

    pub fn location(line: usize, name: impl Into<String>) -> Self {
        Self::new(
            line,
            NodeKind::Location {
                name: name.into(),
                index: None,
            },
        )
    }

    pub fn indexed(line: usize, name: impl Into<String>, index: Node) -> Self {
        Self::new(
            line,
            NodeKind::Location {
                name: name.into(),
                index: Some(Box::new(index)),
            },
        )
    }

    pub fn int(line: usize, value: i64) -> Self {
        Self::new(line, NodeKind::Literal(Literal::Int(value)))
    }

    pub fn bool(line: usize, value: bool) -> Self {
        Self::new(line, NodeKind::Literal(Literal::Bool(value)))
    }

    pub fn str(line: usize, value: impl Into<String>) -> Self {
        Self::new(line, NodeKind::Literal(Literal::Str(value.into())))
    }

    pub fn binary(line: usize, op: BinaryOperator, left: Node, right: Node) -> Self {
        Self::new(
            line,
            NodeKind::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        )
    }

    pub fn unary(line: usize, op: UnaryOperator, operand: Node) -> Self {
        Self::new(
            line,
            NodeKind::UnaryOp {
                op,
                operand: Box::new(operand),
            },
        )
    }

    pub fn conditional(
        line: usize,
        condition: Node,
        then_block: Node,
        else_block: Option<Node>,
    ) -> Self {
        Self::new(
            line,
            NodeKind::Conditional {
                condition: Box::new(condition),
                then_block: Box::new(then_block),
                else_block: else_block.map(Box::new),
            },
        )
    }

    pub fn while_loop(line: usize, condition: Node, body: Node) -> Self {
        Self::new(
            line,
            NodeKind::WhileLoop {
                condition: Box::new(condition),
                body: Box::new(body),
            },
        )
    }

    pub fn break_stmt(line: usize) -> Self {
        Self::new(line, NodeKind::Break)
    }

    pub fn continue_stmt(line: usize) -> Self {
        Self::new(line, NodeKind::Continue)
    }

    pub fn return_stmt(line: usize, value: Option<Node>) -> Self {
        Self::new(
            line,
            NodeKind::Return {
                value: value.map(Box::new),
            },
        )
    }

    pub fn assignment(line: usize, location: Node, value: Node) -> Self {
        Self::new(
            line,
            NodeKind::Assignment {
                location: Box::new(location),
                value: Box::new(value),
            },
        )
    }

    pub fn call(line: usize, name: impl Into<String>, arguments: Vec<Node>) -> Self {
        Self::new(
            line,
            NodeKind::FuncCall {
                name: name.into(),
                arguments,
            },
        )
    }

    /// Short name of the node's kind, for logs.
    pub const fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Program { .. } => "Program",
            NodeKind::VarDecl { .. } => "VarDecl",
            NodeKind::FuncDecl { .. } => "FuncDecl",
            NodeKind::Block { .. } => "Block",
            NodeKind::Location { .. } => "Location",
            NodeKind::Literal(_) => "Literal",
            NodeKind::BinaryOp { .. } => "BinaryOp",
            NodeKind::UnaryOp { .. } => "UnaryOp",
            NodeKind::Conditional { .. } => "Conditional",
            NodeKind::WhileLoop { .. } => "WhileLoop",
            NodeKind::Break => "Break",
            NodeKind::Continue => "Continue",
            NodeKind::Return { .. } => "Return",
            NodeKind::Assignment { .. } => "Assignment",
            NodeKind::FuncCall { .. } => "FuncCall",
        }
    }

    /// Scope attached by the symbol table builder, for scope-introducing nodes.
    pub fn scope(&self) -> Option<ScopeId> {
        match &self.kind {
            NodeKind::Program { scope, .. }
            | NodeKind::FuncDecl { scope, .. }
            | NodeKind::Block { scope, .. } => *scope,
            _ => None,
        }
    }

    /// Attaches a symbol table scope.
    ///
    /// Returns false (and attaches nothing) if this node does not introduce a
    /// scope.
    pub fn attach_scope(&mut self, id: ScopeId) -> bool {
        match &mut self.kind {
            NodeKind::Program { scope, .. }
            | NodeKind::FuncDecl { scope, .. }
            | NodeKind::Block { scope, .. } => {
                *scope = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Type computed by semantic analysis, if it has run.
    pub fn inferred_type(&self) -> Option<DecafType> {
        self.inferred.get()
    }

    /// Records the inferred type, returning the one it replaces.
    pub fn record_inferred_type(&self, ty: DecafType) -> Option<DecafType> {
        self.inferred.replace(Some(ty))
    }

    /// Forgets the inferred types of this node and every node below it.
    pub fn clear_inferred_types(&self) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            node.inferred.set(None);
            pending.extend(node.children());
        }
    }

    /// Direct children in lexical order.
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Program {
                variables,
                functions,
                ..
            } => variables.iter().chain(functions.iter()).collect(),
            NodeKind::FuncDecl { body, .. } => vec![body.as_ref()],
            NodeKind::Block {
                variables,
                statements,
                ..
            } => variables.iter().chain(statements.iter()).collect(),
            NodeKind::Location { index, .. } => index.as_deref().into_iter().collect(),
            NodeKind::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            NodeKind::UnaryOp { operand, .. } => vec![operand.as_ref()],
            NodeKind::Conditional {
                condition,
                then_block,
                else_block,
            } => {
                let mut children = vec![condition.as_ref(), then_block.as_ref()];
                children.extend(else_block.as_deref());
                children
            }
            NodeKind::WhileLoop { condition, body } => vec![condition.as_ref(), body.as_ref()],
            NodeKind::Return { value } => value.as_deref().into_iter().collect(),
            NodeKind::Assignment { location, value } => vec![location.as_ref(), value.as_ref()],
            NodeKind::FuncCall { arguments, .. } => arguments.iter().collect(),
            NodeKind::VarDecl { .. }
            | NodeKind::Literal(_)
            | NodeKind::Break
            | NodeKind::Continue => Vec::new(),
        }
    }
}
