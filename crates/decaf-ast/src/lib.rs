//! Syntax tree, symbol tables, and tree traversal for Decaf.
//!
//! Parsing and symbol table construction happen in earlier phases; this crate
//! only defines the shapes they produce and a walker over them.

pub mod ast;
pub mod symbol_table;
pub mod visitor;

pub use ast::{
    BinaryOperator, Literal, Node, NodeKind, OperatorClass, Parameter, UnaryOperator,
};
pub use symbol_table::{Scope, ScopeId, Symbol, SymbolKind, SymbolTables};
pub use visitor::{Visitor, walk_children};
