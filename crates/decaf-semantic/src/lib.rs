//! Semantic analysis for Decaf programs.
//!
//! This crate resolves names against the symbol tables built by the previous
//! phase, infers a type for every node, and checks the language's typing and
//! well-formedness rules. It never stops at the first defect: every problem
//! found in one walk is reported, in source order.

mod analyzer;
mod error;

pub use analyzer::{AnalysisContext, Analyzer};
pub use error::SemanticError;

use decaf_ast::{Node, SymbolTables};
use decaf_core::{AnalysisOptions, Error, ErrorList, Result};
use tracing::debug;

/// Performs semantic analysis on a Decaf program with the standard rules.
///
/// # Arguments
/// * `tree` - Root of the parsed program; `None` yields a single `Null tree` diagnostic
/// * `tables` - Symbol tables attached to the tree's scope nodes
///
/// # Returns
/// The diagnostics found, in detection order. An empty list means the program
/// is well-formed. Every node's inferred type is recorded on the tree.
///
/// # Examples
/// ```
/// use decaf_ast::{Node, Symbol, SymbolTables};
/// use decaf_core::DecafType;
/// use decaf_semantic::analyze;
///
/// let mut tables = SymbolTables::new();
/// let global = tables.add_scope(None).unwrap();
/// let function = tables.add_scope(Some(global)).unwrap();
/// let body = tables.add_scope(Some(function)).unwrap();
/// tables
///     .declare(global, Symbol::function("main", DecafType::Int, vec![]))
///     .unwrap();
///
/// let mut block = Node::block(1, vec![], vec![Node::return_stmt(1, Some(Node::int(1, 0)))]);
/// block.attach_scope(body);
/// let mut main = Node::func_decl(1, "main", DecafType::Int, vec![], block);
/// main.attach_scope(function);
/// let mut program = Node::program(vec![], vec![main]);
/// program.attach_scope(global);
///
/// let errors = analyze(Some(&program), &tables);
/// assert!(errors.is_empty());
/// ```
pub fn analyze(tree: Option<&Node>, tables: &SymbolTables) -> ErrorList {
    analyze_with_options(tree, tables, &AnalysisOptions::default())
}

/// Performs semantic analysis with custom options.
#[tracing::instrument(skip_all)]
pub fn analyze_with_options(
    tree: Option<&Node>,
    tables: &SymbolTables,
    options: &AnalysisOptions,
) -> ErrorList {
    let errors = Analyzer::new(tables, options).run(tree);
    debug!(count = errors.len(), "semantic analysis finished");
    errors
}

/// Performs semantic analysis and turns any diagnostics into an error.
///
/// # Errors
/// Returns `Error::Analysis` carrying every diagnostic if the program is not
/// well-formed.
pub fn check(tree: Option<&Node>, tables: &SymbolTables) -> Result<()> {
    let errors = analyze(tree, tables);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::analysis(errors.into_diagnostics()))
    }
}
