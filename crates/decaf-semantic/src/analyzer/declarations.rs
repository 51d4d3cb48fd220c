//! Declaration checks and the whole-program entry point check.

use crate::analyzer::context::AnalysisContext;
use crate::analyzer::core::Analyzer;
use crate::error::SemanticError;
use decaf_ast::{Node, NodeKind};
use std::collections::HashSet;

impl Analyzer<'_> {
    /// Checks a variable declaration.
    pub(crate) fn check_var_decl(&mut self, node: &Node, cx: &mut AnalysisContext) {
        let NodeKind::VarDecl {
            name,
            ty,
            array_length,
        } = &node.kind
        else {
            return;
        };

        if ty.is_void() {
            self.report(SemanticError::VoidVariable {
                name: name.clone(),
                line: node.line,
            });
        }

        if *name == self.options.entry_point {
            self.report(SemanticError::ReservedName {
                name: name.clone(),
                line: node.line,
            });
        }

        if let Some(length) = (*array_length).filter(|length| *length < 1) {
            self.report(SemanticError::InvalidArrayLength {
                name: name.clone(),
                line: node.line,
                length,
            });
        }

        self.check_duplicate(cx, name, node.line);
    }

    /// Checks a function declaration against its enclosing scope.
    pub(crate) fn check_func_decl(&mut self, node: &Node, cx: &mut AnalysisContext) {
        if let NodeKind::FuncDecl { name, .. } = &node.kind {
            self.check_duplicate(cx, name, node.line);
        }
    }

    /// Checks parameter names inside the function's own scope.
    pub(crate) fn check_parameters(&mut self, node: &Node, cx: &mut AnalysisContext) {
        let NodeKind::FuncDecl { parameters, .. } = &node.kind else {
            return;
        };

        for parameter in parameters {
            if parameter.name == self.options.entry_point {
                self.report(SemanticError::ReservedName {
                    name: parameter.name.clone(),
                    line: node.line,
                });
            }
            self.check_duplicate(cx, &parameter.name, node.line);
        }
    }

    /// Counts the symbols the prior phase put in this node's scope that no
    /// node of the scope declares, such as builtins in the global scope.
    ///
    /// Those come first in the scope, so a node redeclaring one of them is a
    /// duplicate even when it is the only node with that name.
    pub(crate) fn seed_declarations(&self, node: &Node, cx: &mut AnalysisContext) {
        let Some(scope) = node.scope().and_then(|id| self.tables.scope(id).ok()) else {
            return;
        };

        let names = declared_names(node);
        let mut seeded = HashSet::new();
        for name in &names {
            if !seeded.insert(*name) {
                continue;
            }
            let from_nodes = names.iter().filter(|n| *n == name).count();
            cx.predeclare(name, scope.count(name).saturating_sub(from_nodes));
        }
    }

    /// Reports every declaration of a name after the first in one scope.
    fn check_duplicate(&mut self, cx: &mut AnalysisContext, name: &str, line: usize) {
        if !cx.declare(name) {
            self.report(SemanticError::DuplicateSymbol {
                name: name.to_string(),
                line,
            });
        }
    }

    /// Checks that the global scope holds a zero-argument entry function.
    pub(crate) fn check_entry_point(&mut self, program: &Node) {
        let NodeKind::Program { functions, .. } = &program.kind else {
            return;
        };
        let entry = self.options.entry_point.as_str();

        let symbol = program
            .scope()
            .and_then(|id| self.tables.scope(id).ok())
            .and_then(|scope| {
                scope
                    .symbols()
                    .iter()
                    .find(|s| s.name == entry && s.is_function())
            });

        let Some(symbol) = symbol else {
            self.report(SemanticError::MissingMain {
                name: entry.to_string(),
            });
            return;
        };

        if !symbol.parameters.is_empty() {
            let line = functions
                .iter()
                .find(|f| matches!(&f.kind, NodeKind::FuncDecl { name, .. } if name == entry))
                .map_or(program.line, |f| f.line);
            self.report(SemanticError::MainHasParameters { line });
        }
    }
}

/// Names a scope-introducing node declares directly into its own scope.
fn declared_names(node: &Node) -> Vec<&str> {
    match &node.kind {
        NodeKind::Program {
            variables,
            functions,
            ..
        } => variables
            .iter()
            .chain(functions)
            .filter_map(declared_name)
            .collect(),
        NodeKind::FuncDecl { parameters, .. } => {
            parameters.iter().map(|p| p.name.as_str()).collect()
        }
        NodeKind::Block { variables, .. } => variables.iter().filter_map(declared_name).collect(),
        _ => Vec::new(),
    }
}

fn declared_name(node: &Node) -> Option<&str> {
    match &node.kind {
        NodeKind::VarDecl { name, .. } | NodeKind::FuncDecl { name, .. } => Some(name.as_str()),
        _ => None,
    }
}
