//! Common test utilities for semantic analysis tests.
#![allow(dead_code)]

use decaf_ast::{Node, NodeKind, Parameter, ScopeId, Symbol, SymbolTables};
use decaf_core::{AnalysisOptions, DecafType, ErrorList};
use decaf_semantic::{analyze, analyze_with_options};

/// Builds symbol tables for a program the way the symbol table phase does:
/// one global scope with the print builtins, one scope per function for its
/// parameters, and one per block.
pub fn build_tables(program: &mut Node) -> SymbolTables {
    let mut tables = SymbolTables::new();
    let global = tables.add_scope(None).unwrap();

    for (name, ty) in [
        ("print_int", DecafType::Int),
        ("print_bool", DecafType::Bool),
        ("print_str", DecafType::Str),
    ] {
        tables
            .declare(global, Symbol::function(name, DecafType::Void, vec![ty]))
            .unwrap();
    }

    if let NodeKind::Program {
        variables,
        functions,
        scope,
    } = &mut program.kind
    {
        *scope = Some(global);
        for variable in variables.iter() {
            declare_variable(&mut tables, global, variable);
        }
        for function in functions.iter_mut() {
            attach_function(&mut tables, global, function);
        }
    }

    tables
}

fn declare_variable(tables: &mut SymbolTables, scope: ScopeId, node: &Node) {
    if let NodeKind::VarDecl {
        name,
        ty,
        array_length,
    } = &node.kind
    {
        let symbol = match array_length {
            Some(length) => Symbol::array(name.clone(), *ty, *length),
            None => Symbol::scalar(name.clone(), *ty),
        };
        tables.declare(scope, symbol).unwrap();
    }
}

fn attach_function(tables: &mut SymbolTables, global: ScopeId, node: &mut Node) {
    let NodeKind::FuncDecl {
        name,
        return_type,
        parameters,
        body,
        scope,
    } = &mut node.kind
    else {
        return;
    };

    let parameter_types = parameters.iter().map(|p| p.ty).collect();
    tables
        .declare(
            global,
            Symbol::function(name.clone(), *return_type, parameter_types),
        )
        .unwrap();

    let function_scope = tables.add_scope(Some(global)).unwrap();
    *scope = Some(function_scope);
    for parameter in parameters.iter() {
        tables
            .declare(
                function_scope,
                Symbol::scalar(parameter.name.clone(), parameter.ty),
            )
            .unwrap();
    }

    attach_statement(tables, function_scope, body);
}

fn attach_statement(tables: &mut SymbolTables, parent: ScopeId, node: &mut Node) {
    match &mut node.kind {
        NodeKind::Block {
            variables,
            statements,
            scope,
        } => {
            let block_scope = tables.add_scope(Some(parent)).unwrap();
            *scope = Some(block_scope);
            for variable in variables.iter() {
                declare_variable(tables, block_scope, variable);
            }
            for statement in statements.iter_mut() {
                attach_statement(tables, block_scope, statement);
            }
        }
        NodeKind::Conditional {
            then_block,
            else_block,
            ..
        } => {
            attach_statement(tables, parent, then_block);
            if let Some(else_block) = else_block {
                attach_statement(tables, parent, else_block);
            }
        }
        NodeKind::WhileLoop { body, .. } => attach_statement(tables, parent, body),
        _ => {}
    }
}

/// Builds tables for `program`, analyzes it, and returns the program and diagnostics.
pub fn analyze_program(mut program: Node) -> (Node, ErrorList) {
    let tables = build_tables(&mut program);
    let errors = analyze(Some(&program), &tables);
    (program, errors)
}

/// Analyzes `program` and returns the diagnostic messages.
pub fn messages(program: Node) -> Vec<String> {
    analyze_program(program).1.messages()
}

/// Analyzes `program` with custom options and returns the diagnostic messages.
pub fn messages_with_options(mut program: Node, options: &AnalysisOptions) -> Vec<String> {
    let tables = build_tables(&mut program);
    analyze_with_options(Some(&program), &tables, options).messages()
}

/// Helper function to check if a program passes semantic analysis.
pub fn should_pass(program: Node) -> bool {
    analyze_program(program).1.is_empty()
}

/// `def void main() { variables; statements }` declared on line 1.
pub fn main_fn(variables: Vec<Node>, statements: Vec<Node>) -> Node {
    Node::func_decl(
        1,
        "main",
        DecafType::Void,
        vec![],
        Node::block(1, variables, statements),
    )
}

/// A program made of the given globals and a body-only `main`.
pub fn program_with_main(globals: Vec<Node>, variables: Vec<Node>, statements: Vec<Node>) -> Node {
    Node::program(globals, vec![main_fn(variables, statements)])
}

pub fn param(name: &str, ty: DecafType) -> Parameter {
    Parameter::new(name, ty)
}
