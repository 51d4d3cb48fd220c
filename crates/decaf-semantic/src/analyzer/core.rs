//! Core analyzer structure and walk order.

use crate::analyzer::context::AnalysisContext;
use crate::error::SemanticError;
use decaf_ast::{Node, NodeKind, Symbol, SymbolTables, Visitor, walk_children};
use decaf_core::{AnalysisOptions, DecafType, ErrorList};
use tracing::debug;

/// Semantic analyzer for Decaf programs.
///
/// Reads the symbol tables built by the previous phase, records an inferred
/// type on every node, and collects every defect it finds.
pub struct Analyzer<'a> {
    /// Symbol tables attached to the tree
    pub(crate) tables: &'a SymbolTables,
    pub(crate) options: &'a AnalysisOptions,
    /// Defects found so far, in detection order
    pub(crate) errors: ErrorList,
}

impl<'a> Analyzer<'a> {
    pub fn new(tables: &'a SymbolTables, options: &'a AnalysisOptions) -> Self {
        Self {
            tables,
            options,
            errors: ErrorList::new(),
        }
    }

    /// Analyzes a whole tree and returns the collected diagnostics.
    ///
    /// A missing tree is the one fatal case: it yields a single `Null tree`
    /// diagnostic and nothing is walked.
    pub fn run(mut self, tree: Option<&Node>) -> ErrorList {
        match tree {
            Some(root) => {
                // Types from an earlier run may be stale if the tables changed.
                root.clear_inferred_types();
                let mut cx = AnalysisContext::new();
                self.visit(root, &mut cx);
                debug_assert_eq!(cx.loop_depth(), 0);
                debug_assert!(cx.scope().is_none());
            }
            None => self.report(SemanticError::NullTree),
        }
        self.errors
    }

    pub(crate) fn report(&mut self, error: SemanticError) {
        debug!(line = ?error.line(), "{error}");
        self.errors.report(error);
    }

    /// Scoped lookup from the active scope.
    pub(crate) fn lookup(&self, cx: &AnalysisContext, name: &str) -> Option<&'a Symbol> {
        let tables: &'a SymbolTables = self.tables;
        cx.scope().and_then(|scope| tables.lookup(scope, name))
    }

    /// Nearest enclosing function symbol called `name`, skipping variables
    /// that shadow it.
    pub(crate) fn lookup_function(&self, cx: &AnalysisContext, name: &str) -> Option<&'a Symbol> {
        let tables: &'a SymbolTables = self.tables;
        let mut current = cx.scope();
        while let Some(id) = current {
            let scope = tables.scope(id).ok()?;
            if let Some(symbol) = scope
                .symbols()
                .iter()
                .find(|s| s.name == name && s.is_function())
            {
                return Some(symbol);
            }
            current = scope.parent();
        }
        None
    }

    /// Inferred type of a node already visited. Unvisited nodes count as void.
    pub(crate) fn type_of(node: &Node) -> DecafType {
        node.inferred_type().unwrap_or(DecafType::Void)
    }

    /// Records a node's inferred type. Each node is typed once per run.
    pub(crate) fn infer(node: &Node, ty: DecafType) {
        let previous = node.record_inferred_type(ty);
        debug_assert!(previous.is_none(), "{} typed twice in one run", node.kind_name());
    }
}

impl Visitor for Analyzer<'_> {
    type Context = AnalysisContext;

    fn visit(&mut self, node: &Node, cx: &mut AnalysisContext) {
        match &node.kind {
            NodeKind::Program { scope, .. } | NodeKind::Block { scope, .. } => {
                self.enter(node, cx);
                cx.with_scope(*scope, |cx| {
                    self.seed_declarations(node, cx);
                    walk_children(self, node, cx);
                    self.exit(node, cx);
                });
            }
            NodeKind::FuncDecl { name, scope, .. } => {
                // Duplicate checks for the function name run in the enclosing scope.
                self.enter(node, cx);
                cx.with_scope(*scope, |cx| {
                    cx.with_function(name, |cx| {
                        self.seed_declarations(node, cx);
                        self.check_parameters(node, cx);
                        walk_children(self, node, cx);
                        self.exit(node, cx);
                    });
                });
            }
            NodeKind::WhileLoop { .. } => {
                self.enter(node, cx);
                cx.with_loop(|cx| walk_children(self, node, cx));
                self.exit(node, cx);
            }
            _ => {
                self.enter(node, cx);
                walk_children(self, node, cx);
                self.exit(node, cx);
            }
        }
    }

    fn enter(&mut self, node: &Node, cx: &mut AnalysisContext) {
        self.infer_node(node, cx);

        match &node.kind {
            NodeKind::VarDecl { .. } => self.check_var_decl(node, cx),
            NodeKind::FuncDecl { .. } => self.check_func_decl(node, cx),
            NodeKind::Break | NodeKind::Continue => self.check_loop_control(node, cx),
            _ => {}
        }
    }

    fn exit(&mut self, node: &Node, cx: &mut AnalysisContext) {
        match &node.kind {
            NodeKind::Program { .. } => self.check_entry_point(node),
            NodeKind::Location { .. } => self.check_location(node, cx),
            NodeKind::FuncCall { .. } => self.check_call(node, cx),
            NodeKind::BinaryOp { .. } => self.check_binary(node),
            NodeKind::UnaryOp { .. } => self.check_unary(node),
            NodeKind::Assignment { .. } => self.check_assignment(node),
            NodeKind::Return { .. } => self.check_return(node),
            NodeKind::Conditional { .. } | NodeKind::WhileLoop { .. } => {
                self.check_condition(node)
            }
            NodeKind::VarDecl { .. }
            | NodeKind::FuncDecl { .. }
            | NodeKind::Block { .. }
            | NodeKind::Literal(_)
            | NodeKind::Break
            | NodeKind::Continue => {}
        }
    }
}
