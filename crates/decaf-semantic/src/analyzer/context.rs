//! State threaded through the analysis walk.

use decaf_ast::ScopeId;
use std::collections::HashMap;
use tracing::trace;

/// Where the walk currently is: active scope, enclosing function, loop depth.
///
/// Every change is tied to a subtree through one of the `with_*` methods,
/// which restore the previous state when the subtree is done. A finished walk
/// leaves the context as it started.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    scope: Option<ScopeId>,
    function: Option<String>,
    loop_depth: usize,
    /// Declarations seen so far in the active scope, per name
    declared: HashMap<String, usize>,
}

impl AnalysisContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> Option<ScopeId> {
        self.scope
    }

    pub fn current_function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    pub fn loop_depth(&self) -> usize {
        self.loop_depth
    }

    pub fn in_loop(&self) -> bool {
        self.loop_depth > 0
    }

    /// Runs `f` with `scope` active.
    ///
    /// `None` means the node was never given a table; the enclosing scope
    /// stays active.
    pub(crate) fn with_scope<R>(
        &mut self,
        scope: Option<ScopeId>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let Some(scope) = scope else {
            return f(self);
        };

        trace!(scope = scope.index(), "entering scope");
        let saved_scope = self.scope.replace(scope);
        let saved_declared = std::mem::take(&mut self.declared);

        let result = f(self);

        self.scope = saved_scope;
        self.declared = saved_declared;
        trace!(scope = scope.index(), "leaving scope");
        result
    }

    /// Runs `f` inside the function `name`.
    pub(crate) fn with_function<R>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.function.replace(name.to_string());
        let result = f(self);
        self.function = saved;
        result
    }

    /// Runs `f` one loop level deeper.
    pub(crate) fn with_loop<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.loop_depth += 1;
        let result = f(self);
        self.loop_depth -= 1;
        result
    }

    /// Marks `name` as declared in the active scope.
    ///
    /// Returns false if it was already declared there.
    pub(crate) fn declare(&mut self, name: &str) -> bool {
        let seen = self.declared.entry(name.to_string()).or_insert(0);
        *seen += 1;
        *seen == 1
    }

    /// Counts `count` declarations of `name` that the active scope holds
    /// without a declaring node in the tree.
    pub(crate) fn predeclare(&mut self, name: &str, count: usize) {
        if count > 0 {
            *self.declared.entry(name.to_string()).or_insert(0) += count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_restored() {
        let mut cx = AnalysisContext::new();
        let outer = ScopeId::new(0);
        let inner = ScopeId::new(1);

        cx.with_scope(Some(outer), |cx| {
            assert!(cx.declare("a"));
            cx.with_scope(Some(inner), |cx| {
                assert_eq!(cx.scope(), Some(inner));
                assert!(cx.declare("a"));
            });
            assert_eq!(cx.scope(), Some(outer));
            assert!(!cx.declare("a"));
        });
        assert_eq!(cx.scope(), None);
    }

    #[test]
    fn test_missing_scope_keeps_enclosing() {
        let mut cx = AnalysisContext::new();
        let outer = ScopeId::new(3);

        cx.with_scope(Some(outer), |cx| {
            cx.declare("x");
            cx.with_scope(None, |cx| {
                assert_eq!(cx.scope(), Some(outer));
                assert!(!cx.declare("x"));
            });
        });
    }

    #[test]
    fn test_predeclared_name_is_taken() {
        let mut cx = AnalysisContext::new();
        cx.with_scope(Some(ScopeId::new(0)), |cx| {
            cx.predeclare("print_int", 1);
            cx.predeclare("unused", 0);
            assert!(!cx.declare("print_int"));
            assert!(cx.declare("unused"));
        });
    }

    #[test]
    fn test_loop_depth_nests() {
        let mut cx = AnalysisContext::new();
        assert!(!cx.in_loop());
        cx.with_loop(|cx| {
            cx.with_loop(|cx| assert_eq!(cx.loop_depth(), 2));
            assert!(cx.in_loop());
        });
        assert_eq!(cx.loop_depth(), 0);
    }

    #[test]
    fn test_function_restored() {
        let mut cx = AnalysisContext::new();
        let seen = cx.with_function("main", |cx| cx.current_function().map(str::to_string));
        assert_eq!(seen.as_deref(), Some("main"));
        assert_eq!(cx.current_function(), None);
    }
}
