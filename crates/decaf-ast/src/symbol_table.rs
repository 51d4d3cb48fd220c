//! Scoped symbol tables produced by the symbol table builder.
//!
//! Scopes live in one arena and refer to their parent by [`ScopeId`], so nodes
//! can point at a scope without owning it. Semantic analysis only reads them.

use decaf_core::{DecafType, Error, Result};

/// Lightweight handle to a scope in [`SymbolTables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(usize);

impl ScopeId {
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a symbol names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Scalar,
    Array,
    Function,
}

/// Represents a declared name.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    /// Declared type, or return type for functions
    pub ty: DecafType,
    pub kind: SymbolKind,
    /// 1 for scalars and functions, the declared length for arrays
    pub length: i64,
    /// Parameter types, in order (functions only)
    pub parameters: Vec<DecafType>,
}

impl Symbol {
    pub fn scalar(name: impl Into<String>, ty: DecafType) -> Self {
        Self {
            name: name.into(),
            ty,
            kind: SymbolKind::Scalar,
            length: 1,
            parameters: Vec::new(),
        }
    }

    pub fn array(name: impl Into<String>, ty: DecafType, length: i64) -> Self {
        Self {
            name: name.into(),
            ty,
            kind: SymbolKind::Array,
            length,
            parameters: Vec::new(),
        }
    }

    pub fn function(
        name: impl Into<String>,
        return_type: DecafType,
        parameters: Vec<DecafType>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: return_type,
            kind: SymbolKind::Function,
            length: 1,
            parameters,
        }
    }

    pub fn is_function(&self) -> bool {
        self.kind == SymbolKind::Function
    }
}

/// One lexical scope: its own declarations plus a link outward.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    parent: Option<ScopeId>,
    symbols: Vec<Symbol>,
}

impl Scope {
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Local declarations in declaration order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// First local declaration of `name`.
    pub fn local(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Number of local declarations of `name`.
    pub fn count(&self, name: &str) -> usize {
        self.symbols.iter().filter(|s| s.name == name).count()
    }
}

/// Arena holding every scope of a program.
#[derive(Debug, Clone, Default)]
pub struct SymbolTables {
    scopes: Vec<Scope>,
}

impl SymbolTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scope nested in `parent` (or a root scope for `None`).
    ///
    /// # Errors
    /// Returns `Error::UnknownScope` if `parent` does not exist.
    pub fn add_scope(&mut self, parent: Option<ScopeId>) -> Result<ScopeId> {
        if let Some(parent) = parent {
            self.scope(parent)?;
        }
        self.scopes.push(Scope {
            parent,
            symbols: Vec::new(),
        });
        Ok(ScopeId(self.scopes.len() - 1))
    }

    /// Adds a symbol to a scope. Duplicates are kept; reporting them is the
    /// analysis pass's job.
    ///
    /// # Errors
    /// Returns `Error::UnknownScope` if `scope` does not exist.
    pub fn declare(&mut self, scope: ScopeId, symbol: Symbol) -> Result<()> {
        self.scopes
            .get_mut(scope.0)
            .ok_or(Error::UnknownScope(scope.0))?
            .symbols
            .push(symbol);
        Ok(())
    }

    /// Returns a scope by id.
    ///
    /// # Errors
    /// Returns `Error::UnknownScope` if `id` does not exist.
    pub fn scope(&self, id: ScopeId) -> Result<&Scope> {
        self.scopes.get(id.0).ok_or(Error::UnknownScope(id.0))
    }

    /// Looks up a symbol by name, searching from `scope` outwards.
    ///
    /// Inner declarations hide outer ones of the same name.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.scopes.get(id.0)?;
            if let Some(symbol) = scope.local(name) {
                return Some(symbol);
            }
            current = scope.parent;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
