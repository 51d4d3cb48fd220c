//! Diagnostic sink for semantic analysis.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Broad class of a reported defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A name was not found in any enclosing scope
    Lookup,
    /// Operand, assignment, return, argument, or condition types disagree
    Type,
    /// Duplicate, void, or malformed declarations and misplaced statements
    Structural,
    /// No tree was given; nothing else was checked
    Fatal,
}

impl Category {
    /// Returns the diagnostic code used when rendering through miette.
    pub const fn code(self) -> &'static str {
        match self {
            Category::Lookup => "decaf::lookup",
            Category::Type => "decaf::type",
            Category::Structural => "decaf::structure",
            Category::Fatal => "decaf::fatal",
        }
    }
}

/// One reported defect.
///
/// The message is formatted once at detection time and never changes.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct Diagnostic {
    category: Category,
    line: Option<usize>,
    message: String,
}

impl Diagnostic {
    pub fn new(category: Category, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            category,
            line,
            message: message.into(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Source line the defect was found on, if it belongs to one.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.category.code()))
    }
}

/// Ordered, append-only collection of diagnostics.
///
/// Entries keep detection order. Nothing is merged or dropped, so two
/// identical-looking messages stay two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic.
    pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
        self.diagnostics.push(diagnostic.into());
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// An empty list means the program is semantically well-formed.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Returns the formatted messages in detection order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }

    /// Counts the entries of one category.
    pub fn count(&self, category: Category) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == category)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl IntoIterator for ErrorList {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_keeps_order_and_duplicates() {
        let mut errors = ErrorList::new();
        errors.report(Diagnostic::new(Category::Structural, Some(2), "first"));
        errors.report(Diagnostic::new(Category::Lookup, Some(1), "second"));
        errors.report(Diagnostic::new(Category::Lookup, Some(1), "second"));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.messages(), vec!["first", "second", "second"]);
        assert_eq!(errors.count(Category::Lookup), 2);
    }

    #[test]
    fn test_empty_list() {
        let errors = ErrorList::new();
        assert!(errors.is_empty());
        assert_eq!(errors.to_string(), "");
    }

    #[test]
    fn test_display_one_per_line() {
        let mut errors = ErrorList::new();
        errors.report(Diagnostic::new(Category::Fatal, None, "Null tree"));
        errors.report(Diagnostic::new(Category::Type, Some(4), "bad"));
        assert_eq!(errors.to_string(), "Null tree\nbad\n");
    }

    #[test]
    fn test_miette_code() {
        use miette::Diagnostic as _;

        let diagnostic = Diagnostic::new(Category::Type, Some(3), "oops");
        let code = diagnostic.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("decaf::type"));
        assert_eq!(diagnostic.line(), Some(3));
    }
}
