//! Error types and result aliases for the Decaf analyzer.

use crate::diagnostic::Diagnostic;
use thiserror::Error;

/// Main error type for the Decaf analyzer.
#[derive(Error, Debug, miette::Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(decaf::config))]
    Config(String),

    #[error("Unknown scope id {0}")]
    #[diagnostic(code(decaf::scope))]
    UnknownScope(usize),

    #[error("Semantic analysis failed with {count} error(s)")]
    #[diagnostic(code(decaf::semantic))]
    Analysis {
        count: usize,
        #[related]
        diagnostics: Vec<Diagnostic>,
    },
}

impl Error {
    /// Wraps a batch of diagnostics into a single reportable error.
    pub fn analysis(diagnostics: Vec<Diagnostic>) -> Self {
        Error::Analysis {
            count: diagnostics.len(),
            diagnostics,
        }
    }
}

/// Result type alias using the Decaf Error type.
pub type Result<T> = std::result::Result<T, Error>;
