//! Core types and utilities for the Decaf semantic analyzer.
//!
//! This crate provides the primitive type representation, the diagnostic sink,
//! analysis options, and the error types shared by every other crate.

pub mod diagnostic;
pub mod error;
pub mod options;
pub mod types;

pub use diagnostic::{Category, Diagnostic, ErrorList};
pub use error::{Error, Result};
pub use options::AnalysisOptions;
pub use types::DecafType;
