//! Primitive types of the Decaf language.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of a declaration, expression, or statement.
///
/// `Void` doubles as the fail-soft type for anything whose name could not be
/// resolved, so later comparisons still have a value to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecafType {
    /// Signed integer
    Int,
    /// Boolean
    Bool,
    /// No value
    Void,
    /// String literal (only usable as a call argument)
    Str,
}

impl DecafType {
    /// Returns the source-level spelling of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            DecafType::Int => "int",
            DecafType::Bool => "bool",
            DecafType::Void => "void",
            DecafType::Str => "str",
        }
    }

    /// Returns true if this is the Void type
    pub const fn is_void(self) -> bool {
        matches!(self, DecafType::Void)
    }
}

impl fmt::Display for DecafType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
