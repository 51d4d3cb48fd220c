//! Tunable behavior of the analysis pass.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Options read from the `[analysis]` table of `decaf.toml`.
///
/// The defaults give the standard Decaf rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Name of the required zero-argument entry function. Also reserved as a
    /// variable name.
    pub entry_point: String,
    /// Whether literal array indices are checked against declared lengths.
    pub check_array_bounds: bool,
}

impl AnalysisOptions {
    /// Rejects options the analyzer cannot work with.
    ///
    /// # Errors
    /// Returns `Error::Config` if the entry point is not a plain identifier.
    pub fn validate(&self) -> Result<()> {
        let mut chars = self.entry_point.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !starts_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::Config(format!(
                "entry_point '{}' is not a valid identifier",
                self.entry_point
            )));
        }
        Ok(())
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            entry_point: "main".to_string(),
            check_array_bounds: true,
        }
    }
}
