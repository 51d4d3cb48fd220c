//! Project-level helpers for Decaf tooling.

pub mod config;

pub use config::{CONFIG_FILE, Config};
