//! Analysis pass implementation modules.

mod context;
mod core;
mod declarations;
mod expressions;
mod inference;
mod statements;

pub use self::context::AnalysisContext;
pub use self::core::Analyzer;
