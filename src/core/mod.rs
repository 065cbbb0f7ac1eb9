pub mod analyzer;
pub mod error;
pub mod resolver;
pub mod scanner;
pub mod symbols;
pub mod tracer;

pub use analyzer::ProjectAnalyzer;
pub use error::AnalyzerError;
pub use resolver::{Alias, ImportResolver};
pub use scanner::FileTree;
pub use symbols::{Declaration, Position, Span, SymbolKind, SymbolTable};
pub use tracer::PathTracer;
