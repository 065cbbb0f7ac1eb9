//! # symtrace
//!
//! Symbol-level dependency graph extraction for JavaScript and TypeScript
//! projects.
//!
//! symtrace parses every top-level function, class, and variable declaration
//! reachable from an entry file, records which other declared symbols each
//! one references, and lets a caller trace a symbol's full transitive
//! dependency closure.
//!
//! ## Pipeline
//!
//! - **Extraction**: one file's source becomes a list of declaration records
//!   with exact source slices and spans.
//! - **Crawling**: imports are resolved (path aliases, extension probing) and
//!   followed depth-first up to a configured depth, merging every file's
//!   declarations into one symbol table.
//! - **Tracing**: a cycle-safe depth-first walk over the table yields the
//!   ordered set of symbols reachable from a starting id.

pub mod core;
pub mod parsers;

pub use crate::core::error::AnalyzerError;
