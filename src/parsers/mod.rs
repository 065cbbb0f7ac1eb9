pub mod common;
pub mod extract;
pub mod javascript;
pub mod typescript;

use std::path::Path;

use crate::core::symbols::{Declaration, Span};
use crate::core::AnalyzerError;

/// Everything one file contributes to the crawl: its declarations in source
/// order and its literal import statements in source order.
#[derive(Debug, Clone, Default)]
pub struct FileAnalysis {
    pub declarations: Vec<Declaration>,
    pub imports: Vec<ImportRecord>,
}

/// One literal import statement. Transient; never stored in the symbol table
/// itself (the crawler derives placeholder declarations from `local_names`).
#[derive(Debug, Clone)]
pub struct ImportRecord {
    /// The quoted module specifier, without quotes.
    pub specifier: String,
    /// Locally-bound names: default import, named imports (alias when
    /// present), namespace import.
    pub local_names: Vec<String>,
    pub statement_text: String,
    pub span: Span,
}

pub trait SymbolExtractor {
    fn extract(&mut self, source: &str, file_path: &Path) -> Result<FileAnalysis, AnalyzerError>;
    #[allow(dead_code)]
    fn language_name(&self) -> &str;
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn extractor_for(&self, path: &Path) -> Result<Box<dyn SymbolExtractor>, AnalyzerError> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        match extension {
            "ts" => Ok(Box::new(typescript::TypeScriptExtractor::new()?)),
            "tsx" => Ok(Box::new(typescript::TypeScriptExtractor::tsx()?)),
            "js" | "jsx" | "mjs" => Ok(Box::new(javascript::JavaScriptExtractor::new()?)),
            _ => Err(AnalyzerError::UnsupportedFile(path.to_path_buf())),
        }
    }
}
