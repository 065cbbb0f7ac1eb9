use std::path::Path;

use super::common::TreeSitterParser;
use super::{extract, FileAnalysis, SymbolExtractor};
use crate::core::AnalyzerError;

pub struct JavaScriptExtractor {
    parser: TreeSitterParser,
}

impl JavaScriptExtractor {
    pub fn new() -> Result<Self, AnalyzerError> {
        let parser = TreeSitterParser::new(tree_sitter_javascript::language())?;
        Ok(Self { parser })
    }
}

impl SymbolExtractor for JavaScriptExtractor {
    fn extract(&mut self, source: &str, file_path: &Path) -> Result<FileAnalysis, AnalyzerError> {
        let tree = self.parser.parse(source, file_path)?;
        let root = tree.root_node();
        if root.has_error() {
            return Err(AnalyzerError::Parse {
                path: file_path.to_path_buf(),
            });
        }
        Ok(extract::extract_file(&root, source, file_path))
    }

    fn language_name(&self) -> &str {
        "javascript"
    }
}
