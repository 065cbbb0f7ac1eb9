use std::path::Path;

use super::common::TreeSitterParser;
use super::{extract, FileAnalysis, SymbolExtractor};
use crate::core::AnalyzerError;

pub struct TypeScriptExtractor {
    parser: TreeSitterParser,
}

impl TypeScriptExtractor {
    pub fn new() -> Result<Self, AnalyzerError> {
        let parser = TreeSitterParser::new(tree_sitter_typescript::language_typescript())?;
        Ok(Self { parser })
    }

    /// Variant for `.tsx` files, which need the JSX-aware grammar.
    pub fn tsx() -> Result<Self, AnalyzerError> {
        let parser = TreeSitterParser::new(tree_sitter_typescript::language_tsx())?;
        Ok(Self { parser })
    }
}

impl SymbolExtractor for TypeScriptExtractor {
    fn extract(&mut self, source: &str, file_path: &Path) -> Result<FileAnalysis, AnalyzerError> {
        let tree = self.parser.parse(source, file_path)?;
        let root = tree.root_node();
        // tree-sitter recovers from syntax errors with ERROR nodes; a file
        // containing any is rejected as unparseable rather than analyzed
        // partially.
        if root.has_error() {
            return Err(AnalyzerError::Parse {
                path: file_path.to_path_buf(),
            });
        }
        Ok(extract::extract_file(&root, source, file_path))
    }

    fn language_name(&self) -> &str {
        "typescript"
    }
}
