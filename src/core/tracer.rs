use std::collections::HashSet;

use crate::core::symbols::{Declaration, SymbolTable};
use crate::core::AnalyzerError;

const DELIMITER: &str = "-------------------\n";

/// Read-only dependency-closure queries over a crawled symbol table.
pub struct PathTracer<'a> {
    table: &'a SymbolTable,
}

impl<'a> PathTracer<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    /// Every declaration reachable from `start`, in first-visit depth-first
    /// order, each at most once. Dependency names with no table entry
    /// (language built-ins, unresolved imports) are skipped silently; only a
    /// missing start symbol is an error.
    pub fn trace(&self, start: &str) -> Result<Vec<&'a Declaration>, AnalyzerError> {
        if !self.table.contains(start) {
            return Err(AnalyzerError::UnknownSymbol(start.to_string()));
        }

        let mut visited: HashSet<&'a str> = HashSet::new();
        let mut path = Vec::new();
        self.visit(start, &mut visited, &mut path);
        Ok(path)
    }

    fn visit(&self, id: &str, visited: &mut HashSet<&'a str>, path: &mut Vec<&'a Declaration>) {
        if visited.contains(id) {
            return;
        }
        let Some(declaration) = self.table.get(id) else {
            return;
        };
        visited.insert(declaration.id.as_str());
        path.push(declaration);

        for dependency in &declaration.dependencies {
            self.visit(dependency, visited, path);
        }
    }

    /// Display form of a trace: per record a provenance header and the
    /// trimmed source text, records separated by a fixed delimiter.
    pub fn render(&self, start: &str) -> Result<String, AnalyzerError> {
        let path = self.trace(start)?;
        let blocks: Vec<String> = path.iter().map(|d| format_block(d)).collect();
        Ok(blocks.join(DELIMITER))
    }
}

fn format_block(declaration: &Declaration) -> String {
    let dependencies = if declaration.dependencies.is_empty() {
        "none".to_string()
    } else {
        declaration
            .dependencies
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "// Symbol: {}\n// Dependencies: {}\n// Declared in {} at line {}, column {}\n\n{}\n\n",
        declaration.id,
        dependencies,
        declaration.file_path.display(),
        declaration.span.start.line,
        declaration.span.start.column,
        declaration.source_text.trim(),
    )
}
