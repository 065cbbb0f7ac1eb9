use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Class,
    Variable,
}

/// Source position; lines are 1-based, columns 0-based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// One extracted top-level symbol: a named function, class, or variable
/// binding, together with the set of identifier names its body references.
///
/// `dependencies` may name symbols that are never declared anywhere in the
/// crawled project (language built-ins, unresolved imports); such dangling
/// edges are ignored at trace time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    pub id: String,
    pub kind: SymbolKind,
    pub source_text: String,
    pub file_path: PathBuf,
    pub dependencies: BTreeSet<String>,
    pub span: Span,
}

impl Declaration {
    pub fn new(
        id: String,
        kind: SymbolKind,
        source_text: String,
        file_path: PathBuf,
        span: Span,
    ) -> Self {
        Self {
            id,
            kind,
            source_text,
            file_path,
            dependencies: BTreeSet::new(),
            span,
        }
    }

    pub fn with_dependencies(mut self, dependencies: BTreeSet<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// Name-keyed table of every declaration found during one crawl.
///
/// Keys are bare symbol names, not namespaced by file: two same-named
/// declarations anywhere in the project collide and the later-processed one
/// overwrites the earlier. Combined with the crawler's sequential,
/// source-order traversal this makes the surviving entry deterministic.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Declaration>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with last-write-wins semantics; returns the displaced entry.
    pub fn insert(&mut self, declaration: Declaration) -> Option<Declaration> {
        self.symbols.insert(declaration.id.clone(), declaration)
    }

    pub fn get(&self, id: &str) -> Option<&Declaration> {
        self.symbols.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.symbols.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.symbols.values()
    }

    /// Flat view of the table, sorted by symbol id for stable output.
    pub fn declarations(&self) -> Vec<&Declaration> {
        let mut all: Vec<&Declaration> = self.symbols.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    pub fn into_declarations(self) -> Vec<Declaration> {
        let mut all: Vec<Declaration> = self.symbols.into_values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}
