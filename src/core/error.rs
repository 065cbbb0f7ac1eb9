use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for analysis and tracing.
///
/// `Parse`, `MissingFile`, and `UnresolvedImport` are recoverable during a
/// project crawl: the offending file or edge is skipped with a logged warning
/// and the crawl continues. `UnknownSymbol` is the one condition surfaced to
/// callers, since it indicates a query for a symbol that was never analyzed.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("cannot parse {}: invalid syntax", .path.display())]
    Parse { path: PathBuf },

    #[error("file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("cannot resolve import '{specifier}' from {}", .importer.display())]
    UnresolvedImport { specifier: String, importer: PathBuf },

    #[error("unknown symbol '{0}'")]
    UnknownSymbol(String),

    #[error("unsupported file type: {}", .0.display())]
    UnsupportedFile(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("parser initialization failed: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}
