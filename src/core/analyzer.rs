use std::collections::HashSet;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tracing::{debug, warn};

use crate::core::resolver::ImportResolver;
use crate::core::symbols::{Declaration, SymbolKind, SymbolTable};
use crate::core::AnalyzerError;
use crate::parsers::{ExtractorFactory, FileAnalysis};

/// Crawls a project from an entry file and merges every reachable file's
/// declarations into one symbol table.
///
/// The analyzer itself is stateless across calls: each `analyze_project`
/// invocation gets a fresh table and visited set, so independent crawls never
/// interfere.
pub struct ProjectAnalyzer {
    resolver: ImportResolver,
    extractors: ExtractorFactory,
}

/// Mutable state of one crawl.
struct Crawl {
    table: SymbolTable,
    visited: HashSet<PathBuf>,
    max_depth: usize,
}

impl ProjectAnalyzer {
    pub fn new(resolver: ImportResolver) -> Self {
        Self {
            resolver,
            extractors: ExtractorFactory::new(),
        }
    }

    /// Recursive depth-first crawl starting at `entry` with the entry file at
    /// depth 0. Parse failures, missing files, and unresolvable imports are
    /// logged and skipped; they never abort the crawl.
    pub async fn analyze_project(&self, entry: &Path, max_depth: usize) -> SymbolTable {
        let mut crawl = Crawl {
            table: SymbolTable::new(),
            visited: HashSet::new(),
            max_depth,
        };
        self.process_file(&mut crawl, entry.to_path_buf(), 0).await;
        debug!(symbols = crawl.table.len(), "crawl finished");
        crawl.table
    }

    /// Extract one file's declarations without crawling its imports.
    ///
    /// Unlike the project crawl there is nothing to absorb failures into, so
    /// `MissingFile` and `Parse` surface to the caller.
    pub async fn analyze_file(&self, path: &Path) -> Result<Vec<Declaration>, AnalyzerError> {
        let source = match tokio::fs::read_to_string(path).await {
            Ok(source) => source,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(AnalyzerError::MissingFile(path.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };
        let analysis = self.extract(&source, path)?;
        Ok(analysis.declarations)
    }

    fn process_file<'a>(
        &'a self,
        crawl: &'a mut Crawl,
        path: PathBuf,
        depth: usize,
    ) -> Pin<Box<dyn Future<Output = ()> + 'a>> {
        Box::pin(async move {
            if depth >= crawl.max_depth || crawl.visited.contains(&path) {
                return;
            }

            // Normalize before marking visited so `./utils` and `./utils.ts`
            // count as the same file; the insert guarantees at-most-once
            // processing.
            let path = self.resolver.ensure_extension(path).await;
            if !crawl.visited.insert(path.clone()) {
                return;
            }

            let source = match tokio::fs::read_to_string(&path).await {
                Ok(source) => source,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    warn!("{}", AnalyzerError::MissingFile(path.clone()));
                    return;
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "read failed");
                    return;
                }
            };

            let analysis = match self.extract(&source, &path) {
                Ok(analysis) => analysis,
                Err(err) => {
                    warn!("{err}");
                    return;
                }
            };

            for declaration in analysis.declarations {
                crawl.table.insert(declaration);
            }

            // Imported bindings get placeholder records so references to them
            // resolve to some node even though their internals live in the
            // imported module (or a vendored package that is never crawled).
            for import in &analysis.imports {
                for local in &import.local_names {
                    crawl.table.insert(Declaration::new(
                        local.clone(),
                        SymbolKind::Variable,
                        import.statement_text.clone(),
                        path.clone(),
                        import.span,
                    ));
                }
            }

            // Imports are recursed one at a time in source order; with
            // last-write-wins insertion this order decides which same-named
            // declaration survives, so it must stay sequential.
            for import in &analysis.imports {
                match self.resolver.resolve(&import.specifier, &path).await {
                    Some(resolved) if self.resolver.is_vendored(&resolved) => {
                        debug!(path = %resolved.display(), "skipping vendored import");
                    }
                    Some(resolved) => {
                        self.process_file(&mut *crawl, resolved, depth + 1).await;
                    }
                    None => {
                        warn!(
                            "{}",
                            AnalyzerError::UnresolvedImport {
                                specifier: import.specifier.clone(),
                                importer: path.clone(),
                            }
                        );
                    }
                }
            }
        })
    }

    fn extract(&self, source: &str, path: &Path) -> Result<FileAnalysis, AnalyzerError> {
        let mut extractor = self.extractors.extractor_for(path)?;
        extractor.extract(source, path)
    }
}
