use std::path::{Path, PathBuf};
use tracing::warn;

/// Supported source extensions, in resolution preference order. Matches the
/// set of extensions the extractor factory accepts.
pub const EXTENSIONS: [&str; 5] = ["ts", "tsx", "js", "jsx", "mjs"];

/// Directory name that marks vendored third-party packages. Paths under it
/// are resolved but never recursed into.
const VENDOR_DIR: &str = "node_modules";

/// A configured prefix substitution applied before standard path resolution,
/// e.g. `@` -> `<project>/src` so that `@/utils/math` resolves inside the
/// project regardless of the importing file's location.
#[derive(Debug, Clone)]
pub struct Alias {
    pub prefix: String,
    pub target: PathBuf,
}

impl Alias {
    pub fn new(prefix: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            target: target.into(),
        }
    }
}

/// Maps literal import specifiers to absolute file paths.
#[derive(Debug, Clone, Default)]
pub struct ImportResolver {
    aliases: Vec<Alias>,
}

impl ImportResolver {
    pub fn new(aliases: Vec<Alias>) -> Self {
        Self { aliases }
    }

    /// Resolve `specifier` as imported from `importer`.
    ///
    /// Checked in order: alias substitution (returned without an existence
    /// check), relative/absolute resolution against the importing file's
    /// directory with extension probing, then bare-specifier lookup in
    /// ancestor vendor directories. Returns `None` when nothing matches;
    /// the caller drops that edge with a warning.
    pub async fn resolve(&self, specifier: &str, importer: &Path) -> Option<PathBuf> {
        if let Some(aliased) = self.apply_alias(specifier) {
            return Some(aliased);
        }

        let base = importer.parent()?;

        if specifier.starts_with("./") || specifier.starts_with("../") || specifier.starts_with('/')
        {
            return self.resolve_with_extensions(base.join(specifier)).await;
        }

        self.resolve_vendored(specifier, base).await
    }

    fn apply_alias(&self, specifier: &str) -> Option<PathBuf> {
        for alias in &self.aliases {
            let prefixed = format!("{}/", alias.prefix);
            if let Some(rest) = specifier.strip_prefix(&prefixed) {
                return Some(alias.target.join(rest));
            }
        }
        None
    }

    /// Try the literal path, then each supported extension appended in
    /// preference order when the path carries no extension of its own.
    async fn resolve_with_extensions(&self, candidate: PathBuf) -> Option<PathBuf> {
        if candidate.extension().is_some() {
            if path_exists(&candidate).await {
                return Some(candidate);
            }
            return None;
        }

        for ext in EXTENSIONS {
            let with_ext = append_extension(&candidate, ext);
            if path_exists(&with_ext).await {
                return Some(with_ext);
            }
        }
        None
    }

    /// Bare specifiers resolve by walking up from the importing file's
    /// directory looking for a vendored package. The hit is returned as an
    /// opaque leaf; `is_vendored` keeps the crawler out of it.
    async fn resolve_vendored(&self, specifier: &str, base: &Path) -> Option<PathBuf> {
        for dir in base.ancestors() {
            let candidate = dir.join(VENDOR_DIR).join(specifier);
            if path_exists(&candidate).await {
                return Some(candidate);
            }
        }
        None
    }

    /// Whether `path` points into a vendored third-party location.
    pub fn is_vendored(&self, path: &Path) -> bool {
        path.components()
            .any(|component| component.as_os_str() == VENDOR_DIR)
    }

    /// Normalize an extensionless path by probing the supported extensions;
    /// returns the input unchanged when it already has an extension or no
    /// probe matches.
    pub async fn ensure_extension(&self, path: PathBuf) -> PathBuf {
        if path.extension().is_some() {
            return path;
        }
        for ext in EXTENSIONS {
            let with_ext = append_extension(&path, ext);
            if path_exists(&with_ext).await {
                return with_ext;
            }
        }
        path
    }
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".");
    os.push(ext);
    PathBuf::from(os)
}

async fn path_exists(path: &Path) -> bool {
    match tokio::fs::try_exists(path).await {
        Ok(exists) => exists,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "existence probe failed");
            false
        }
    }
}
