use std::fs;
use std::path::{Path, PathBuf};

use symtrace::core::{Alias, ImportResolver};

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn alias_substitution_skips_existence_check() {
    let resolver = ImportResolver::new(vec![Alias::new("@", "/no/such/dir/src")]);
    let resolved = resolver
        .resolve("@/utils/math", Path::new("/anywhere/file.ts"))
        .await;
    assert_eq!(resolved, Some(PathBuf::from("/no/such/dir/src/utils/math")));
}

#[tokio::test]
async fn relative_specifier_with_extension_must_exist() {
    let dir = tempfile::TempDir::new().unwrap();
    let importer = write(dir.path(), "a.ts", "");
    write(dir.path(), "b.ts", "");

    let resolver = ImportResolver::default();
    assert_eq!(
        resolver.resolve("./b.ts", &importer).await,
        Some(dir.path().join("b.ts"))
    );
    assert_eq!(resolver.resolve("./missing.ts", &importer).await, None);
}

#[tokio::test]
async fn extensionless_specifier_probes_in_preference_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let importer = write(dir.path(), "a.ts", "");
    write(dir.path(), "b.ts", "");
    write(dir.path(), "b.js", "");
    write(dir.path(), "only.js", "");

    let resolver = ImportResolver::default();
    // .ts wins over .js when both exist.
    assert_eq!(
        resolver.resolve("./b", &importer).await,
        Some(dir.path().join("b.ts"))
    );
    assert_eq!(
        resolver.resolve("./only", &importer).await,
        Some(dir.path().join("only.js"))
    );
    assert_eq!(resolver.resolve("./nothing", &importer).await, None);
}

#[tokio::test]
async fn bare_specifier_resolves_into_ancestor_node_modules() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("node_modules/leftpad")).unwrap();
    let importer = write(dir.path(), "src/deep/a.ts", "");

    let resolver = ImportResolver::default();
    let resolved = resolver.resolve("leftpad", &importer).await.unwrap();
    assert_eq!(resolved, dir.path().join("node_modules/leftpad"));
    assert!(resolver.is_vendored(&resolved));

    assert_eq!(resolver.resolve("no-such-package", &importer).await, None);
}

#[tokio::test]
async fn mjs_modules_resolve_without_an_explicit_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let importer = write(dir.path(), "a.js", "");
    write(dir.path(), "esm.mjs", "");

    let resolver = ImportResolver::default();
    assert_eq!(
        resolver.resolve("./esm", &importer).await,
        Some(dir.path().join("esm.mjs"))
    );
    assert_eq!(
        resolver.ensure_extension(dir.path().join("esm")).await,
        dir.path().join("esm.mjs")
    );
}

#[tokio::test]
async fn ensure_extension_completes_extensionless_paths() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path(), "mod.tsx", "");

    let resolver = ImportResolver::default();
    assert_eq!(
        resolver.ensure_extension(dir.path().join("mod")).await,
        dir.path().join("mod.tsx")
    );
    // Already-extended and unmatched paths pass through unchanged.
    assert_eq!(
        resolver.ensure_extension(dir.path().join("mod.tsx")).await,
        dir.path().join("mod.tsx")
    );
    assert_eq!(
        resolver.ensure_extension(dir.path().join("ghost")).await,
        dir.path().join("ghost")
    );
}

#[test]
fn vendored_detection_matches_any_node_modules_component() {
    let resolver = ImportResolver::default();
    assert!(resolver.is_vendored(Path::new("/proj/node_modules/react/index.js")));
    assert!(!resolver.is_vendored(Path::new("/proj/src/modules/react.ts")));
}
