use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::AnalyzerError;

/// Recursive file-system mirror: directories map child names to subtrees,
/// leaves carry raw content and their absolute path.
///
/// This is plain serving data for front-end consumers; it takes no part in
/// the dependency-graph semantics.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FileTree {
    File {
        #[serde(rename = "type")]
        node_type: &'static str,
        content: String,
        path: PathBuf,
    },
    Directory(BTreeMap<String, FileTree>),
}

impl FileTree {
    pub fn build(root: &Path) -> Result<FileTree, AnalyzerError> {
        if !root.is_dir() {
            return Err(AnalyzerError::MissingFile(root.to_path_buf()));
        }

        let mut tree = BTreeMap::new();
        for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
            let entry = entry.map_err(std::io::Error::from)?;
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };

            let node = if entry.file_type().is_dir() {
                FileTree::Directory(BTreeMap::new())
            } else {
                let bytes = std::fs::read(entry.path())?;
                FileTree::File {
                    node_type: "file",
                    content: String::from_utf8_lossy(&bytes).into_owned(),
                    path: entry.path().to_path_buf(),
                }
            };
            place(&mut tree, relative, node);
        }
        Ok(FileTree::Directory(tree))
    }
}

/// Insert `node` at its relative position, creating intermediate directory
/// entries as needed. WalkDir yields parents before children, so the
/// intermediate entries normally already exist.
fn place(tree: &mut BTreeMap<String, FileTree>, relative: &Path, node: FileTree) {
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let Some((leaf, dirs)) = parts.split_last() else {
        return;
    };

    let mut current = tree;
    for part in dirs {
        let entry = current
            .entry(part.clone())
            .or_insert_with(|| FileTree::Directory(BTreeMap::new()));
        match entry {
            FileTree::Directory(children) => current = children,
            FileTree::File { .. } => return,
        }
    }
    current.insert(leaf.clone(), node);
}
