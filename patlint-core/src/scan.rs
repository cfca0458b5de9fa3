//! Model-file discovery with efficient directory pruning.
//!
//! Class-model files are `.json` documents, one program per file. Walks
//! prune excluded subtrees up front via `WalkDir::filter_entry` and
//! parallelize the remaining extension checks with rayon.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

/// Directories excluded from model discovery by default.
const EXCLUDED_DIRS: &[&str] = &["target", ".git", "node_modules", ".patlint"];

/// Checks if a directory entry should be pruned from traversal.
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

/// Gathers all `.json` model files under `root`.
///
/// Automatically excludes `target/`, `.git/`, `node_modules/`, and
/// `.patlint/` (the settings directory).
pub fn gather_model_files(root: &Path) -> Result<Vec<PathBuf>> {
    gather_model_files_with_excludes(root, &[])
}

/// Gathers all `.json` model files with additional exclusion patterns.
pub fn gather_model_files_with_excludes(root: &Path, excludes: &[&str]) -> Result<Vec<PathBuf>> {
    let all_excludes: HashSet<&str> = EXCLUDED_DIRS
        .iter()
        .copied()
        .chain(excludes.iter().copied())
        .collect();

    let mut files = WalkDir::new(root)
        .into_iter()
        // filter_entry prunes entire subtrees before iteration
        .filter_entry(|e| !is_excluded_dir(e, &all_excludes))
        .par_bridge()
        .filter_map(|entry| match entry {
            Ok(e) => {
                let path = e.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e.into())),
        })
        .collect::<Result<Vec<_>>>()
        .context(format!(
            "Failed to gather model files from {}",
            root.display()
        ))?;

    // par_bridge yields in nondeterministic order.
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_gather_finds_json_files() {
        let dir = std::env::temp_dir().join("patlint_scan_test_find");
        let _ = fs::remove_dir_all(&dir);
        create_file(&dir.join("a.json"), "{}");
        create_file(&dir.join("sub/b.json"), "{}");
        create_file(&dir.join("sub/c.txt"), "not a model");

        let files = gather_model_files(&dir).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.json"));
        assert!(files[1].ends_with("b.json"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_gather_prunes_excluded_dirs() {
        let dir = std::env::temp_dir().join("patlint_scan_test_prune");
        let _ = fs::remove_dir_all(&dir);
        create_file(&dir.join("keep.json"), "{}");
        create_file(&dir.join(".patlint/settings.json"), "{}");
        create_file(&dir.join("node_modules/dep.json"), "{}");

        let files = gather_model_files(&dir).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.json"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_gather_custom_excludes() {
        let dir = std::env::temp_dir().join("patlint_scan_test_custom");
        let _ = fs::remove_dir_all(&dir);
        create_file(&dir.join("keep.json"), "{}");
        create_file(&dir.join("fixtures/skip.json"), "{}");

        let files = gather_model_files_with_excludes(&dir, &["fixtures"]).unwrap();
        assert_eq!(files.len(), 1);

        fs::remove_dir_all(&dir).ok();
    }
}
