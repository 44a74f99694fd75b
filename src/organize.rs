//! File-type inventory.
//!
//! Walks a directory tree and groups regular files by lowercased extension.
//! Extensions are keyed with their leading dot (`".jpg"`); files without one
//! are keyed by the empty string.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("Cannot walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Files grouped by extension, both levels sorted.
pub type FilesByType = BTreeMap<String, Vec<PathBuf>>;

/// Group every file below `source` by extension.
///
/// Symlinks are followed. A missing `source` yields an empty inventory.
/// Entries that cannot be read are skipped, except for an existing `source`
/// itself, which is an error.
pub fn scan_files(source: &Path) -> Result<FilesByType, OrganizeError> {
    let mut files: FilesByType = BTreeMap::new();
    if !source.exists() {
        debug!("{} does not exist, nothing to scan", source.display());
        return Ok(files);
    }

    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(OrganizeError::Walk {
                    path: source.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        files.entry(extension_key(&path)).or_default().push(path);
    }

    Ok(files)
}

/// `".ext"` in lowercase, or `""` when the file has no extension.
pub fn extension_key(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Number of files per extension.
pub fn counts(files: &FilesByType) -> BTreeMap<&str, usize> {
    files
        .iter()
        .map(|(ext, paths)| (ext.as_str(), paths.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn groups_by_lowercased_extension() {
        let tmp = TempDir::new().unwrap();
        for name in ["test.py", "doc.md", "data.json", "OTHER.PY"] {
            touch(tmp.path(), name);
        }

        let files = scan_files(tmp.path()).unwrap();
        assert_eq!(files[".py"].len(), 2);
        assert_eq!(files[".md"].len(), 1);
        assert_eq!(files[".json"].len(), 1);
    }

    #[test]
    fn walks_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let nested = image_dir(tmp.path(), "a/b", &["deep.jpg"]);
        touch(tmp.path(), "top.jpg");

        let files = scan_files(tmp.path()).unwrap();
        assert_eq!(files[".jpg"].len(), 2);
        assert!(files[".jpg"].contains(&nested.join("deep.jpg")));
        assert!(!files.contains_key(""), "directories must not be counted");
    }

    #[test]
    fn files_without_extension_use_empty_key() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "Makefile");
        touch(tmp.path(), ".gitignore");

        let files = scan_files(tmp.path()).unwrap();
        assert_eq!(files[""].len(), 2);
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(extension_key(Path::new("backup.tar.GZ")), ".gz");
    }

    #[test]
    fn missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let files = scan_files(&tmp.path().join("gone")).unwrap();
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_counted() {
        let tmp = TempDir::new().unwrap();
        let outside = image_dir(tmp.path(), "outside", &["real.jpg"]);
        let root = image_dir(tmp.path(), "root", &[]);
        std::os::unix::fs::symlink(outside.join("real.jpg"), root.join("link.jpg")).unwrap();

        let files = scan_files(&root).unwrap();
        assert_eq!(files[".jpg"], vec![root.join("link.jpg")]);
    }

    #[test]
    fn counts_per_extension() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.txt", "b.txt", "c.png"] {
            touch(tmp.path(), name);
        }
        let files = scan_files(tmp.path()).unwrap();
        let counts = counts(&files);
        assert_eq!(counts[".txt"], 2);
        assert_eq!(counts[".png"], 1);
    }
}
