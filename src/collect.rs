//! Image discovery.
//!
//! Lists the files directly inside each source directory and keeps the ones
//! whose extension is a known image type. Directories that are missing or
//! unreadable are skipped without error.
//!
//! ## Extension Matching
//!
//! Each extension is accepted in three spellings: lowercase, uppercase and
//! capitalized.
//!
//! ```text
//! png  PNG  Png
//! jpg  JPG  Jpg
//! jpeg JPEG Jpeg
//! gif  GIF  Gif
//! ```
//!
//! Mixed spellings such as `pNg` are not images. Hidden files (names
//! starting with `.`, e.g. `._photo.jpg` AppleDouble files) are never
//! collected, whatever their extension.
//!
//! ## Ordering
//!
//! Matches from all directories are merged, de-duplicated by path and sorted
//! with [`natural::compare`](crate::natural::compare).

use crate::natural;
use crate::types::ImageRef;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Whether `ext` is one of the accepted spellings of an image extension.
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|known| {
        ext == *known || ext == known.to_uppercase() || ext == capitalize(known)
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keep only the directories that exist.
pub fn existing_dirs<P: AsRef<Path>>(candidates: &[P]) -> Vec<PathBuf> {
    candidates
        .iter()
        .map(AsRef::<Path>::as_ref)
        .filter(|dir| {
            let exists = dir.is_dir();
            if !exists {
                debug!("skipping missing directory {}", dir.display());
            }
            exists
        })
        .map(Path::to_path_buf)
        .collect()
}

/// Collect images from `dirs` in natural order, without duplicates.
pub fn collect<P: AsRef<Path>>(dirs: &[P]) -> Vec<ImageRef> {
    let mut found = BTreeSet::new();
    for dir in dirs {
        found.extend(images_in(dir.as_ref()));
    }

    let mut images: Vec<ImageRef> = found.iter().map(|p| ImageRef::from_path(p)).collect();
    images.sort_by(|a, b| natural::compare(a.path(), b.path()));
    images
}

fn images_in(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("skipping unreadable directory {}: {err}", dir.display());
            return Vec::new();
        }
    };

    entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && !is_hidden(p) && has_image_extension(p))
        .collect()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(is_image_extension)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn file_names(images: &[ImageRef]) -> Vec<&str> {
        images.iter().map(|i| i.file_name()).collect()
    }

    #[test]
    fn accepts_three_spellings() {
        for ext in ["png", "PNG", "Png", "jpeg", "JPEG", "Jpeg", "gif", "Jpg"] {
            assert!(is_image_extension(ext), "{ext} should match");
        }
    }

    #[test]
    fn rejects_mixed_case_and_other_types() {
        for ext in ["pNg", "jPEG", "webp", "txt", ""] {
            assert!(!is_image_extension(ext), "{ext} should not match");
        }
    }

    #[test]
    fn collects_in_natural_order() {
        let tmp = TempDir::new().unwrap();
        let dir = image_dir(tmp.path(), "images", &["img10.jpg", "img1.png", "img2.PNG"]);

        let images = collect(&[dir]);
        assert_eq!(file_names(&images), vec!["img1.png", "img2.PNG", "img10.jpg"]);
    }

    #[test]
    fn ignores_non_images_and_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let dir = image_dir(tmp.path(), "images", &["a.png", "notes.txt", "b.pNg"]);
        std::fs::create_dir_all(dir.join("nested.png")).unwrap();
        touch(&dir.join("nested.png"), "c.png");

        let images = collect(&[dir]);
        assert_eq!(file_names(&images), vec!["a.png"]);
    }

    #[test]
    fn skips_hidden_files() {
        let tmp = TempDir::new().unwrap();
        let dir = image_dir(tmp.path(), "images", &["a.png", ".thumb.png", "._a.jpg"]);

        let images = collect(&[dir]);
        assert_eq!(file_names(&images), vec!["a.png"]);
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let images = collect(&[tmp.path().join("nope")]);
        assert!(images.is_empty());
    }

    #[test]
    fn same_directory_twice_is_deduplicated() {
        let tmp = TempDir::new().unwrap();
        let dir = image_dir(tmp.path(), "images", &["a.png", "b.gif"]);

        let images = collect(&[dir.clone(), dir]);
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn merges_multiple_directories() {
        let tmp = TempDir::new().unwrap();
        let first = image_dir(tmp.path(), "b-trip", &["photo2.jpg"]);
        let second = image_dir(tmp.path(), "a-home", &["photo10.jpg", "photo1.jpg"]);

        let images = collect(&[first, second]);
        let folders: Vec<&str> = images.iter().map(|i| i.folder_name()).collect();
        assert_eq!(folders, vec!["a-home", "a-home", "b-trip"]);
        assert_eq!(file_names(&images), vec!["photo1.jpg", "photo10.jpg", "photo2.jpg"]);
    }

    #[test]
    fn existing_dirs_filters_missing() {
        let tmp = TempDir::new().unwrap();
        let present = image_dir(tmp.path(), "images", &[]);
        let missing = tmp.path().join("gone");

        assert_eq!(existing_dirs(&[present.clone(), missing]), vec![present]);
    }

    #[test]
    fn existing_dirs_rejects_plain_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "images");
        assert!(existing_dirs(&[tmp.path().join("images")]).is_empty());
    }
}
