//! Shared types passed from collection to generation.

use std::path::{Component, Path, PathBuf};

/// A discovered image file.
///
/// Holds the path exactly as it was found (relative paths stay relative).
/// Folder and file names are derived from the forward-slash form of the path,
/// so `images\cats\tom.png` reports folder `cats` and file `tom.png` on every
/// platform.
///
/// The `src` used in markup starts out as the discovered path and can be
/// rebased with [`ImageRef::relative_to`] when the page is written elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageRef {
    path: String,
    src: String,
}

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let src = path.replace('\\', "/");
        Self { path, src }
    }

    pub fn from_path(path: &Path) -> Self {
        Self::new(path.to_string_lossy())
    }

    /// The path as discovered.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path used in `src` attributes, always with forward slashes.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Point `src` at the same file as seen from the directory `base`.
    ///
    /// Both sides are canonicalized first. When either cannot be resolved the
    /// image is returned unchanged.
    pub fn relative_to(&self, base: &Path) -> Self {
        let (Ok(target), Ok(base)) = (Path::new(&self.path).canonicalize(), base.canonicalize())
        else {
            return self.clone();
        };
        Self {
            path: self.path.clone(),
            src: relative_path(&target, &base)
                .to_string_lossy()
                .replace('\\', "/"),
        }
    }

    /// Last path component.
    pub fn file_name(&self) -> &str {
        self.components().next_back().unwrap_or_default()
    }

    /// Name of the directory containing the file, empty for a bare file name.
    pub fn folder_name(&self) -> &str {
        let mut parts = self.components();
        parts.next_back();
        parts.next_back().unwrap_or_default()
    }

    fn components(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.path
            .split(['/', '\\'])
            .filter(|part| !part.is_empty() && *part != ".")
    }
}

/// Path from `base` to `target`; both must be absolute.
fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();
    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base.len() {
        rel.push("..");
    }
    for part in &target[common..] {
        rel.push(part);
    }
    rel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn derives_file_and_folder() {
        let image = ImageRef::new("images/img1.png");
        assert_eq!(image.file_name(), "img1.png");
        assert_eq!(image.folder_name(), "images");
    }

    #[test]
    fn nested_folder_uses_direct_parent() {
        let image = ImageRef::new("trips/2023/rome.jpg");
        assert_eq!(image.folder_name(), "2023");
    }

    #[test]
    fn back_slashes_normalized_in_src() {
        let image = ImageRef::new(r"images\cats\tom.png");
        assert_eq!(image.src(), "images/cats/tom.png");
        assert_eq!(image.file_name(), "tom.png");
        assert_eq!(image.folder_name(), "cats");
    }

    #[test]
    fn bare_file_has_empty_folder() {
        let image = ImageRef::new("tom.png");
        assert_eq!(image.folder_name(), "");
        assert_eq!(image.file_name(), "tom.png");
    }

    #[test]
    fn current_dir_component_is_ignored() {
        let image = ImageRef::new("./tom.png");
        assert_eq!(image.folder_name(), "");
    }

    #[test]
    fn relative_path_climbs_out_of_base() {
        assert_eq!(
            relative_path(Path::new("/w/images/a.png"), Path::new("/w/site")),
            PathBuf::from("../images/a.png")
        );
        assert_eq!(
            relative_path(Path::new("/w/images/a.png"), Path::new("/w")),
            PathBuf::from("images/a.png")
        );
    }

    #[test]
    fn relative_to_keeps_names_and_rebases_src() {
        let tmp = TempDir::new().unwrap();
        let images = image_dir(tmp.path(), "images", &["a.png"]);
        let site = image_dir(tmp.path(), "site", &[]);

        let image = ImageRef::from_path(&images.join("a.png")).relative_to(&site);
        assert_eq!(image.src(), "../images/a.png");
        assert_eq!(image.folder_name(), "images");
        assert_eq!(image.file_name(), "a.png");
        assert!(site.join(image.src()).is_file());
    }

    #[test]
    fn relative_to_unresolvable_base_is_unchanged() {
        let tmp = TempDir::new().unwrap();
        let image = ImageRef::new("images/a.png");
        assert_eq!(image.relative_to(&tmp.path().join("gone")), image);
    }
}
