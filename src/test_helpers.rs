//! Shared test utilities: fixture directories and markup inspection.

use std::fs;
use std::path::{Path, PathBuf};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create an empty file `name` inside `dir`.
pub fn touch(dir: &Path, name: &str) {
    write_file(dir, name, "");
}

/// Create file `name` inside `dir` with `content`.
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content)
        .unwrap_or_else(|e| panic!("cannot write {name} in {}: {e}", dir.display()));
}

/// Create `root/name` (with parents) holding empty files `files`.
pub fn image_dir(root: &Path, name: &str, files: &[&str]) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    for file in files {
        touch(&dir, file);
    }
    dir
}

// =========================================================================
// Markup inspection
// =========================================================================

/// Non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Values of every `name="..."` attribute, in document order.
pub fn attribute_values<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
    let prefix = format!("{name}=\"");
    html.match_indices(&prefix)
        .filter_map(|(pos, _)| {
            let start = pos + prefix.len();
            html[start..].find('"').map(|len| &html[start..start + len])
        })
        .collect()
}

/// Text content with all tags removed.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}
