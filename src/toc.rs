//! Table of contents for a folder of HTML documents.
//!
//! Lists the `.html`/`.htm` files directly inside a directory and writes an
//! index page plus its stylesheet next to them, so the relative links work.
//!
//! ## Titles
//!
//! The entry title comes from the document's `<title>` tag, searched in the
//! first 1000 characters. Without one, the file stem is used with `_` and `-`
//! turned into spaces and each word capitalized:
//!
//! ```text
//! <title>Hydraulik</title>   → "Hydraulik"
//! pumpen_und-ventile.html    → "Pumpen Und Ventile"
//! ```

use crate::config::TocConfig;
use maud::{DOCTYPE, Markup, html};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum TocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Characters inspected when looking for a `<title>` tag.
const TITLE_SCAN_CHARS: usize = 1000;

const DOCUMENT_EXTENSIONS: &[&str] = &["html", "htm"];
const EXCLUDED_FILES: &[&str] = &["info.html", "info.md"];

const CSS: &str = include_str!("../static/toc.css");

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").expect("title pattern is valid")
});

/// A listed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub file_name: String,
    pub title: String,
}

/// What a table-of-contents run did.
#[derive(Debug, PartialEq)]
pub enum TocOutcome {
    /// No documents to list; nothing was written.
    NoDocuments,
    /// Index page and stylesheet were written.
    Written { documents: usize, files: Vec<PathBuf> },
}

/// Collect the documents in `dir`, sorted by file name.
///
/// `output_name` is skipped so a previous index does not list itself.
/// A missing or unreadable directory yields an empty list.
pub fn collect_documents(dir: &Path, output_name: &str) -> Vec<Document> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("cannot list {}: {err}", dir.display());
            return Vec::new();
        }
    };

    let mut documents: Vec<Document> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_document(p, output_name))
        .map(|p| Document {
            file_name: file_name_of(&p),
            title: extract_title(&p),
        })
        .collect();

    documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    documents
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn is_document(path: &Path, output_name: &str) -> bool {
    let name = file_name_of(path);
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    DOCUMENT_EXTENSIONS.contains(&ext.as_str())
        && name != output_name
        && !EXCLUDED_FILES.contains(&name.to_lowercase().as_str())
}

/// Title from the `<title>` tag, or from the file stem when the tag is
/// missing or blank.
fn extract_title(path: &Path) -> String {
    let from_tag = fs::read_to_string(path).ok().and_then(|content| {
        let head = match content.char_indices().nth(TITLE_SCAN_CHARS) {
            Some((end, _)) => &content[..end],
            None => content.as_str(),
        };
        TITLE_RE
            .captures(head)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|t| !t.is_empty())
    });

    from_tag.unwrap_or_else(|| {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        title_case(&stem.replace(['_', '-'], " "))
    })
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Renders the index page.
pub fn render_html(documents: &[Document], stylesheet: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="de" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Inhaltsverzeichnis" }
                link rel="stylesheet" href=(stylesheet);
            }
            body {
                header {
                    h1 { "Inhaltsverzeichnis" }
                    p.subtitle { (documents.len()) " Dokumente gefunden" }
                }
                main {
                    @if documents.is_empty() {
                        p.no-files { "Keine Dateien gefunden." }
                    } @else {
                        ol.toc-list {
                            @for (idx, doc) in documents.iter().enumerate() {
                                li.toc-item {
                                    a.toc-link href=(doc.file_name) {
                                        span.toc-number { (format!("{:02}.", idx + 1)) }
                                        span.toc-title { (doc.title) }
                                        span.toc-filename { "(" (doc.file_name) ")" }
                                    }
                                }
                            }
                        }
                    }
                }
                footer {
                    p { "Automatisch generiert" }
                }
            }
        }
    }
}

/// The index stylesheet.
pub fn stylesheet() -> &'static str {
    CSS
}

/// Build the table of contents for `config.directory`.
pub fn generate(config: &TocConfig) -> Result<TocOutcome, TocError> {
    let documents = collect_documents(&config.directory, &config.output);
    if documents.is_empty() {
        debug!("no documents in {}", config.directory.display());
        return Ok(TocOutcome::NoDocuments);
    }

    let html_path = config.directory.join(&config.output);
    let css_path = config.directory.join(&config.stylesheet);
    fs::write(
        &html_path,
        render_html(&documents, &config.stylesheet).into_string(),
    )?;
    fs::write(&css_path, stylesheet())?;

    Ok(TocOutcome::Written {
        documents: documents.len(),
        files: vec![html_path, css_path],
    })
}
