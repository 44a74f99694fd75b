//! CLI output formatting.
//!
//! Each command has a pure `format_*` function returning the lines to show,
//! and a `print_*` wrapper writing them to stdout. No-op outcomes format to
//! no lines, so a run with nothing to do prints nothing.
//!
//! ```text
//! Generated diashow.html
//! Generated diashow.css
//! Generated diashow.js
//! Slideshow with 12 images
//! ```

use crate::organize::{self, FilesByType};
use crate::slideshow::Outcome;
use crate::toc::TocOutcome;
use std::path::{Path, PathBuf};

fn generated_lines(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| format!("Generated {}", display_name(f)))
        .collect()
}

/// File name only; the output directory is shown once elsewhere.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_slideshow_outcome(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::NoSourceDirectories | Outcome::NoImages => Vec::new(),
        Outcome::Written { images, files } => {
            let mut lines = generated_lines(files);
            lines.push(format!("Slideshow with {images} images"));
            lines
        }
    }
}

pub fn print_slideshow_outcome(outcome: &Outcome) {
    for line in format_slideshow_outcome(outcome) {
        println!("{line}");
    }
}

pub fn format_toc_outcome(outcome: &TocOutcome) -> Vec<String> {
    match outcome {
        TocOutcome::NoDocuments => Vec::new(),
        TocOutcome::Written { documents, files } => {
            let mut lines = generated_lines(files);
            lines.push(format!("Table of contents with {documents} documents"));
            lines
        }
    }
}

pub fn print_toc_outcome(outcome: &TocOutcome) {
    for line in format_toc_outcome(outcome) {
        println!("{line}");
    }
}

/// Inventory report, one line per extension.
///
/// ```text
/// Gefundene Dateitypen:
///   (ohne Erweiterung): 1 Dateien
///   .jpg: 12 Dateien
/// ```
pub fn format_file_types(files: &FilesByType) -> Vec<String> {
    let mut lines = vec!["Gefundene Dateitypen:".to_string()];
    for (ext, count) in organize::counts(files) {
        let label = if ext.is_empty() {
            "(ohne Erweiterung)"
        } else {
            ext
        };
        lines.push(format!("  {label}: {count} Dateien"));
    }
    lines
}

pub fn print_file_types(files: &FilesByType) {
    for line in format_file_types(files) {
        println!("{line}");
    }
}

/// Inventory as a JSON object mapping extension to file count.
pub fn format_file_types_json(files: &FilesByType) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&organize::counts(files))
}
