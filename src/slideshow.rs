//! Slideshow orchestration: candidate directories → images → three files.
//!
//! Missing directories and empty results are not errors. They end the run
//! early with nothing written, and the returned [`Outcome`] says which case
//! applied. Only a failed write is an error.

use crate::collect;
use crate::config::{PageConfig, SlideshowConfig};
use crate::generate::{self, GenerateError};
use std::path::PathBuf;
use tracing::debug;

/// What a slideshow run did.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// None of the candidate directories exist.
    NoSourceDirectories,
    /// The directories exist but hold no images.
    NoImages,
    /// All three files were written.
    Written { images: usize, files: Vec<PathBuf> },
}

pub fn run(config: &SlideshowConfig, page: &PageConfig) -> Result<Outcome, GenerateError> {
    let dirs = collect::existing_dirs(&config.directories);
    if dirs.is_empty() {
        debug!("no source directory exists, nothing to do");
        return Ok(Outcome::NoSourceDirectories);
    }

    let images = collect::collect(&dirs);
    if images.is_empty() {
        debug!("no images in {} directories, nothing to do", dirs.len());
        return Ok(Outcome::NoImages);
    }

    let files = generate::write_slideshow(&images, &config.title, page, &config.output_dir)?;
    Ok(Outcome::Written {
        images: images.len(),
        files,
    })
}
