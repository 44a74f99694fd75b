//! # mediakit
//!
//! Small housekeeping tools for media folders. Each tool does one linear pass:
//! scan some files, build text, write the result next to them.
//!
//! # Slideshow Pipeline
//!
//! The main tool turns folders of images into a self-contained HTML slideshow:
//!
//! ```text
//! 1. Collect    images/  →  ordered image list   (non-recursive, natural order)
//! 2. Generate   list     →  html + css + js      (pure, no I/O)
//! 3. Write               →  diashow.html, diashow.css, diashow.js
//! ```
//!
//! Missing source folders or an empty result end the run early without writing
//! anything; the caller gets a [`slideshow::Outcome`] saying why.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`natural`] | Natural ordering: digit runs compare as integers |
//! | [`types`] | [`types::ImageRef`], a discovered image path with derived names |
//! | [`collect`] | Image discovery across source directories |
//! | [`generate`] | Slideshow markup, stylesheet and script emitters |
//! | [`slideshow`] | Orchestration from config to written files |
//! | [`toc`] | Table of contents for a folder of HTML documents |
//! | [`organize`] | File inventory grouped by extension |
//! | [`config`] | `mediakit.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud for Markup
//!
//! Pages are built with [Maud](https://maud.lambda.xyz/). File names and titles
//! end up in attributes and text, and Maud escapes every interpolation.
//!
//! ## Embedded Assets
//!
//! Stylesheets and the slideshow script live in `static/` and are compiled in
//! with `include_str!`. The emitters return them unchanged, so their output is
//! byte-identical across calls and the binary ships no template files.
//!
//! ## Silent No-Ops
//!
//! Nothing to do is not an error. The slideshow and TOC commands exit quietly
//! when there is no input; diagnostics are available at `--verbose`.

pub mod collect;
pub mod config;
pub mod generate;
pub mod natural;
pub mod organize;
pub mod output;
pub mod slideshow;
pub mod toc;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
