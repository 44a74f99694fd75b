//! Slideshow document generation.
//!
//! Three independent emitters build the page from an ordered image list:
//!
//! - [`render_html`]: the document itself, one slide and one thumbnail per image
//! - [`stylesheet`]: constant CSS, embedded from `static/diashow.css`
//! - [`script`]: constant JavaScript, embedded from `static/diashow.js`
//!
//! The document references the stylesheet and script by the fixed names in
//! [`HTML_FILE`], [`CSS_FILE`] and [`JS_FILE`], so all three files must be
//! written together from the same image list.
//!
//! ## Page Structure
//!
//! ```text
//! div.slideshow-container
//! ├── h1                      title
//! ├── div.slideshow
//! │   └── div.slide × N       image + folder / file caption
//! ├── div.navigation          prev button, "1 / N" counter, next button
//! └── div.thumbnail-strip
//!     └── img.thumbnail × N   data-index = 0..N-1
//! ```
//!
//! HTML is built with [maud](https://maud.lambda.xyz/), so titles and file
//! names are escaped.

use crate::config::PageConfig;
use crate::types::ImageRef;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const HTML_FILE: &str = "diashow.html";
pub const CSS_FILE: &str = "diashow.css";
pub const JS_FILE: &str = "diashow.js";

/// Heading used when no title is given.
pub const DEFAULT_TITLE: &str = "Bildergalerie";

const CSS: &str = include_str!("../static/diashow.css");
const JS: &str = include_str!("../static/diashow.js");

/// Renders the slideshow document.
pub fn render_html(images: &[ImageRef], title: Option<&str>, page: &PageConfig) -> Markup {
    let title = title.unwrap_or(DEFAULT_TITLE);

    html! {
        (DOCTYPE)
        html lang=(page.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(CSS_FILE);
                script src=(JS_FILE) defer {}
            }
            body {
                div.slideshow-container {
                    h1 { (title) }
                    div.slideshow {
                        @for image in images {
                            (slide(image))
                        }
                    }
                    (navigation(images.len(), page))
                    div.thumbnail-strip {
                        @for (idx, image) in images.iter().enumerate() {
                            img.thumbnail src=(image.src()) alt=(page.thumbnail_alt) data-index=(idx) loading="lazy";
                        }
                    }
                }
            }
        }
    }
}

fn slide(image: &ImageRef) -> Markup {
    html! {
        div.slide {
            img src=(image.src()) alt=(image.file_name()) loading="lazy";
            div.slide-info {
                span.folder { (image.folder_name()) " /" }
                " "
                span.file { (image.file_name()) }
            }
        }
    }
}

/// Prev/next buttons around the counter.
///
/// The total is rendered up front so the counter reads "1 / N" before the
/// script runs; the script rewrites it on every slide change.
fn navigation(total: usize, page: &PageConfig) -> Markup {
    html! {
        div.navigation {
            button.prev type="button" { (page.previous_label) }
            span.slide-counter { "1 / " span.total { (total) } }
            button.next type="button" { (page.next_label) }
        }
    }
}

/// The slideshow stylesheet. Independent of the images.
pub fn stylesheet() -> &'static str {
    CSS
}

/// The slideshow behavior script. Independent of the images.
pub fn script() -> &'static str {
    JS
}

/// Write the three slideshow files into `output_dir`.
///
/// Image links are rewritten relative to `output_dir`, so the page works
/// wherever it is written. Files are written in order (HTML, CSS, JS); a
/// failure leaves any earlier files in place.
pub fn write_slideshow(
    images: &[ImageRef],
    title: &str,
    page: &PageConfig,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let images: Vec<ImageRef> = images.iter().map(|i| i.relative_to(output_dir)).collect();

    let outputs = [
        (HTML_FILE, render_html(&images, Some(title), page).into_string()),
        (CSS_FILE, stylesheet().to_string()),
        (JS_FILE, script().to_string()),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (name, content) in outputs {
        let path = output_dir.join(name);
        fs::write(&path, content)?;
        written.push(path);
    }
    Ok(written)
}
