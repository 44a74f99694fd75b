//! Tool configuration.
//!
//! Settings come from an optional TOML file (`mediakit.toml` by default).
//! The file is sparse: user values are merged over the stock defaults, and
//! CLI flags override both.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [slideshow]
//! directories = ["images"]  # Scanned non-recursively, missing ones skipped
//! title = "Diashow"         # Page title and heading
//! output_dir = "."          # Where diashow.html/.css/.js are written
//!
//! [page]
//! lang = "de"
//! previous_label = "Zurück"
//! next_label = "Weiter"
//! thumbnail_alt = "Miniatur"
//!
//! [toc]
//! directory = "."
//! output = "start.html"
//! stylesheet = "start.css"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "mediakit.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Slideshow sources, title and output location.
    pub slideshow: SlideshowConfig,
    /// Fixed text of the generated slideshow page.
    pub page: PageConfig,
    /// Table-of-contents generator settings.
    pub toc: TocConfig,
}

impl ToolConfig {
    /// Validate values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slideshow.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "slideshow.title must not be empty".into(),
            ));
        }
        for (key, name) in [
            ("toc.output", &self.toc.output),
            ("toc.stylesheet", &self.toc.stylesheet),
        ] {
            if !is_bare_file_name(name) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a plain file name, got {name:?}"
                )));
            }
        }
        if self.toc.output == self.toc.stylesheet {
            return Err(ConfigError::Validation(
                "toc.output and toc.stylesheet must differ".into(),
            ));
        }
        Ok(())
    }
}

fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Slideshow orchestration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowConfig {
    /// Candidate image directories, in priority order.
    pub directories: Vec<PathBuf>,
    /// Title shown in the browser tab and the page heading.
    pub title: String,
    /// Directory receiving the three generated files.
    pub output_dir: PathBuf,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            directories: vec![PathBuf::from("images")],
            title: "Diashow".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Fixed strings of the slideshow page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,
    /// Label of the "previous slide" button.
    pub previous_label: String,
    /// Label of the "next slide" button.
    pub next_label: String,
    /// Alt text of every thumbnail.
    pub thumbnail_alt: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: "de".to_string(),
            previous_label: "Zurück".to_string(),
            next_label: "Weiter".to_string(),
            thumbnail_alt: "Miniatur".to_string(),
        }
    }
}

/// Table-of-contents generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocConfig {
    /// Directory whose HTML documents are listed.
    pub directory: PathBuf,
    /// File name of the generated index page.
    pub output: String,
    /// File name of the generated stylesheet.
    pub stylesheet: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            output: "start.html".to_string(),
            stylesheet: "start.css".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Stock defaults as a TOML table, the base layer for user overrides.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(ToolConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value, `None` if it does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<ToolConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ToolConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path`, falling back to stock defaults.
pub fn load_config(path: &Path) -> Result<ToolConfig, ConfigError> {
    resolve_config(load_raw_config(path)?)
}

/// Fully commented stock config, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# mediakit configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Command-line flags take precedence.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Slideshow
# ---------------------------------------------------------------------------
[slideshow]
# Directories scanned (non-recursively) for png/jpg/jpeg/gif files.
# Missing directories are skipped silently.
directories = ["images"]

# Page title and heading.
title = "Diashow"

# Where diashow.html, diashow.css and diashow.js are written.
output_dir = "."

# ---------------------------------------------------------------------------
# Slideshow page text
# ---------------------------------------------------------------------------
[page]
lang = "de"
previous_label = "Zurück"
next_label = "Weiter"
thumbnail_alt = "Miniatur"

# ---------------------------------------------------------------------------
# Table of contents
# ---------------------------------------------------------------------------
[toc]
# Directory whose .html/.htm files are listed. Output lands here too.
directory = "."

# File names of the generated page and stylesheet.
output = "start.html"
stylesheet = "start.css"
"##
}
