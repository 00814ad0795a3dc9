//! First-run bootstrap of the HTML style sheet.
//!
//! The style sheet lives next to the config file. It is written once with
//! [`DEFAULT_STYLE`] and afterwards read back verbatim, so users can edit it
//! freely.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::load::default_config_dir;
use super::schema::DisplaySettings;

pub const STYLE_FILE: &str = "styles.css";

pub const DEFAULT_STYLE: &str =
    "body { background-color: #F8E0A9; padding: 10px; font-size: 20px;}";

/// Where the style sheet is read from: the configured path, or
/// `styles.css` in the default config directory.
pub fn resolve_style_path(display: &DisplaySettings) -> Option<PathBuf> {
    display
        .style_path
        .clone()
        .or_else(|| default_config_dir().map(|d| d.join(STYLE_FILE)))
}

/// Return the style sheet at `path`, creating it (and its directory) with
/// the default content when it does not exist yet.
pub fn ensure_style(path: &Path) -> std::io::Result<String> {
    if !path.exists() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, DEFAULT_STYLE)?;
        info!(path = %path.display(), "wrote default style sheet");
    }
    fs::read_to_string(path)
}
