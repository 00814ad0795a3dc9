use std::ffi::OsString;

use tracing::{debug, warn};

use crate::config::{self, DisplaySettings};
use crate::error::{Error, Result};

/// The configured DJ name, or the OS account name when none is set.
pub fn resolve_dj(configured: &str) -> Result<String> {
    let configured = configured.trim();
    if !configured.is_empty() {
        return Ok(configured.to_string());
    }
    account_name(users::get_current_username()).ok_or_else(|| {
        Error::Account(format!(
            "uid {} has no account name, pass --dj",
            users::get_current_uid()
        ))
    })
}

/// Turn the account name reported by the OS into a DJ name. Blank names
/// count as missing.
pub fn account_name(os_name: Option<OsString>) -> Option<String> {
    os_name
        .map(|name| name.to_string_lossy().trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Bootstrap and read the style sheet. A style sheet that cannot be
/// located or written degrades to the built-in default.
pub fn load_style(display: &DisplaySettings) -> String {
    let Some(path) = config::resolve_style_path(display) else {
        warn!("no config directory available, using built-in style");
        return config::DEFAULT_STYLE.to_string();
    };

    match config::ensure_style(&path) {
        Ok(style) => {
            debug!(path = %path.display(), "style sheet loaded");
            style
        }
        Err(e) => {
            warn!(path = %path.display(), "cannot read style sheet, using built-in style: {e}");
            config::DEFAULT_STYLE.to_string()
        }
    }
}
