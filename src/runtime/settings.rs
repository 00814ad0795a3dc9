use std::path::Path;

use tracing::warn;

use crate::config;

/// Load settings, falling back to defaults when the optional config file is
/// unreadable or invalid.
pub fn load_settings(explicit: Option<&Path>) -> config::Settings {
    let loaded = match explicit {
        Some(path) => config::Settings::load_from(Some(path)),
        None => config::Settings::load(),
    };

    match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the board from starting.
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

pub fn to_toml(settings: &config::Settings) -> String {
    toml::to_string_pretty(settings).unwrap_or_else(|e| format!("# cannot render config: {e}"))
}
