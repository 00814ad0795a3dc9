use std::{env, path::Path, path::PathBuf};

use super::schema::Settings;

const APP_DIR: &str = "tangotandas";

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment
/// variables (prefix `TANGOTANDAS__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from the resolved config path and the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from an explicit (optional) file and the environment.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TANGOTANDAS")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.polling.interval_ms == 0 {
            return Err("polling.interval_ms must be >= 1".to_string());
        }
        if self.player.application.contains('"') {
            return Err("player.application must not contain quotes".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `TANGOTANDAS_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TANGOTANDAS_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_dir().map(|d| d.join("config.toml"))
}

/// Compute the default config directory: `$XDG_CONFIG_HOME/tangotandas`
/// or `~/.config/tangotandas` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_dir() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join(APP_DIR))
}
