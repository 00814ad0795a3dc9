use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::tanda::{Lookahead, NowPlayingMatch};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tangotandas/config.toml` or
/// `~/.config/tangotandas/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `TANGOTANDAS__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub display: DisplaySettings,
    pub polling: PollingSettings,
    pub tanda: TandaSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Which transport to query the player with.
    pub backend: PlayerBackend,
    /// AppleScript application name for the `osascript` backend.
    pub application: String,
    /// D-Bus well-known name for the `mpris` backend.
    pub bus_name: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            backend: PlayerBackend::Osascript,
            application: "iTunes".to_string(),
            bus_name: "org.mpris.MediaPlayer2.rhythmbox".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerBackend {
    #[default]
    #[serde(alias = "applescript", alias = "itunes")]
    Osascript,
    #[serde(alias = "dbus")]
    Mpris,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// DJ name shown in the time reminder. Empty means the OS account name.
    pub dj: String,
    /// Seconds subtracted from the start time, to count time already played.
    pub time_offset: i64,
    pub output: OutputMode,
    /// Style sheet for HTML output. Defaults to `styles.css` next to the
    /// config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_path: Option<PathBuf>,
}

/// Output format of each frame.
///
/// Anything other than `html` is treated as `text`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OutputMode {
    #[default]
    Text,
    Html,
}

impl From<&str> for OutputMode {
    fn from(value: &str) -> Self {
        if value == "html" { Self::Html } else { Self::Text }
    }
}

impl From<String> for OutputMode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<OutputMode> for String {
    fn from(mode: OutputMode) -> Self {
        match mode {
            OutputMode::Text => "text".to_string(),
            OutputMode::Html => "html".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingSettings {
    /// Pause between two polling cycles (milliseconds).
    pub interval_ms: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TandaSettings {
    /// How the now-playing track is located in the playlist.
    pub now_playing_match: NowPlayingMatch,
    /// Which occurrences of the current tanda's last song start the
    /// next-tanda scan.
    pub lookahead: Lookahead,
}
