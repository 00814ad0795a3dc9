//! Command-line flags. Every flag overrides the matching config value.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{OutputMode, PlayerBackend, Settings};
use crate::tanda::NowPlayingMatch;

#[derive(Debug, Parser)]
#[command(name = "tangotandas", version)]
#[command(about = "Show the current and next tanda of the player's playlist")]
pub struct Cli {
    /// DJ name (defaults to the OS account name)
    #[arg(long)]
    pub dj: Option<String>,

    /// Time offset in seconds, added to the elapsed time
    #[arg(
        long = "time-offset",
        visible_alias = "tOffset",
        allow_negative_numbers = true
    )]
    pub time_offset: Option<i64>,

    /// Output type: text or html
    #[arg(long)]
    pub output: Option<String>,

    /// Refresh interval in milliseconds
    #[arg(long = "interval-ms")]
    pub interval_ms: Option<u64>,

    /// Player query backend
    #[arg(long, value_enum)]
    pub backend: Option<PlayerBackend>,

    /// Match the now-playing track on title, artist and genre
    #[arg(long)]
    pub full_match: bool,

    /// Config file to read instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(dj) = &self.dj {
            settings.display.dj = dj.clone();
        }
        if let Some(offset) = self.time_offset {
            settings.display.time_offset = offset;
        }
        if let Some(output) = &self.output {
            settings.display.output = OutputMode::from(output.as_str());
        }
        if let Some(ms) = self.interval_ms {
            settings.polling.interval_ms = ms;
        }
        if let Some(backend) = self.backend {
            settings.player.backend = backend;
        }
        if self.full_match {
            settings.tanda.now_playing_match = NowPlayingMatch::FullRecord;
        }
    }
}
