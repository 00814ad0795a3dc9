//! Player query backends.
//!
//! A backend answers two questions about the player's current playlist:
//! the index-aligned title/artist/genre columns, and the song playing now.
//! Every call blocks until the player answers.

mod mpris;
mod osascript;

pub use mpris::Mpris;
pub use osascript::Osascript;

use tracing::info;

use crate::config::{PlayerBackend, PlayerSettings};
use crate::error::Result;
use crate::playlist::{PlaylistColumns, Song};

pub trait PlayerQuery {
    /// Titles, artists and genres of the current playlist, in playback order.
    fn playlist_columns(&mut self) -> Result<PlaylistColumns>;

    /// The track the player is playing right now.
    fn now_playing(&mut self) -> Result<Song>;
}

/// Build the backend selected in `settings`.
pub fn connect(settings: &PlayerSettings) -> Result<Box<dyn PlayerQuery>> {
    match settings.backend {
        PlayerBackend::Osascript => {
            info!(application = %settings.application, "querying player via osascript");
            Ok(Box::new(Osascript::new(&settings.application)))
        }
        PlayerBackend::Mpris => {
            info!(bus_name = %settings.bus_name, "querying player via MPRIS");
            Ok(Box::new(Mpris::connect(&settings.bus_name)?))
        }
    }
}

#[cfg(test)]
mod tests;
