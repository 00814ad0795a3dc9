use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::player::PlayerQuery;

use super::model::{PlaylistColumns, Snapshot, Song};

/// Strip embedded newlines and surrounding whitespace from a player field.
pub fn clean_field(raw: &str) -> String {
    raw.replace(&['\n', '\r'][..], "").trim().to_string()
}

/// Zip the three columns into songs, refusing to guess when they disagree.
pub fn zip_columns(columns: PlaylistColumns) -> Result<Vec<Song>> {
    let PlaylistColumns {
        titles,
        artists,
        genres,
    } = columns;

    if titles.len() != artists.len() || titles.len() != genres.len() {
        for (idx, title) in titles.iter().enumerate() {
            error!(idx, title = %title, "playlist entry");
        }
        return Err(Error::SnapshotMismatch {
            tracks: titles.len(),
            artists: artists.len(),
            genres: genres.len(),
        });
    }

    Ok(titles
        .iter()
        .zip(&artists)
        .zip(&genres)
        .map(|((track, artist), genre)| {
            Song::new(clean_field(track), clean_field(artist), clean_field(genre))
        })
        .collect())
}

/// Fetch one full snapshot from the player.
///
/// Performs the player's (possibly slow) blocking queries; there is no
/// timeout.
pub fn fetch_snapshot(player: &mut dyn PlayerQuery) -> Result<Snapshot> {
    let columns = player.playlist_columns()?;
    let now_playing = player.now_playing()?;
    let now_playing = Song::new(
        clean_field(&now_playing.track),
        clean_field(&now_playing.artist),
        clean_field(&now_playing.genre),
    );

    let songs = zip_columns(columns)?;
    debug!(songs = songs.len(), now_playing = %now_playing, "fetched snapshot");

    Ok(Snapshot { songs, now_playing })
}
