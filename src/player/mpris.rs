//! MPRIS backend: reads the playlist of any D-Bus media player that
//! implements the optional `TrackList` interface.

use std::collections::HashMap;

use async_io::block_on;
use zbus::proxy::CacheProperties;
use zbus::{Connection, proxy};
use zvariant::{OwnedObjectPath, OwnedValue, Value};

use crate::error::Result;
use crate::playlist::{PlaylistColumns, Song};

use super::PlayerQuery;

pub const TITLE_KEY: &str = "xesam:title";
pub const ARTIST_KEY: &str = "xesam:artist";
pub const GENRE_KEY: &str = "xesam:genre";

#[proxy(
    interface = "org.mpris.MediaPlayer2.TrackList",
    default_path = "/org/mpris/MediaPlayer2"
)]
trait TrackList {
    fn get_tracks_metadata(
        &self,
        track_ids: &[OwnedObjectPath],
    ) -> zbus::Result<Vec<HashMap<String, OwnedValue>>>;

    #[zbus(property)]
    fn tracks(&self) -> zbus::Result<Vec<OwnedObjectPath>>;
}

#[proxy(
    interface = "org.mpris.MediaPlayer2.Player",
    default_path = "/org/mpris/MediaPlayer2"
)]
trait MediaPlayer {
    #[zbus(property)]
    fn metadata(&self) -> zbus::Result<HashMap<String, OwnedValue>>;
}

pub struct Mpris {
    connection: Connection,
    bus_name: String,
}

impl Mpris {
    /// Connect to the session bus. The player itself is only contacted on
    /// the first query.
    pub fn connect(bus_name: &str) -> Result<Self> {
        let connection = block_on(Connection::session())?;
        Ok(Self {
            connection,
            bus_name: bus_name.to_string(),
        })
    }

    async fn fetch_columns(&self) -> Result<PlaylistColumns> {
        let proxy = TrackListProxy::builder(&self.connection)
            .destination(self.bus_name.as_str())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        let ids = proxy.tracks().await?;
        if ids.is_empty() {
            return Ok(PlaylistColumns::default());
        }
        let metadata = proxy.get_tracks_metadata(&ids).await?;
        Ok(columns_from_metadata(&metadata))
    }

    async fn fetch_now_playing(&self) -> Result<Song> {
        let proxy = MediaPlayerProxy::builder(&self.connection)
            .destination(self.bus_name.as_str())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(song_from_metadata(&proxy.metadata().await?))
    }
}

impl PlayerQuery for Mpris {
    fn playlist_columns(&mut self) -> Result<PlaylistColumns> {
        block_on(self.fetch_columns())
    }

    fn now_playing(&mut self) -> Result<Song> {
        block_on(self.fetch_now_playing())
    }
}

/// Read a metadata entry as text. List values (`xesam:artist`,
/// `xesam:genre`) are joined with `", "`; missing or non-text entries are
/// empty.
pub fn text_field(metadata: &HashMap<String, OwnedValue>, key: &str) -> String {
    match metadata.get(key).map(|v| &**v) {
        Some(Value::Str(s)) => s.as_str().to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Str(s) => Some(s.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

pub fn song_from_metadata(metadata: &HashMap<String, OwnedValue>) -> Song {
    Song::new(
        text_field(metadata, TITLE_KEY),
        text_field(metadata, ARTIST_KEY),
        text_field(metadata, GENRE_KEY),
    )
}

pub fn columns_from_metadata(tracks: &[HashMap<String, OwnedValue>]) -> PlaylistColumns {
    let mut columns = PlaylistColumns::default();
    for metadata in tracks {
        columns.titles.push(text_field(metadata, TITLE_KEY));
        columns.artists.push(text_field(metadata, ARTIST_KEY));
        columns.genres.push(text_field(metadata, GENRE_KEY));
    }
    columns
}
