/// Genre tag reserved for the intermission track between two tandas.
pub const CORTINA_GENRE: &str = "Cortina";

/// One playlist entry. Equality is structural over all three fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    pub track: String,
    pub artist: String,
    pub genre: String,
}

impl Song {
    pub fn new(
        track: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            track: track.into(),
            artist: artist.into(),
            genre: genre.into(),
        }
    }

    /// Case-sensitive check against the reserved separator genre.
    pub fn is_cortina(&self) -> bool {
        self.genre == CORTINA_GENRE
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Artist: {}, Genre: {}",
            self.track, self.artist, self.genre
        )
    }
}

/// The three index-aligned playlist columns as reported by a player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistColumns {
    pub titles: Vec<String>,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
}

/// One point-in-time view of the playlist and the now-playing track.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub songs: Vec<Song>,
    pub now_playing: Song,
}
