use serde::{Deserialize, Serialize};

use crate::playlist::Song;

/// How a playlist entry is recognised as the now-playing track.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NowPlayingMatch {
    /// Track title only. Duplicate titles can lock onto the wrong entry.
    #[default]
    #[serde(alias = "track")]
    Title,
    /// Title, artist and genre must all be equal.
    #[serde(alias = "full", alias = "full_record", alias = "strict")]
    FullRecord,
}

impl NowPlayingMatch {
    pub fn matches(self, song: &Song, now_playing: &Song) -> bool {
        match self {
            Self::Title => song.track == now_playing.track,
            Self::FullRecord => song == now_playing,
        }
    }
}

/// Result of one segmentation scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// The tanda holding the now-playing track, terminated by its cortina
    /// when the playlist has one. `None` when the track was never matched.
    pub current: Option<Vec<Song>>,
    /// The buffer discarded at the last cortina before the current tanda.
    pub preceding: Vec<Song>,
}

/// Scan `songs` left to right, cutting at every cortina until the cortina
/// that closes the now-playing tanda.
///
/// Cortinas that close earlier tandas are dropped from both buffers.
pub fn segment(songs: &[Song], now_playing: &Song, mode: NowPlayingMatch) -> Segmentation {
    let mut buffer: Vec<Song> = Vec::new();
    let mut preceding: Vec<Song> = Vec::new();
    let mut reached = false;

    for song in songs {
        if mode.matches(song, now_playing) {
            reached = true;
        }
        if song.is_cortina() {
            if reached {
                buffer.push(song.clone());
                break;
            }
            preceding = std::mem::take(&mut buffer);
            continue;
        }
        buffer.push(song.clone());
    }

    Segmentation {
        current: reached.then_some(buffer),
        preceding,
    }
}
