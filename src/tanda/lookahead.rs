use serde::{Deserialize, Serialize};

use crate::playlist::Song;

/// Where the next-tanda scan starts when the current tanda's last song
/// occurs more than once in the playlist.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lookahead {
    /// Scan after every occurrence and concatenate the results.
    #[default]
    #[serde(alias = "every_match", alias = "all")]
    EveryMatch,
    /// Scan after the first occurrence only.
    #[serde(alias = "first_match", alias = "first")]
    FirstMatch,
}

/// Collect the songs that follow `terminal`, up to and including the next
/// cortina. Without a further cortina the scan runs to the end.
pub fn next_tanda(songs: &[Song], terminal: &Song, mode: Lookahead) -> Vec<Song> {
    let mut next = Vec::new();

    for (idx, song) in songs.iter().enumerate() {
        if song != terminal {
            continue;
        }
        for following in &songs[idx + 1..] {
            next.push(following.clone());
            if following.is_cortina() {
                break;
            }
        }
        if mode == Lookahead::FirstMatch {
            break;
        }
    }

    next
}
