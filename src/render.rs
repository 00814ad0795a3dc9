//! Frame rendering: the current and next tanda plus the time reminder, as
//! ANSI-colored terminal text or as an HTML document.

mod html;
mod palette;
mod text;

pub use palette::Tone;

use crate::config::OutputMode;
use crate::playlist::Song;
use crate::reminder::Elapsed;

pub const CURRENT_TITLE: &str = "CURRENT TANDA";
pub const NEXT_TITLE: &str = "NEXT TANDA";

/// Everything a fresh frame shows between the header and the footer.
#[derive(Debug, Clone)]
pub struct Board {
    pub current: Vec<Song>,
    pub next: Vec<Song>,
    pub now_playing: Song,
    pub dj: String,
    pub elapsed: Elapsed,
}

/// Render one polling cycle. Without a board only the document wrapper is
/// produced (nothing at all in text mode).
pub fn frame(mode: OutputMode, style: &str, board: Option<&Board>) -> String {
    match mode {
        OutputMode::Text => text::frame(board),
        OutputMode::Html => html::frame(style, board),
    }
}

/// Pick the tone and leading marker of a song line. Only the now-playing
/// song is highlighted.
pub fn song_tone(song: &Song, now_playing: Option<&Song>) -> (Tone, &'static str) {
    if now_playing != Some(song) {
        return (Tone::Plain, "  ");
    }
    let tone = Tone::for_genre(&song.genre);
    (tone, tone.marker())
}

/// `<pad>Cortina: <artist>, <track>` for cortinas, `<pad><artist>, <track>`
/// otherwise. Cortina tracks lose their `z_` sort prefix.
pub fn song_line(song: &Song, pad: &str) -> String {
    if song.is_cortina() {
        let track = song.track.strip_prefix("z_").unwrap_or(&song.track);
        format!("{pad}Cortina: {}, {track}", song.artist)
    } else {
        format!("{pad}{}, {}", song.artist, song.track)
    }
}

/// Block heading derived from the first song's genre, e.g.
/// `CURRENT TANDA: Tango Foxtrot`.
pub fn block_title(prefix: &str, tanda: &[Song]) -> Option<String> {
    tanda
        .first()
        .map(|song| format!("{prefix}: {}", title_case(&song.genre.to_lowercase())))
}

pub fn reminder_text(dj: &str, elapsed: &Elapsed) -> String {
    format!("DJ {dj}: {elapsed}")
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

#[cfg(test)]
mod tests;
