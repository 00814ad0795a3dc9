//! AppleScript backend for iTunes / Music on macOS.
//!
//! Each query shells out to `osascript`. Artists and genres come back as a
//! single `, `-joined line, so values containing `, ` break the column
//! alignment; the snapshot check catches that. Titles go through a marker
//! list so they may contain commas.

use std::process::Command;

use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::playlist::{PlaylistColumns, Song};

use super::PlayerQuery;

const OSASCRIPT: &str = "osascript";
const NOW_PLAYING_QUERY: &str = "current track";

/// Marker interleaved with track titles by the title script.
pub const TITLE_MARKER: &str = "SEPARATOR";

pub struct Osascript {
    application: String,
}

impl Osascript {
    pub fn new(application: &str) -> Self {
        Self {
            application: application.to_string(),
        }
    }

    fn titles_script(&self) -> Vec<String> {
        vec![
            format!("tell application \"{}\"", self.application),
            "set trackNames to {}".to_string(),
            "repeat with aName in name of tracks of current playlist".to_string(),
            format!("set trackNames to trackNames & \"{TITLE_MARKER}\" & aName"),
            "end repeat".to_string(),
            "end tell".to_string(),
        ]
    }

    fn column_script(&self, property: &str) -> Vec<String> {
        vec![format!(
            "tell application \"{}\" to get {property} of every track in current playlist",
            self.application
        )]
    }

    fn now_playing_script(&self) -> Vec<String> {
        vec![
            format!("tell application \"{}\"", self.application),
            "tell current track to artist & tab & name & tab & genre".to_string(),
            "end tell".to_string(),
        ]
    }

    /// Run a script, one `-e` per line, and return its stdout.
    fn exe(&self, query: &str, lines: &[String]) -> Result<String> {
        let mut cmd = Command::new(OSASCRIPT);
        for line in lines {
            cmd.arg("-e").arg(line);
        }

        let out = cmd.output().map_err(|e| Error::Query {
            query: query.to_string(),
            reason: format!("cannot run {OSASCRIPT}: {e}"),
            output: String::new(),
        })?;

        let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
        if !out.status.success() {
            let output = format!("{stdout}{}", String::from_utf8_lossy(&out.stderr));
            error!(query, output = %output, "osascript failed");
            return Err(Error::Query {
                query: query.to_string(),
                reason: out.status.to_string(),
                output,
            });
        }

        debug!(query, bytes = stdout.len(), "osascript replied");
        Ok(stdout)
    }
}

impl PlayerQuery for Osascript {
    fn playlist_columns(&mut self) -> Result<PlaylistColumns> {
        let titles = parse_marked_list(&self.exe("titles", &self.titles_script())?);
        let artists = parse_comma_list(&self.exe("artists", &self.column_script("artist"))?);
        let genres = parse_comma_list(&self.exe("genres", &self.column_script("genre"))?);
        Ok(PlaylistColumns {
            titles,
            artists,
            genres,
        })
    }

    fn now_playing(&mut self) -> Result<Song> {
        let raw = self.exe(NOW_PLAYING_QUERY, &self.now_playing_script())?;
        now_playing_from_reply(raw)
    }
}

/// Parse the now-playing reply. An unparsable reply is logged with its
/// full output and returned as a query error.
pub fn now_playing_from_reply(raw: String) -> Result<Song> {
    if let Some(song) = parse_now_playing(&raw) {
        return Ok(song);
    }
    error!(query = NOW_PLAYING_QUERY, output = %raw, "unparsable osascript reply");
    Err(Error::Query {
        query: NOW_PLAYING_QUERY.to_string(),
        reason: "expected artist, name and genre separated by tabs".to_string(),
        output: raw,
    })
}

fn strip_line_end(raw: &str) -> &str {
    raw.trim_end_matches(|c| c == '\n' || c == '\r')
}

/// Parse `SEPARATOR, a, SEPARATOR, b, c` into `["a", "b, c"]`.
pub fn parse_marked_list(raw: &str) -> Vec<String> {
    strip_line_end(raw)
        .split(TITLE_MARKER)
        .skip(1)
        .map(|chunk| {
            let chunk = chunk.strip_prefix(", ").unwrap_or(chunk);
            let chunk = chunk.strip_suffix(", ").unwrap_or(chunk);
            chunk.trim().to_string()
        })
        .collect()
}

/// Parse an AppleScript list printed as `a, b, c`. An empty reply is an
/// empty list.
pub fn parse_comma_list(raw: &str) -> Vec<String> {
    let raw = strip_line_end(raw);
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(", ").map(str::to_string).collect()
}

/// Parse `artist<TAB>name<TAB>genre`.
pub fn parse_now_playing(raw: &str) -> Option<Song> {
    let mut parts = strip_line_end(raw).splitn(3, '\t');
    let artist = parts.next()?;
    let track = parts.next()?;
    let genre = parts.next()?;
    Some(Song::new(track, artist, genre))
}
