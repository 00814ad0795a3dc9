use crate::playlist::Song;

use super::{
    Board, CURRENT_TITLE, NEXT_TITLE, Tone, block_title, reminder_text, song_line, song_tone,
};

const BOLD: &str = "\x1b[1m";
const PLAIN: &str = "\x1b[0m";

/// Bold, colored terminal span.
pub fn color(text: &str, tone: Tone) -> String {
    format!("{BOLD}\x1b[{}{text}{PLAIN}", tone.ansi())
}

pub fn tanda(tanda: &[Song], now_playing: Option<&Song>, prefix: &str) -> String {
    let mut out: Vec<String> = Vec::with_capacity(tanda.len() + 1);
    if let Some(title) = block_title(prefix, tanda) {
        out.push(format!("{title}\n"));
    }
    for song in tanda {
        let (tone, pad) = song_tone(song, now_playing);
        out.push(color(&song_line(song, pad), tone));
    }
    out.join("\n")
}

pub fn frame(board: Option<&Board>) -> String {
    let Some(board) = board else {
        return String::new();
    };

    let mut out = tanda(&board.current, Some(&board.now_playing), CURRENT_TITLE);
    out.push_str("\n\n");
    out.push_str(&tanda(&board.next, None, NEXT_TITLE));
    out.push('\n');
    out.push_str(&color(
        &format!("\n{}", reminder_text(&board.dj, &board.elapsed)),
        Tone::Reminder,
    ));
    out.push('\n');
    out
}
