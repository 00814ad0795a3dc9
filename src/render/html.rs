use crate::playlist::Song;

use super::{
    Board, CURRENT_TITLE, NEXT_TITLE, block_title, reminder_text, song_line, song_tone,
};

/// Escape text for HTML element content and attribute values. Control
/// characters other than newline and tab are dropped, so terminal escape
/// sequences from player metadata never reach the document.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' | '\t' => out.push(c),
            c if c.is_control() => {}
            _ => out.push(c),
        }
    }
    out
}

pub fn header(style: &str) -> String {
    format!("<html><head>\n<style type=\"text/css\">{style}</style>\n\n</head><body>\n")
}

pub fn footer() -> &'static str {
    "</body></html>"
}

pub fn tanda(tanda: &[Song], now_playing: Option<&Song>, prefix: &str) -> String {
    let mut out: Vec<String> = Vec::with_capacity(tanda.len() + 3);
    out.push("<div id=\"tanda\" name=\"tanda\" class=\"tanda\">\n".to_string());
    if let Some(title) = block_title(prefix, tanda) {
        out.push(format!("<h3>{}</h3>", escape(&title)));
    }
    for song in tanda {
        let (tone, pad) = song_tone(song, now_playing);
        out.push(format!(
            "<span style=\"font-weight: bold;color:{}\">{}</span></br>",
            tone.html(),
            escape(&song_line(song, pad))
        ));
    }
    out.push("\n</div>".to_string());
    out.join("\n")
}

pub fn frame(style: &str, board: Option<&Board>) -> String {
    let mut out = header(style);
    if let Some(board) = board {
        out.push_str(&tanda(&board.current, Some(&board.now_playing), CURRENT_TITLE));
        out.push_str(&tanda(&board.next, None, NEXT_TITLE));
        out.push_str(&format!(
            "\n<h5>{}</h5>\n",
            escape(&reminder_text(&board.dj, &board.elapsed))
        ));
    }
    out.push_str(footer());
    out
}
