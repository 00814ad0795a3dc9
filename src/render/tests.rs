use super::*;
use crate::playlist::Song;

fn board() -> Board {
    Board {
        current: vec![
            Song::new("Poema", "Francisco Canaro", "Tango"),
            Song::new("Invierno", "Francisco Canaro", "Tango"),
            Song::new("z_Tequila", "The Champs", "Cortina"),
        ],
        next: vec![
            Song::new("Corazon de oro", "Francisco Canaro", "Vals"),
            Song::new("z_Blue", "Eiffel 65", "Cortina"),
        ],
        now_playing: Song::new("Invierno", "Francisco Canaro", "Tango"),
        dj: "Valentin".to_string(),
        elapsed: Elapsed {
            hours: 1,
            minutes: 3,
            seconds: 45,
        },
    }
}

#[test]
fn tone_table_is_fixed_per_genre() {
    assert_eq!(Tone::for_genre("Tango"), Tone::Tango);
    assert_eq!(Tone::for_genre("vals"), Tone::Vals);
    assert_eq!(Tone::for_genre("Milonga"), Tone::Milonga);
    assert_eq!(Tone::for_genre("Tango Foxtrot"), Tone::Milonga);
    assert_eq!(Tone::for_genre("Cortina"), Tone::Break);
    assert_eq!(Tone::for_genre("Cumbia"), Tone::Break);

    assert_eq!(Tone::Tango.ansi(), "0;31m");
    assert_eq!(Tone::Vals.ansi(), "0;32m");
    assert_eq!(Tone::Milonga.ansi(), "0;35m");
    assert_eq!(Tone::Break.ansi(), "1;36m");
    assert_eq!(Tone::Plain.ansi(), "0;30m");
    assert_eq!(Tone::Break.html(), "cyan");
    assert_eq!(Tone::Tango.marker(), "\u{266B} ");
    assert_eq!(Tone::Break.marker(), "\u{2615} ");
}

#[test]
fn only_the_now_playing_song_is_highlighted() {
    let b = board();
    let (tone, pad) = song_tone(&b.current[1], Some(&b.now_playing));
    assert_eq!(tone, Tone::Tango);
    assert_eq!(pad, "\u{266B} ");

    let (tone, pad) = song_tone(&b.current[0], Some(&b.now_playing));
    assert_eq!(tone, Tone::Plain);
    assert_eq!(pad, "  ");

    let (tone, _) = song_tone(&b.current[1], None);
    assert_eq!(tone, Tone::Plain);
}

#[test]
fn cortina_lines_are_labelled_and_lose_sort_prefix() {
    let b = board();
    assert_eq!(song_line(&b.current[0], "  "), "  Francisco Canaro, Poema");
    assert_eq!(song_line(&b.current[2], "  "), "  Cortina: The Champs, Tequila");
}

#[test]
fn block_title_uses_first_genre_in_title_case() {
    let tanda = vec![Song::new("Pavadita", "D'Arienzo", "TANGO FOXTROT")];
    assert_eq!(
        block_title(CURRENT_TITLE, &tanda).unwrap(),
        "CURRENT TANDA: Tango Foxtrot"
    );
    assert!(block_title(NEXT_TITLE, &[]).is_none());
}

#[test]
fn text_frame_has_both_blocks_and_reminder_without_markup() {
    let out = frame(OutputMode::Text, "body {}", Some(&board()));

    assert!(out.contains("CURRENT TANDA: Tango\n"));
    assert!(out.contains("\n\nNEXT TANDA: Vals\n"));
    assert!(out.contains("\x1b[1m\x1b[0;31m\u{266B} Francisco Canaro, Invierno\x1b[0m"));
    assert!(out.contains("\x1b[1m\x1b[0;30m  Francisco Canaro, Poema\x1b[0m"));
    assert!(out.contains("\x1b[1m\x1b[1;35m\nDJ Valentin: 1 hours, 3 minutes and 45 seconds\x1b[0m"));
    assert!(!out.contains('<'));
    assert!(!out.contains("body {}"));
}

#[test]
fn text_frame_without_board_is_empty() {
    assert_eq!(frame(OutputMode::Text, "body {}", None), "");
}

#[test]
fn html_frame_wraps_blocks_in_document_without_ansi() {
    let out = frame(OutputMode::Html, "body { color: red; }", Some(&board()));

    assert!(out.starts_with(
        "<html><head>\n<style type=\"text/css\">body { color: red; }</style>\n\n</head><body>\n"
    ));
    assert!(out.ends_with("</body></html>"));
    assert_eq!(out.matches("<div id=\"tanda\" name=\"tanda\" class=\"tanda\">").count(), 2);
    assert!(out.contains("<h3>CURRENT TANDA: Tango</h3>"));
    assert!(out.contains("<h3>NEXT TANDA: Vals</h3>"));
    assert!(out.contains(
        "<span style=\"font-weight: bold;color:red\">\u{266B} Francisco Canaro, Invierno</span></br>"
    ));
    assert!(out.contains(
        "<span style=\"font-weight: bold;color:black\">  Cortina: Eiffel 65, Blue</span></br>"
    ));
    assert!(out.contains("<h5>DJ Valentin: 1 hours, 3 minutes and 45 seconds</h5>"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn html_frame_without_board_is_only_the_wrapper() {
    let out = frame(OutputMode::Html, "body {}", None);
    assert_eq!(
        out,
        "<html><head>\n<style type=\"text/css\">body {}</style>\n\n</head><body>\n</body></html>"
    );
}

#[test]
fn html_escapes_song_fields() {
    let mut b = board();
    b.next = vec![Song::new("<b>Loud</b>", "Tom & Jerry", "Tango")];
    let out = frame(OutputMode::Html, "", Some(&b));
    assert!(out.contains("Tom &amp; Jerry, &lt;b&gt;Loud&lt;/b&gt;"));
    assert!(!out.contains("<b>Loud"));
}

#[test]
fn html_drops_terminal_escapes_from_song_fields() {
    let mut b = board();
    b.next = vec![Song::new("Poema\x1b[31m", "Canaro\x07", "Tango")];
    b.dj = "Valentin\x1b[0m".to_string();
    let out = frame(OutputMode::Html, "", Some(&b));

    assert!(!out.contains('\x1b'));
    assert!(!out.contains('\x07'));
    assert!(out.contains(
        "<span style=\"font-weight: bold;color:black\">  Canaro, Poema[31m</span></br>"
    ));
    assert!(out.contains("<h5>DJ Valentin[0m: 1 hours, 3 minutes and 45 seconds</h5>"));
}

#[test]
fn html_escape_keeps_newlines_and_tabs() {
    assert_eq!(html::escape("a\tb\nc\rd\x1b"), "a\tb\ncd");
}
