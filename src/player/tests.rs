use std::collections::HashMap;

use zvariant::{OwnedValue, Value};

use super::mpris::{columns_from_metadata, song_from_metadata, text_field};
use super::osascript::{
    now_playing_from_reply, parse_comma_list, parse_marked_list, parse_now_playing,
};
use crate::error::Error;
use crate::playlist::Song;

fn owned(v: Value<'_>) -> OwnedValue {
    OwnedValue::try_from(v).unwrap()
}

fn metadata(title: &str, artists: &[&str], genres: &[&str]) -> HashMap<String, OwnedValue> {
    let mut map = HashMap::new();
    map.insert("xesam:title".to_string(), owned(Value::from(title)));
    map.insert(
        "xesam:artist".to_string(),
        owned(Value::from(
            artists.iter().map(|a| a.to_string()).collect::<Vec<_>>(),
        )),
    );
    map.insert(
        "xesam:genre".to_string(),
        owned(Value::from(
            genres.iter().map(|g| g.to_string()).collect::<Vec<_>>(),
        )),
    );
    map
}

#[test]
fn marked_list_keeps_commas_inside_titles() {
    let raw = "SEPARATOR, Poema, SEPARATOR, Pavadita, milonga, SEPARATOR, z_Cortina\n";
    assert_eq!(
        parse_marked_list(raw),
        vec!["Poema", "Pavadita, milonga", "z_Cortina"]
    );
}

#[test]
fn marked_list_of_empty_playlist_is_empty() {
    assert!(parse_marked_list("\n").is_empty());
    assert!(parse_marked_list("").is_empty());
}

#[test]
fn comma_list_splits_and_drops_trailing_newline() {
    assert_eq!(
        parse_comma_list("Canaro, Di Sarli, Cortina\n"),
        vec!["Canaro", "Di Sarli", "Cortina"]
    );
    assert!(parse_comma_list("\n").is_empty());
}

#[test]
fn now_playing_reply_is_artist_name_genre() {
    let song = parse_now_playing("Francisco Canaro\tPoema\tTango\n").unwrap();
    assert_eq!(song, Song::new("Poema", "Francisco Canaro", "Tango"));
}

#[test]
fn now_playing_reply_without_tabs_is_rejected() {
    assert!(parse_now_playing("nothing playing\n").is_none());
    assert!(parse_now_playing("artist\tname").is_none());
}

#[test]
fn unparsable_now_playing_reply_keeps_its_output() {
    let err = now_playing_from_reply("nothing playing\n".to_string()).unwrap_err();
    match err {
        Error::Query { query, output, .. } => {
            assert_eq!(query, "current track");
            assert_eq!(output, "nothing playing\n");
        }
        other => panic!("unexpected error: {other}"),
    }

    let song = now_playing_from_reply("Di Sarli\tBahia Blanca\tTango\n".to_string()).unwrap();
    assert_eq!(song, Song::new("Bahia Blanca", "Di Sarli", "Tango"));
}

#[test]
fn text_field_joins_lists_and_defaults_to_empty() {
    let map = metadata("Poema", &["Canaro", "Maida"], &["Tango"]);
    assert_eq!(text_field(&map, "xesam:title"), "Poema");
    assert_eq!(text_field(&map, "xesam:artist"), "Canaro, Maida");
    assert_eq!(text_field(&map, "xesam:genre"), "Tango");
    assert_eq!(text_field(&map, "xesam:album"), "");
}

#[test]
fn metadata_maps_to_songs_and_columns() {
    let tracks = vec![
        metadata("Poema", &["Canaro"], &["Tango"]),
        metadata("z_Break", &["Someone"], &["Cortina"]),
    ];

    let columns = columns_from_metadata(&tracks);
    assert_eq!(columns.titles, vec!["Poema", "z_Break"]);
    assert_eq!(columns.artists, vec!["Canaro", "Someone"]);
    assert_eq!(columns.genres, vec!["Tango", "Cortina"]);

    let song = song_from_metadata(&tracks[1]);
    assert!(song.is_cortina());
}
