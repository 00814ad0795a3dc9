/// Highlight tones. Each one maps to a fixed ANSI color code, an HTML
/// color name and, for now-playing songs, a marker glyph.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Tango,
    Vals,
    Milonga,
    Break,
    Reminder,
}

pub const MUSIC_NOTE: &str = "\u{266B} ";
pub const MUSIC_BREAK: &str = "\u{2615} ";

impl Tone {
    /// Tone of a now-playing song, by lowercased genre.
    pub fn for_genre(genre: &str) -> Self {
        match genre.to_lowercase().as_str() {
            "tango" => Self::Tango,
            "vals" => Self::Vals,
            "milonga" | "tango foxtrot" => Self::Milonga,
            _ => Self::Break,
        }
    }

    /// SGR color suffix, written after `ESC[`.
    pub fn ansi(self) -> &'static str {
        match self {
            Self::Plain => "0;30m",
            Self::Tango => "0;31m",
            Self::Vals => "0;32m",
            Self::Milonga => "0;35m",
            Self::Break => "1;36m",
            Self::Reminder => "1;35m",
        }
    }

    pub fn html(self) -> &'static str {
        match self {
            Self::Plain => "black",
            Self::Tango => "red",
            Self::Vals => "green",
            Self::Milonga | Self::Reminder => "purple",
            Self::Break => "cyan",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Tango | Self::Vals | Self::Milonga => MUSIC_NOTE,
            Self::Break => MUSIC_BREAK,
            Self::Plain | Self::Reminder => "  ",
        }
    }
}
