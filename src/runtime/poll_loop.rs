use std::io::Write;
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::debug;

use crate::config::OutputMode;
use crate::error::Result;
use crate::player::PlayerQuery;
use crate::playlist::fetch_snapshot;
use crate::reminder::{Elapsed, unix_now};
use crate::render::{self, Board};
use crate::tanda::{ChangeDetector, Lookahead, NowPlayingMatch, next_tanda, segment};

/// Fixed inputs of every polling cycle.
#[derive(Debug, Clone)]
pub struct PollContext {
    pub dj: String,
    /// Process start, unix seconds.
    pub started_at: i64,
    pub time_offset: i64,
    pub output: OutputMode,
    pub style: String,
    pub now_playing_match: NowPlayingMatch,
    pub lookahead: Lookahead,
}

/// State carried from one cycle to the next.
#[derive(Debug, Default)]
pub struct PollState {
    pub detector: ChangeDetector,
}

impl PollState {
    pub fn new() -> Self {
        Self {
            detector: ChangeDetector::new(),
        }
    }
}

/// Output of one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// Whether the tanda blocks were rendered this time.
    pub fresh: bool,
    pub frame: String,
}

/// Fetch, segment, look ahead, check for change and render once.
pub fn poll_once(
    player: &mut dyn PlayerQuery,
    ctx: &PollContext,
    state: &mut PollState,
    now: i64,
) -> Result<Cycle> {
    let snapshot = fetch_snapshot(player)?;
    let segmentation = segment(&snapshot.songs, &snapshot.now_playing, ctx.now_playing_match);
    let fresh = state.detector.is_fresh(&segmentation);

    let board = match segmentation.current {
        Some(current) if fresh => {
            let next = current
                .last()
                .map(|terminal| next_tanda(&snapshot.songs, terminal, ctx.lookahead))
                .unwrap_or_default();
            Some(Board {
                current,
                next,
                now_playing: snapshot.now_playing,
                dj: ctx.dj.clone(),
                elapsed: Elapsed::between(ctx.started_at, ctx.time_offset, now),
            })
        }
        Some(_) => {
            debug!(
                previous = state.detector.previous().len(),
                "current tanda unchanged"
            );
            None
        }
        None => {
            debug!(now_playing = %snapshot.now_playing, "now playing track not in playlist");
            None
        }
    };

    Ok(Cycle {
        fresh: board.is_some(),
        frame: render::frame(ctx.output, &ctx.style, board.as_ref()),
    })
}

/// Poll forever, one blocking cycle per tick. Returns only on error.
pub fn run(
    player: &mut dyn PlayerQuery,
    ctx: &PollContext,
    state: &mut PollState,
    interval: Duration,
) -> Result<()> {
    let mut stdout = std::io::stdout();
    loop {
        let cycle = poll_once(player, ctx, state, unix_now())?;

        if cycle.fresh && ctx.output == OutputMode::Text {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        if !cycle.frame.is_empty() {
            writeln!(stdout, "{}", cycle.frame)?;
            stdout.flush()?;
        }

        thread::sleep(interval);
    }
}
