use std::time::Duration;

use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::error::Result;
use crate::player;
use crate::reminder::unix_now;

mod poll_loop;
mod settings;
mod startup;

use poll_loop::{PollContext, PollState};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = settings::load_settings(cli.config.as_deref());
    cli.apply(&mut settings);

    if cli.print_config {
        println!("{}", settings::to_toml(&settings));
        return Ok(());
    }

    let started_at = unix_now();
    let dj = startup::resolve_dj(&settings.display.dj)?;
    let style = startup::load_style(&settings.display);

    let ctx = PollContext {
        dj,
        started_at,
        time_offset: settings.display.time_offset,
        output: settings.display.output,
        style,
        now_playing_match: settings.tanda.now_playing_match,
        lookahead: settings.tanda.lookahead,
    };
    info!(
        dj = %ctx.dj,
        output = ?ctx.output,
        interval_ms = settings.polling.interval_ms,
        "starting tanda board"
    );

    let mut player = player::connect(&settings.player)?;
    let mut state = PollState::new();

    poll_loop::run(
        player.as_mut(),
        &ctx,
        &mut state,
        Duration::from_millis(settings.polling.interval_ms),
    )
}
