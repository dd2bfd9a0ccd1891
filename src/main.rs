//! Terminal runner (default binary).
//!
//! Parses the command line, optionally installs file logging, then runs the
//! fixed-timestep frame loop: read keys, apply commands, advance gravity,
//! draw.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use quadris::core::GameState;
use quadris::input::{handle_key_event, should_quit};
use quadris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport, MAX_CELL_W};
use quadris::types::FRAME_MS;

#[derive(Debug, Parser)]
#[command(version, about = "Falling-block puzzle in the terminal")]
struct Cli {
    #[arg(long, help = "Randomizer seed (defaults to one derived from the clock)")]
    seed: Option<u32>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = DEBUG, -vv = TRACE)")]
    verbose: u8,

    #[arg(long, help = "Write logs to this file (logging is off without it)")]
    log_file: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_CELL_W)),
        help = "Terminal columns per board cell"
    )]
    cell_width: u16,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.verbose)?;
    }

    let seed = cli.seed.unwrap_or_else(clock_seed);
    let view = GameView::new(cli.cell_width);
    info!(seed, cell_width = view.cell_w(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, view);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Route `tracing` output to `path`; stdout belongs to the game screen.
fn init_logging(path: &Path, verbose: u8) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .with(level)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32, view: GameView) -> Result<()> {
    let mut game = GameState::new(seed);
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input until the next frame is due.
        let mut timeout = frame.saturating_sub(last_frame.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let changed = game.apply_action(action);
                        debug!(action = action.as_str(), changed, "command");
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            timeout = frame.saturating_sub(last_frame.elapsed());
        }

        // Advance gravity by the real time spent on this frame.
        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
    }
}
