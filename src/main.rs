//! Terminal piece viewer (default binary).
//!
//! Spawns a random tetromino in an empty well and lets you move, rotate, drop
//! and respawn it. The ghost shows where a drop would land.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetromino::core::{ShapeSource, SimpleRng, ThreadShapes};
use tetromino::input::{handle_key_event, should_quit};
use tetromino::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};
use tetromino::types::{BOARD_HEIGHT, BOARD_WIDTH};
use tetromino::well::Well;

const MIN_SIDE: u16 = 4;
const MAX_SIDE: u16 = 64;

#[derive(Parser, Debug)]
#[command(name = "tetromino-viewer")]
struct Args {
    /// Well width in columns.
    #[arg(long, default_value_t = BOARD_WIDTH as u16)]
    width: u16,

    /// Well height in rows.
    #[arg(long, default_value_t = BOARD_HEIGHT as u16)]
    height: u16,

    /// Seed for reproducible shapes. If omitted, shapes come from the thread RNG.
    #[arg(long)]
    seed: Option<u32>,

    /// Write debug logs to this file (level from RUST_LOG, default debug).
    #[arg(long, value_name = "path")]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    validate(&args)?;
    if let Some(path) = &args.log {
        init_logging(path)?;
    }
    info!(width = args.width, height = args.height, seed = ?args.seed, "starting viewer");

    match args.seed {
        Some(seed) => session(Well::new(args.width, args.height, SimpleRng::new(seed))),
        None => session(Well::new(args.width, args.height, ThreadShapes)),
    }
}

fn validate(args: &Args) -> Result<()> {
    for (name, value) in [("width", args.width), ("height", args.height)] {
        if !(MIN_SIDE..=MAX_SIDE).contains(&value) {
            bail!("--{name} must be between {MIN_SIDE} and {MAX_SIDE}, got {value}");
        }
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn session<S: ShapeSource>(mut well: Well<S>) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut well);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<S: ShapeSource>(term: &mut TerminalRenderer, well: &mut Well<S>) -> Result<()> {
    let view = SceneView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&well.scene(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Redraw on resize; everything else waits for a key press.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    well.apply(action);
                }
            }
            _ => {}
        }
    }
}
