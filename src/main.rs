//! Terminal Blockfall runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `blockfall-term`. The game session itself never sees a clock: this loop
//! hands it millisecond timestamps measured from process start.

use std::env;
use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};

use blockfall::core::{GameConfig, Session, UniformSource};
use blockfall::input::{should_quit, InputState};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Timestamp, TICK_MS};

const LOG_FILE: &str = "blockfall.log";
const LOG_ENV: &str = "BLOCKFALL_LOG";
const CONFIG_ENV: &str = "BLOCKFALL_CONFIG";

fn main() -> Result<()> {
    init_logging()?;
    let config = load_config()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file; the terminal belongs to the game.
fn init_logging() -> Result<()> {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::INFO);
    let file = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_config() -> Result<GameConfig> {
    match env::var(CONFIG_ENV) {
        Ok(path) => {
            let config =
                GameConfig::load(&path).with_context(|| format!("loading config from {path}"))?;
            info!(%path, "loaded config");
            Ok(config)
        }
        Err(_) => Ok(GameConfig::default()),
    }
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as Timestamp;

    let source = UniformSource::from_entropy();
    info!(seed = source.seed(), "starting session");
    let mut session = Session::new(config, source, now_ms());

    let view = GameView::default();
    let mut input = InputState::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();
    let mut last_size = (0, 0);

    loop {
        // Drain input until the next tick is due.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            info!(score = session.score(), "quit");
                            return Ok(());
                        }
                        input.handle_key_press(key.code, now_ms());
                    }
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
        if last_tick.elapsed() < tick_duration {
            continue;
        }

        last_tick = Instant::now();
        let now = now_ms();
        let outcome = session.advance(now, input.intents(now));
        if outcome.became_game_over {
            warn!(score = session.score(), lines = session.lines_cleared(), "game over");
        }

        let size = crossterm::terminal::size().unwrap_or((80, 24));
        if size != last_size {
            term.invalidate();
            last_size = size;
        }
        view.render_into(&session.snapshot(), Viewport::new(size.0, size.1), &mut fb);
        term.draw(&fb)?;
    }
}
