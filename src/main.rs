//! Terminal runner for the QuickPlay games (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `quickplay-term`.
//! Logging goes to stderr and is off unless `RUST_LOG` is set; redirect stderr
//! to a file to read it while the alternate screen is active.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use quickplay::app::{parse_seed, SEED_ENV};
use quickplay::term::{FrameBuffer, TerminalRenderer, Viewport};
use quickplay::types::TICK_MS;
use quickplay::App;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let seed = seed();
    log::info!("starting quickplay with seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log::warn!("failed to restore terminal: {}", e);
    }
    result
}

fn seed() -> u32 {
    let from_env = std::env::var(SEED_ENV).ok();
    parse_seed(from_env.as_deref()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1)
    })
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut app = App::new(seed);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        app.render_into(viewport, &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse, viewport);
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        // Tick with the measured frame time so slow frames do not slow the games.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
