//! Terminal runner (default binary).
//!
//! Reads the engine configuration from the environment, then schedules
//! gravity ticks and forwards key presses to the game until the player quits.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tile_tetris::core::{EngineConfig, GameState};
use tile_tetris::input::{handle_key_event, should_quit};
use tile_tetris::term::{BoardView, TerminalRenderer, Viewport};

/// Session counters printed after the terminal is restored.
#[derive(Debug, Default)]
struct Summary {
    best_clear: u32,
    locks: u32,
}

impl Summary {
    fn record(&mut self, game: &mut GameState) {
        if let Some(event) = game.take_last_event() {
            self.locks += 1;
            self.best_clear = self.best_clear.max(event.lines_cleared);
        }
    }
}

fn main() -> Result<()> {
    let config = EngineConfig::from_env().context("invalid engine configuration")?;
    let seed = config.seed.unwrap_or_else(clock_seed);

    println!(
        "[Engine] board {}x{}, fall cycle {:.3}s, seed {}",
        config.board_width, config.board_height, config.fall_cycle_secs, seed
    );

    let mut game = GameState::with_seed(config, seed)?;
    game.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut summary = Summary::default();
    let result = run(&mut term, &mut game, &mut summary);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        eprintln!("[Engine] failed to restore terminal: {}", e);
    }

    println!(
        "[Engine] session over ({}): {} pieces spawned, {} locked, {} lines, best clear {}",
        game.phase().as_str(),
        game.pieces(),
        summary.locks,
        game.lines(),
        summary.best_clear
    );
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, summary: &mut Summary) -> Result<()> {
    let view = BoardView::default();
    let cycle = game.config().fall_cycle();
    let mut next_tick = Instant::now() + cycle;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(view.render(game, Viewport::new(w, h)))?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    // Ignored by the game once it is over.
                    if let Some(intent) = handle_key_event(key) {
                        game.handle_intent(intent);
                        summary.record(game);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_tick {
            game.on_fall_tick();
            summary.record(game);
            next_tick += cycle;
            // Don't replay ticks missed while suspended.
            if next_tick < now {
                next_tick = now + cycle;
            }
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
