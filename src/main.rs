//! Terminal Snake runner (default binary).
//!
//! The event loop serializes the two re-entry sources of the engine: a step
//! deadline derived from the current interval, and keyboard input. Steering
//! and pause-resume perform their immediate step inside the engine; the loop
//! only resets its cadence afterwards.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameSnapshot, GameState, GridConfig};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, Phase, IDLE_POLL_MS, MIN_GRID_CELLS};

fn main() -> Result<()> {
    let grid = parse_args()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, grid, clock_seed());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, grid: GridConfig, seed: u32) -> Result<()> {
    let mut game = GameState::new(grid, seed);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_step = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until the next step deadline.
        let timeout = if game.phase() == Phase::Running {
            step_duration(&game)
                .checked_sub(last_step.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0))
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        match action {
                            GameAction::Turn(direction) => {
                                // An accepted turn has already stepped;
                                // restart the cadence from now.
                                if game.steer(direction) {
                                    last_step = Instant::now();
                                }
                            }
                            GameAction::TogglePause => {
                                if game.toggle_pause() && game.phase() == Phase::Running {
                                    last_step = Instant::now();
                                }
                            }
                            GameAction::Start => {
                                if game.start() {
                                    last_step = Instant::now();
                                }
                            }
                            GameAction::NewGame => game.new_game(),
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Step on the deadline.
        if game.phase() == Phase::Running && last_step.elapsed() >= step_duration(&game) {
            game.step();
            last_step = Instant::now();
        }
    }
}

fn step_duration(game: &GameState) -> Duration {
    Duration::from_millis(u64::from(game.step_interval_ms()))
}

/// Grid dimensions from the command line: `tui-snake [WIDTH] [HEIGHT]`.
fn parse_args() -> Result<GridConfig> {
    let mut args = std::env::args().skip(1);
    let grid = GridConfig::default();

    let horizontal = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid horizontal cell count: {raw:?}"))?,
        None => grid.horizontal_cells,
    };
    let vertical = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid vertical cell count: {raw:?}"))?,
        None => grid.vertical_cells,
    };

    let grid = GridConfig::new(horizontal, vertical);
    ensure!(
        grid.is_playable(),
        "grid must be at least {MIN_GRID_CELLS}x{MIN_GRID_CELLS} cells, got {horizontal}x{vertical}"
    );
    Ok(grid)
}

fn clock_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ (elapsed.as_secs() as u32),
        Err(_) => 1,
    }
}
