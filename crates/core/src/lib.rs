//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: grid dimensions and bounds checking
//! - [`game_state`]: the snake body, bait, scoring, and the session state
//!   machine (`Idle` / `Running` / `Paused` / `GameOver`)
//! - [`rng`]: seeded LCG for spawn and bait coordinates
//! - [`snapshot`]: read-only view consumed by the UI
//!
//! # Game Rules
//!
//! - The snake advances one cell per step along its heading; steering is
//!   only accepted onto the other axis (no reversals) and takes effect with
//!   an immediate step.
//! - Bait consumption grows the snake by one, shortens the step interval by
//!   a fixed decrement (floored), and rescores as
//!   `round(score + length/2 + speed/2)`.
//! - Leaving the grid or touching the body ends the session.
//! - Bait placement rejection-samples away from the body and the head's
//!   immediate row/column, with a deterministic scan fallback for crowded
//!   grids.
//!
//! # Timing
//!
//! The core is clock-free. The embedding event loop arms a timer from
//! [`GameState::step_interval_ms`](game_state::GameState::step_interval_ms)
//! and calls [`GameState::step`](game_state::GameState::step) when it fires.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, GridConfig};
//! use tui_snake_types::{Direction, Phase};
//!
//! let mut game = GameState::new(GridConfig::default(), 12345);
//! game.start();
//!
//! game.step();
//! game.steer(Direction::Up);
//!
//! assert!(game.phase() == Phase::Running || game.phase() == Phase::GameOver);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::GridConfig;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
