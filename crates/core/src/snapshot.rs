//! Read-only snapshot of the game state for observers.
//!
//! The UI consumes only this view: stats, button enablement, and the cell
//! occupancy needed to draw a frame. Callers keep one snapshot around and
//! refresh it with [`GameState::snapshot_into`] so the body allocation is
//! reused frame to frame.

use crate::game_state::GameState;
use crate::grid::GridConfig;
use tui_snake_types::{ButtonStates, Direction, GameStats, Phase, Point};

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub grid: GridConfig,
    /// Body cells, head first.
    pub body: Vec<Point>,
    pub bait: Point,
    pub heading: Direction,
    pub phase: Phase,
    pub stats: GameStats,
    pub buttons: ButtonStates,
    pub interval_ms: u32,
    pub session_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            body: Vec::new(),
            bait: Point::new(0, 0),
            heading: Direction::Right,
            phase: Phase::Idle,
            stats: GameStats::initial(),
            buttons: ButtonStates::for_phase(Phase::Idle),
            interval_ms: tui_snake_types::INITIAL_STEP_INTERVAL_MS,
            session_id: 0,
            seed: 0,
        }
    }
}

impl GameState {
    /// Write the current state into a caller-owned snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid();
        out.body.clear();
        out.body.extend(self.body().iter().copied());
        out.bait = self.bait();
        out.heading = self.heading();
        out.phase = self.phase();
        out.stats = self.stats();
        out.buttons = self.buttons();
        out.interval_ms = self.step_interval_ms();
        out.session_id = self.session_id();
        out.seed = self.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_idle() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.phase, Phase::Idle);
        assert!(snap.body.is_empty());
        assert!(!snap.playable());
        assert!(snap.buttons.start);
    }

    #[test]
    fn test_playable_only_while_running() {
        let mut state = GameState::new(GridConfig::default(), 1);
        assert!(!state.snapshot().playable());
        state.start();
        assert!(state.snapshot().playable());
        state.toggle_pause();
        assert!(!state.snapshot().playable());
    }
}
