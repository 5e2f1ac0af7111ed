//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the snake body, bait placement, and
//! the session state machine. It is clock-free: the embedding event loop owns
//! the step timer and calls [`GameState::step`] on each tick, while steering
//! and pause-resume trigger their immediate step internally.

use std::collections::VecDeque;

use crate::grid::GridConfig;
use crate::rng::SimpleRng;
use tui_snake_types::{
    ButtonStates, Direction, GameStats, Phase, Point, StepOutcome, BAIT_HEAD_CLEARANCE,
    BAIT_SAMPLE_LIMIT, INITIAL_STEP_INTERVAL_MS, SPAWN_FAR_MARGIN_CELLS, SPAWN_MARGIN_CELLS,
    STEP_INTERVAL_FLOOR_MS, STEP_SPEEDUP_MS,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: GridConfig,
    rng: SimpleRng,
    /// Snake body, head at the front, tail at the back. Never empty while a
    /// session exists.
    body: VecDeque<Point>,
    heading: Direction,
    bait: Point,
    phase: Phase,
    /// Current step interval in milliseconds; shrinks per bait eaten.
    interval_ms: u32,
    score: u32,
    /// Monotonic session id (increments on new-game).
    session_id: u32,
}

impl GameState {
    /// Create a new game on the given grid with the given RNG seed.
    ///
    /// The game comes up reset: one spawned body cell, bait placed, phase
    /// `Idle` awaiting start.
    pub fn new(grid: GridConfig, seed: u32) -> Self {
        debug_assert!(grid.is_playable());
        let mut state = Self {
            grid,
            rng: SimpleRng::new(seed),
            body: VecDeque::new(),
            heading: Direction::Right,
            bait: Point::new(0, 0),
            phase: Phase::Idle,
            interval_ms: INITIAL_STEP_INTERVAL_MS,
            score: 0,
            session_id: 0,
        };
        state.reset_model();
        state
    }

    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn bait(&self) -> Point {
        self.bait
    }

    /// Body cells, head first.
    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn head(&self) -> Option<Point> {
        self.body.front().copied()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current step interval; the event loop arms its timer from this.
    pub fn step_interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// Current RNG state (doubles as a restart seed).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            score: self.score,
            length: self.body.len() as u32,
            speed: 1000.0 / f64::from(self.interval_ms),
        }
    }

    pub fn buttons(&self) -> ButtonStates {
        ButtonStates::for_phase(self.phase)
    }

    /// Start the session: `Idle -> Running`.
    ///
    /// Returns false in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Toggle pause while a session is active.
    ///
    /// Resuming performs one immediate step-advance; the caller should then
    /// re-arm its timer at the normal cadence.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                self.step();
                true
            }
            Phase::Idle | Phase::GameOver => false,
        }
    }

    /// Apply directional input.
    ///
    /// Accepted only while running and only onto the other axis (reversals
    /// and same-heading presses are rejected, heading unchanged). An accepted
    /// turn performs one immediate step-advance so it takes effect before the
    /// next timer tick; the caller should reset its cadence on `true`.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if !self.heading.can_turn_to(direction) {
            return false;
        }
        self.heading = direction;
        self.step();
        true
    }

    /// Step-advance: move the head one cell along the heading.
    ///
    /// Resolves collision and consumption, updating the body, bait, interval,
    /// and score. Does nothing unless the session is running.
    pub fn step(&mut self) -> StepOutcome {
        if self.phase != Phase::Running {
            return StepOutcome::Skipped;
        }
        let Some(&head) = self.body.front() else {
            return StepOutcome::Skipped;
        };

        let candidate = head.stepped(self.heading);
        // One-step lookahead only: out of bounds or anywhere on the body
        // (tail included) is fatal.
        if !self.grid.contains(candidate) || self.occupied_by_body(candidate) {
            self.phase = Phase::GameOver;
            return StepOutcome::Collided;
        }

        self.body.push_front(candidate);
        if candidate == self.bait {
            self.interval_ms = self
                .interval_ms
                .saturating_sub(STEP_SPEEDUP_MS)
                .max(STEP_INTERVAL_FLOOR_MS);
            self.place_bait();
            let length = self.body.len() as f64;
            let speed = 1000.0 / f64::from(self.interval_ms);
            self.score = (f64::from(self.score) + length / 2.0 + speed / 2.0).round() as u32;
            StepOutcome::Ate
        } else {
            self.body.pop_back();
            StepOutcome::Moved
        }
    }

    /// Reset the whole data model and begin a fresh session in `Idle`.
    pub fn new_game(&mut self) {
        self.session_id = self.session_id.wrapping_add(1);
        self.reset_model();
    }

    fn reset_model(&mut self) {
        self.phase = Phase::Idle;
        self.interval_ms = INITIAL_STEP_INTERVAL_MS;
        self.score = 0;
        self.heading = Direction::Right;
        self.body.clear();
        let head = self.spawn_point();
        self.body.push_front(head);
        self.place_bait();
    }

    /// Pseudo-random spawn position biased away from the edges: at least
    /// 5 cells of margin on the low edges and 6 on the high edges.
    fn spawn_point(&mut self) -> Point {
        let span_x = self.grid.horizontal_cells - SPAWN_MARGIN_CELLS - SPAWN_FAR_MARGIN_CELLS;
        let span_y = self.grid.vertical_cells - SPAWN_MARGIN_CELLS - SPAWN_FAR_MARGIN_CELLS;
        Point::new(
            SPAWN_MARGIN_CELLS + self.rng.next_range(span_x as u32) as i32,
            SPAWN_MARGIN_CELLS + self.rng.next_range(span_y as u32) as i32,
        )
    }

    fn occupied_by_body(&self, p: Point) -> bool {
        self.body.iter().any(|&cell| cell == p)
    }

    /// Place bait on a cell that is off the body and not in the head's row or
    /// column within `BAIT_HEAD_CLEARANCE`.
    ///
    /// Rejection sampling is capped; on exhaustion a deterministic row-major
    /// scan takes over, first honoring the head clearance, then relaxing it
    /// to any free cell. A fully packed grid leaves the bait untouched (no
    /// placement is reachable).
    fn place_bait(&mut self) {
        let Some(&head) = self.body.front() else {
            return;
        };

        for _ in 0..BAIT_SAMPLE_LIMIT {
            let p = Point::new(
                self.rng.next_range(self.grid.horizontal_cells as u32) as i32,
                self.rng.next_range(self.grid.vertical_cells as u32) as i32,
            );
            if self.bait_allowed(p, head) {
                self.bait = p;
                return;
            }
        }

        if let Some(p) = self.scan_for_bait(head, true) {
            self.bait = p;
        } else if let Some(p) = self.scan_for_bait(head, false) {
            self.bait = p;
        }
    }

    fn bait_allowed(&self, p: Point, head: Point) -> bool {
        !self.occupied_by_body(p) && !Self::in_head_lane(p, head)
    }

    /// Same row or column as the head, within the clearance distance.
    fn in_head_lane(p: Point, head: Point) -> bool {
        (p.y == head.y && (p.x - head.x).abs() < BAIT_HEAD_CLEARANCE)
            || (p.x == head.x && (p.y - head.y).abs() < BAIT_HEAD_CLEARANCE)
    }

    fn scan_for_bait(&self, head: Point, require_clearance: bool) -> Option<Point> {
        for y in 0..self.grid.vertical_cells {
            for x in 0..self.grid.horizontal_cells {
                let p = Point::new(x, y);
                if self.occupied_by_body(p) {
                    continue;
                }
                if require_clearance && Self::in_head_lane(p, head) {
                    continue;
                }
                return Some(p);
            }
        }
        None
    }

    /// Replace the body with the given cells, head first (for tests).
    #[cfg(test)]
    pub fn set_body(&mut self, cells: &[(i32, i32)]) {
        self.body.clear();
        self.body
            .extend(cells.iter().map(|&(x, y)| Point::new(x, y)));
    }

    #[cfg(test)]
    pub fn set_bait(&mut self, bait: Point) {
        self.bait = bait;
    }

    #[cfg(test)]
    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }
}
