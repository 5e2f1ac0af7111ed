//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default grid dimensions (in cells)
pub const DEFAULT_HORIZONTAL_CELLS: i32 = 30;
pub const DEFAULT_VERTICAL_CELLS: i32 = 20;

/// Smallest playable grid per axis.
///
/// The spawn band keeps 5 cells of margin on the low edges and 6 on the high
/// edges, so each axis needs at least 11 spare cells plus one spawn cell.
pub const MIN_GRID_CELLS: i32 = 12;

/// Game timing constants (in milliseconds)
pub const INITIAL_STEP_INTERVAL_MS: u32 = 240;
pub const STEP_SPEEDUP_MS: u32 = 2;
pub const STEP_INTERVAL_FLOOR_MS: u32 = 10;

/// Poll period while no step timer is armed (idle/paused/game over)
pub const IDLE_POLL_MS: u64 = 50;

/// Snake spawn placement band
pub const SPAWN_MARGIN_CELLS: i32 = 5;
pub const SPAWN_FAR_MARGIN_CELLS: i32 = 6;

/// Bait placement tuning
pub const BAIT_SAMPLE_LIMIT: u32 = 128;
pub const BAIT_HEAD_CLEARANCE: i32 = 2;

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point one cell away along `direction`.
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement axis of a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Snake heading. Exactly one axis is ever non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta `(dx, dy)` for this heading.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// A turn is legal only onto the other axis; reversals (and re-pressing
    /// the current heading) share an axis and are rejected.
    pub fn can_turn_to(&self, next: Direction) -> bool {
        self.axis() != next.axis()
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Session phase (explicit state machine; no nullable-timer encoding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reset and waiting for start.
    Idle,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    /// A session is active between start and game over.
    pub fn session_active(&self) -> bool {
        matches!(self, Phase::Running | Phase::Paused)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "game over",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    TogglePause,
    NewGame,
    Turn(Direction),
}

/// Live stats shown in the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameStats {
    pub score: u32,
    pub length: u32,
    /// Steps per second, `1000 / interval_ms`.
    pub speed: f64,
}

impl GameStats {
    pub fn initial() -> Self {
        Self {
            score: 0,
            length: 1,
            speed: 1000.0 / f64::from(INITIAL_STEP_INTERVAL_MS),
        }
    }
}

/// Enablement of the three panel controls, derived from the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub start: bool,
    pub pause: bool,
    pub new_game: bool,
}

impl ButtonStates {
    pub fn for_phase(phase: Phase) -> Self {
        Self {
            start: phase == Phase::Idle,
            pause: phase.session_active(),
            new_game: phase != Phase::Idle,
        }
    }
}

/// Outcome of one step-advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not running; nothing happened.
    Skipped,
    /// Constant-length translation.
    Moved,
    /// Bait consumed; the snake grew and sped up.
    Ate,
    /// Fatal collision; the session is over.
    Collided,
}
