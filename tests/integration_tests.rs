//! Integration tests for the main game loop surface

use tui_snake::core::{GameState, GridConfig};
use tui_snake::input::handle_key_event;
use tui_snake::types::{Direction, GameAction, Phase, StepOutcome};

use crossterm::event::{KeyCode, KeyEvent};

fn new_game(seed: u32) -> GameState {
    GameState::new(GridConfig::new(30, 20), seed)
}

#[test]
fn test_game_lifecycle() {
    let mut game = new_game(12345);
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.body().len(), 1);

    assert!(game.start());
    assert_eq!(game.phase(), Phase::Running);

    // Driving rightward forever must end at the wall, eating at most a few
    // baits on the way.
    let mut eats = 0;
    let mut outcome = StepOutcome::Moved;
    for _ in 0..1000 {
        outcome = game.step();
        match outcome {
            StepOutcome::Ate => eats += 1,
            StepOutcome::Collided => break,
            StepOutcome::Moved => {}
            StepOutcome::Skipped => panic!("running game skipped a step"),
        }
    }

    assert_eq!(outcome, StepOutcome::Collided);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.body().len(), 1 + eats);
    assert_eq!(game.step(), StepOutcome::Skipped);
}

#[test]
fn test_score_and_interval_track_consumption() {
    let mut game = new_game(777);
    game.start();

    let mut eats: u32 = 0;
    let mut last_score = 0;
    for _ in 0..1000 {
        match game.step() {
            StepOutcome::Ate => {
                eats += 1;
                assert!(game.score() > last_score);
                last_score = game.score();
            }
            StepOutcome::Moved => assert_eq!(game.score(), last_score),
            StepOutcome::Collided => break,
            StepOutcome::Skipped => break,
        }
    }

    assert_eq!(game.step_interval_ms(), 240 - 2 * eats);
    assert_eq!(game.stats().length, 1 + eats);
}

#[test]
fn test_steering_turns_and_steps_immediately() {
    let mut game = new_game(9);
    game.start();

    let head_before = game.head().unwrap();
    assert!(game.steer(Direction::Up));
    let head_after = game.head().unwrap();

    assert_eq!(game.heading(), Direction::Up);
    assert_eq!(head_after.y, head_before.y - 1);
    assert_eq!(head_after.x, head_before.x);
}

#[test]
fn test_steering_rejects_same_axis() {
    let mut game = new_game(9);
    game.start();

    let head_before = game.head().unwrap();
    assert!(!game.steer(Direction::Left));
    assert!(!game.steer(Direction::Right));
    assert_eq!(game.heading(), Direction::Right);
    assert_eq!(game.head().unwrap(), head_before);
}

#[test]
fn test_pause_blocks_everything_but_resume_steps_once() {
    let mut game = new_game(33);
    game.start();
    assert!(game.toggle_pause());
    assert_eq!(game.phase(), Phase::Paused);

    // Paused: no steps, no steering.
    assert_eq!(game.step(), StepOutcome::Skipped);
    let head_before = game.head().unwrap();
    assert!(!game.steer(Direction::Up));
    assert_eq!(game.head().unwrap(), head_before);

    // Resume advances once immediately.
    assert!(game.toggle_pause());
    assert_eq!(game.phase(), Phase::Running);
    assert_ne!(game.head().unwrap(), head_before);
}

#[test]
fn test_new_game_resets_session() {
    let mut game = new_game(55);
    game.start();
    for _ in 0..40 {
        if game.step() == StepOutcome::Collided {
            break;
        }
    }
    assert_eq!(game.phase(), Phase::GameOver);

    game.new_game();
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.score(), 0);
    assert_eq!(game.body().len(), 1);
    assert_eq!(game.step_interval_ms(), 240);
    assert_eq!(game.session_id(), 1);
    assert!(game.buttons().start);

    // A fresh session starts and plays again.
    assert!(game.start());
    assert_ne!(game.step(), StepOutcome::Skipped);
}

#[test]
fn test_key_events_drive_the_engine() {
    let mut game = new_game(21);

    // Enter starts.
    match handle_key_event(KeyEvent::from(KeyCode::Enter)) {
        Some(GameAction::Start) => assert!(game.start()),
        other => panic!("unexpected mapping: {:?}", other),
    }

    // Arrow up steers.
    match handle_key_event(KeyEvent::from(KeyCode::Up)) {
        Some(GameAction::Turn(direction)) => assert!(game.steer(direction)),
        other => panic!("unexpected mapping: {:?}", other),
    }
    assert_eq!(game.heading(), Direction::Up);

    // Space pauses.
    match handle_key_event(KeyEvent::from(KeyCode::Char(' '))) {
        Some(GameAction::TogglePause) => assert!(game.toggle_pause()),
        other => panic!("unexpected mapping: {:?}", other),
    }
    assert_eq!(game.phase(), Phase::Paused);

    // Unmapped keys do nothing at all.
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
}

#[test]
fn test_bait_never_on_body_through_play() {
    let mut game = new_game(2024);
    game.start();

    for _ in 0..500 {
        let bait = game.bait();
        assert!(
            game.body().iter().all(|&cell| cell != bait),
            "bait landed on the body"
        );
        // Weave to cover more of the grid than a straight run.
        let turn = match game.heading().axis() {
            tui_snake::types::Axis::Horizontal => Direction::Down,
            tui_snake::types::Axis::Vertical => Direction::Right,
        };
        if !game.steer(turn) {
            game.step();
        }
        if game.phase() == Phase::GameOver {
            game.new_game();
            game.start();
        }
    }
}
