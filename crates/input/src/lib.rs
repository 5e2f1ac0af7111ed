//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]; only key press
//! events are meaningful for Snake, so auto-repeat and release events are the
//! caller's to ignore.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
