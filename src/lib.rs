//! Greed Snake - the deterministic core of a single-player grid snake game.
//!
//! This library provides:
//! - Grid geometry, directions, input translation and session state (game module)
//! - The snake state machine with deferred growth (snake module)
//! - Uniform random food placement (food module)
//!
//! Nothing here owns a window, an input device or a drawing surface; the bundled
//! binary is one front end that drives a [`game::Session`] from a bevy app.

pub mod food;
pub mod game;
pub mod snake;

pub use food::place_food;
pub use game::{
    Cell, Difficulty, Direction, GameConfig, GameError, GameOverCause, GridSpec, Key, Phase,
    Session, TickGate, TickReport, translate_input,
};
pub use snake::Snake;
