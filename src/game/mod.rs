//! Core game module: geometry, input translation, pacing, configuration and the session.

mod cell;
mod config;
mod constants;
mod direction;
mod error;
mod grid;
mod pacing;
mod session;

pub use cell::Cell;
pub use config::GameConfig;
pub use constants::*;
pub use direction::{Direction, Key, translate_input};
pub use error::GameError;
pub use grid::GridSpec;
pub use pacing::{Difficulty, TickGate};
pub use session::{GameOverCause, Phase, Session, TickReport};
