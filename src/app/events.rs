//! Game events (messages).

use bevy::prelude::*;
use greed_snake::{Cell, GameOverCause};

/// Message triggered when the head reaches food (for visual effects).
#[derive(Message)]
pub struct FoodEatenEvent {
    pub position: Cell,
}

/// Message triggered once when the session turns terminal.
#[derive(Message)]
pub struct GameOverEvent {
    pub cause: GameOverCause,
    pub score: u32,
}

/// Message asking for a fresh session, from the menu or the game over screen.
#[derive(Message)]
pub struct StartGameEvent;
