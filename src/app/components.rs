//! ECS components for the snake game.

use bevy::prelude::*;

/// Marks every entity drawn from session state; rebuilt after each tick.
#[derive(Component)]
pub struct BoardPiece;

/// Component for entities that should flash/pulse.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

/// Component to mark the start menu UI.
#[derive(Component)]
pub struct MenuUI;

/// Clickable entries of the start menu.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Quit,
}
