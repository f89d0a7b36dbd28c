//! Colors, font sizes and rendering layers.

use bevy::prelude::*;

// Colors
pub const SNAKE_HEAD_COLOR: Color = Color::srgb(1.0, 97.0 / 255.0, 0.0);
pub const SNAKE_SEGMENT_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
pub const FOOD_COLOR: Color = Color::srgb(160.0 / 255.0, 82.0 / 255.0, 45.0 / 255.0);
pub const ARENA_COLOR: Color = Color::srgb(250.0 / 255.0, 1.0, 240.0 / 255.0);
pub const BACKGROUND_COLOR: Color = Color::WHITE;
pub const TEXT_COLOR: Color = Color::BLACK;
pub const BUTTON_COLOR: Color = Color::srgb(100.0 / 255.0, 200.0 / 255.0, 100.0 / 255.0);
pub const BUTTON_HOVER_COLOR: Color = Color::srgb(150.0 / 255.0, 250.0 / 255.0, 150.0 / 255.0);
pub const OVERLAY_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.8);

// Outline thickness of board pieces, in pixels
pub const PIECE_THICKNESS: f32 = 2.0;

pub const SCORE_FONT_SIZE: f32 = 15.0;

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;
