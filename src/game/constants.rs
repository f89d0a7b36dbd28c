//! Default arena dimensions and timing.

use super::{Difficulty, Direction};

// Arena dimensions, in pixels
pub const DEFAULT_GRID_WIDTH: i32 = 900;
pub const DEFAULT_GRID_HEIGHT: i32 = 900;

// Movement quantum; every cell is a square of this side
pub const DEFAULT_CELL_SIZE: i32 = 30;

// Timing
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Lunatic;

// Initial heading of a fresh session
pub const INITIAL_DIRECTION: Direction = Direction::Right;
