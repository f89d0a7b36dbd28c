use super::{Difficulty, GameError, GridSpec};

/// Configuration for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Arena extents and movement quantum
    pub grid: GridSpec,
    /// Tick rate of the simulation
    pub difficulty: Difficulty,
}

impl GameConfig {
    /// Create a new configuration, validating the grid.
    pub fn new(
        width: i32,
        height: i32,
        cell_size: i32,
        difficulty: Difficulty,
    ) -> Result<Self, GameError> {
        Ok(Self {
            grid: GridSpec::new(width, height, cell_size)?,
            difficulty,
        })
    }
}
