use clap::Parser;
use greed_snake::game::{
    DEFAULT_CELL_SIZE, DEFAULT_DIFFICULTY, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, Difficulty,
    GameConfig, GameError,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "greed_snake")]
#[command(version, about = "Grid snake: eat, grow, don't bite yourself", long_about = None)]
pub struct Cli {
    /// Arena width in pixels
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: i32,

    /// Arena height in pixels
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: i32,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: i32,

    /// Tick rate of the game
    #[arg(short, long, value_enum, default_value_t = DEFAULT_DIFFICULTY)]
    pub difficulty: Difficulty,
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn config(&self) -> Result<GameConfig, GameError> {
        GameConfig::new(self.width, self.height, self.cell_size, self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_arena() {
        let cli = Cli::try_parse_from(["greed_snake"]).unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_custom_arguments() {
        let cli = Cli::try_parse_from([
            "greed_snake",
            "--width",
            "600",
            "--height",
            "450",
            "--cell-size",
            "15",
            "--difficulty",
            "inhuman",
        ])
        .unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config.grid.columns(), 40);
        assert_eq!(config.grid.rows(), 30);
        assert_eq!(config.difficulty, Difficulty::Inhuman);
    }

    #[test]
    fn test_invalid_grid_is_reported() {
        let cli = Cli::try_parse_from(["greed_snake", "--cell-size", "0"]).unwrap();
        assert!(matches!(cli.config(), Err(GameError::InvalidGrid { .. })));
    }
}
