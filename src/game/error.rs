/// Errors surfaced by the game core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no free cell left to place food")]
    NoSpaceAvailable,
    #[error("not a direction: {0}")]
    InvalidDirection(String),
    #[error("invalid grid {width}x{height} with cell size {cell_size}")]
    InvalidGrid {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("tick rate must be at least one tick per second")]
    InvalidTickRate,
}
