use std::fmt;

use super::Direction;

/// A cell-aligned position on the grid, in pixel coordinates.
///
/// `y` grows downward, so moving [`Direction::Up`] subtracts from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell one `step` away in `direction`.
    pub fn translated(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * step, dy * step)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x:{}, y:{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_uses_step() {
        let cell = Cell::new(450, 450);
        assert_eq!(cell.translated(Direction::Right, 30), Cell::new(480, 450));
        assert_eq!(cell.translated(Direction::Left, 30), Cell::new(420, 450));
        assert_eq!(cell.translated(Direction::Up, 30), Cell::new(450, 420));
        assert_eq!(cell.translated(Direction::Down, 30), Cell::new(450, 480));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Cell::new(3, 4), Cell::from((3, 4)));
        assert_ne!(Cell::new(3, 4), Cell::new(4, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(510, 450).to_string(), "x:510, y:450");
    }
}
