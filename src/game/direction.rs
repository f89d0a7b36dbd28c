use super::GameError;

/// Direction enum for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit delta (dx, dy) in screen space, y pointing down.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Abstract key symbol handed over by an input collaborator.
///
/// Front ends map their own key codes onto this; anything they do not care
/// about becomes [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

impl TryFrom<Key> for Direction {
    type Error = GameError;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        match key {
            Key::Up => Ok(Direction::Up),
            Key::Down => Ok(Direction::Down),
            Key::Left => Ok(Direction::Left),
            Key::Right => Ok(Direction::Right),
            Key::Other => Err(GameError::InvalidDirection(format!("{key:?}"))),
        }
    }
}

/// Maps a raw key onto the next heading.
///
/// Unrecognized keys and direct reversals leave `current` unchanged; this
/// never fails.
pub fn translate_input(current: Direction, key: Key) -> Direction {
    match Direction::try_from(key) {
        Ok(requested) if requested.is_opposite(current) => current,
        Ok(requested) => requested,
        Err(_) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_reverse_is_rejected() {
        for direction in Direction::ALL {
            let key = match direction.opposite() {
                Direction::Up => Key::Up,
                Direction::Down => Key::Down,
                Direction::Left => Key::Left,
                Direction::Right => Key::Right,
            };
            assert_eq!(translate_input(direction, key), direction);
        }
    }

    #[test]
    fn test_turns_are_accepted() {
        assert_eq!(translate_input(Direction::Right, Key::Up), Direction::Up);
        assert_eq!(translate_input(Direction::Right, Key::Down), Direction::Down);
        assert_eq!(translate_input(Direction::Up, Key::Left), Direction::Left);
        assert_eq!(translate_input(Direction::Up, Key::Up), Direction::Up);
    }

    #[test]
    fn test_unknown_key_keeps_heading() {
        assert_eq!(translate_input(Direction::Left, Key::Other), Direction::Left);
        assert!(matches!(
            Direction::try_from(Key::Other),
            Err(GameError::InvalidDirection(_))
        ));
    }
}
