//! Food placement - picks a free cell uniformly at random.

use std::collections::HashSet;

use rand::prelude::*;
use tracing::{debug, warn};

use crate::game::{Cell, GameError, GridSpec};

/// Chooses a cell-aligned position on `grid` not covered by `occupied`.
///
/// Every free cell is equally likely. Fails with
/// [`GameError::NoSpaceAvailable`] once the snake fills the whole grid.
pub fn place_food<R: Rng + ?Sized>(
    occupied: &[Cell],
    grid: &GridSpec,
    rng: &mut R,
) -> Result<Cell, GameError> {
    let occupied: HashSet<Cell> = occupied.iter().copied().collect();

    match grid.cells().filter(|cell| !occupied.contains(cell)).choose(rng) {
        Some(food) => {
            debug!(at = %food, "generated food");
            Ok(food)
        }
        None => {
            warn!(occupied = occupied.len(), "no free cell left for food");
            Err(GameError::NoSpaceAvailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn test_food_avoids_snake() {
        let grid = GridSpec::new(90, 90, 30).unwrap();
        let occupied: Vec<Cell> = grid.cells().filter(|c| *c != Cell::new(60, 30)).collect();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);

        for _ in 0..20 {
            assert_eq!(
                place_food(&occupied, &grid, &mut rng),
                Ok(Cell::new(60, 30))
            );
        }
    }

    #[test]
    fn test_food_is_cell_aligned() {
        let grid = GridSpec::default();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);

        for _ in 0..100 {
            let food = place_food(&[grid.center()], &grid, &mut rng).unwrap();
            assert!(grid.contains(food));
            assert_eq!(food.x % grid.cell_size(), 0);
            assert_eq!(food.y % grid.cell_size(), 0);
            assert_ne!(food, grid.center());
        }
    }

    #[test]
    fn test_full_grid() {
        let grid = GridSpec::new(60, 60, 30).unwrap();
        let occupied: Vec<Cell> = grid.cells().collect();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);

        assert_eq!(
            place_food(&occupied, &grid, &mut rng),
            Err(GameError::NoSpaceAvailable)
        );
    }
}
