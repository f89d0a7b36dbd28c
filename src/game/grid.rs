use super::{Cell, DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, GameError};

/// Fixed-size play field quantized to square cells.
///
/// `width` and `height` are pixel extents; valid cells are every `(x, y)` with
/// both components multiples of `cell_size`, `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl GridSpec {
    /// Validates the extents. A head one step past either far edge must still
    /// be representable, so `width + cell_size` and `height + cell_size` have
    /// to fit in an `i32`.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, GameError> {
        if cell_size <= 0
            || width < cell_size
            || height < cell_size
            || width.checked_add(cell_size).is_none()
            || height.checked_add(cell_size).is_none()
        {
            return Err(GameError::InvalidGrid {
                width,
                height,
                cell_size,
            });
        }
        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Number of cell-aligned columns.
    pub fn columns(&self) -> i32 {
        (self.width + self.cell_size - 1) / self.cell_size
    }

    /// Number of cell-aligned rows.
    pub fn rows(&self) -> i32 {
        (self.height + self.cell_size - 1) / self.cell_size
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// The middle column and row, counting a partial last cell as a column.
    pub fn center(&self) -> Cell {
        Cell::new(
            (self.columns() / 2) * self.cell_size,
            (self.rows() / 2) * self.cell_size,
        )
    }

    /// Every cell-aligned position, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let step = self.cell_size as usize;
        (0..self.width)
            .step_by(step)
            .flat_map(move |x| (0..self.height).step_by(step).map(move |y| Cell::new(x, y)))
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let grid = GridSpec::default();
        assert_eq!(grid.columns(), 30);
        assert_eq!(grid.rows(), 30);
        assert_eq!(grid.center(), Cell::new(450, 450));
    }

    #[test]
    fn test_rejects_degenerate_grids() {
        assert!(GridSpec::new(900, 900, 0).is_err());
        assert!(GridSpec::new(900, 900, -30).is_err());
        assert!(GridSpec::new(20, 900, 30).is_err());
        assert!(GridSpec::new(900, 0, 30).is_err());
        assert!(GridSpec::new(30, 30, 30).is_ok());
    }

    #[test]
    fn test_bounds_checking() {
        let grid = GridSpec::new(300, 300, 30).unwrap();
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(270, 270)));
        assert!(!grid.contains(Cell::new(-30, 0)));
        assert!(!grid.contains(Cell::new(300, 0)));
        assert!(!grid.contains(Cell::new(0, 300)));
    }

    #[test]
    fn test_cells_are_aligned() {
        let grid = GridSpec::new(90, 60, 30).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), (grid.columns() * grid.rows()) as usize);
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|c| c.x % 30 == 0 && c.y % 30 == 0));
        assert!(cells.iter().all(|&c| grid.contains(c)));
    }

    #[test]
    fn test_center_rounds_down_on_odd_columns() {
        let grid = GridSpec::new(870, 870, 30).unwrap();
        assert_eq!(grid.center(), Cell::new(420, 420));
    }

    #[test]
    fn test_center_counts_partial_cells() {
        let grid = GridSpec::new(100, 100, 30).unwrap();
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.center(), Cell::new(60, 60));
        assert!(grid.contains(grid.center()));

        let grid = GridSpec::new(100, 70, 30).unwrap();
        assert_eq!(grid.center(), Cell::new(60, 30));
    }

    #[test]
    fn test_rejects_grids_whose_far_neighbour_overflows() {
        assert!(matches!(
            GridSpec::new(i32::MAX, 1 << 30, 1 << 30),
            Err(GameError::InvalidGrid { .. })
        ));
        assert!(GridSpec::new(1 << 30, i32::MAX - 10, 30).is_err());
        assert!(GridSpec::new(i32::MAX - 30, i32::MAX - 30, 30).is_ok());
    }
}
