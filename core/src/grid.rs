use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Result of a single toggle on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The center was outside the grid, nothing was flipped.
    Ignored,
    Toggled,
    /// The toggle left every cell on.
    Solved,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        use ToggleOutcome::*;
        match self {
            Ignored => false,
            Toggled => true,
            Solved => true,
        }
    }
}

/// Rectangular board of lamps, indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
    lit_count: CellCount,
}

impl Grid {
    /// Creates a grid with every cell off.
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        Ok(Self {
            cells: Array2::default(size.to_nd_index()),
            lit_count: 0,
        })
    }

    /// Builds a grid from row-major `0`/`1` values, one row after another.
    pub fn from_values(size: Coord2, values: &[u8]) -> Result<Self> {
        let mut grid = Self::new(size)?;
        if values.len() != usize::from(grid.total_cells()) {
            return Err(GameError::InvalidBoardShape);
        }

        let (width, _) = size;
        for (i, &value) in values.iter().enumerate() {
            let x = i % usize::from(width);
            let y = i / usize::from(width);
            let cell = Cell::from_value(value)?;
            grid.cells[[x, y]] = cell;
            grid.lit_count += CellCount::from(cell.value());
        }

        Ok(grid)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.contains(coords)
            .then(|| self.cells[coords.to_nd_index()])
    }

    pub fn lit_count(&self) -> CellCount {
        self.lit_count
    }

    /// True once every cell is on.
    pub fn is_solved(&self) -> bool {
        self.lit_count() == self.total_cells()
    }

    /// Flips the cell at `coords` and its in-bounds neighbors.
    ///
    /// A center outside the grid leaves everything untouched.
    pub fn toggle(&mut self, coords: Coord2) -> ToggleOutcome {
        if !self.contains(coords) {
            log::trace!("toggle outside grid ignored: {:?}", coords);
            return ToggleOutcome::Ignored;
        }

        for pos in self.neighborhood(coords) {
            let cell = &mut self.cells[pos.to_nd_index()];
            *cell = cell.toggled();
            if cell.is_on() {
                self.lit_count += 1;
            } else {
                self.lit_count -= 1;
            }
        }

        if self.is_solved() {
            ToggleOutcome::Solved
        } else {
            ToggleOutcome::Toggled
        }
    }

    /// Same as [`Grid::toggle`] for coordinates that may be negative or huge.
    pub fn toggle_signed(&mut self, x: i64, y: i64) -> ToggleOutcome {
        match checked_coords((x, y), self.size()) {
            Some(coords) => self.toggle(coords),
            None => ToggleOutcome::Ignored,
        }
    }

    /// Turns every cell off.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Off);
        self.lit_count = 0;
    }

    /// Maps a pixel position on the rendered board to the cell under it.
    pub fn cell_at_pixel(&self, (px, py): (i32, i32), cell_size: u16) -> Option<Coord2> {
        if cell_size == 0 || px < 0 || py < 0 {
            return None;
        }
        let cell_size = i32::from(cell_size);
        checked_coords(
            (i64::from(px / cell_size), i64::from(py / cell_size)),
            self.size(),
        )
    }

    pub fn neighborhood(&self, coords: Coord2) -> NeighborhoodIter {
        NeighborhoodIter::new(coords, self.size())
    }

    /// Cell values as row-major `0`/`1`, the inverse of [`Grid::from_values`].
    pub fn to_values(&self) -> Vec<u8> {
        let (width, height) = self.size();
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|coords| self[coords].value())
            .collect()
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(x as usize, y as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all(grid: &Grid, expected: Cell) {
        let (width, height) = grid.size();
        for x in 0..width {
            for y in 0..height {
                assert_eq!(grid[(x, y)], expected, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn new_grid_starts_all_off() {
        for size in [(1, 1), (5, 5), (9, 8), (255, 3)] {
            let grid = Grid::new(size).unwrap();

            assert_eq!(grid.size(), size);
            assert_all(&grid, Cell::Off);
            assert!(!grid.is_solved());
        }
    }

    #[test]
    fn new_grid_rejects_zero_dimensions() {
        assert_eq!(Grid::new((0, 4)), Err(GameError::InvalidSize));
        assert_eq!(Grid::new((4, 0)), Err(GameError::InvalidSize));
        assert_eq!(Grid::new((0, 0)), Err(GameError::InvalidSize));
    }

    #[test]
    fn from_values_validates_shape_and_values() {
        assert_eq!(
            Grid::from_values((2, 2), &[1, 1, 1]),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Grid::from_values((2, 2), &[1, 1, 2, 1]),
            Err(GameError::InvalidCellValue)
        );

        let grid = Grid::from_values((3, 2), &[1, 0, 0, 0, 0, 1]).unwrap();
        assert_eq!(grid[(0, 0)], Cell::On);
        assert_eq!(grid[(2, 1)], Cell::On);
        assert_eq!(grid[(1, 0)], Cell::Off);
        assert_eq!(grid.to_values(), [1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn is_solved_requires_every_cell_on() {
        let lit = Grid::from_values((2, 2), &[1, 1, 1, 1]).unwrap();
        let one_off = Grid::from_values((2, 2), &[1, 1, 1, 0]).unwrap();

        assert!(lit.is_solved());
        assert!(!one_off.is_solved());
    }

    #[test]
    fn toggle_twice_restores_every_cell() {
        let start = Grid::from_values((4, 3), &[1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1]).unwrap();

        for x in 0..4 {
            for y in 0..3 {
                let mut grid = start.clone();
                assert!(grid.toggle((x, y)).has_update());
                assert_ne!(grid, start);
                grid.toggle((x, y));
                assert_eq!(grid, start);
            }
        }
    }

    #[test]
    fn toggle_outside_grid_is_a_no_op() {
        let start = Grid::from_values((3, 3), &[1, 0, 1, 0, 0, 0, 1, 1, 0]).unwrap();
        let mut grid = start.clone();

        assert_eq!(grid.toggle((3, 0)), ToggleOutcome::Ignored);
        assert_eq!(grid.toggle((0, 3)), ToggleOutcome::Ignored);
        assert_eq!(grid.toggle((200, 200)), ToggleOutcome::Ignored);
        assert_eq!(grid.toggle_signed(-1, 1), ToggleOutcome::Ignored);
        assert_eq!(grid.toggle_signed(1, -1), ToggleOutcome::Ignored);
        assert_eq!(grid.toggle_signed(i64::MAX, 0), ToggleOutcome::Ignored);
        assert_eq!(grid, start);
    }

    #[test]
    fn toggle_in_corner_flips_only_in_bounds_neighbors() {
        let mut grid = Grid::new((4, 4)).unwrap();

        grid.toggle((0, 0));

        assert_eq!(grid.lit_count(), 4);
        assert_eq!(grid[(0, 0)], Cell::On);
        assert_eq!(grid[(1, 1)], Cell::On);
        assert_eq!(grid[(2, 0)], Cell::Off);
    }

    #[test]
    fn toggle_on_single_cell_grid() {
        let mut grid = Grid::new((1, 1)).unwrap();

        assert_eq!(grid.toggle((0, 0)), ToggleOutcome::Solved);
        assert_eq!(grid[(0, 0)], Cell::On);
        assert!(grid.is_solved());

        assert_eq!(grid.toggle((0, 0)), ToggleOutcome::Toggled);
        assert_eq!(grid[(0, 0)], Cell::Off);
        assert!(!grid.is_solved());
    }

    #[test]
    fn center_toggle_solves_three_by_three() {
        let mut grid = Grid::new((3, 3)).unwrap();

        assert_eq!(grid.toggle((1, 1)), ToggleOutcome::Solved);
        assert_all(&grid, Cell::On);
    }

    #[test]
    fn reset_turns_everything_off() {
        let mut grid = Grid::from_values((2, 2), &[1, 1, 1, 1]).unwrap();

        grid.reset();

        assert_eq!(grid.size(), (2, 2));
        assert_all(&grid, Cell::Off);
        assert!(!grid.is_solved());
    }

    #[test]
    fn cell_at_pixel_divides_by_cell_size() {
        let grid = Grid::new((9, 8)).unwrap();

        assert_eq!(grid.cell_at_pixel((0, 0), 90), Some((0, 0)));
        assert_eq!(grid.cell_at_pixel((89, 179), 90), Some((0, 1)));
        assert_eq!(grid.cell_at_pixel((809, 719), 90), Some((8, 7)));
        assert_eq!(grid.cell_at_pixel((810, 0), 90), None);
        assert_eq!(grid.cell_at_pixel((0, 720), 90), None);
        assert_eq!(grid.cell_at_pixel((-5, 10), 90), None);
        assert_eq!(grid.cell_at_pixel((10, 10), 0), None);
    }
}
