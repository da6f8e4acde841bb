/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, column first.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Checks signed coordinates against `bounds`, narrowing them when they fit.
pub fn checked_coords((x, y): (i64, i64), bounds: Coord2) -> Option<Coord2> {
    let x = Coord::try_from(x).ok()?;
    let y = Coord::try_from(y).ok()?;
    (x < bounds.0 && y < bounds.1).then_some((x, y))
}

/// The 3x3 block around a cell, the cell itself included.
const DISPLACEMENTS: [(i8, i8); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates the in-bounds cells of the 3x3 neighborhood centered on a cell.
#[derive(Debug)]
pub struct NeighborhoodIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborhoodIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborhoodIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighborhood_is_full_in_the_interior() {
        let cells: Vec<_> = NeighborhoodIter::new((1, 1), (3, 3)).collect();

        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&(1, 1)));
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(2, 2)));
    }

    #[test]
    fn neighborhood_skips_cells_past_the_corner() {
        let cells: Vec<_> = NeighborhoodIter::new((0, 0), (5, 5)).collect();
        let expected: [Coord2; 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

        assert_eq!(cells, expected);
    }

    #[test]
    fn neighborhood_skips_cells_past_the_far_edge() {
        let cells: Vec<_> = NeighborhoodIter::new((4, 2), (5, 5)).collect();

        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|&(x, _)| x < 5));
    }

    #[test]
    fn checked_coords_rejects_negative_and_large_values() {
        assert_eq!(checked_coords((2, 3), (5, 5)), Some((2, 3)));
        assert_eq!(checked_coords((-1, 0), (5, 5)), None);
        assert_eq!(checked_coords((0, 5), (5, 5)), None);
        assert_eq!(checked_coords((300, 0), (5, 5)), None);
    }
}
