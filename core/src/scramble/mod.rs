use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Produces a starting position by applying toggles to a grid.
pub trait Scrambler {
    /// Applies the scramble toggles to `grid`, returning the points used in order.
    ///
    /// Toggling the same points again restores the grid to where it was before.
    fn scramble(&mut self, grid: &mut Grid) -> Vec<Coord2>;
}

/// Toggles every point in `points`, in order.
pub fn replay(grid: &mut Grid, points: &[Coord2]) {
    for &coords in points {
        grid.toggle(coords);
    }
}
