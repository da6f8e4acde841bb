use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Scrambles by toggling uniformly random cells, drawing from a seeded stream.
///
/// The stream carries on between calls, so a reused scrambler gives a fresh
/// puzzle every time while staying reproducible from its seed.
#[derive(Clone, Debug)]
pub struct RandomScrambler {
    rng: SmallRng,
    count: u16,
}

impl RandomScrambler {
    pub fn new(seed: u64, count: u16) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            count,
        }
    }
}

impl Scrambler for RandomScrambler {
    fn scramble(&mut self, grid: &mut Grid) -> Vec<Coord2> {
        let (width, height) = grid.size();

        let points: Vec<Coord2> = (0..self.count)
            .map(|_| {
                let x = self.rng.random_range(0..width);
                let y = self.rng.random_range(0..height);
                (x, y)
            })
            .collect();

        replay(grid, &points);
        log::trace!("scrambled with {} toggles: {:?}", points.len(), points);
        points
    }
}
