#![no_std]

extern crate alloc;

pub use cell::*;
pub use error::*;
pub use grid::*;
pub use scramble::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod grid;
mod scramble;
mod session;
mod types;

/// Named starting configurations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    /// 9 by 8 board.
    Classic,
    /// 5 by 5 board.
    Compact,
}

impl Preset {
    pub const fn size(self) -> Coord2 {
        match self {
            Self::Classic => (9, 8),
            Self::Compact => (5, 5),
        }
    }

    pub const fn config(self) -> GameConfig {
        GameConfig::new_unchecked(
            self.size(),
            GameConfig::DEFAULT_SCRAMBLES,
            GameConfig::DEFAULT_CELL_SIZE,
        )
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Classic
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: Coord2,
    pub scrambles: u16,
    /// Edge of one rendered cell in pixels, used to map clicks to cells.
    pub cell_size: u16,
}

impl GameConfig {
    pub const DEFAULT_SCRAMBLES: u16 = 15;
    pub const DEFAULT_CELL_SIZE: u16 = 90;

    pub const fn new_unchecked(size: Coord2, scrambles: u16, cell_size: u16) -> Self {
        Self {
            size,
            scrambles,
            cell_size,
        }
    }

    /// Builds a config from unchecked integers, as they come off a command line.
    ///
    /// Dimensions must be positive; values past what the board can hold are
    /// clamped down. Negative scramble counts mean no scrambling, and a
    /// non-positive cell size falls back to the default.
    pub fn from_raw(width: i64, height: i64, scrambles: i64, cell_size: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GameError::InvalidSize);
        }

        let size = (clamp_coord(width, "width"), clamp_coord(height, "height"));
        let scrambles = clamp_u16(scrambles.max(0), "scrambles");
        let cell_size = if cell_size > 0 {
            clamp_u16(cell_size, "cell size")
        } else {
            Self::DEFAULT_CELL_SIZE
        };

        Ok(Self::new_unchecked(size, scrambles, cell_size))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

/// Narrows a positive coordinate, saturating at [`Coord::MAX`].
fn clamp_coord(value: i64, name: &str) -> Coord {
    Coord::try_from(value).unwrap_or_else(|_| {
        log::warn!("{} {} is too large, clamped to {}", name, value, Coord::MAX);
        Coord::MAX
    })
}

/// Narrows a non-negative count, saturating at [`u16::MAX`].
fn clamp_u16(value: i64, name: &str) -> u16 {
    u16::try_from(value).unwrap_or_else(|_| {
        log::warn!("{} {} is too large, clamped to {}", name, value, u16::MAX);
        u16::MAX
    })
}
