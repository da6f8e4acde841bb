use crate::{GameError, Result};

/// One lamp of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Off,
    On,
}

impl Cell {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// Numeric value of the cell, `0` for off and `1` for on.
    pub const fn value(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            _ => Err(GameError::InvalidCellValue),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Off
    }
}
