use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid width and height must both be positive")]
    InvalidSize,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Cell values must be 0 or 1")]
    InvalidCellValue,
    #[error("Session already ended, no new actions are accepted")]
    SessionEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
