use core::fmt;
use core::num::Saturating;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Fresh puzzle, no accepted moves yet.
    Scrambled,
    Playing,
    Won,
    /// The player quit, nothing is accepted anymore.
    Ended,
}

impl SessionState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }

    pub const fn is_ended(self) -> bool {
        matches!(self, Self::Ended)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Scrambled
    }
}

/// Discrete player input, already decoded by the front end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    ActivateCell(Coord2),
    /// A click on the rendered board, relative to its top-left corner.
    ActivatePixel { x: i32, y: i32 },
    Reset,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoChange,
    Toggled,
    Won,
    Reset,
    Quit,
}

impl Outcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Text shown under the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Playing { clicks: u32 },
    Won { clicks: u32 },
    Ended,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing { clicks } => write!(f, "Clicks: {}", clicks),
            Self::Won { clicks } => write!(f, "You won! {} clicks", clicks),
            Self::Ended => f.write_str("Bye!"),
        }
    }
}

/// One interactive game: the grid, the click counter and the win state.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    scrambler: RandomScrambler,
    move_count: Saturating<u32>,
    state: SessionState,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut grid = Grid::new(config.size)?;
        let mut scrambler = RandomScrambler::new(seed, config.scrambles);
        scrambler.scramble(&mut grid);
        log::debug!(
            "new session {}x{} with {} scrambles, seed {}",
            config.size.0,
            config.size.1,
            config.scrambles,
            seed
        );

        Ok(Self {
            config,
            grid,
            scrambler,
            move_count: Saturating(0),
            state: Default::default(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.grid.cell_at(coords)
    }

    pub fn move_count(&self) -> u32 {
        self.move_count.0
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn status(&self) -> Status {
        let clicks = self.move_count();
        match self.state {
            SessionState::Scrambled | SessionState::Playing => Status::Playing { clicks },
            SessionState::Won => Status::Won { clicks },
            SessionState::Ended => Status::Ended,
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        use Action::*;

        self.check_not_ended()?;

        Ok(match action {
            ActivateCell(coords) => self.activate(coords),
            ActivatePixel { x, y } => match self.grid.cell_at_pixel((x, y), self.config.cell_size) {
                Some(coords) => self.activate(coords),
                None => {
                    log::trace!("click at ({}, {}) is off the board", x, y);
                    Outcome::NoChange
                }
            },
            Reset => {
                self.reset();
                Outcome::Reset
            }
            Quit => {
                log::debug!("session ended after {} clicks", self.move_count());
                self.state = SessionState::Ended;
                Outcome::Quit
            }
        })
    }

    fn activate(&mut self, coords: Coord2) -> Outcome {
        match self.grid.toggle(coords) {
            ToggleOutcome::Ignored => Outcome::NoChange,
            ToggleOutcome::Toggled => {
                self.move_count += 1;
                self.state = SessionState::Playing;
                Outcome::Toggled
            }
            ToggleOutcome::Solved => {
                self.move_count += 1;
                if !self.state.is_won() {
                    log::debug!("solved in {} clicks", self.move_count());
                }
                self.state = SessionState::Won;
                Outcome::Won
            }
        }
    }

    fn reset(&mut self) {
        self.move_count = Saturating(0);
        self.grid.reset();
        self.scrambler.scramble(&mut self.grid);
        self.state = SessionState::Scrambled;
        log::debug!("board reset and scrambled");
    }

    fn check_not_ended(&self) -> Result<()> {
        if self.state.is_ended() {
            Err(GameError::SessionEnded)
        } else {
            Ok(())
        }
    }
}
