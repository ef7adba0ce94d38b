//! Errors reported by the rules engine.

use thiserror::Error;

/// Why an action or a decode was refused.
///
/// Rule violations (`Occupied`, `Suicide`, `Ko`) and out-of-bounds coordinates
/// are ordinary negative results: the session state is left untouched and the
/// same player may try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Coordinate outside the board.
    #[error("invalid coordinate ({x}, {y})")]
    InvalidCoordinate { x: usize, y: usize },
    /// Point is not empty
    #[error("illegal move: point not empty")]
    Occupied,
    /// Move would leave its own group without liberties and captures nothing
    #[error("illegal move: suicide")]
    Suicide,
    /// Move recreates the position from two plies ago
    #[error("illegal move: retakes ko")]
    Ko,
    /// The game has ended; only a new game is accepted.
    #[error("game is over")]
    GameOver,
    /// A cell code that is not empty, black or white.
    #[error("invalid cell value {0:?}")]
    InvalidCellValue(String),
    /// A player name that is not black or white.
    #[error("invalid player {0:?}")]
    InvalidPlayer(String),
    /// A board diagram whose dimensions do not match the configured size.
    #[error("board must be {expected}x{expected}, got {rows} rows of widths {widths:?}")]
    BoardSize {
        expected: usize,
        rows: usize,
        widths: Vec<usize>,
    },
}
