//! Board state: an NxN grid of empty or occupied cells.
//!
//! Cells are indexed `(x, y)` with `x` the column and `y` the row; the grid is
//! stored row-major. A cell is `None` when empty.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CODE_BLACK, CODE_EMPTY, CODE_WHITE, DELTA, N};
use crate::error::GameError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(GameError::InvalidPlayer(s.to_string())),
        }
    }
}

/// A board coordinate `(x, y)`.
pub type Point = (usize, usize);

/// Snapshot code of a single cell.
pub fn cell_code(cell: Option<Color>) -> char {
    match cell {
        None => CODE_EMPTY,
        Some(Color::Black) => CODE_BLACK,
        Some(Color::White) => CODE_WHITE,
    }
}

/// Decode a single cell. `.` is accepted as an alias for empty so diagrams stay readable.
pub fn parse_cell(code: &str) -> Result<Option<Color>, GameError> {
    match code {
        "." | " " => Ok(None),
        "b" | "B" | "X" => Ok(Some(Color::Black)),
        "w" | "W" | "O" => Ok(Some(Color::White)),
        _ => Err(GameError::InvalidCellValue(code.to_string())),
    }
}

/// Canonical row-major serialization of a board, one character per cell.
///
/// Two boards with the same stones always produce equal snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Color>; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: usize = N;

    pub fn new() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    /// Build a board from a diagram: `N` lines of `N` whitespace-separated
    /// tokens (`.` empty, `b` black, `w` white). Blank lines are ignored.
    pub fn parse(diagram: &str) -> Result<Self, GameError> {
        let rows: Vec<Vec<&str>> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.split_whitespace().collect())
            .collect();
        if rows.len() != N || rows.iter().any(|r| r.len() != N) {
            return Err(GameError::BoardSize {
                expected: N,
                rows: rows.len(),
                widths: rows.iter().map(Vec::len).collect(),
            });
        }

        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, token) in row.iter().enumerate() {
                board.cells[y][x] = parse_cell(token)?;
            }
        }
        Ok(board)
    }

    pub fn in_bounds(x: usize, y: usize) -> bool {
        x < N && y < N
    }

    /// Cell at `(x, y)`; out-of-bounds reads as empty.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        self.cells[y][x]
    }

    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        Self::in_bounds(x, y) && self.cells[y][x].is_none()
    }

    /// Write a cell. Panics when `(x, y)` is off the board: callers validate
    /// coordinates before mutating.
    pub fn set(&mut self, x: usize, y: usize, cell: Option<Color>) {
        assert!(
            Self::in_bounds(x, y),
            "write outside the {N}x{N} board at ({x}, {y})"
        );
        self.cells[y][x] = cell;
    }

    pub fn place(&mut self, (x, y): Point, color: Color) {
        self.set(x, y, Some(color));
    }

    pub fn clear(&mut self, (x, y): Point) {
        self.set(x, y, None);
    }

    /// In-bounds orthogonal neighbors of `(x, y)`.
    pub fn neighbors(x: usize, y: usize) -> impl Iterator<Item = Point> {
        DELTA.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            Self::in_bounds(nx, ny).then_some((nx, ny))
        })
    }

    /// Every coordinate of the board in row-major order.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..N).flat_map(|y| (0..N).map(move |x| (x, y)))
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Some(color))
            .count()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.cells.iter().flatten().map(|&c| cell_code(c)).collect())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
