//! End-of-game area estimate.
//!
//! Stones count for their own color. An empty point counts for whichever
//! color holds the majority of its orthogonal neighbors, and for nobody on a
//! tie. This looks one step around each point only; large empty regions are
//! not flood-filled, so enclosed territory far from any stone counts for nobody.

use std::fmt;

use crate::board::{Board, Color};

/// Area counts at the end of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub black: usize,
    pub white: usize,
}

impl GameResult {
    /// The color with the larger area, `None` on a draw.
    pub fn winner(&self) -> Option<Color> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let winner = self.winner().map_or("Nobody", |c| match c {
            Color::Black => "Black",
            Color::White => "White",
        });
        write!(f, "black {} white {} winner {winner}", self.black, self.white)
    }
}

/// Influence of a neighbor on an empty point: Black +1, White -1, empty 0.
fn influence(cell: Option<Color>) -> i32 {
    match cell {
        Some(Color::Black) => 1,
        Some(Color::White) => -1,
        None => 0,
    }
}

/// Owner of a point: its stone, or the neighbor majority when empty.
pub fn owner(board: &Board, x: usize, y: usize) -> Option<Color> {
    if let Some(stone) = board.get(x, y) {
        return Some(stone);
    }
    let balance: i32 = Board::neighbors(x, y)
        .map(|(nx, ny)| influence(board.get(nx, ny)))
        .sum();
    match balance {
        b if b > 0 => Some(Color::Black),
        b if b < 0 => Some(Color::White),
        _ => None,
    }
}

pub fn score(board: &Board) -> GameResult {
    let mut result = GameResult { black: 0, white: 0 };
    for (x, y) in Board::points() {
        match owner(board, x, y) {
            Some(Color::Black) => result.black += 1,
            Some(Color::White) => result.white += 1,
            None => {}
        }
    }
    result
}
