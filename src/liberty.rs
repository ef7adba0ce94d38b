//! Per-cell liberties and group liberty counting.

use std::collections::HashSet;

use crate::board::{Board, Point};
use crate::constants::N;
use crate::group::Group;

/// For every occupied cell, the orthogonally adjacent empty cells.
///
/// Empty cells have no entry (an empty slice). Liberties here are per stone;
/// use [`group_liberties`] to count the liberties of a whole group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibertyMap {
    cells: [[Vec<Point>; N]; N],
}

impl LibertyMap {
    /// Liberties of the stone at `(x, y)`; empty for empty or off-board cells.
    pub fn at(&self, x: usize, y: usize) -> &[Point] {
        if !Board::in_bounds(x, y) {
            return &[];
        }
        &self.cells[y][x]
    }
}

/// Compute the liberty map of `board` in one pass.
pub fn liberties(board: &Board) -> LibertyMap {
    let mut cells: [[Vec<Point>; N]; N] = std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()));
    for (x, y) in Board::points() {
        if board.get(x, y).is_none() {
            continue;
        }
        cells[y][x] = Board::neighbors(x, y)
            .filter(|&(nx, ny)| board.is_empty_at(nx, ny))
            .collect();
    }
    LibertyMap { cells }
}

/// Number of distinct liberties of `group`.
///
/// This is the size of the union of the stones' liberty sets: an empty cell
/// shared by several stones counts once.
pub fn group_liberties(group: &Group, libs: &LibertyMap) -> usize {
    group
        .iter()
        .flat_map(|&(x, y)| libs.at(x, y).iter().copied())
        .collect::<HashSet<Point>>()
        .len()
}
