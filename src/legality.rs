//! Move legality: bounds, occupancy, suicide and ko.
//!
//! Ko is positional and short-ranged: a move is refused when the board it
//! produces (after captures) equals the board from two plies earlier. Only the
//! last [`HISTORY_LEN`] snapshots are kept for this comparison.

use std::collections::VecDeque;

use crate::board::{Board, Color, Point, Snapshot};
use crate::capture::{Captures, resolve_captures};
use crate::constants::{HISTORY_LEN, N};
use crate::error::GameError;
use crate::group::adjacent_groups;
use crate::liberty::{LibertyMap, group_liberties, liberties};

/// The most recent board snapshots, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the position after a move, dropping anything older than two plies.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.snapshots.len() == HISTORY_LEN {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// The position a new move must not recreate, once two plies have been played.
    pub fn ko_reference(&self) -> Option<&Snapshot> {
        if self.snapshots.len() < HISTORY_LEN {
            return None;
        }
        self.snapshots.front()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

/// Check whether `player` may play at `(x, y)`, and say why not.
///
/// `libs` must be the liberty map of `board`.
pub fn check_move(
    board: &Board,
    libs: &LibertyMap,
    history: &History,
    x: usize,
    y: usize,
    player: Color,
) -> Result<(), GameError> {
    if !Board::in_bounds(x, y) {
        return Err(GameError::InvalidCoordinate { x, y });
    }
    if board.get(x, y).is_some() {
        return Err(GameError::Occupied);
    }

    let has_liberty = Board::neighbors(x, y).any(|(nx, ny)| board.is_empty_at(nx, ny));
    if !has_liberty {
        // Joining a friendly group that keeps another liberty is safe.
        let connects = adjacent_groups(board, x, y, player)
            .iter()
            .any(|g| group_liberties(g, libs) >= 2);
        // Taking the last liberty of an opponent group captures it.
        let captures = adjacent_groups(board, x, y, player.opponent())
            .iter()
            .any(|g| group_liberties(g, libs) == 1);
        if !connects && !captures {
            return Err(GameError::Suicide);
        }
    }

    if let Some(reference) = history.ko_reference() {
        if &play_on_copy(board, (x, y), player) == reference {
            return Err(GameError::Ko);
        }
    }
    Ok(())
}

/// Whether `player` may play at `(x, y)`.
pub fn is_legal(
    board: &Board,
    libs: &LibertyMap,
    history: &History,
    x: usize,
    y: usize,
    player: Color,
) -> bool {
    check_move(board, libs, history, x, y, player).is_ok()
}

/// Snapshot of the board after `player` plays `pt` and captures are removed.
fn play_on_copy(board: &Board, pt: Point, player: Color) -> Snapshot {
    let mut next = board.clone();
    next.place(pt, player);
    let libs = liberties(&next);
    resolve_captures(&mut next, &libs, pt, player.opponent(), &mut Captures::default());
    next.snapshot()
}

/// Legal target cells for one player, indexed `[y][x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveMask {
    cells: [[bool; N]; N],
}

impl MoveMask {
    pub fn get(&self, x: usize, y: usize) -> bool {
        Board::in_bounds(x, y) && self.cells[y][x]
    }

    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&b| b).count()
    }

    pub fn rows(&self) -> &[[bool; N]; N] {
        &self.cells
    }
}

/// Evaluate [`is_legal`] on every cell of the board for `player`.
pub fn possible_moves(board: &Board, history: &History, player: Color) -> MoveMask {
    let libs = liberties(board);
    let mut cells = [[false; N]; N];
    for (x, y) in Board::points() {
        cells[y][x] = is_legal(board, &libs, history, x, y, player);
    }
    MoveMask { cells }
}
