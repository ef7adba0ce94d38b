//! Removal of opponent groups left without liberties.

use crate::board::{Board, Color, Point};
use crate::group::find_group;
use crate::liberty::{LibertyMap, group_liberties};

/// Stones captured so far, indexed by the color that captured them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    pub black: usize,
    pub white: usize,
}

impl Captures {
    pub fn get(&self, capturer: Color) -> usize {
        match capturer {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn add(&mut self, capturer: Color, count: usize) {
        match capturer {
            Color::Black => self.black += count,
            Color::White => self.white += count,
        }
    }
}

/// Remove every `opponent` group next to `last_move` that has no liberties.
///
/// `libs` must describe the board right after the stone at `last_move` was
/// placed and before any removal. Cleared stones are credited to the color
/// that played `last_move`. Returns the removed coordinates, sorted.
pub fn resolve_captures(
    board: &mut Board,
    libs: &LibertyMap,
    last_move: Point,
    opponent: Color,
    captures: &mut Captures,
) -> Vec<Point> {
    let (x, y) = last_move;
    let mut removed = Vec::new();
    for (nx, ny) in Board::neighbors(x, y) {
        // A group already removed through another neighbor reads as empty here.
        let group = find_group(board, nx, ny, opponent);
        if group.is_empty() || group_liberties(&group, libs) > 0 {
            continue;
        }
        for &p in &group {
            board.clear(p);
        }
        captures.add(opponent.opponent(), group.len());
        removed.extend(group);
    }
    removed.sort_unstable();
    removed
}
