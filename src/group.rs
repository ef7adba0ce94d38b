//! Connected groups of same-colored stones.

use std::collections::HashSet;

use crate::board::{Board, Color, Point};

/// A maximal set of same-colored stones connected orthogonally.
pub type Group = HashSet<Point>;

/// Collect the group of `color` containing `(x, y)`.
///
/// Returns an empty group when `(x, y)` is off the board or does not hold a
/// `color` stone. Uses an explicit stack and visited set, so cycles and large
/// groups cannot blow the call stack.
pub fn find_group(board: &Board, x: usize, y: usize, color: Color) -> Group {
    let mut group = Group::new();
    if board.get(x, y) != Some(color) {
        return group;
    }

    let mut stack = vec![(x, y)];
    while let Some((cx, cy)) = stack.pop() {
        if !group.insert((cx, cy)) {
            continue;
        }
        for (nx, ny) in Board::neighbors(cx, cy) {
            if board.get(nx, ny) == Some(color) && !group.contains(&(nx, ny)) {
                stack.push((nx, ny));
            }
        }
    }
    group
}

/// The distinct non-empty groups of `color` orthogonally adjacent to `(x, y)`.
pub fn adjacent_groups(board: &Board, x: usize, y: usize, color: Color) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::with_capacity(4);
    for (nx, ny) in Board::neighbors(x, y) {
        if groups.iter().any(|g| g.contains(&(nx, ny))) {
            continue;
        }
        let group = find_group(board, nx, ny, color);
        if !group.is_empty() {
            groups.push(group);
        }
    }
    groups
}
