//! Integration tests for petit-go
//!
//! Scenario tests drive a `GameSession` through short games; property tests
//! generate random boards and random legal games from fixed seeds.

use std::collections::HashSet;

use petit_go::GameError;
use petit_go::board::{Board, Color, Point};
use petit_go::constants::N;
use petit_go::group::find_group;
use petit_go::legality::{History, check_move, is_legal, possible_moves};
use petit_go::liberty::{group_liberties, liberties};
use petit_go::scoring::score;
use petit_go::session::{GameSession, SessionState};

// =============================================================================
// Helper functions
// =============================================================================

/// Play the moves in order, alternating colors from Black.
/// Panics on an illegal move.
fn setup(moves: &[Point]) -> GameSession {
    let mut session = GameSession::new();
    for &(x, y) in moves {
        if let Err(e) = session.play(x, y) {
            panic!("illegal setup move ({x}, {y}): {e}");
        }
    }
    session
}

/// Pad a diagram's top-left corner with empty cells up to the board size.
fn diagram(rows: &[&str]) -> Board {
    let mut lines = Vec::new();
    for y in 0..N {
        let mut cells: Vec<&str> = rows
            .get(y)
            .map(|r| r.split_whitespace().collect())
            .unwrap_or_default();
        cells.resize(N, ".");
        lines.push(cells.join(" "));
    }
    Board::parse(&lines.join("\n")).expect("valid diagram")
}

fn random_board(rng: &mut fastrand::Rng) -> Board {
    let mut board = Board::new();
    for (x, y) in Board::points() {
        let cell = match rng.u8(0..3) {
            0 => None,
            1 => Some(Color::Black),
            _ => Some(Color::White),
        };
        board.set(x, y, cell);
    }
    board
}

// =============================================================================
// Possible moves
// =============================================================================

#[test]
fn test_possible_moves_after_first_stone() {
    let session = setup(&[(3, 0)]);
    let mask = session.possible_moves(Color::White);

    assert!(!mask.get(3, 0), "occupied cell is not playable");
    for (x, y) in Board::points() {
        if (x, y) != (3, 0) {
            assert!(mask.get(x, y), "({x}, {y}) should be legal for White");
        }
    }
    assert_eq!(mask.count(), N * N - 1);
}

#[test]
fn test_possible_moves_do_not_mutate_session() {
    let session = setup(&[(1, 0), (2, 0), (0, 1)]);
    let board = session.board().clone();
    let history = session.history().clone();

    let _ = session.possible_moves(Color::White);
    let _ = session.possible_moves(Color::Black);

    assert_eq!(session.board(), &board);
    assert_eq!(session.history(), &history);
}

// =============================================================================
// Capture tests
// =============================================================================

#[test]
fn test_capture_surrounded_stone() {
    // White at (1,1), Black closes (0,1), (2,1), (1,0) and finally (1,2).
    let mut session = setup(&[(0, 1), (1, 1), (2, 1), (4, 4), (1, 0), (4, 3)]);
    assert_eq!(session.board().get(1, 1), Some(Color::White));

    let outcome = session.play(1, 2).unwrap();
    assert_eq!(outcome.player, Color::Black);
    assert_eq!(outcome.captured, vec![(1, 1)]);
    assert_eq!(session.board().get(1, 1), None);
    assert_eq!(session.captures().black, 1);
    assert_eq!(session.captures().white, 0);
}

#[test]
fn test_capture_group_counts_every_stone() {
    // White pair on the top edge, Black seals it.
    //   b w w b
    //   . b b .
    let mut session = setup(&[(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (4, 4)]);
    let outcome = session.play(3, 0).unwrap();
    assert_eq!(outcome.captured, vec![(1, 0), (2, 0)]);
    assert_eq!(session.captures().get(Color::Black), 2);
    assert_eq!(session.board().count(Color::White), 1);
}

#[test]
fn test_capture_into_zero_liberty_point_is_legal() {
    // . w b
    // w b .
    // b . .
    let board = diagram(&[". w b", "w b .", "b . ."]);
    let libs = liberties(&board);
    assert!(is_legal(&board, &libs, &History::new(), 0, 0, Color::Black));
    assert!(!is_legal(&board, &libs, &History::new(), 0, 0, Color::White));
}

// =============================================================================
// Suicide tests
// =============================================================================

#[test]
fn test_suicide_into_enclosed_point() {
    // . b .
    // b . b
    // . b .     White at (1,1) touches only Black stones with spare liberties.
    let mut session = setup(&[(1, 0), (4, 4), (0, 1), (4, 3), (2, 1), (4, 2), (1, 2)]);
    assert_eq!(session.current_player(), Color::White);
    assert_eq!(session.play(1, 1), Err(GameError::Suicide));
    assert_eq!(session.current_player(), Color::White);
    assert!(!session.possible_moves(Color::White).get(1, 1));
    // Black may fill its own eye.
    assert!(session.possible_moves(Color::Black).get(1, 1));
}

#[test]
fn test_corner_suicide() {
    let mut session = setup(&[(1, 0), (4, 4), (0, 1)]);
    assert_eq!(session.play(0, 0), Err(GameError::Suicide));
}

#[test]
fn test_filling_last_liberty_of_own_group_is_suicide() {
    // w b .
    // . b .
    // b . .     White at (0, 1) would fill the last liberty of its own stone.
    let board = diagram(&["w b .", ". b .", "b . ."]);
    let libs = liberties(&board);
    assert_eq!(
        check_move(&board, &libs, &History::new(), 0, 1, Color::White),
        Err(GameError::Suicide)
    );
    // Black capturing at the same point is fine.
    assert_eq!(
        check_move(&board, &libs, &History::new(), 0, 1, Color::Black),
        Ok(())
    );
}

// =============================================================================
// Ko tests
// =============================================================================

/// . b w . .
/// b w . w .
/// . b w . .
const KO_SETUP: [Point; 8] = [(1, 0), (2, 0), (0, 1), (1, 1), (1, 2), (3, 1), (4, 4), (2, 2)];

#[test]
fn test_ko_immediate_recapture_rejected() {
    let mut session = setup(&KO_SETUP);
    let before_capture = session.board().snapshot();

    let outcome = session.play(2, 1).unwrap();
    assert_eq!(outcome.captured, vec![(1, 1)]);

    assert_eq!(session.play(1, 1), Err(GameError::Ko));
    assert_eq!(session.current_player(), Color::White);
    assert!(!session.possible_moves(Color::White).get(1, 1));
    assert!(!session.set_hover(1, 1));
    assert_ne!(session.board().snapshot(), before_capture);
}

#[test]
fn test_ko_can_be_retaken_after_exchange_elsewhere() {
    let mut session = setup(&KO_SETUP);
    session.play(2, 1).unwrap();
    session.play(4, 0).unwrap(); // White elsewhere
    session.play(3, 4).unwrap(); // Black elsewhere

    let outcome = session.play(1, 1).unwrap();
    assert_eq!(outcome.captured, vec![(2, 1)]);
    assert_eq!(session.captures().white, 1);
    assert_eq!(session.captures().black, 1);
}

// =============================================================================
// Scoring and session lifecycle
// =============================================================================

#[test]
fn test_end_game_black_wins() {
    let mut session = setup(&[(1, 1), (4, 4), (3, 1)]);
    let result = session.end_game().unwrap();
    assert!(result.black > result.white);
    assert_eq!(result.winner(), Some(Color::Black));
    assert_eq!(session.state(), SessionState::GameOver);
    assert_eq!(session.wins().black, 1);
}

#[test]
fn test_end_game_symmetric_position_is_draw() {
    let mut session = setup(&[(0, 0), (N - 1, N - 1)]);
    let result = session.end_game().unwrap();
    assert_eq!(result.black, result.white);
    assert_eq!(result.winner(), None);
    assert_eq!(session.wins().black + session.wins().white, 0);
}

#[test]
fn test_wins_persist_across_games() {
    let mut session = GameSession::new();
    for _ in 0..2 {
        session.play(2, 2).unwrap();
        session.end_game().unwrap();
        session.new_game();
    }
    session.play(0, 0).unwrap();
    session.play(2, 2).unwrap();
    session.play(0, 4).unwrap();
    session.play(2, 3).unwrap();
    session.end_game().unwrap();

    assert_eq!(session.wins().black, 2);
    assert_eq!(session.wins().white, 1);
}

#[test]
fn test_score_counts_majority_points() {
    let board = diagram(&["b . w", ". . .", "b . ."]);
    // Black: 2 stones plus (0,1), (1,2) and (0,3). (1,0) is contested.
    // White: 1 stone plus (3,0) and (2,1).
    let result = score(&board);
    assert_eq!(result.black, 5);
    assert_eq!(result.white, 3);
}

// =============================================================================
// Properties over random boards and games
// =============================================================================

#[test]
fn test_group_liberties_match_distinct_adjacent_empties() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..200 {
        let board = random_board(&mut rng);
        let libs = liberties(&board);
        for (x, y) in Board::points() {
            let Some(color) = board.get(x, y) else {
                continue;
            };
            let group = find_group(&board, x, y, color);
            let adjacent_empty: HashSet<Point> = group
                .iter()
                .flat_map(|&(gx, gy)| Board::neighbors(gx, gy))
                .filter(|&(nx, ny)| board.is_empty_at(nx, ny))
                .collect();
            let counted = group_liberties(&group, &libs);
            assert!(counted <= adjacent_empty.len());
            assert_eq!(counted, adjacent_empty.len());
        }
    }
}

#[test]
fn test_find_group_is_idempotent() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..100 {
        let board = random_board(&mut rng);
        let (x, y) = (rng.usize(..N), rng.usize(..N));
        for color in [Color::Black, Color::White] {
            assert_eq!(
                find_group(&board, x, y, color),
                find_group(&board, x, y, color)
            );
        }
    }
}

#[test]
fn test_occupied_cells_are_never_legal() {
    let mut rng = fastrand::Rng::with_seed(23);
    for _ in 0..100 {
        let board = random_board(&mut rng);
        for player in [Color::Black, Color::White] {
            let mask = possible_moves(&board, &History::new(), player);
            for (x, y) in Board::points() {
                if board.get(x, y).is_some() {
                    assert!(!mask.get(x, y));
                }
            }
        }
    }
}

#[test]
fn test_random_games_keep_invariants() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..30 {
        let mut session = GameSession::new();
        let mut placed = 0usize;
        let mut two_plies_ago = None;
        let mut last = Some(session.board().snapshot());

        for _ in 0..(N * N * 3) {
            let player = session.current_player();
            let mask = session.possible_moves(player);
            let legal: Vec<Point> = Board::points().filter(|&(x, y)| mask.get(x, y)).collect();
            if legal.is_empty() {
                break;
            }
            let (x, y) = legal[rng.usize(..legal.len())];
            let outcome = session.play(x, y).expect("mask promised a legal move");
            placed += 1;

            let board = session.board();
            // Captured stones are accounted for exactly.
            let captures = session.captures();
            let on_board = board.count(Color::Black) + board.count(Color::White);
            assert_eq!(on_board + captures.black + captures.white, placed);
            assert!(outcome.captured.iter().all(|&(cx, cy)| cx != x || cy != y));

            // Every group left on the board can breathe.
            let libs = liberties(board);
            for (px, py) in Board::points() {
                if let Some(color) = board.get(px, py) {
                    let group = find_group(board, px, py, color);
                    assert!(group_liberties(&group, &libs) > 0);
                }
            }

            // No move recreates the position from two plies before.
            let now = board.snapshot();
            if let Some(prev) = &two_plies_ago {
                assert_ne!(&now, prev);
            }
            two_plies_ago = last.replace(now);
        }
    }
}
