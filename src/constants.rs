//! Constants for board dimensions and board serialization.
//!
//! # Board Size Configuration
//!
//! The board size is fixed at compile time by Cargo features:
//! - `board5x5` (default): 5x5 board
//! - `board7x7`: 7x7 board
//! - `board9x9`: 9x9 board
//!
//! ```sh
//! cargo build                                              # 5x5 (default)
//! cargo build --no-default-features --features board9x9    # 9x9
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
#[cfg(feature = "board5x5")]
pub const N: usize = 5;

#[cfg(feature = "board7x7")]
pub const N: usize = 7;

#[cfg(feature = "board9x9")]
pub const N: usize = 9;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(any(
    all(feature = "board5x5", feature = "board7x7"),
    all(feature = "board5x5", feature = "board9x9"),
    all(feature = "board7x7", feature = "board9x9"),
))]
compile_error!("Enable only one of the 'board5x5', 'board7x7' and 'board9x9' features");

#[cfg(not(any(feature = "board5x5", feature = "board7x7", feature = "board9x9")))]
compile_error!("Must enable exactly one board size feature: 'board5x5', 'board7x7' or 'board9x9'");

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// Orthogonal neighbor offsets as (dx, dy): left, right, up, down.
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Repetition History
// =============================================================================

/// Number of board snapshots kept for the ko check (two plies).
pub const HISTORY_LEN: usize = 2;

// =============================================================================
// Snapshot Codes (one character per cell)
// =============================================================================

/// Empty point.
pub const CODE_EMPTY: char = ' ';

/// Black stone.
pub const CODE_BLACK: char = 'b';

/// White stone.
pub const CODE_WHITE: char = 'w';
