//! Petit-Go: rules engine for a small Go-like territory game.
//!
//! The engine decides move legality (bounds, occupancy, suicide, ko), finds
//! groups and their liberties, removes captured stones and estimates area at
//! the end of the game. Rendering and input are left to the caller, which
//! drives a [`session::GameSession`] and reads back boards, legal-move masks
//! and results.
//!
//! ## Modules
//!
//! - [`constants`] - Board size (selected by Cargo feature) and snapshot codes
//! - [`board`] - Board state, colors, coordinates and snapshots
//! - [`group`] - Connected groups of stones
//! - [`liberty`] - Per-stone liberties and group liberty counts
//! - [`legality`] - Move legality and the two-ply ko history
//! - [`capture`] - Removal of captured groups
//! - [`scoring`] - Neighbor-majority area scoring
//! - [`session`] - Turn order, game over and new game
//! - [`protocol`] - Text command loop over a session
//! - [`error`] - Error type
//!
//! ## Example
//!
//! ```
//! use petit_go::board::Color;
//! use petit_go::session::GameSession;
//!
//! let mut session = GameSession::new();
//! session.play(1, 0).unwrap(); // black
//! session.play(0, 0).unwrap(); // white
//! let outcome = session.play(0, 1).unwrap(); // black captures the corner stone
//! assert_eq!(outcome.captured, vec![(0, 0)]);
//! assert_eq!(session.captures().get(Color::Black), 1);
//!
//! let result = session.end_game().unwrap();
//! assert_eq!(result.winner(), Some(Color::Black));
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod error;
pub mod group;
pub mod legality;
pub mod liberty;
pub mod protocol;
pub mod scoring;
pub mod session;

pub use error::GameError;
