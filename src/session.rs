//! Game session: turn order, move pipeline and game-over / new-game transitions.
//!
//! A [`GameSession`] owns the board and the ko history. Every mutation goes
//! through its `&mut self` actions, each of which runs to completion
//! (legality, placement, captures, history, turn flip) before returning.
//! Queries take `&self` and never touch session state. A multi-threaded host
//! should put the whole session behind one `Mutex`.

use log::{debug, info, trace};

use crate::board::{Board, Color, Point};
use crate::capture::{Captures, resolve_captures};
use crate::error::GameError;
use crate::legality::{History, MoveMask, check_move, possible_moves};
use crate::liberty::{LibertyMap, liberties};
use crate::scoring::{GameResult, score};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    GameOver,
}

/// Games won per color. Survives [`GameSession::new_game`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Wins {
    pub black: u32,
    pub white: u32,
}

impl Wins {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// An accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Color,
    pub point: Point,
    /// Opponent stones removed by this move, sorted.
    pub captured: Vec<Point>,
}

/// Change notifications delivered to registered observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    MovePlayed {
        outcome: MoveOutcome,
        board: Board,
        captures: Captures,
    },
    HoverChanged(Option<Point>),
    GameOver {
        result: GameResult,
        wins: Wins,
    },
    NewGame,
}

/// Listener for session changes, typically a renderer.
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent);
}

pub struct GameSession {
    board: Board,
    history: History,
    current: Color,
    captures: Captures,
    wins: Wins,
    hover: Option<Point>,
    result: Option<GameResult>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Black moves first.
    pub const FIRST_PLAYER: Color = Color::Black;

    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: History::new(),
            current: Self::FIRST_PLAYER,
            captures: Captures::default(),
            wins: Wins::default(),
            hover: None,
            result: None,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_player(&self) -> Color {
        self.current
    }

    pub fn captures(&self) -> Captures {
        self.captures
    }

    pub fn wins(&self) -> Wins {
        self.wins
    }

    pub fn hover(&self) -> Option<Point> {
        self.hover
    }

    /// Final areas, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn state(&self) -> SessionState {
        if self.result.is_some() {
            SessionState::GameOver
        } else {
            SessionState::InProgress
        }
    }

    pub fn liberties(&self) -> LibertyMap {
        liberties(&self.board)
    }

    /// Why the current player may not play at `(x, y)`, if anything.
    pub fn check(&self, x: usize, y: usize) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        check_move(&self.board, &self.liberties(), &self.history, x, y, self.current)
    }

    /// Legal cells for `player` on the current board.
    pub fn possible_moves(&self, player: Color) -> MoveMask {
        possible_moves(&self.board, &self.history, player)
    }

    /// Play the current player's stone at `(x, y)`.
    ///
    /// On error nothing changes and the same player is still to move.
    pub fn play(&mut self, x: usize, y: usize) -> Result<MoveOutcome, GameError> {
        let player = self.current;
        if let Err(err) = self.check(x, y) {
            trace!("{player} ({x}, {y}) rejected: {err}");
            return Err(err);
        }

        self.board.place((x, y), player);
        let libs = liberties(&self.board);
        let captured = resolve_captures(
            &mut self.board,
            &libs,
            (x, y),
            player.opponent(),
            &mut self.captures,
        );
        self.history.push(self.board.snapshot());
        self.current = player.opponent();
        self.hover = None;

        debug!("{player} plays ({x}, {y}), captures {captured:?}");
        let outcome = MoveOutcome {
            player,
            point: (x, y),
            captured,
        };
        self.notify(SessionEvent::MovePlayed {
            outcome: outcome.clone(),
            board: self.board.clone(),
            captures: self.captures,
        });
        Ok(outcome)
    }

    /// Highlight `(x, y)` if the current player could play there.
    ///
    /// A refused cell clears any previous highlight. Returns whether the cell
    /// was accepted.
    pub fn set_hover(&mut self, x: usize, y: usize) -> bool {
        let accepted = self.check(x, y).is_ok();
        trace!("hover ({x}, {y}) accepted: {accepted}");
        self.update_hover(accepted.then_some((x, y)));
        accepted
    }

    pub fn clear_hover(&mut self) {
        self.update_hover(None);
    }

    fn update_hover(&mut self, hover: Option<Point>) {
        if self.hover != hover {
            self.hover = hover;
            self.notify(SessionEvent::HoverChanged(hover));
        }
    }

    /// Score the board, credit the winner and end the game.
    pub fn end_game(&mut self) -> Result<GameResult, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        let result = score(&self.board);
        match result.winner() {
            Some(Color::Black) => self.wins.black += 1,
            Some(Color::White) => self.wins.white += 1,
            None => {}
        }
        self.result = Some(result);
        self.hover = None;

        info!("game over: {result}");
        self.notify(SessionEvent::GameOver {
            result,
            wins: self.wins,
        });
        Ok(result)
    }

    /// Reset everything but the win tallies.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current = Self::FIRST_PLAYER;
        self.captures = Captures::default();
        self.hover = None;
        self.result = None;

        info!("new game, wins so far {:?}", self.wins);
        self.notify(SessionEvent::NewGame);
    }
}
