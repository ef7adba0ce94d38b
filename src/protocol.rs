//! Line-oriented text protocol for driving a [`GameSession`].
//!
//! The protocol borrows its framing from GTP: each line is an optional numeric
//! id, a command and its arguments; each response is `=[id] message` on success
//! or `?[id] message` on failure, followed by a blank line. It stands in for a
//! graphical front end: coordinates are `x y` with `0 0` in the top-left corner.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `list_commands`, `known_command <cmd>`, `quit`
//! - `boardsize <size>` - Accepted only for the compiled-in size
//! - `clear_board` / `new_game` - Start a new game (win counts are kept)
//! - `play <x> <y>` - Play for the player to move
//! - `possible_moves [black|white]` - Legal cells as rows of `1` / `0`
//! - `hover <x> <y>`, `clear_hover` - Highlight a legal cell
//! - `showboard`, `turn`, `captures`, `wins`
//! - `end_game` - Score the board and name the winner
//!
//! ## Example
//!
//! ```
//! use petit_go::protocol::ProtocolEngine;
//!
//! let mut engine = ProtocolEngine::new();
//! let mut out = Vec::new();
//! engine.run("play 1 1\n1 turn\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "= \n\n=1 white\n\n");
//! ```

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::board::{Board, Color};
use crate::constants::N;
use crate::session::GameSession;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "clear_hover",
    "end_game",
    "hover",
    "known_command",
    "list_commands",
    "name",
    "new_game",
    "play",
    "possible_moves",
    "quit",
    "showboard",
    "turn",
    "version",
    "wins",
];

/// Protocol front end owning one session.
#[derive(Default)]
pub struct ProtocolEngine {
    session: GameSession,
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Process commands from `input` until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n").context("writing response")?;
            output.flush().context("flushing response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn parse_point(args: &[&str]) -> Result<(usize, usize), String> {
        match args {
            [x, y, ..] => {
                let x = x.parse::<usize>().map_err(|_| format!("invalid x {x:?}"))?;
                let y = y.parse::<usize>().map_err(|_| format!("invalid y {y:?}"))?;
                Ok((x, y))
            }
            _ => Err("missing arguments".to_string()),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "boardsize" => match args.first().map(|a| a.parse::<usize>()) {
                None => (false, "missing argument".to_string()),
                Some(Ok(size)) if size == N => (true, String::new()),
                Some(Ok(size)) => (
                    false,
                    format!("unacceptable size, only {N} is supported (got {size})"),
                ),
                Some(Err(_)) => (false, "invalid size".to_string()),
            },

            "clear_board" | "new_game" => {
                self.session.new_game();
                (true, String::new())
            }

            "play" => {
                let (x, y) = match Self::parse_point(args) {
                    Ok(p) => p,
                    Err(e) => return (false, e),
                };
                match self.session.play(x, y) {
                    Ok(outcome) if outcome.captured.is_empty() => (true, String::new()),
                    Ok(outcome) => {
                        let captured: Vec<String> = outcome
                            .captured
                            .iter()
                            .map(|(cx, cy)| format!("{cx},{cy}"))
                            .collect();
                        (true, format!("captured {}", captured.join(" ")))
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "possible_moves" => {
                let player = match args.first() {
                    Some(name) => match name.parse::<Color>() {
                        Ok(c) => c,
                        Err(e) => return (false, e.to_string()),
                    },
                    None => self.session.current_player(),
                };
                let mask = self.session.possible_moves(player);
                let rows: Vec<String> = mask
                    .rows()
                    .iter()
                    .map(|row| row.iter().map(|&b| if b { '1' } else { '0' }).collect())
                    .collect();
                (true, rows.join("\n"))
            }

            "hover" => {
                let (x, y) = match Self::parse_point(args) {
                    Ok(p) => p,
                    Err(e) => return (false, e),
                };
                if self.session.set_hover(x, y) {
                    (true, String::new())
                } else {
                    (false, "not a legal move".to_string())
                }
            }

            "clear_hover" => {
                self.session.clear_hover();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.render_board())),

            "turn" => (true, self.session.current_player().to_string()),

            "captures" => {
                let c = self.session.captures();
                (true, format!("black {} white {}", c.black, c.white))
            }

            "wins" => {
                let w = self.session.wins();
                (true, format!("black {} white {}", w.black, w.white))
            }

            "end_game" => match self.session.end_game() {
                Ok(result) => (true, result.to_string()),
                Err(e) => (false, e.to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// The board with the hovered cell drawn as `*`.
    fn render_board(&self) -> String {
        let board = self.session.board();
        let mut out = String::new();
        for y in 0..Board::SIZE {
            let row: Vec<&str> = (0..Board::SIZE)
                .map(|x| match board.get(x, y) {
                    Some(Color::Black) => "X",
                    Some(Color::White) => "O",
                    None if self.session.hover() == Some((x, y)) => "*",
                    None => ".",
                })
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out.pop();
        out
    }
}
