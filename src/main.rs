//! Petit-Go: a small Go-like territory game engine.
//!
//! ## Usage
//!
//! - `petit-go` - Show a demo
//! - `petit-go play` - Read protocol commands from stdin
//! - `petit-go demo` - Walk through a capture, a ko and the final score
//!
//! Logging goes to stderr; raise it with `-v` / `-vv` or `RUST_LOG`.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use petit_go::board::Color;
use petit_go::protocol::ProtocolEngine;
use petit_go::session::GameSession;

/// Petit-Go: rules engine for a small Go-like game
#[derive(Parser)]
#[command(name = "petit-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read text protocol commands from stdin and answer on stdout
    Play,
    /// Run a scripted demo game
    Demo,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Play) => {
            let mut engine = ProtocolEngine::new();
            engine
                .run(io::stdin().lock(), io::stdout().lock())
                .context("protocol session failed")?;
        }
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Petit-Go: rules engine demo\n");
    let mut session = GameSession::new();

    // . b w . .
    // b w . w .
    // . b w . .
    println!("=== Ko ===");
    let setup = [(1, 0), (2, 0), (0, 1), (1, 1), (1, 2), (3, 1), (4, 4), (2, 2)];
    for (x, y) in setup {
        session.play(x, y).context("setting up the ko shape")?;
    }
    print!("{}", session.board());

    let outcome = session.play(2, 1)?;
    println!("Black at (2,1) captures {:?}", outcome.captured);
    print!("{}", session.board());

    match session.play(1, 1) {
        Ok(_) => println!("White at (1,1): accepted"),
        Err(e) => println!("White at (1,1): {e}"),
    }
    let mask = session.possible_moves(Color::White);
    println!("White has {} legal moves\n", mask.count());

    println!("=== Score ===");
    let result = session.end_game()?;
    println!("{result}");
    let wins = session.wins();
    println!("Wins: black {} white {}", wins.black, wins.white);
    Ok(())
}
