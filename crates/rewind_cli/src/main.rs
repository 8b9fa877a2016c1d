//! Line-oriented client for rewind_tictactoe.
//!
//! The rendering collaborator in its smallest form: prints the board, the
//! status line, and the move list after every command, and forwards
//! `play`/`jump` requests to the game state. Rejected requests are
//! reported and ignored, never fatal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result, bail};
use clap::Parser;
use rewind_tictactoe::{GameState, Position, rules};
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_cli")]
#[command(about = "Play tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
struct Cli {
    /// Comma-separated cell indices (0-8) to play before reading commands
    #[arg(long)]
    script: Option<String>,

    /// Exit after the script instead of reading commands
    #[arg(long)]
    no_interactive: bool,

    /// Print the final game state as JSON on exit
    #[arg(long)]
    dump_json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut game = GameState::new();

    if let Some(script) = &cli.script {
        run_script(&mut game, script)?;
    }
    render(&game);

    if !cli.no_interactive {
        repl(&mut game)?;
    }

    if cli.dump_json {
        let json =
            serde_json::to_string_pretty(&game).context("Failed to serialize game state")?;
        println!("{json}");
    }

    Ok(())
}

/// Plays a comma-separated list of cell indices.
///
/// Malformed input is fatal; moves the game rejects are reported and
/// skipped, matching the click-through behavior of the interactive loop.
fn run_script(game: &mut GameState, script: &str) -> Result<()> {
    for token in script.split(',') {
        let index: usize = token
            .trim()
            .parse()
            .with_context(|| format!("Invalid cell index in script: {token:?}"))?;
        let Some(pos) = Position::from_index(index) else {
            bail!("Cell index out of range in script: {index}");
        };
        if let Err(err) = game.play(pos) {
            println!("move rejected: {err}");
        }
    }
    Ok(())
}

/// Renders the board, status line, and move list.
fn render(game: &GameState) {
    println!();
    println!("{}", game.current_board());
    println!();
    println!("{}", game.status());
    if game.winner().is_none() && rules::draw::is_full(game.current_board()) {
        // The core has no draw status; board fullness is our call to make.
        println!("(board full, no more moves)");
    }
    for n in 0..game.history().len() {
        let marker = if n == game.current_move() { "*" } else { " " };
        if n == 0 {
            println!("{marker} 0: go to game start");
        } else {
            println!("{marker} {n}: go to move #{n}");
        }
    }
}

/// Reads `play <0-8>`, `jump <n>`, and `quit` commands until EOF.
fn repl(game: &mut GameState) -> Result<()> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read command")?;
        if read == 0 {
            break; // EOF
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        debug!(?words, "Command received");
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["play", cell] => match cell.parse::<usize>().ok().and_then(Position::from_index) {
                Some(pos) => {
                    if let Err(err) = game.play(pos) {
                        println!("move rejected: {err}");
                    }
                }
                None => println!("play takes a cell index 0-8"),
            },
            ["jump", mov] => match mov.parse::<usize>() {
                Ok(n) => {
                    if let Err(err) = game.jump_to(n) {
                        println!("jump rejected: {err}");
                    }
                }
                Err(_) => println!("jump takes a move number"),
            },
            _ => {
                println!("commands: play <0-8> | jump <move> | quit");
                continue;
            }
        }
        render(game);
    }
    Ok(())
}
