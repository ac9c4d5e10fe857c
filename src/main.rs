//! Ultimate-TTT: Ultimate Tic-Tac-Toe rules engine.
//!
//! ## Usage
//!
//! - `ultimate-ttt` - Play a random demo game
//! - `ultimate-ttt protocol` - Serve the text protocol on stdin/stdout
//! - `ultimate-ttt demo --seed 7` - Play a reproducible random demo game
//!
//! Logs go to stderr; set `RUST_LOG` (e.g. `RUST_LOG=debug`) for more detail.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ultimate_ttt::game::MetaGame;
use ultimate_ttt::playout::Playout;
use ultimate_ttt::protocol::ProtocolEngine;

/// Ultimate-TTT: Ultimate Tic-Tac-Toe rules engine
#[derive(Parser)]
#[command(name = "ultimate-ttt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the line-based text protocol on stdin/stdout
    Protocol,
    /// Play one game of random legal moves and print the result
    Demo {
        /// Seed for the move generator (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Protocol) => {
            info!("starting protocol engine");
            ProtocolEngine::new().run()?;
        }
        Some(Commands::Demo { seed }) => run_demo(seed),
        None => run_demo(None),
    }
    Ok(())
}

fn run_demo(seed: Option<u64>) {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    println!("Ultimate-TTT: random demo game (seed {seed})\n");

    let mut game = MetaGame::new();
    let result = Playout::new(seed).play_out(&mut game);

    println!("{game}");
    println!("{} after {} moves", game.snapshot().status, result.moves);
}
