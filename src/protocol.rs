//! Line-oriented text protocol for driving a game from another process.
//!
//! The framing follows GTP version 2: each request is one line with an
//! optional numeric id, a command word and whitespace-separated arguments.
//! Successful responses start with `=`, failures with `?`, and every
//! response is terminated by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `clear_board` - Reset to the opening position
//! - `play <board> <cell>` - Play a move for the side to move
//! - `legal_moves` - List all legal moves, one per line
//! - `showboard` - Render the full 9x9 grid
//! - `status` - Return the status line
//! - `current_player` - Return `X` or `O`
//! - `forced_board` - Return the forced board index, `any`, or `none` once
//!   the game is over
//! - `snapshot` - Return the full state as one line of JSON
//!
//! Boards and cells are given either as a row-major index `0`-`8` or as a
//! `row,col` pair, so `play 4 0` and `play 1,1 0,0` are the same move.
//!
//! ## Example
//!
//! ```ignore
//! use ultimate_ttt::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::constants::{ENGINE_NAME, PROTOCOL_VERSION};
use crate::game::MetaGame;
use crate::snapshot::status_text;
use crate::types::{Coord, Move};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "current_player",
    "forced_board",
    "known_command",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "snapshot",
    "status",
    "version",
];

/// Protocol engine state: one game.
#[derive(Default)]
pub struct ProtocolEngine {
    game: MetaGame,
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self) -> &MetaGame {
        &self.game
    }

    /// Run the command loop on stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

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
            if !success {
                debug!(%command, %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

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
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, ENGINE_NAME.to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, PROTOCOL_VERSION.to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game.reset();
                (true, String::new())
            }

            "play" => {
                let [board, cell] = args else {
                    return (false, "expected: play <board> <cell>".to_string());
                };
                let Some(mv) = parse_move(board, cell) else {
                    return (false, format!("invalid move: {board} {cell}"));
                };
                match self.game.place_move(mv) {
                    Ok(()) => (true, String::new()),
                    Err(err) => (false, err.to_string()),
                }
            }

            "legal_moves" => {
                let moves: Vec<String> =
                    self.game.legal_moves().iter().map(Move::to_string).collect();
                (true, moves.join("\n"))
            }

            "showboard" => (true, format!("\n{}", self.game.to_string().trim_end())),

            "status" => (
                true,
                status_text(self.game.outcome(), self.game.current_player()),
            ),

            "current_player" => (true, self.game.current_player().to_string()),

            "forced_board" => match self.game.forced_board() {
                _ if self.game.is_finished() => (true, "none".to_string()),
                Some(board) => (true, board.index().to_string()),
                None => (true, "any".to_string()),
            },

            "snapshot" => match serde_json::to_string(&self.game.snapshot()) {
                Ok(json) => (true, json),
                Err(err) => {
                    warn!(%err, "snapshot serialization failed");
                    (false, format!("snapshot failed: {err}"))
                }
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

/// Parse a board or cell given as an index (`4`) or a `row,col` pair (`1,1`).
pub fn parse_coord(s: &str) -> Option<Coord> {
    match s.split_once(',') {
        Some((row, col)) => Coord::try_new(row.trim().parse().ok()?, col.trim().parse().ok()?),
        None => Coord::from_index(s.parse().ok()?),
    }
}

/// Parse a `<board> <cell>` pair into a move.
pub fn parse_move(board: &str, cell: &str) -> Option<Move> {
    Some(Move::new(parse_coord(board)?, parse_coord(cell)?))
}
