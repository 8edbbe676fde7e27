//! Command parser.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use tracing::warn;

use crate::board::PlayerId;

/// A parsed server-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the protocol handshake.
    Ident,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the world snapshot; everything after `position` is JSON.
    Position { json: String },

    /// Set the player to compute orders for.
    SetPlayer { player: PlayerId },

    /// Compute orders for the active player.
    Go,

    /// Compute orders for every player in the snapshot.
    GoAll,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "ident" => Some(Command::Ident),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "go" => Some(Command::Go),
        "goall" => Some(Command::GoAll),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(trimmed),
        "setplayer" => parse_setplayer(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`. Names and values may span
/// several words; the first `value` token splits them.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    let [_, "name", rest @ ..] = tokens else {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    };
    let (name, value) = match rest.iter().position(|&t| t == "value") {
        Some(i) => (&rest[..i], Some(&rest[i + 1..])),
        None => (rest, None),
    };
    if name.is_empty() {
        warn!("setoption without an option name");
        return None;
    }
    Some(Command::SetOption {
        name: name.join(" "),
        value: value.filter(|v| !v.is_empty()).map(|v| v.join(" ")),
    })
}

/// Parses `position <json>`; the JSON may contain spaces.
fn parse_position(line: &str) -> Option<Command> {
    let json = line.strip_prefix("position").unwrap_or("").trim();
    if json.is_empty() {
        warn!("malformed position: expected 'position <json>'");
        return None;
    }
    Some(Command::Position {
        json: json.to_string(),
    })
}

/// Parses `setplayer <id>`.
fn parse_setplayer(tokens: &[&str]) -> Option<Command> {
    match tokens {
        [_, id] => Some(Command::SetPlayer {
            player: PlayerId::new(*id),
        }),
        _ => {
            warn!("malformed setplayer: expected 'setplayer <id>'");
            None
        }
    }
}
