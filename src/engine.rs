//! Engine state management.
//!
//! Holds the current snapshot, active player and options between commands,
//! and answers `go`/`goall` by running the selected strategy.

use std::collections::HashMap;
use std::io::{self, Write};

use tracing::info;

use crate::board::{PlayerId, WorldState};
use crate::protocol::json::{format_orders, parse_snapshot, SnapshotError};
use crate::strategy::{StrategyKind, ALL_STRATEGIES};
use crate::turn::orders_for_all;

/// Option selecting the strategy.
pub const STRATEGY_OPTION: &str = "Strategy";

/// Errors surfaced to the protocol loop.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no position set")]
    NoPosition,

    #[error("no active player set")]
    NoPlayer,

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("failed to parse position: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// Holds the mutable state of the engine between commands.
#[derive(Default)]
pub struct Engine {
    pub position: Option<WorldState>,
    pub active_player: Option<PlayerId>,
    pub options: HashMap<String, String>,
}

impl Engine {
    /// Creates a new engine with no position or active player.
    pub fn new() -> Self {
        Engine::default()
    }

    /// Resets the position and player for a new game. Options are kept.
    pub fn new_game(&mut self) {
        self.position = None;
        self.active_player = None;
    }

    /// Sets the current snapshot from JSON.
    pub fn set_position(&mut self, json: &str) -> Result<(), EngineError> {
        let state = parse_snapshot(json)?;
        info!(nodes = state.nodes.len(), "position set");
        self.position = Some(state);
        Ok(())
    }

    pub fn set_player(&mut self, player: PlayerId) {
        self.active_player = Some(player);
    }

    /// Stores an engine option. A `Strategy` value is validated before it
    /// is stored.
    pub fn set_option(&mut self, name: String, value: Option<String>) -> Result<(), EngineError> {
        let value = value.unwrap_or_default();
        if name == STRATEGY_OPTION && StrategyKind::from_name(&value).is_none() {
            return Err(EngineError::UnknownStrategy(value));
        }
        self.options.insert(name, value);
        Ok(())
    }

    /// Returns the configured strategy, or the default.
    pub fn strategy(&self) -> StrategyKind {
        self.options
            .get(STRATEGY_OPTION)
            .and_then(|v| StrategyKind::from_name(v))
            .unwrap_or_default()
    }

    /// Writes the handshake: id, options, protocol_version, and identok.
    pub fn handle_ident<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name fieldmarshal")?;
        writeln!(out, "id author fieldmarshal")?;
        let vars: Vec<String> = ALL_STRATEGIES
            .iter()
            .map(|k| format!("var {}", k.name()))
            .collect();
        writeln!(
            out,
            "option name {} type combo default {} {}",
            STRATEGY_OPTION,
            StrategyKind::default().name(),
            vars.join(" ")
        )?;
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "identok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Computes the active player's orders and writes `bestorders <json>`.
    pub fn handle_go<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let state = self.position.as_ref().ok_or(EngineError::NoPosition)?;
        let player = self.active_player.as_ref().ok_or(EngineError::NoPlayer)?;
        let orders = self.strategy().strategy().orders(player, state);
        writeln!(out, "bestorders {}", format_orders(&orders))?;
        out.flush()?;
        Ok(())
    }

    /// Computes orders for every player in the snapshot, in parallel, and
    /// writes one `bestorders <player> <json>` line each.
    pub fn handle_goall<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let state = self.position.as_ref().ok_or(EngineError::NoPosition)?;
        let all = orders_for_all(state, self.strategy().strategy());
        for (player, orders) in &all {
            writeln!(out, "bestorders {} {}", player, format_orders(orders))?;
        }
        out.flush()?;
        Ok(())
    }
}
