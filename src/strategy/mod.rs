//! Order computation strategies.
//!
//! Each strategy turns a read-only snapshot and a player into that player's
//! orders for the turn. Strategies hold no state between calls, so one
//! instance can serve every player, concurrently.

pub mod aggressive;
pub mod balanced;
pub mod counts;
pub mod defensive;

pub use aggressive::AggressiveStrategy;
pub use balanced::BalancedStrategy;
pub use defensive::DefensiveStrategy;

use std::fmt;
use std::str::FromStr;

use crate::board::{Order, PlayerId, WorldState};

/// Computes one player's orders from a snapshot.
pub trait Strategy: Send + Sync {
    /// Short lowercase name used in options and logs.
    fn name(&self) -> &'static str;

    /// Orders for `me`. Every order moves at least one unit from a node to
    /// one of its direct neighbors.
    fn orders(&self, me: &PlayerId, state: &WorldState) -> Vec<Order>;
}

/// The built-in strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    #[default]
    Aggressive,
    Balanced,
    Defensive,
}

/// All built-in strategies in option-listing order.
pub const ALL_STRATEGIES: [StrategyKind; 3] = [
    StrategyKind::Aggressive,
    StrategyKind::Balanced,
    StrategyKind::Defensive,
];

impl StrategyKind {
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Aggressive => "aggressive",
            StrategyKind::Balanced => "balanced",
            StrategyKind::Defensive => "defensive",
        }
    }

    /// Parses a strategy name, ignoring case.
    pub fn from_name(s: &str) -> Option<StrategyKind> {
        ALL_STRATEGIES
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
    }

    /// Returns the stateless strategy implementation.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            StrategyKind::Aggressive => &AggressiveStrategy,
            StrategyKind::Balanced => &BalancedStrategy,
            StrategyKind::Defensive => &DefensiveStrategy,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::from_name(s).ok_or_else(|| s.to_string())
    }
}
