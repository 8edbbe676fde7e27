//! Unit counts by owner.
//!
//! Every place that can hold units (a node, or one transit slot of an edge)
//! stores a `Units` map from owner to count.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::node::PlayerId;

/// Unit counts per owning player. Zero counts are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Units(BTreeMap<PlayerId, u32>);

impl Units {
    /// Returns the count owned by `player`.
    pub fn get(&self, player: &PlayerId) -> u32 {
        self.0.get(player).copied().unwrap_or(0)
    }

    /// Sets the count owned by `player`; a count of zero removes the entry.
    pub fn set(&mut self, player: PlayerId, count: u32) {
        if count == 0 {
            self.0.remove(&player);
        } else {
            self.0.insert(player, count);
        }
    }

    /// Adds `count` units to `player`, saturating at `u32::MAX`.
    pub fn add(&mut self, player: PlayerId, count: u32) {
        if count > 0 {
            let n = self.0.entry(player).or_insert(0);
            *n = n.saturating_add(count);
        }
    }

    /// Units owned by `me`.
    pub fn friendly(&self, me: &PlayerId) -> u32 {
        self.get(me)
    }

    /// Units owned by anyone other than `me`. Saturates at `u32::MAX`.
    pub fn enemy(&self, me: &PlayerId) -> u32 {
        self.0
            .iter()
            .filter(|(p, _)| *p != me)
            .fold(0u32, |acc, (_, &n)| acc.saturating_add(n))
    }

    /// Units of every owner. Saturates at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.0.values().fold(0u32, |acc, &n| acc.saturating_add(n))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|&n| n == 0)
    }

    /// Iterates owners with a nonzero count, in player order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, u32)> {
        self.0.iter().filter(|(_, n)| **n > 0).map(|(p, &n)| (p, n))
    }

    /// Drops zero entries that may arrive through deserialization.
    pub(crate) fn compact(&mut self) {
        self.0.retain(|_, n| *n > 0);
    }
}

impl FromIterator<(PlayerId, u32)> for Units {
    fn from_iter<I: IntoIterator<Item = (PlayerId, u32)>>(iter: I) -> Self {
        let mut units = Units::default();
        for (p, n) in iter {
            units.add(p, n);
        }
        units
    }
}
