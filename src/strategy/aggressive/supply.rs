//! Idle supply aggregation.
//!
//! Collects every friendly unit that is not needed as a defender, keyed by
//! the node where it is (or will be) actionable and the number of turns until
//! then. Units on an edge are attributed to the edge's destination.

use std::collections::BTreeMap;

use crate::board::{NodeId, PlayerId, WorldState};

/// Units each owned node keeps at home to hold it.
pub const DEFENDER_RESERVE: u32 = 1;

/// Idle unit counts by arrival delay at one origin. Zero counts are never stored.
///
/// Counts are `u64` because batches from several edges can land on the same
/// origin and delay, and their sum may not fit a single node's `u32`.
pub type Bucket = BTreeMap<u32, u64>;

/// Idle friendly units by origin node and arrival delay.
///
/// Local to one order computation; consuming units mutates only the pool,
/// never the snapshot it was gathered from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplyPool {
    buckets: BTreeMap<NodeId, Bucket>,
    total: u64,
}

impl SupplyPool {
    /// Scans the snapshot for `me`'s idle units.
    ///
    /// Every node with more than one friendly unit contributes its surplus at
    /// delay 0. Every transit slot holding friendly units contributes them to
    /// the edge's destination at the slot's arrival delay.
    pub fn gather(me: &PlayerId, state: &WorldState) -> Self {
        let mut pool = SupplyPool::default();
        for node in state.nodes.values() {
            let friendly = node.units.friendly(me);
            if friendly > DEFENDER_RESERVE {
                pool.add(&node.id, 0, friendly - DEFENDER_RESERVE);
            }
            for edge in &node.edges {
                for (delay, count) in edge.in_transit(me) {
                    pool.add(&edge.dst, delay, count);
                }
            }
        }
        pool
    }

    fn add(&mut self, origin: &NodeId, delay: u32, count: u32) {
        if count == 0 {
            return;
        }
        let count = u64::from(count);
        *self
            .buckets
            .entry(origin.clone())
            .or_default()
            .entry(delay)
            .or_insert(0) += count;
        self.total += count;
    }

    /// Idle units across all origins and delays.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Idle units at `origin` with exactly `delay` turns to go.
    pub fn available(&self, origin: &NodeId, delay: u32) -> u64 {
        self.buckets
            .get(origin)
            .and_then(|b| b.get(&delay))
            .copied()
            .unwrap_or(0)
    }

    /// Consumes one unit from `(origin, delay)`. Returns false if that bucket
    /// is already empty.
    pub fn take_one(&mut self, origin: &NodeId, delay: u32) -> bool {
        let Some(bucket) = self.buckets.get_mut(origin) else {
            return false;
        };
        let Some(count) = bucket.get_mut(&delay) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            bucket.remove(&delay);
            if bucket.is_empty() {
                self.buckets.remove(origin);
            }
        }
        self.total -= 1;
        true
    }

    /// Origins with any idle units, in `NodeId` order.
    pub fn origins(&self) -> impl Iterator<Item = (&NodeId, &Bucket)> {
        self.buckets.iter()
    }

    /// Origins with units actionable this turn and their counts.
    ///
    /// Delay-0 supply is one garrison's surplus, so it always fits a `u32`.
    pub fn idle_now(&self) -> impl Iterator<Item = (&NodeId, u32)> {
        self.buckets.iter().filter_map(|(origin, b)| {
            b.get(&0)
                .map(|&n| (origin, u32::try_from(n).unwrap_or(u32::MAX)))
        })
    }

    /// Units actionable this turn across all origins.
    pub fn total_now(&self) -> u64 {
        self.idle_now().map(|(_, n)| u64::from(n)).sum()
    }
}
