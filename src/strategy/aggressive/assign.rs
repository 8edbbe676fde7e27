//! Greedy nearest-supply assignment.
//!
//! Each unclaimed node is paired with the idle supply that can reach it
//! soonest (`hops + delay`). Pairings are served cheapest first from a
//! min-heap. A pairing whose supply was consumed by an earlier pop is not
//! removed from the heap eagerly; it is detected when popped and its target
//! is re-paired against what is left.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::board::{NodeId, Order};
use crate::path::DistanceOracle;

use super::supply::SupplyPool;

/// A proposed pairing of idle supply with a target node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub source: NodeId,
    pub delay: u32,
    pub target: NodeId,
    /// Hops from `source` to `target` plus `delay`.
    pub cost: u32,
}

/// Heap entry ordered by cost, then by push order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    cost: u32,
    seq: u64,
    candidate: Candidate,
}

/// Outcome of one assignment run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// One single-unit order per target served by supply at delay 0.
    pub orders: Vec<Order>,
    /// Targets served by supply still in transit (consumed, no order).
    pub committed_in_transit: u32,
    /// Pops whose supply had already been consumed.
    pub requeued: usize,
    /// Targets no remaining supply can reach.
    pub dropped: usize,
}

/// Finds the cheapest pairing for `target` among the pool's remaining
/// supply. Origins are scanned in `NodeId` order and delays ascending; the
/// first minimum found wins. Unreachable origins are skipped.
pub fn best_candidate<O: DistanceOracle + ?Sized>(
    pool: &SupplyPool,
    target: &NodeId,
    oracle: &mut O,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (origin, bucket) in pool.origins() {
        let Some(dist) = oracle.distance(origin, target) else {
            continue;
        };
        for (&delay, &count) in bucket {
            if count == 0 {
                continue;
            }
            let cost = dist + delay;
            if best.as_ref().map_or(true, |b| cost < b.cost) {
                best = Some(Candidate {
                    source: origin.clone(),
                    delay,
                    target: target.clone(),
                    cost,
                });
            }
        }
    }
    best
}

struct Queue {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl Queue {
    fn new() -> Self {
        Queue {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    fn push(&mut self, candidate: Candidate) {
        self.heap.push(Reverse(Entry {
            cost: candidate.cost,
            seq: self.seq,
            candidate,
        }));
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(e)| e.candidate)
    }
}

/// Serves `targets` from `pool`, one unit per target, nearest pairing first.
///
/// Consumes supply from `pool` as it goes. Stops when every target has been
/// served or dropped, or when the pool is empty.
pub fn assign<O: DistanceOracle + ?Sized>(
    pool: &mut SupplyPool,
    targets: &[NodeId],
    oracle: &mut O,
) -> Assignment {
    let mut out = Assignment::default();
    let mut queue = Queue::new();

    for target in targets {
        match best_candidate(pool, target, oracle) {
            Some(c) => queue.push(c),
            None => out.dropped += 1,
        }
    }

    while pool.total() > 0 {
        let Some(next) = queue.pop() else {
            break;
        };

        if pool.take_one(&next.source, next.delay) {
            if next.delay > 0 {
                out.committed_in_transit += 1;
                continue;
            }
            // No hop when the target is the origin itself: the unit is
            // already there.
            if let Some(hop) = oracle.first_hop(&next.source, &next.target) {
                trace!(src = %next.source, dst = %next.target, hop = %hop, "claiming");
                out.orders.push(Order::new(next.source, hop, 1));
            }
            continue;
        }

        out.requeued += 1;
        debug!(
            target = %next.target,
            stale = %next.source,
            remaining = pool.total(),
            "supply already used, re-pairing"
        );
        match best_candidate(pool, &next.target, oracle) {
            Some(c) => queue.push(c),
            None => out.dropped += 1,
        }
    }

    out
}
