//! Multi-player order computation.
//!
//! All players read the same snapshot and none of them mutate it, so their
//! computations run in parallel without locking. Each player gets its own
//! supply pool, queue and distance cache.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::info;

use crate::board::{Order, PlayerId, WorldState};
use crate::strategy::Strategy;

/// Computes every listed player's orders concurrently.
pub fn orders_for_players(
    state: &WorldState,
    players: &[PlayerId],
    strategy: &dyn Strategy,
) -> BTreeMap<PlayerId, Vec<Order>> {
    let result: BTreeMap<PlayerId, Vec<Order>> = players
        .par_iter()
        .map(|p| (p.clone(), strategy.orders(p, state)))
        .collect();
    info!(
        players = result.len(),
        orders = result.values().map(Vec::len).sum::<usize>(),
        strategy = strategy.name(),
        "turn computed"
    );
    result
}

/// Computes orders for every player that owns units in the snapshot.
pub fn orders_for_all(state: &WorldState, strategy: &dyn Strategy) -> BTreeMap<PlayerId, Vec<Order>> {
    let players: Vec<PlayerId> = state.players().into_iter().collect();
    orders_for_players(state, &players, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{AggressiveStrategy, ALL_STRATEGIES};

    fn board() -> WorldState {
        let mut state = WorldState::empty();
        for n in ["r", "m1", "m2", "b"] {
            state.add_node(n, 10);
        }
        state.connect("r", "m1", 1);
        state.connect("m1", "m2", 1);
        state.connect("m2", "b", 1);
        state.set_units("r", "red", 4);
        state.set_units("b", "blue", 4);
        state
    }

    #[test]
    fn parallel_matches_sequential() {
        let state = board();
        for kind in ALL_STRATEGIES {
            let strategy = kind.strategy();
            let parallel = orders_for_all(&state, strategy);
            for (player, orders) in &parallel {
                assert_eq!(orders, &strategy.orders(player, &state));
            }
        }
    }

    #[test]
    fn every_owner_gets_an_entry() {
        let state = board();
        let result = orders_for_all(&state, &AggressiveStrategy);
        let players: Vec<&str> = result.keys().map(|p| p.as_str()).collect();
        assert_eq!(players, ["blue", "red"]);
        assert!(result.values().all(|o| !o.is_empty()));
    }

    #[test]
    fn players_without_units_get_empty_orders() {
        let state = board();
        let result = orders_for_players(&state, &[PlayerId::from("ghost")], &AggressiveStrategy);
        assert_eq!(result[&PlayerId::from("ghost")], Vec::<Order>::new());
    }
}
