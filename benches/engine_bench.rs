use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fieldmarshal::board::{PlayerId, WorldState};
use fieldmarshal::path::BfsOracle;
use fieldmarshal::strategy::aggressive::plan;
use fieldmarshal::strategy::{Strategy, ALL_STRATEGIES};
use fieldmarshal::turn::orders_for_all;

/// A `side` x `side` grid with four players in the corners, a few enemy
/// outposts, and batches in transit along the first row.
fn grid(side: usize) -> WorldState {
    let mut state = WorldState::empty();
    let name = |x: usize, y: usize| format!("{:03}_{:03}", x, y);
    for y in 0..side {
        for x in 0..side {
            state.add_node(name(x, y).as_str(), 10);
        }
    }
    for y in 0..side {
        for x in 0..side {
            if x + 1 < side {
                state.connect(name(x, y).as_str(), name(x + 1, y).as_str(), 1 + (x + y) % 3);
            }
            if y + 1 < side {
                state.connect(name(x, y).as_str(), name(x, y + 1).as_str(), 1 + (x * y) % 3);
            }
        }
    }
    let last = side - 1;
    let corners = [(0, 0, "p1"), (last, 0, "p2"), (0, last, "p3"), (last, last, "p4")];
    for &(x, y, p) in &corners {
        state.set_units(name(x, y).as_str(), p, 40);
    }
    for i in (2..side - 2).step_by(3) {
        state.set_units(name(i, side / 2).as_str(), "p2", 3);
        state.put_in_transit(name(i, 0).as_str(), name(i + 1, 0).as_str(), "p1", 1, 2);
    }
    state
}

fn bench_aggressive_plan(c: &mut Criterion) {
    let state = grid(12);
    let me = PlayerId::from("p1");
    c.bench_function("aggressive_plan_12x12", |b| {
        b.iter(|| {
            let mut oracle = BfsOracle::new(&state);
            plan(black_box(&me), black_box(&state), &mut oracle)
        })
    });
}

fn bench_strategies(c: &mut Criterion) {
    let state = grid(12);
    let me = PlayerId::from("p1");
    for kind in ALL_STRATEGIES {
        let strategy: &dyn Strategy = kind.strategy();
        c.bench_function(&format!("{}_orders_12x12", kind), |b| {
            b.iter(|| strategy.orders(black_box(&me), black_box(&state)))
        });
    }
}

fn bench_parallel_turn(c: &mut Criterion) {
    let state = grid(20);
    let strategy = ALL_STRATEGIES[0].strategy();
    c.bench_function("aggressive_turn_4_players_20x20", |b| {
        b.iter(|| orders_for_all(black_box(&state), strategy))
    });
}

criterion_group!(benches, bench_aggressive_plan, bench_strategies, bench_parallel_turn);
criterion_main!(benches);
