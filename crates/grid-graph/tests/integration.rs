//! Integration tests for grid-graph.

use grid_core::Namespace;
use grid_graph::{Grid, TraversalOrder, find_supply, is_energized, validate_grid};
use proptest::prelude::*;

const DFS: TraversalOrder = TraversalOrder::DepthFirst;
const BFS: TraversalOrder = TraversalOrder::BreadthFirst;

fn grid() -> Grid {
    Grid::new(Namespace::new("it").unwrap())
}

#[test]
fn plant_household_toggle_scenario() {
    // P -> H1, H2 charges from H1
    let mut g = grid();
    let p = g.create_source();
    let h1 = g.create_consumer();
    let h2 = g.create_consumer();
    g.connect_consumer_to_source(h1, p);
    g.connect_consumer_to_consumer(h2, h1);

    assert!(is_energized(&g, h2, DFS));

    g.set_source_active(p, false);
    assert!(!is_energized(&g, h1, DFS));
    assert!(!is_energized(&g, h2, DFS));

    g.set_source_active(p, true);
    assert!(is_energized(&g, h2, DFS));
    assert!(is_energized(&g, h2, BFS));
}

#[test]
fn mutual_charging_without_sources() {
    let mut g = grid();
    let h1 = g.create_consumer();
    let h2 = g.create_consumer();
    g.connect_consumer_to_consumer(h1, h2);
    g.connect_consumer_to_consumer(h2, h1);

    assert!(!is_energized(&g, h1, DFS));
    assert!(!is_energized(&g, h2, DFS));
    assert!(!is_energized(&g, h1, BFS));
    assert!(!is_energized(&g, h2, BFS));
}

#[test]
fn cycle_with_an_exit_is_energized() {
    // H1 <-> H2, H2 also charges from H3 which sits on a plant.
    let mut g = grid();
    let p = g.create_source();
    let h1 = g.create_consumer();
    let h2 = g.create_consumer();
    let h3 = g.create_consumer();
    g.connect_consumer_to_consumer(h1, h2);
    g.connect_consumer_to_consumer(h2, h1);
    g.connect_consumer_to_consumer(h2, h3);
    g.connect_consumer_to_source(h3, p);

    let path = find_supply(&g, h1, DFS).unwrap();
    assert_eq!(path.through, vec![h1, h2, h3]);
    assert_eq!(path.source, p);
    assert!(is_energized(&g, h2, BFS));
}

#[test]
fn deactivating_sole_source_darkens_dependants() {
    // P feeds H0; H1..H4 form a chain off H0; H5 has its own plant Q.
    let mut g = grid();
    let p = g.create_source();
    let q = g.create_source();
    let h: Vec<_> = (0..6).map(|_| g.create_consumer()).collect();
    g.connect_consumer_to_source(h[0], p);
    for i in 1..5 {
        g.connect_consumer_to_consumer(h[i], h[i - 1]);
    }
    g.connect_consumer_to_source(h[5], q);
    g.connect_consumer_to_consumer(h[5], h[4]);

    assert!(h.iter().all(|&c| is_energized(&g, c, DFS)));

    g.set_source_active(p, false);
    for &c in &h[..5] {
        assert!(!is_energized(&g, c, DFS));
    }
    assert!(is_energized(&g, h[5], DFS));
}

#[test]
fn disconnect_switches_supply() {
    let mut g = grid();
    let p = g.create_source();
    let h = g.create_consumer();
    g.connect_consumer_to_source(h, p);
    g.connect_consumer_to_source(h, p);

    g.disconnect_consumer_from_source(h, p);
    assert!(!is_energized(&g, h, DFS));
    assert_eq!(g.consumers_of(p).count(), 0);
}

#[test]
fn self_and_duplicate_charging_requests() {
    let mut g = grid();
    let c = g.create_consumer();
    let d = g.create_consumer();

    g.connect_consumer_to_consumer(c, c);
    assert!(g.consumer(c).unwrap().charging_from().is_empty());

    g.connect_consumer_to_consumer(c, d);
    g.connect_consumer_to_consumer(c, d);
    g.connect_consumer_to_consumer(c, d);
    assert_eq!(g.consumer(c).unwrap().charging_from(), &[d]);
}

#[test]
fn disconnect_never_connected_pair() {
    let mut g = grid();
    let p = g.create_source();
    let q = g.create_source();
    let h = g.create_consumer();
    g.connect_consumer_to_source(h, q);

    let before = g.consumer(h).unwrap().clone();
    g.disconnect_consumer_from_source(h, p);
    assert_eq!(g.consumer(h).unwrap(), &before);
    assert_eq!(g.consumers_of(q).count(), 1);
}

#[test]
fn long_chain_does_not_overflow_stack() {
    let mut g = grid();
    let p = g.create_source();
    let chain: Vec<_> = (0..50_000).map(|_| g.create_consumer()).collect();
    for pair in chain.windows(2) {
        g.connect_consumer_to_consumer(pair[0], pair[1]);
    }
    let last = *chain.last().unwrap();
    g.connect_consumer_to_source(last, p);

    assert!(is_energized(&g, chain[0], DFS));
    g.set_source_active(p, false);
    assert!(!is_energized(&g, chain[0], DFS));
}

#[test]
fn keys_resolve_to_handles() {
    let mut g = grid();
    let p = g.create_source();
    let h = g.create_consumer();

    let key = g.consumer(h).unwrap().key().to_string();
    assert_eq!(key, "it/consumer/0");
    assert_eq!(g.consumer_by_key(&key).unwrap(), h);
    assert_eq!(g.source_by_key("it/source/0").unwrap(), p);
    assert!(g.source_by_key("other/source/0").is_err());
}

#[derive(Debug, Clone)]
enum Op {
    Supply(usize, usize),
    Unsupply(usize, usize),
    Charge(usize, usize),
    Toggle(usize, bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..5usize, 0..3usize).prop_map(|(c, s)| Op::Supply(c, s)),
        (0..5usize, 0..3usize).prop_map(|(c, s)| Op::Unsupply(c, s)),
        (0..5usize, 0..5usize).prop_map(|(t, o)| Op::Charge(t, o)),
        (0..3usize, any::<bool>()).prop_map(|(s, a)| Op::Toggle(s, a)),
    ]
}

proptest! {
    #[test]
    fn mutations_preserve_invariants(ops in prop::collection::vec(op(), 0..40)) {
        let mut g = grid();
        let sources: Vec<_> = (0..3).map(|_| g.create_source()).collect();
        let consumers: Vec<_> = (0..5).map(|_| g.create_consumer()).collect();

        for op in ops {
            match op {
                Op::Supply(c, s) => { g.connect_consumer_to_source(consumers[c], sources[s]); }
                Op::Unsupply(c, s) => { g.disconnect_consumer_from_source(consumers[c], sources[s]); }
                Op::Charge(t, o) => { g.connect_consumer_to_consumer(consumers[t], consumers[o]); }
                Op::Toggle(s, a) => { g.set_source_active(sources[s], a); }
            }
            prop_assert!(validate_grid(&g).is_ok());
        }

        for &c in &consumers {
            prop_assert_eq!(is_energized(&g, c, DFS), is_energized(&g, c, BFS));
        }
    }
}
