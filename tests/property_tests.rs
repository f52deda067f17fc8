//! Property-based tests using proptest.
//!
//! Checks the engine's invariants over randomly generated small, connected
//! ant farms rather than hand-picked scenarios.

use lemin::prelude::*;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Generates a connected graph on `n` rooms (guaranteed via a 0..n-1 chain)
/// plus a handful of extra random edges, and an ant count.
fn farm_strategy(max_rooms: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>, usize)> {
    (3..=max_rooms).prop_flat_map(|n| {
        let chain: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let extra_edge = (0..n, 0..n).prop_map(|(a, b)| if a < b { (a, b) } else { (b, a) });
        (
            Just(n),
            prop::collection::vec(extra_edge, 0..n),
            1usize..6,
        )
            .prop_map(move |(n, extras, ants)| {
                let mut edges: HashSet<(usize, usize)> = chain.iter().copied().collect();
                for (a, b) in extras {
                    if a != b {
                        edges.insert((a, b));
                    }
                }
                (n, edges.into_iter().collect(), ants)
            })
    })
}

fn build_graph(n: usize, edges: &[(usize, usize)], ants: usize) -> Graph {
    let mut builder = GraphBuilder::new();
    for i in 0..n {
        builder.add_room(&format!("r{i}"), 0, 0).unwrap();
    }
    builder.set_start("r0").unwrap();
    builder.set_end(&format!("r{}", n - 1)).unwrap();
    for &(a, b) in edges {
        let _ = builder.add_link(&format!("r{a}"), &format!("r{b}"));
    }
    builder.set_ants(ants);
    builder.build().unwrap()
}

proptest! {
    /// Property: every emitted turn respects per-turn room exclusivity,
    /// adjacency of consecutive ant moves, ascending id order within a
    /// turn, and an exact {1..N} ant-id multiset overall.
    #[test]
    fn simulation_respects_occupancy_and_adjacency((n, edges, ants) in farm_strategy(8)) {
        let graph = build_graph(n, &edges, ants);
        let turns = engine::run(&graph).expect("chain edge guarantees reachability");

        let mut last_room: HashMap<usize, String> = HashMap::new();
        let mut seen_ids: HashSet<usize> = HashSet::new();

        for turn in &turns {
            let mut occupied: HashSet<&str> = HashSet::new();
            let mut prev_id = 0usize;
            for mv in turn.split(' ') {
                let (id_str, room) = mv.strip_prefix('L').unwrap().split_once('-').unwrap();
                let id: usize = id_str.parse().unwrap();
                prop_assert!(id > prev_id);
                prev_id = id;
                seen_ids.insert(id);

                if room != graph.room(graph.end()).name {
                    prop_assert!(occupied.insert(room));
                }
                if let Some(prev) = last_room.get(&id) {
                    let pi = graph.index_of(prev).unwrap();
                    let ci = graph.index_of(room).unwrap();
                    prop_assert!(graph.has_link(pi, ci));
                }
                last_room.insert(id, room.to_string());
            }
        }

        let mut ids: Vec<usize> = seen_ids.into_iter().collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (1..=ants).collect::<Vec<_>>());
    }

    /// Property: running the engine twice on the same graph yields
    /// byte-identical output.
    #[test]
    fn deterministic_round_trip((n, edges, ants) in farm_strategy(8)) {
        let graph = build_graph(n, &edges, ants);
        let first = engine::run(&graph);
        let second = engine::run(&graph);
        prop_assert_eq!(first, second);
    }
}
