//! Integration tests for the lemin engine.
//!
//! Exercises the worked scenarios from the engine's external contract
//! (S1-S6) end to end: parse, route, simulate, and check the exact turn
//! output where the contract specifies one.

use lemin::prelude::*;

fn graph_from(
    rooms: &[(&str, i32, i32)],
    start: &str,
    end: &str,
    links: &[(&str, &str)],
    ants: usize,
) -> Graph {
    let mut builder = GraphBuilder::new();
    for &(name, x, y) in rooms {
        builder.add_room(name, x, y).unwrap();
    }
    builder.set_start(start).unwrap();
    builder.set_end(end).unwrap();
    for &(a, b) in links {
        builder.add_link(a, b).unwrap();
    }
    builder.set_ants(ants);
    builder.build().unwrap()
}

#[test]
fn s1_trivial_direct_edge() {
    let graph = graph_from(&[("s", 0, 0), ("e", 1, 0)], "s", "e", &[("s", "e")], 1);
    let turns = engine::run(&graph).unwrap();
    assert_eq!(turns, vec!["L1-e".to_string()]);
}

#[test]
fn s2_single_chain() {
    let graph = graph_from(
        &[("s", 0, 0), ("a", 1, 0), ("b", 2, 0), ("e", 3, 0)],
        "s",
        "e",
        &[("s", "a"), ("a", "b"), ("b", "e")],
        3,
    );
    let turns = engine::run(&graph).unwrap();
    assert_eq!(
        turns,
        vec![
            "L1-a".to_string(),
            "L1-b L2-a".to_string(),
            "L1-e L2-b L3-a".to_string(),
            "L2-e L3-b".to_string(),
            "L3-e".to_string(),
        ]
    );
}

#[test]
fn s3_two_disjoint_paths() {
    let graph = graph_from(
        &[
            ("s", 0, 0),
            ("a", 1, 0),
            ("b", 2, 0),
            ("c", 1, 1),
            ("d", 2, 1),
            ("e", 3, 0),
        ],
        "s",
        "e",
        &[
            ("s", "a"),
            ("a", "b"),
            ("b", "e"),
            ("s", "c"),
            ("c", "d"),
            ("d", "e"),
        ],
        4,
    );
    let turns = engine::run(&graph).unwrap();
    assert_eq!(
        turns,
        vec![
            "L1-a L2-c".to_string(),
            "L1-b L2-d L3-a L4-c".to_string(),
            "L1-e L2-e L3-b L4-d".to_string(),
            "L3-e L4-e".to_string(),
        ]
    );
}

#[test]
fn s4_unequal_paths() {
    // length-2 path s-a-e and length-4 path s-c-d-f-e, 10 ants.
    let graph = graph_from(
        &[
            ("s", 0, 0),
            ("a", 1, 0),
            ("e", 2, 0),
            ("c", 0, 1),
            ("d", 1, 1),
            ("f", 2, 1),
        ],
        "s",
        "e",
        &[
            ("s", "a"),
            ("a", "e"),
            ("s", "c"),
            ("c", "d"),
            ("d", "f"),
            ("f", "e"),
        ],
        10,
    );
    let turns = engine::run(&graph).unwrap();
    assert_eq!(turns.len(), 7);
    assert_all_invariants(&graph, &turns, 10);
}

#[test]
fn s5_unreachable() {
    let graph = graph_from(
        &[("s", 0, 0), ("island", 5, 5), ("e", 1, 0)],
        "s",
        "e",
        &[],
        1,
    );
    let err = engine::run(&graph).unwrap_err();
    assert_eq!(err, EngineError::Unreachable);
}

#[test]
fn s6_tie_break_same_length_paths_launch_together() {
    let graph = graph_from(
        &[("s", 0, 0), ("a", 1, 0), ("b", 1, 1), ("e", 2, 0)],
        "s",
        "e",
        &[("s", "a"), ("a", "e"), ("s", "b"), ("b", "e")],
        2,
    );
    let turns = engine::run(&graph).unwrap();
    assert_eq!(turns[0], "L1-a L2-b");
}

#[test]
fn round_trip_determinism() {
    let graph = graph_from(
        &[("s", 0, 0), ("a", 1, 0), ("b", 2, 0), ("e", 3, 0)],
        "s",
        "e",
        &[("s", "a"), ("a", "b"), ("b", "e")],
        5,
    );
    let first = engine::run(&graph).unwrap();
    let second = engine::run(&graph).unwrap();
    assert_eq!(first, second);
}

/// Checks invariants 1, 2, 4, and 5 of the engine's external contract
/// against a concrete (graph, turn log) pair.
fn assert_all_invariants(graph: &Graph, turns: &[String], ants: usize) {
    use std::collections::{HashMap, HashSet};

    let mut last_room: HashMap<usize, String> = HashMap::new();
    let mut move_counts: HashMap<usize, usize> = HashMap::new();

    for turn in turns {
        let mut occupied_this_turn: HashSet<&str> = HashSet::new();
        let mut prev_id = 0usize;
        for mv in turn.split(' ') {
            let (id_str, room) = mv
                .strip_prefix('L')
                .and_then(|rest| rest.split_once('-'))
                .expect("move has L<id>-<room> shape");
            let id: usize = id_str.parse().unwrap();

            // Invariant 5: ascending ant-id order within a turn.
            assert!(id > prev_id, "moves must be ascending by ant id");
            prev_id = id;

            // Invariant 1: no two moves target the same non-terminal room.
            if room != graph.room(graph.end()).name {
                assert!(
                    occupied_this_turn.insert(room),
                    "room {room} entered twice in one turn"
                );
            }

            // Invariant 2: consecutive moves of the same ant are adjacent.
            if let Some(prev_room) = last_room.get(&id) {
                let prev_idx = graph.index_of(prev_room).unwrap();
                let cur_idx = graph.index_of(room).unwrap();
                assert!(
                    graph.has_link(prev_idx, cur_idx),
                    "non-adjacent consecutive moves for ant {id}"
                );
            }
            last_room.insert(id, room.to_string());
            *move_counts.entry(id).or_insert(0) += 1;
        }
    }

    // Invariant 4: the ant id multiset is exactly {1, ..., N}.
    let mut ids: Vec<usize> = move_counts.keys().copied().collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=ants).collect::<Vec<_>>());
}
