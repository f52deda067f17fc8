use super::*;
use crate::graph::GraphBuilder;

fn build(rooms: &[(&str, i32, i32)], start: &str, end: &str, links: &[(&str, &str)], ants: usize) -> Graph {
    let mut b = GraphBuilder::new();
    for &(name, x, y) in rooms {
        b.add_room(name, x, y).unwrap();
    }
    b.set_start(start).unwrap();
    b.set_end(end).unwrap();
    for &(a, c) in links {
        b.add_link(a, c).unwrap();
    }
    b.set_ants(ants);
    b.build().unwrap()
}

#[test]
fn s1_trivial_direct_edge() {
    let graph = build(&[("s", 0, 0), ("e", 1, 0)], "s", "e", &[("s", "e")], 1);
    let path = vec![graph.start(), graph.end()];
    let turns = simulate(&graph, &[path], &[1]).unwrap();
    assert_eq!(turns, vec!["L1-e".to_string()]);
}

#[test]
fn s2_single_chain() {
    let graph = build(
        &[("s", 0, 0), ("a", 1, 0), ("b", 2, 0), ("e", 3, 0)],
        "s",
        "e",
        &[("s", "a"), ("a", "b"), ("b", "e")],
        3,
    );
    let s = graph.index_of("s").unwrap();
    let a = graph.index_of("a").unwrap();
    let b = graph.index_of("b").unwrap();
    let e = graph.index_of("e").unwrap();
    let path = vec![s, a, b, e];
    let turns = simulate(&graph, &[path], &[3]).unwrap();
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
    let graph = build(
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
    let s = graph.index_of("s").unwrap();
    let e = graph.index_of("e").unwrap();
    let p1 = vec![s, graph.index_of("a").unwrap(), graph.index_of("b").unwrap(), e];
    let p2 = vec![s, graph.index_of("c").unwrap(), graph.index_of("d").unwrap(), e];
    let turns = simulate(&graph, &[p1, p2], &[2, 2]).unwrap();
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
fn s6_tie_break_launches_both_first_paths_same_turn() {
    let graph = build(
        &[("s", 0, 0), ("a", 1, 0), ("b", 1, 1), ("e", 2, 0)],
        "s",
        "e",
        &[("s", "a"), ("a", "e"), ("s", "b"), ("b", "e")],
        2,
    );
    let s = graph.index_of("s").unwrap();
    let e = graph.index_of("e").unwrap();
    let p1 = vec![s, graph.index_of("a").unwrap(), e];
    let p2 = vec![s, graph.index_of("b").unwrap(), e];
    let turns = simulate(&graph, &[p1, p2], &[1, 1]).unwrap();
    assert_eq!(turns[0], "L1-a L2-b");
}

#[test]
fn direct_path_ants_over_two_launch_one_per_turn() {
    let graph = build(&[("s", 0, 0), ("e", 1, 0)], "s", "e", &[("s", "e")], 3);
    let path = vec![graph.start(), graph.end()];
    let turns = simulate(&graph, &[path], &[3]).unwrap();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[0], "L1-e");
    assert_eq!(turns[1], "L2-e");
    assert_eq!(turns[2], "L3-e");
}

#[test]
fn zero_ants_short_circuits_to_an_empty_schedule() {
    let graph = build(&[("s", 0, 0), ("e", 1, 0)], "s", "e", &[("s", "e")], 1);
    let empty: Vec<Vec<NodeIndex>> = vec![];
    let counts: Vec<usize> = vec![];
    assert_eq!(simulate(&graph, &empty, &counts).unwrap(), Vec::<String>::new());
}

#[test]
fn runaway_distribution_trips_the_internal_bound_guard() {
    // `counts` has an extra entry with no corresponding path: `total_ants`
    // (the sum) counts it, but the launch phase only ever iterates over
    // `paths`, so those 5 ants can never launch and `finished` can never
    // reach `total_ants`. The loop-guard at the top of `simulate` must
    // trip rather than spin forever.
    let graph = build(
        &[("s", 0, 0), ("a", 1, 0), ("e", 2, 0)],
        "s",
        "e",
        &[("s", "a"), ("a", "e")],
        6,
    );
    let s = graph.index_of("s").unwrap();
    let a = graph.index_of("a").unwrap();
    let e = graph.index_of("e").unwrap();
    let path = vec![s, a, e];
    let err = simulate(&graph, &[path], &[1, 5]).unwrap_err();
    assert_eq!(err, EngineError::InternalBound(600));
}
