use super::*;
use crate::graph::GraphBuilder;

#[test]
fn s1_trivial_direct_edge() {
    let mut b = GraphBuilder::new();
    b.add_room("s", 0, 0).unwrap();
    b.add_room("e", 1, 0).unwrap();
    b.set_start("s").unwrap();
    b.set_end("e").unwrap();
    b.add_link("s", "e").unwrap();
    b.set_ants(1);
    let graph = b.build().unwrap();

    let turns = run(&graph).unwrap();
    assert_eq!(turns, vec!["L1-e".to_string()]);
}

#[test]
fn s4_unequal_paths_take_seven_turns() {
    let mut b = GraphBuilder::new();
    for name in ["s", "a", "e", "c", "d", "f"] {
        b.add_room(name, 0, 0).unwrap();
    }
    b.set_start("s").unwrap();
    b.set_end("e").unwrap();
    // length-2 path: s-a-e
    b.add_link("s", "a").unwrap();
    b.add_link("a", "e").unwrap();
    // length-4 path: s-c-d-f-e
    b.add_link("s", "c").unwrap();
    b.add_link("c", "d").unwrap();
    b.add_link("d", "f").unwrap();
    b.add_link("f", "e").unwrap();
    b.set_ants(10);
    let graph = b.build().unwrap();

    let turns = run(&graph).unwrap();
    assert_eq!(turns.len(), 7);
}

#[test]
fn s5_unreachable_reports_error() {
    let mut b = GraphBuilder::new();
    b.add_room("s", 0, 0).unwrap();
    b.add_room("island", 5, 5).unwrap();
    b.add_room("e", 1, 0).unwrap();
    b.set_start("s").unwrap();
    b.set_end("e").unwrap();
    b.set_ants(1);
    let graph = b.build().unwrap();

    assert_eq!(run(&graph), Err(EngineError::Unreachable));
}

#[test]
fn deterministic_across_repeated_runs() {
    let mut b = GraphBuilder::new();
    for name in ["s", "a", "b", "e"] {
        b.add_room(name, 0, 0).unwrap();
    }
    b.set_start("s").unwrap();
    b.set_end("e").unwrap();
    b.add_link("s", "a").unwrap();
    b.add_link("a", "b").unwrap();
    b.add_link("b", "e").unwrap();
    b.set_ants(3);
    let graph = b.build().unwrap();

    assert_eq!(run(&graph).unwrap(), run(&graph).unwrap());
}
