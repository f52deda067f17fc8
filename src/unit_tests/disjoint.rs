use super::*;
use crate::graph::GraphBuilder;

#[test]
fn extracts_two_disjoint_paths() {
    let mut b = GraphBuilder::new();
    for name in ["s", "a", "b", "c", "d", "e"] {
        b.add_room(name, 0, 0).unwrap();
    }
    b.set_start("s").unwrap();
    b.set_end("e").unwrap();
    for (x, y) in [("s", "a"), ("a", "b"), ("b", "e"), ("s", "c"), ("c", "d"), ("d", "e")] {
        b.add_link(x, y).unwrap();
    }
    b.set_ants(4);
    let graph = b.build().unwrap();

    let paths = extract_disjoint_paths(&graph);
    assert_eq!(paths.len(), 2);
    for path in &paths {
        assert_eq!(path.len(), 4);
        assert_eq!(*path.first().unwrap(), graph.start());
        assert_eq!(*path.last().unwrap(), graph.end());
    }
}

#[test]
fn empty_when_unreachable() {
    let mut b = GraphBuilder::new();
    b.add_room("s", 0, 0).unwrap();
    b.add_room("e", 0, 0).unwrap();
    b.set_start("s").unwrap();
    b.set_end("e").unwrap();
    b.set_ants(1);
    let graph = b.build().unwrap();

    assert!(extract_disjoint_paths(&graph).is_empty());
}

#[test]
fn bounded_by_min_degree_of_endpoints() {
    // start has degree 1, so only one path can be extracted even though
    // there are multiple routes from the far side.
    let mut b = GraphBuilder::new();
    for name in ["s", "m", "a", "b", "e"] {
        b.add_room(name, 0, 0).unwrap();
    }
    b.set_start("s").unwrap();
    b.set_end("e").unwrap();
    b.add_link("s", "m").unwrap();
    b.add_link("m", "a").unwrap();
    b.add_link("m", "b").unwrap();
    b.add_link("a", "e").unwrap();
    b.add_link("b", "e").unwrap();
    b.set_ants(1);
    let graph = b.build().unwrap();

    assert_eq!(extract_disjoint_paths(&graph).len(), 1);
}
