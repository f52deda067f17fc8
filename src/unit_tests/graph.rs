use super::*;

fn chain_builder() -> GraphBuilder {
    let mut b = GraphBuilder::new();
    b.add_room("s", 0, 0).unwrap();
    b.add_room("a", 1, 0).unwrap();
    b.add_room("e", 2, 0).unwrap();
    b.set_start("s").unwrap();
    b.set_end("e").unwrap();
    b.add_link("s", "a").unwrap();
    b.add_link("a", "e").unwrap();
    b.set_ants(3);
    b
}

#[test]
fn builds_valid_graph() {
    let graph = chain_builder().build().unwrap();
    assert_eq!(graph.num_rooms(), 3);
    assert_eq!(graph.num_links(), 2);
    assert_eq!(graph.ants(), 3);
}

#[test]
fn neighbor_order_matches_link_declaration_order() {
    let mut b = GraphBuilder::new();
    b.add_room("s", 0, 0).unwrap();
    b.add_room("x", 1, 0).unwrap();
    b.add_room("y", 1, 1).unwrap();
    b.add_room("e", 2, 0).unwrap();
    b.set_start("s").unwrap();
    b.set_end("e").unwrap();
    b.add_link("s", "x").unwrap();
    b.add_link("s", "y").unwrap();
    b.add_link("x", "e").unwrap();
    b.add_link("y", "e").unwrap();
    b.set_ants(1);
    let graph = b.build().unwrap();

    let s = graph.index_of("s").unwrap();
    let x = graph.index_of("x").unwrap();
    let y = graph.index_of("y").unwrap();
    assert_eq!(graph.neighbors_ordered(s), &[x, y]);
}

#[test]
fn rejects_room_name_starting_with_l() {
    let mut b = GraphBuilder::new();
    assert!(b.add_room("L1", 0, 0).is_err());
}

#[test]
fn rejects_duplicate_start() {
    let mut b = chain_builder();
    assert!(b.set_start("a").is_err());
}

#[test]
fn rejects_self_loop() {
    let mut b = GraphBuilder::new();
    b.add_room("s", 0, 0).unwrap();
    assert!(b.add_link("s", "s").is_err());
}

#[test]
fn rejects_start_equals_end() {
    let mut b = GraphBuilder::new();
    b.add_room("s", 0, 0).unwrap();
    b.set_start("s").unwrap();
    b.set_end("s").unwrap();
    b.set_ants(1);
    assert!(b.build().is_err());
}

#[test]
fn working_graph_hides_removed_interior_vertices() {
    let graph = chain_builder().build().unwrap();
    let a = graph.index_of("a").unwrap();
    let s = graph.index_of("s").unwrap();
    let mut working = WorkingGraph::new(&graph);
    assert_eq!(working.neighbors(s).collect::<Vec<_>>(), vec![a]);
    working.remove_interior(a);
    assert!(working.neighbors(s).collect::<Vec<_>>().is_empty());
}
