use super::*;

#[test]
fn parses_minimal_valid_input() {
    let input = "1\n##start\ns 0 0\n##end\ne 1 0\ns-e\n";
    let graph = parse(input).unwrap();
    assert_eq!(graph.ants(), 1);
    assert_eq!(graph.num_rooms(), 2);
    assert_eq!(graph.num_links(), 1);
}

#[test]
fn skips_comment_lines() {
    let input = "# a farm\n3\n# rooms\n##start\ns 0 0\n##end\ne 3 0\n# links\ns-e\n";
    let graph = parse(input).unwrap();
    assert_eq!(graph.ants(), 3);
}

#[test]
fn parses_full_chain_graph() {
    let input = "3\n##start\ns 0 0\na 1 0\nb 2 0\n##end\ne 3 0\ns-a\na-b\nb-e\n";
    let graph = parse(input).unwrap();
    assert_eq!(graph.num_rooms(), 4);
    assert_eq!(graph.num_links(), 3);
    assert!(graph.index_of("a").is_some());
}

#[test]
fn rejects_missing_start() {
    let input = "1\n##end\ne 1 0\ns 0 0\ns-e\n";
    assert!(parse(input).is_err());
}

#[test]
fn rejects_duplicate_start_directive() {
    let input = "1\n##start\ns 0 0\n##start\nt 1 0\n##end\ne 2 0\ns-e\n";
    assert!(parse(input).is_err());
}

#[test]
fn rejects_non_positive_ant_count() {
    let input = "0\n##start\ns 0 0\n##end\ne 1 0\ns-e\n";
    assert!(parse(input).is_err());
}

#[test]
fn rejects_unknown_room_in_link() {
    let input = "1\n##start\ns 0 0\n##end\ne 1 0\ns-ghost\n";
    assert!(parse(input).is_err());
}

#[test]
fn rejects_malformed_room_declaration() {
    let input = "1\n##start\ns 0\n##end\ne 1 0\ns-e\n";
    assert!(parse(input).is_err());
}
