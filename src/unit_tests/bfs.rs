use super::*;

fn idx(i: usize) -> NodeIndex {
    NodeIndex::new(i)
}

#[test]
fn finds_direct_path() {
    let adjacency = vec![vec![idx(1)], vec![idx(0)]];
    let path = shortest_path(2, idx(0), idx(1), |r| adjacency[r.index()].clone());
    assert_eq!(path, Some(vec![idx(0), idx(1)]));
}

#[test]
fn reports_unreachable() {
    let adjacency: Vec<Vec<NodeIndex>> = vec![vec![], vec![]];
    let path = shortest_path(2, idx(0), idx(1), |r| adjacency[r.index()].clone());
    assert_eq!(path, None);
}

#[test]
fn prefers_shorter_path_over_longer() {
    // 0 -- 1 -- 3 (target), and 0 -- 2 -- 3 declared after, so BFS via node 1
    // is discovered first and both are length 2; tie goes to adjacency order.
    let adjacency = vec![
        vec![idx(1), idx(2)],
        vec![idx(0), idx(3)],
        vec![idx(0), idx(3)],
        vec![idx(1), idx(2)],
    ];
    let path = shortest_path(4, idx(0), idx(3), |r| adjacency[r.index()].clone());
    assert_eq!(path, Some(vec![idx(0), idx(1), idx(3)]));
}

#[test]
fn skips_longer_detour() {
    // direct edge 0-2 plus a longer 0-1-2 detour; shortest is the direct edge.
    let adjacency = vec![
        vec![idx(1), idx(2)],
        vec![idx(0), idx(2)],
        vec![idx(0), idx(1)],
    ];
    let path = shortest_path(3, idx(0), idx(2), |r| adjacency[r.index()].clone());
    assert_eq!(path, Some(vec![idx(0), idx(2)]));
}
