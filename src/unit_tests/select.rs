use super::*;

fn idx(i: usize) -> NodeIndex {
    NodeIndex::new(i)
}

#[test]
fn picks_single_path_when_pool_has_one() {
    let path = vec![idx(0), idx(1), idx(2)];
    let chosen = select_best(&[path.clone()], 3);
    assert_eq!(chosen, vec![path]);
}

#[test]
fn prefers_both_disjoint_paths_when_faster_overall() {
    // two length-3 paths sharing only start/end; with several ants, using
    // both is faster than using just one.
    let p1 = vec![idx(0), idx(1), idx(2), idx(9)];
    let p2 = vec![idx(0), idx(3), idx(4), idx(9)];
    let chosen = select_best(&[p1.clone(), p2.clone()], 4);
    assert_eq!(chosen.len(), 2);
}

#[test]
fn rejects_overlapping_interior_subsets() {
    // p2 shares interior vertex 1 with p1, so {p1, p2} must never be chosen
    // together regardless of score; only individual paths are valid.
    let p1 = vec![idx(0), idx(1), idx(9)];
    let p2 = vec![idx(0), idx(1), idx(5), idx(9)];
    let chosen = select_best(&[p1, p2], 5);
    assert_eq!(chosen.len(), 1);
}

#[test]
fn empty_pool_yields_empty_selection() {
    assert!(select_best(&[], 3).is_empty());
}
