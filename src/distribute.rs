//! Ant Distributor: assigns ant counts to a set of paths to balance finish
//! times, and the predicted-turn-count formula shared with the Selector.

use std::collections::BinaryHeap;

/// Distributes `ants` ants across paths of the given `lengths`, minimizing
/// `max_i (lengths[i] + counts[i] - 1)`.
///
/// Greedy: each of the `ants` ants goes to whichever path would finish
/// earliest if it got the ant next (`lengths[i] + counts[i]`), ties broken
/// toward the smallest index. This is exact for this cost function — the
/// cost is a max of affine monotone functions, so keeping the running
/// maximum minimal at every step keeps it minimal at the end.
pub fn distribute(lengths: &[usize], ants: usize) -> Vec<usize> {
    let mut counts = vec![0usize; lengths.len()];
    if lengths.is_empty() {
        return counts;
    }

    // Min-heap on (length + count, index); index breaks ties toward the
    // smaller path index since `Reverse` makes smaller tuples pop first.
    let mut heap: BinaryHeap<std::cmp::Reverse<(usize, usize)>> = lengths
        .iter()
        .enumerate()
        .map(|(i, &l)| std::cmp::Reverse((l, i)))
        .collect();

    for _ in 0..ants {
        let std::cmp::Reverse((next_finish, i)) = heap.pop().expect("heap sized to lengths");
        counts[i] += 1;
        heap.push(std::cmp::Reverse((next_finish + 1, i)));
    }

    counts
}

/// The predicted total turn count for `lengths` paths carrying `ants` ants
/// under the optimal [`distribute`] assignment.
pub fn predicted_turns(lengths: &[usize], ants: usize) -> usize {
    if lengths.is_empty() {
        return 0;
    }
    let counts = distribute(lengths, ants);
    lengths
        .iter()
        .zip(counts.iter())
        .map(|(&l, &a)| l + a - 1)
        .max()
        .unwrap_or(0)
}

/// Safety net ensuring a distribution sums to exactly `ants`.
///
/// `distribute` always produces an exact sum by construction, but this
/// mirrors the original implementation's defensive rescale — useful if a
/// distribution arrives from elsewhere (e.g. reconstructed from a report)
/// slightly over- or under-count. Proportionally scales down any excess
/// and assigns remaining shortfall to the first paths in order; never
/// produces a negative count.
pub fn normalize(counts: &mut [usize], ants: usize) {
    let total: usize = counts.iter().sum();
    if total == ants || counts.is_empty() {
        return;
    }

    if total > ants {
        let mut scaled: Vec<usize> = counts
            .iter()
            .map(|&c| (c * ants) / total.max(1))
            .collect();
        let mut shortfall = ants.saturating_sub(scaled.iter().sum());
        for c in scaled.iter_mut() {
            if shortfall == 0 {
                break;
            }
            *c += 1;
            shortfall -= 1;
        }
        counts.copy_from_slice(&scaled);
    } else {
        let mut shortfall = ants - total;
        let mut i = 0;
        while shortfall > 0 {
            counts[i % counts.len()] += 1;
            shortfall -= 1;
            i += 1;
        }
    }
}

#[cfg(test)]
#[path = "unit_tests/distribute.rs"]
mod tests;
