//! Greedy nearest-neighbor ordering of fetched network records.

use crate::geo::{planar_distance, GeoPoint};
use crate::types::NetworkRecord;

/// Orders `records` into a visitable route beginning at `start`.
///
/// Builds the full pairwise planar distance matrix over the start point and
/// every record — (n+1)×(n+1), symmetric, zero diagonal — then repeatedly
/// hops to the unvisited record closest to the most recently visited node.
/// Exact distance ties go to the record that appeared first in the input,
/// so identical inputs always produce identical orderings.
///
/// The result is a permutation of `records` (every record exactly once) and
/// never contains the start point itself. This is a heuristic Hamiltonian
/// path, not a minimum-weight tour, and carries no optimality bound.
///
/// O(n²) time and space; n is capped by the fetch target count.
#[must_use]
pub fn optimize(start: GeoPoint, records: Vec<NetworkRecord>) -> Vec<NetworkRecord> {
    if records.len() < 2 {
        return records;
    }

    let nodes: Vec<GeoPoint> = std::iter::once(start)
        .chain(records.iter().map(|r| r.position))
        .collect();
    let n = nodes.len();

    let mut matrix = vec![0.0_f64; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = planar_distance(nodes[i], nodes[j]);
            matrix[i * n + j] = d;
            matrix[j * n + i] = d;
        }
    }

    // `remaining` stays in ascending input order, so scanning with a strict
    // `<` resolves ties toward the earliest original index.
    let mut remaining: Vec<usize> = (1..n).collect();
    let mut order: Vec<usize> = Vec::with_capacity(n - 1);
    let mut current = 0_usize;

    while !remaining.is_empty() {
        let mut best_slot = 0_usize;
        for slot in 1..remaining.len() {
            if matrix[current * n + remaining[slot]] < matrix[current * n + remaining[best_slot]] {
                best_slot = slot;
            }
        }
        let next = remaining.remove(best_slot);
        order.push(next);
        current = next;
    }

    let mut slots: Vec<Option<NetworkRecord>> = records.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|node| slots[node - 1].take())
        .collect()
}
