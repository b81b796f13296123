//! Ranking helpers for score vectors.

use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The `k` highest-scoring nodes as `(node, score)` pairs, descending.
///
/// Non-finite scores are skipped. Returns fewer than `k` pairs when the
/// input has fewer rankable entries.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }
    let mut heap: BinaryHeap<Reverse<(NotNan<f64>, Reverse<usize>)>> =
        BinaryHeap::with_capacity(k + 1);
    for (node, &score) in scores.iter().enumerate() {
        if !score.is_finite() {
            continue;
        }
        let Ok(score) = NotNan::new(score) else { continue };
        let candidate = Reverse((score, Reverse(node)));
        if heap.len() < k {
            heap.push(candidate);
        } else if let Some(&lowest) = heap.peek() {
            // min-heap root is the weakest kept entry
            if candidate < lowest {
                heap.pop();
                heap.push(candidate);
            }
        }
    }
    let mut out: Vec<(usize, f64)> = heap
        .into_iter()
        .map(|Reverse((score, Reverse(node)))| (node, score.into_inner()))
        .collect();
    out.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    out
}
