//! Power-iteration scoring engine.
//!
//! Applies a row-stochastic transition matrix to a probability vector a fixed
//! number of times. A dangling row redistributes its mass uniformly over all
//! nodes on every application; there is no damping term and no convergence
//! check, so the iteration budget is the whole stopping rule.

use crate::sparse::SparseMatrix;
use crate::vector::Vector;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreConfig {
    /// Number of transition applications. Pick a budget large enough for the
    /// graph at hand; the engine never stops early.
    pub iterations: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self { iterations: 100 }
    }
}

/// Apply `config.iterations` Markov transitions of `matrix` to `v` and return
/// the resulting score vector.
///
/// Preconditions (not checked here, see [`score_checked`]):
/// - `matrix` is square and already row-stochastic
///   ([`SparseMatrix::to_stochastic`]);
/// - `v.dim() == matrix.row_count()`.
///
/// The entry-sum of `v` is preserved by every iteration: non-empty rows sum
/// to 1.0, and a dangling row `i` contributes `v[i] / m` to every node.
/// `iterations == 0` returns `v` unchanged.
pub fn score(matrix: &SparseMatrix, mut v: Vector, config: ScoreConfig) -> Vector {
    let m = matrix.row_count();
    if m == 0 {
        return v;
    }
    let uniform_share = 1.0 / m as f64;

    // One scratch accumulator for the whole run; swapped with `v` after each
    // iteration and cleared for the next. Never handed to the caller.
    let mut next = Vector::zeros(m);
    for _ in 0..config.iterations {
        for (i, row) in matrix.rows().iter().enumerate() {
            let mass = v[i];
            if row.is_dangling() {
                let share = mass * uniform_share;
                for e in next.as_mut_slice() {
                    *e += share;
                }
            } else {
                for &(col, weight) in row.entries() {
                    next[col] += mass * weight;
                }
            }
        }
        std::mem::swap(&mut v, &mut next);
        next.fill(0.0);
    }
    v
}

/// [`score`] with the shape preconditions checked up front.
pub fn score_checked(matrix: &SparseMatrix, v: Vector, config: ScoreConfig) -> Result<Vector> {
    if !matrix.is_square() {
        return Err(Error::InvalidParameter(format!(
            "matrix must be square (m={} n={})",
            matrix.row_count(),
            matrix.col_count()
        )));
    }
    if v.dim() != matrix.row_count() {
        return Err(Error::InvalidParameter(format!(
            "vector dimension must equal node count (dim={} m={})",
            v.dim(),
            matrix.row_count()
        )));
    }
    Ok(score(matrix, v, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stochastic(n: usize, rows: &[Vec<usize>]) -> SparseMatrix {
        let mut m = SparseMatrix::from_rows(n, rows).unwrap();
        m.to_stochastic();
        m
    }

    #[test]
    fn two_node_graph_with_dangling_sink() {
        // 0 -> 1, node 1 dangling. From [0.5, 0.5] one application gives
        // next[0] = v[1]/2 = 0.25 and next[1] = v[0] + v[1]/2 = 0.75.
        let m = stochastic(2, &[vec![1], vec![]]);
        assert_eq!(m.row(0).entries(), &[(1, 1.0)]);

        let v = Vector::from_values(vec![0.5, 0.5]);
        let out = score(&m, v, ScoreConfig { iterations: 1 });
        assert!((out[0] - 0.25).abs() < 1e-12, "out[0]={}", out[0]);
        assert!((out[1] - 0.75).abs() < 1e-12, "out[1]={}", out[1]);
        assert!((out.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_iterations_is_identity() {
        let m = stochastic(3, &[vec![1], vec![2], vec![0]]);
        let v = Vector::from_values(vec![0.2, 0.3, 0.5]);
        let out = score(&m, v.clone(), ScoreConfig { iterations: 0 });
        assert_eq!(out, v);
    }

    #[test]
    fn empty_matrix_is_a_no_op() {
        let m = SparseMatrix::new(0, 0);
        let out = score(&m, Vector::zeros(0), ScoreConfig::default());
        assert!(out.is_empty());
    }

    #[test]
    fn checked_rejects_non_square() {
        let m = SparseMatrix::new(2, 3);
        let err = score_checked(&m, Vector::uniform(2), ScoreConfig::default());
        assert!(matches!(err, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn checked_rejects_dimension_mismatch() {
        let m = stochastic(2, &[vec![1], vec![0]]);
        let err = score_checked(&m, Vector::uniform(3), ScoreConfig::default());
        assert!(matches!(err, Err(Error::InvalidParameter(_))));
    }
}
