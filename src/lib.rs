//! `sprank`: PageRank over a sparse row-major adjacency matrix.
//!
//! The pipeline is: build a binary [`SparseMatrix`] from a directed graph,
//! turn it row-stochastic with [`SparseMatrix::to_stochastic`], then run the
//! power-iteration engine [`score`] against a starting distribution
//! (usually [`Vector::uniform`]).
//!
//! Public invariants (must not drift):
//! - **Node order**: matrix rows, vector entries, and scores are all indexed
//!   by node id \(0..m-1\); no operation reorders nodes.
//! - **Mass conservation**: one engine iteration preserves the entry-sum of
//!   the iterate (stochastic rows sum to 1, and a dangling row's mass is
//!   redistributed uniformly over all nodes).
//! - **Pattern immutability**: `to_stochastic` rescales values only; the
//!   sparsity pattern fixed at population time never changes.
//!
//! Swappable (allowed to change without breaking the contract):
//! - accumulation order within one iteration (so long as mass conservation
//!   holds)
//! - scratch-buffer management inside the engine

pub mod io;
pub mod rank;
pub mod score;
pub mod sparse;
pub mod vector;

pub use rank::top_k;
pub use score::{score, score_checked, ScoreConfig};
pub use sparse::{SparseMatrix, SparseRow};
pub use vector::Vector;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
