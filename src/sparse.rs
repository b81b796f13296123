//! Sparse row-major adjacency matrix.
//!
//! Each row stores only its non-zero entries as `(column, value)` pairs, so
//! "columns and values stay in sync" is a structural fact rather than a
//! maintained convention. An empty row is a *dangling node*: the matrix keeps
//! only real edges, and redistributing a dangling node's mass is the scoring
//! engine's job, not the representation's.

use crate::{Error, Result};

/// One matrix row: the non-zero `(column, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseRow {
    entries: Vec<(usize, f64)>,
}

impl SparseRow {
    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether this row has no outgoing edges.
    pub fn is_dangling(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }
}

/// An `m x n` sparse matrix of `f64` values.
///
/// For PageRank this is the adjacency matrix of a directed graph with `m`
/// nodes (square, `m == n`): entry `(i, j)` present means edge `i -> j`.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    n: usize,
    rows: Vec<SparseRow>,
}

impl SparseMatrix {
    /// An `m x n` matrix with every row empty.
    pub fn new(m: usize, n: usize) -> Self {
        Self { n, rows: vec![SparseRow::default(); m] }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.n
    }

    pub fn is_square(&self) -> bool {
        self.rows.len() == self.n
    }

    pub fn rows(&self) -> &[SparseRow] {
        &self.rows
    }

    /// Row `i`. Panics when `i >= row_count()`.
    pub fn row(&self, i: usize) -> &SparseRow {
        &self.rows[i]
    }

    /// Populate row `i` from a column list, one binary edge (value 1.0) per
    /// listed column. Replaces any prior content of that row.
    ///
    /// Errors with [`Error::IndexOutOfBounds`] when `i >= row_count()` or any
    /// column is `>= col_count()`. Duplicate columns are kept as-is; the
    /// stochastic transform divides by the entry count, so row mass is
    /// unaffected.
    pub fn set_row(&mut self, i: usize, cols: &[usize]) -> Result<()> {
        if i >= self.rows.len() {
            return Err(Error::IndexOutOfBounds(i));
        }
        if let Some(&bad) = cols.iter().find(|&&c| c >= self.n) {
            return Err(Error::IndexOutOfBounds(bad));
        }
        self.rows[i].entries = cols.iter().map(|&c| (c, 1.0)).collect();
        Ok(())
    }

    /// Build an `m x n` binary matrix from per-row column lists
    /// (`m = rows.len()`).
    pub fn from_rows(n: usize, rows: &[Vec<usize>]) -> Result<Self> {
        let mut matrix = Self::new(rows.len(), n);
        for (i, cols) in rows.iter().enumerate() {
            matrix.set_row(i, cols)?;
        }
        Ok(matrix)
    }

    /// Build an `m x n` binary matrix from a `u -> v` edge list.
    ///
    /// Edges are deduplicated and each row's columns end up ascending.
    pub fn from_edges(m: usize, n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut cols_per_row: Vec<Vec<usize>> = vec![Vec::new(); m];
        for &(u, v) in edges {
            if u >= m {
                return Err(Error::IndexOutOfBounds(u));
            }
            if v >= n {
                return Err(Error::IndexOutOfBounds(v));
            }
            cols_per_row[u].push(v);
        }
        for cols in &mut cols_per_row {
            cols.sort_unstable();
            cols.dedup();
        }
        Self::from_rows(n, &cols_per_row)
    }

    /// Turn a binary adjacency matrix into a row-stochastic transition matrix,
    /// in place: every entry of a non-empty row is divided by that row's
    /// non-zero count. Dangling rows are left untouched.
    ///
    /// One-way and not idempotent: reapplying divides again. Expects binary
    /// (all-1.0) values; the sparsity pattern is unchanged.
    ///
    /// Postcondition: every non-empty row's values sum to 1.0 (within float
    /// tolerance).
    pub fn to_stochastic(&mut self) {
        for row in &mut self.rows {
            let nnz = row.entries.len();
            if nnz == 0 {
                continue;
            }
            for (_, val) in &mut row.entries {
                *val /= nnz as f64;
            }
        }
    }
}

#[cfg(feature = "petgraph")]
impl SparseMatrix {
    /// Binary adjacency of a directed petgraph, indexed by
    /// `NodeIndex::index()`.
    ///
    /// Parallel edges collapse to a single 1.0 entry.
    pub fn from_petgraph<N, E, Ix>(
        graph: &petgraph::Graph<N, E, petgraph::Directed, Ix>,
    ) -> Self
    where
        Ix: petgraph::graph::IndexType,
    {
        let n = graph.node_count();
        let mut matrix = Self::new(n, n);
        for u in graph.node_indices() {
            let mut cols: Vec<usize> = graph.neighbors(u).map(|v| v.index()).collect();
            cols.sort_unstable();
            cols.dedup();
            matrix.rows[u.index()].entries = cols.into_iter().map(|c| (c, 1.0)).collect();
        }
        matrix
    }
}
