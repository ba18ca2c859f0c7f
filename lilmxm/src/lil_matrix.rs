//! List-of-lists row storage
//!
//! Each row is held as its own ascending `(column, value)` vector, which
//! makes whole-row replacement cheap and keeps row reads zero-copy.

use std::fmt;

use lilmxm_core::{validate_index, validate_row, MxmError, Row, RowStore};

/// Sparse matrix stored as one sorted vector per row
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LilSparseMatrix<T> {
    nrows: usize,
    ncols: usize,
    nvals: usize,
    rows: Vec<Row<T>>,
}

impl<T> LilSparseMatrix<T> {
    /// Create an empty `nrows x ncols` matrix
    pub fn new(nrows: usize, ncols: usize) -> Self {
        let mut rows = Vec::with_capacity(nrows);
        rows.resize_with(nrows, Vec::new);
        Self {
            nrows,
            ncols,
            nvals: 0,
            rows,
        }
    }

    /// Build from `(row, col, value)` triples in any order
    ///
    /// Fails on an out-of-range coordinate or a repeated coordinate.
    pub fn from_triples<I>(nrows: usize, ncols: usize, triples: I) -> Result<Self, MxmError>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(nrows, ncols);
        for (i, j, value) in triples {
            validate_index(i, j, nrows, ncols)?;
            matrix.rows[i].push((j, value));
        }
        for (i, row) in matrix.rows.iter_mut().enumerate() {
            row.sort_by_key(|(j, _)| *j);
            if let Some(pair) = row.windows(2).find(|pair| pair[0].0 == pair[1].0) {
                return Err(MxmError::DuplicateEntry {
                    row: i,
                    col: pair[0].0,
                });
            }
            matrix.nvals += row.len();
        }
        Ok(matrix)
    }

    /// Build from already sorted rows
    pub fn from_rows(ncols: usize, rows: Vec<Row<T>>) -> Result<Self, MxmError> {
        let nrows = rows.len();
        for (i, row) in rows.iter().enumerate() {
            validate_row(i, row, nrows, ncols)?;
        }
        let nvals = rows.iter().map(Vec::len).sum();
        Ok(Self {
            nrows,
            ncols,
            nvals,
            rows,
        })
    }

    /// Iterate stored entries as `(row, col, &value)` in row-major order
    pub fn triples(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |(j, v)| (i, *j, v)))
    }

    /// Consume the matrix, yielding its rows
    pub fn into_rows(self) -> Vec<Row<T>> {
        self.rows
    }

    /// Whether no values are stored
    pub fn is_empty(&self) -> bool {
        self.nvals == 0
    }
}

impl<T> RowStore for LilSparseMatrix<T> {
    type Value = T;

    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    fn nvals(&self) -> usize {
        self.nvals
    }

    fn row(&self, i: usize) -> &[(usize, T)] {
        &self.rows[i]
    }

    fn set_row(&mut self, i: usize, row: Row<T>) {
        debug_assert!(
            validate_row(i, &row, self.nrows, self.ncols).is_ok(),
            "row {i} written out of order or out of bounds"
        );
        self.nvals = self.nvals - self.rows[i].len() + row.len();
        self.rows[i] = row;
    }

    fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
        self.nvals = 0;
    }

    fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T: fmt::Display> fmt::Display for LilSparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "({}x{}, {} values)", self.nrows, self.ncols, self.nvals)?;
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{i:>4}:")?;
            for (j, v) in row {
                write!(f, " {j}:{v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
