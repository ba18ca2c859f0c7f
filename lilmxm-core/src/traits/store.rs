//! Row store abstraction consumed by the multiply kernels
//!
//! The kernels never touch storage directly: they read rows, replace whole
//! rows, and merge rows through this trait. Any list-of-rows container can
//! back a multiply by implementing it.

use alloc::vec::Vec;

use super::operator::BinaryOp;
use crate::combine::merge_accum;
use crate::Row;

/// Row-oriented sparse matrix storage
///
/// Every row is an ascending, column-unique sequence of `(column, value)`
/// pairs. Implementations must keep that invariant across `set_row` and
/// `merge_row`, and must keep `nvals` equal to the total stored entries.
pub trait RowStore {
    /// The value type stored in this matrix
    type Value;

    /// Number of rows
    fn nrows(&self) -> usize;

    /// Number of columns
    fn ncols(&self) -> usize;

    /// Total stored entries across all rows
    fn nvals(&self) -> usize;

    /// Read row `i` in ascending column order
    fn row(&self, i: usize) -> &[(usize, Self::Value)];

    /// Replace row `i` as a single write
    ///
    /// `row` must already be ascending and column-unique.
    fn set_row(&mut self, i: usize, row: Row<Self::Value>);

    /// Drop every stored entry, keeping the extent
    fn clear(&mut self);

    /// Exchange the whole storage with another store of the same type
    fn swap(&mut self, other: &mut Self);

    /// Matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// Get the stored value at a position, if any
    fn get_element(&self, row: usize, col: usize) -> Option<&Self::Value> {
        if row >= self.nrows() {
            return None;
        }
        let entries = self.row(row);
        entries
            .binary_search_by_key(&col, |(j, _)| *j)
            .ok()
            .map(|pos| &entries[pos].1)
    }

    /// Merge `row` into row `i`, combining shared columns with `op`
    ///
    /// Columns present on only one side are kept unchanged. The merged row is
    /// written back with a single `set_row`.
    fn merge_row<T, Op>(&mut self, i: usize, row: &[(usize, T)], op: &Op)
    where
        Self::Value: Clone + From<Op::Output>,
        T: Clone,
        Op: BinaryOp<Self::Value, T>,
        Op::Output: From<Self::Value> + From<T>,
    {
        if row.is_empty() {
            return;
        }
        let merged: Vec<(usize, Op::Output)> = merge_accum(self.row(i), row, op);
        let merged = merged
            .into_iter()
            .map(|(j, z)| (j, Self::Value::from(z)))
            .collect();
        self.set_row(i, merged);
    }
}
