//! Index bounds and row ordering validation

use crate::error::MxmError;

/// Validate that `(row, col)` lies inside an `nrows x ncols` extent
pub const fn validate_index(
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), MxmError> {
    if row >= nrows || col >= ncols {
        return Err(MxmError::IndexOutOfBounds {
            row,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Validate one stored row: columns in bounds and strictly increasing
pub fn validate_row<T>(
    row_index: usize,
    row: &[(usize, T)],
    nrows: usize,
    ncols: usize,
) -> Result<(), MxmError> {
    let mut previous: Option<usize> = None;
    for (col, _) in row {
        validate_index(row_index, *col, nrows, ncols)?;
        match previous {
            Some(prev) if prev == *col => {
                return Err(MxmError::DuplicateEntry {
                    row: row_index,
                    col: *col,
                })
            }
            Some(prev) if prev > *col => return Err(MxmError::UnsortedRow { row: row_index }),
            _ => {}
        }
        previous = Some(*col);
    }
    Ok(())
}
