//! Extent checks for `C<M> = A · Bᵗ`

use crate::error::{MxmError, Operand};

/// Extents of every operand of one multiply call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MxmShapes {
    pub output: (usize, usize),
    pub mask: Option<(usize, usize)>,
    pub left: (usize, usize),
    pub right: (usize, usize),
}

/// Validate that the operand extents are consistent with `A · Bᵗ`
///
/// `A` and `B` must share a column count, `C` must be `rows(A) x rows(B)`,
/// and a mask, when present, must match `C`.
pub const fn validate_mxm_dimensions(shapes: &MxmShapes) -> Result<(), MxmError> {
    if shapes.left.1 != shapes.right.1 {
        return Err(MxmError::InnerDimensionMismatch {
            left: shapes.left.1,
            right: shapes.right.1,
        });
    }

    let expected = (shapes.left.0, shapes.right.0);
    if shapes.output.0 != expected.0 || shapes.output.1 != expected.1 {
        return Err(MxmError::DimensionMismatch {
            operand: Operand::Output,
            expected,
            found: shapes.output,
        });
    }

    if let Some(mask) = shapes.mask {
        if mask.0 != expected.0 || mask.1 != expected.1 {
            return Err(MxmError::DimensionMismatch {
                operand: Operand::Mask,
                expected,
                found: mask,
            });
        }
    }

    Ok(())
}
