//! Error types for masked matrix multiply operations

/// Role an operand plays in `C<M,z> = C accum (A ⊕.⊗ Bᵗ)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// The output matrix `C`
    Output,
    /// The structural write mask `M`
    Mask,
}

impl Operand {
    /// Conventional single-letter name of the operand
    pub const fn name(self) -> &'static str {
        match self {
            Operand::Output => "C",
            Operand::Mask => "M",
        }
    }
}

impl core::fmt::Display for Operand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while validating or building multiply operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MxmError {
    /// An operand's extent is inconsistent with `C = A · Bᵗ`
    DimensionMismatch {
        operand: Operand,
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// `A` and `B` do not share a column space
    InnerDimensionMismatch { left: usize, right: usize },
    /// A coordinate lies outside the matrix extent
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Row columns are not strictly increasing
    UnsortedRow { row: usize },
    /// The same coordinate was supplied twice
    DuplicateEntry { row: usize, col: usize },
}

impl core::fmt::Display for MxmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MxmError::DimensionMismatch {
                operand,
                expected,
                found,
            } => write!(
                f,
                "Dimension mismatch for {operand}: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            MxmError::InnerDimensionMismatch { left, right } => write!(
                f,
                "Inner dimension mismatch: A has {left} columns, B has {right}"
            ),
            MxmError::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => write!(f, "Index ({row}, {col}) out of bounds for {nrows}x{ncols}"),
            MxmError::UnsortedRow { row } => {
                write!(f, "Row {row} columns are not strictly increasing")
            }
            MxmError::DuplicateEntry { row, col } => {
                write!(f, "Duplicate entry at ({row}, {col})")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MxmError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, MxmError>;
