//! lilmxm - Masked, accumulating sparse `A * Bᵗ` multiply
//!
//! This library computes `C<M,z> = C accum (A ⊕.⊗ Bᵗ)` over list-of-lists
//! row storage, where `⊕.⊗` is a caller-supplied semiring, `accum` an
//! optional binary operator, `M` an optional (possibly complemented) write
//! mask, and `z` the replace-or-merge policy.
//!
//! ## Architecture
//!
//! - **lilmxm-core**: Operator traits, the row store interface, the dot
//!   product, mask cursor, row combinators and short-circuit table (no_std)
//! - **lilmxm**: The list-of-lists matrix, the shared handle, the kernels and
//!   the dispatch layer
//!
//! ## Quick Start
//!
//! ```rust
//! use lilmxm::{mxm_abt_masked_accum, ArithmeticSemiring, Matrix, Plus};
//!
//! fn example() -> lilmxm::Result<()> {
//!     let a = Matrix::from_triples(2, 2, [(0, 0, 1.0), (0, 1, 2.0), (1, 1, 3.0)])?;
//!     let b = Matrix::from_triples(2, 2, [(0, 0, 4.0), (1, 1, 5.0)])?;
//!     let mask = Matrix::from_triples(2, 2, [(0, 0, true), (1, 1, true)])?;
//!     let c = Matrix::from_triples(2, 2, [(0, 0, 10.0), (1, 0, 7.0)])?;
//!
//!     mxm_abt_masked_accum(&c, &mask, &Plus::new(), &ArithmeticSemiring::new(), &a, &b, false)?;
//!     assert_eq!(c.get_element(0, 0)?, Some(14.0));
//!     assert_eq!(c.get_element(1, 1)?, Some(15.0));
//!     assert_eq!(c.get_element(1, 0)?, Some(7.0));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! The output may share storage with `B` (pass a clone of the same
//! [`Matrix`] handle); the result is the same as if `B` had been copied first.

pub use lilmxm_core::{
    // Operators
    ArithmeticSemiring, LogicalSemiring, MaxPlusSemiring, MinPlusSemiring, Max, Min, NoAccumulate,
    Plus, Second, Times,
    // Traits
    BinaryOp, RowStore, Semiring,
    // Row primitives
    dot, masked_accum, masked_merge, merge_accum, MaskCursor, Row,
    // Variants
    Emptiness, MaskClass, ShortCircuit, Variant,
    // Validation
    validate_mxm_dimensions, validate_row, MxmError, MxmShapes, Operand,
};

pub mod descriptor;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
mod kernels;
pub mod lil_matrix;
pub mod matrix;

pub use descriptor::Descriptor;
pub use diagnostics::{install_sink, is_enabled, remove_sink, DiagnosticSink, LogSink, MemorySink};
pub use dispatch::{
    mxm, mxm_abt, mxm_abt_accum, mxm_abt_comp_masked, mxm_abt_comp_masked_accum, mxm_abt_masked,
    mxm_abt_masked_accum,
};
pub use error::{Error, Result};
pub use lil_matrix::LilSparseMatrix;
pub use matrix::Matrix;
