#![no_std]

//! lilmxm-core - Algebra and row primitives for masked sparse multiply
//!
//! This crate provides the pieces of `C<M,z> = C accum (A ⊕.⊗ Bᵗ)` that do not
//! depend on a concrete matrix container: operator traits, the row store
//! interface, the semiring dot product, the mask cursor, the row combinators
//! and the short-circuit table.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::vec::Vec;

pub mod algebra;
pub mod combine;
pub mod dot;
pub mod error;
pub mod mask;
pub mod traits;
pub mod validation;
pub mod variant;

pub use algebra::*;
pub use combine::{masked_accum, masked_merge, merge_accum};
pub use dot::dot;
pub use error::*;
pub use mask::MaskCursor;
pub use traits::*;
pub use validation::*;
pub use variant::{Emptiness, MaskClass, ShortCircuit, Variant};

/// One sparse row: ascending, column-unique `(column, value)` pairs
pub type Row<T> = Vec<(usize, T)>;
