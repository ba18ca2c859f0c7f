//! Abstract interfaces for the multiply engine
//!
//! The algebra traits describe the caller-supplied operators; the row store
//! trait describes the storage the kernels read and write.

pub mod operator;
pub mod store;

pub use operator::{BinaryOp, Semiring};
pub use store::RowStore;
