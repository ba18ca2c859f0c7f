//! Operand validation for the multiply engine
//!
//! Pure checks with no side effects. Every check here runs before the first
//! write to the output matrix.

pub mod bounds;
pub mod dimensions;

pub use bounds::{validate_index, validate_row};
pub use dimensions::{validate_mxm_dimensions, MxmShapes};
