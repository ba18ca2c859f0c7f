//! Error type for multiply calls

use lilmxm_core::MxmError;
use thiserror::Error;

/// Errors returned by the multiply entry points and the matrix handle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand validation failed before anything was written
    #[error(transparent)]
    Core(#[from] MxmError),

    /// The operand's storage is already borrowed in a conflicting way
    #[error("Operand {0} is already borrowed; it may alias the output")]
    Busy(&'static str),

    /// A previous writer panicked while holding the operand
    #[error("Operand {0} was poisoned by a panicked writer")]
    Poisoned(&'static str),
}

/// Result type for multiply calls
pub type Result<T> = std::result::Result<T, Error>;
