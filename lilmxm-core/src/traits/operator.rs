//! Operator traits for the caller-supplied algebra
//!
//! A multiply is parameterized by a semiring (to fold a dot product) and,
//! optionally, an accumulator (to combine the product into existing output).
//! Both are plain values; implementations may carry state.

/// Semiring used to fold a sparse dot product
///
/// `mult` combines one pair of aligned operand values and `add` folds the
/// products together. The result type may differ from either operand type.
pub trait Semiring {
    /// Value type of the left operand rows
    type Left;
    /// Value type of the right operand rows
    type Right;
    /// Type produced by `mult` and folded by `add`
    type Output;

    /// Identity of the additive combine
    fn zero(&self) -> Self::Output;

    /// Additive combine (⊕)
    fn add(&self, lhs: Self::Output, rhs: Self::Output) -> Self::Output;

    /// Multiplicative combine (⊗)
    fn mult(&self, lhs: &Self::Left, rhs: &Self::Right) -> Self::Output;
}

/// Binary operator, used as the accumulator when writing into `C`
///
/// Only applied where both sides hold a value; a lone value passes through
/// unchanged (converted into `Output`).
pub trait BinaryOp<L, R> {
    /// Declared result type of the operator
    type Output;

    /// Combine two values
    fn apply(&self, lhs: &L, rhs: &R) -> Self::Output;
}
