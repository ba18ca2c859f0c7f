//! Ready-made semirings and binary operators
//!
//! These are the operator values most callers need. Any type implementing
//! [`Semiring`] or [`BinaryOp`] can be used in their place.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul};

use num_traits::{Bounded, Zero};

use crate::traits::{BinaryOp, Semiring};

macro_rules! operator_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T>(PhantomData<fn() -> T>);

        impl<T> $name<T> {
            /// Create the operator value
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), core::any::type_name::<T>())
            }
        }
    };
}

operator_value!(
    /// Conventional (+, ×) semiring with identity 0
    ArithmeticSemiring
);
operator_value!(
    /// Tropical (min, +) semiring; identity is the type's maximum
    MinPlusSemiring
);
operator_value!(
    /// Tropical (max, +) semiring; identity is the type's minimum
    MaxPlusSemiring
);
operator_value!(
    /// Addition accumulator
    Plus
);
operator_value!(
    /// Multiplication accumulator
    Times
);
operator_value!(
    /// Keeps the smaller of the two values
    Min
);
operator_value!(
    /// Keeps the larger of the two values
    Max
);

fn min_of<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if rhs < lhs {
        rhs
    } else {
        lhs
    }
}

fn max_of<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if rhs > lhs {
        rhs
    } else {
        lhs
    }
}

impl<T> Semiring for ArithmeticSemiring<T>
where
    T: Zero + Mul<Output = T> + Clone,
{
    type Left = T;
    type Right = T;
    type Output = T;

    fn zero(&self) -> T {
        T::zero()
    }

    fn add(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }

    fn mult(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() * rhs.clone()
    }
}

impl<T> Semiring for MinPlusSemiring<T>
where
    T: Bounded + Add<Output = T> + PartialOrd + Clone,
{
    type Left = T;
    type Right = T;
    type Output = T;

    fn zero(&self) -> T {
        T::max_value()
    }

    fn add(&self, lhs: T, rhs: T) -> T {
        min_of(lhs, rhs)
    }

    fn mult(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() + rhs.clone()
    }
}

impl<T> Semiring for MaxPlusSemiring<T>
where
    T: Bounded + Add<Output = T> + PartialOrd + Clone,
{
    type Left = T;
    type Right = T;
    type Output = T;

    fn zero(&self) -> T {
        T::min_value()
    }

    fn add(&self, lhs: T, rhs: T) -> T {
        max_of(lhs, rhs)
    }

    fn mult(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() + rhs.clone()
    }
}

/// Boolean (or, and) semiring, used for reachability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalSemiring;

impl Semiring for LogicalSemiring {
    type Left = bool;
    type Right = bool;
    type Output = bool;

    fn zero(&self) -> bool {
        false
    }

    fn add(&self, lhs: bool, rhs: bool) -> bool {
        lhs || rhs
    }

    fn mult(&self, lhs: &bool, rhs: &bool) -> bool {
        *lhs && *rhs
    }
}

impl<T: Add<Output = T> + Clone> BinaryOp<T, T> for Plus<T> {
    type Output = T;

    fn apply(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() + rhs.clone()
    }
}

impl<T: Mul<Output = T> + Clone> BinaryOp<T, T> for Times<T> {
    type Output = T;

    fn apply(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() * rhs.clone()
    }
}

impl<T: PartialOrd + Clone> BinaryOp<T, T> for Min<T> {
    type Output = T;

    fn apply(&self, lhs: &T, rhs: &T) -> T {
        min_of(lhs.clone(), rhs.clone())
    }
}

impl<T: PartialOrd + Clone> BinaryOp<T, T> for Max<T> {
    type Output = T;

    fn apply(&self, lhs: &T, rhs: &T) -> T {
        max_of(lhs.clone(), rhs.clone())
    }
}

/// Keeps the right-hand (freshly computed) value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Second;

impl<L, R: Clone> BinaryOp<L, R> for Second {
    type Output = R;

    fn apply(&self, _lhs: &L, rhs: &R) -> R {
        rhs.clone()
    }
}

/// Stand-in accumulator for calls made without one
///
/// Never applied by the non-accumulating kernels; it only satisfies the
/// accumulator type parameter of the unified entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoAccumulate;

impl<L: From<R>, R: Clone> BinaryOp<L, R> for NoAccumulate {
    type Output = L;

    fn apply(&self, _lhs: &L, rhs: &R) -> L {
        L::from(rhs.clone())
    }
}
