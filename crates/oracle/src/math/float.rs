use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Neg, Sub},
};

use super::sign::HasSign;

/// The number type a kernel computes with.
///
/// Only the handful of operations the oracle needs are required. Anything that
/// is not a field operation (square roots, conversions for random sampling) goes
/// through `f64`, so an exact number type only has to provide an approximation.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + HasSign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
    fn is_finite(self) -> bool;

    /// Square root computed in `f64` and converted back
    fn approximate_sqrt(self) -> Self {
        Self::from_f64(self.to_f64().sqrt())
    }

    /// Returns `Some(f)` is f is far enough from zero (far is given by eps) else returns None
    ///
    /// Returns None for NaN and Some(f) for +/- infty
    fn into_non_zero(self, eps: Self) -> Option<Self> {
        let abs = if self < Self::ZERO { -self } else { self };
        (abs > eps).then_some(self)
    }

    /// Returns `Some(f)` is f is finite else returns None
    ///
    /// Returns None for NaN and +/- infty
    fn into_finite(self) -> Option<Self> {
        self.is_finite().then_some(self)
    }

    /// Returns `Some(f)` if f is finite and strictly positive
    fn into_positive(self) -> Option<Self> {
        self.into_finite().filter(|f| *f > Self::ZERO)
    }
}

macro_rules! impl_scalar {
    ($t: ty) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
            #[inline]
            fn approximate_sqrt(self) -> Self {
                self.sqrt()
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
