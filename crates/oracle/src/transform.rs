//! What the oracle compares while bisecting.
//!
//! The field value at a point goes through a [`Transform`] before two values are
//! compared. Bisection only asks whether two transformed values are equal, so
//! the default, [`SignOf`], keeps the sign and nothing else. Other transforms can
//! quantize the field (a voxel label, a material id) to search for the boundary
//! between any two classes instead of the zero crossing.

use std::fmt::Debug;

use crate::math::{HasSign, Sign};

pub trait Transform<V> {
    type Output: PartialEq + HasSign + Copy + Debug;

    fn apply(&self, value: V) -> Self::Output;
}

/// Keeps the sign of the field
#[derive(Debug, Default, Clone, Copy)]
pub struct SignOf;

impl<V: HasSign> Transform<V> for SignOf {
    type Output = Sign;

    fn apply(&self, value: V) -> Sign {
        value.sign()
    }
}

/// Keeps the raw field value
///
/// Two points then only compare equal when the field takes exactly the same value,
/// so the search runs on any change of value, not only on sign changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl<V: PartialEq + HasSign + Copy + Debug> Transform<V> for Identity {
    type Output = V;

    fn apply(&self, value: V) -> V {
        value
    }
}

/// A thin wrapper around a function used as a transform
#[derive(Debug, Default, Clone, Copy)]
pub struct FnTransform<F>(pub F);

impl<V, O, F> Transform<V> for FnTransform<F>
where
    F: Fn(V) -> O,
    O: PartialEq + HasSign + Copy + Debug,
{
    type Output = O;

    fn apply(&self, value: V) -> O {
        (self.0)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{FnTransform, Identity, SignOf, Transform};
    use crate::math::Sign;

    #[test]
    fn sign_of() {
        assert_eq!(SignOf.apply(-3.0f64), Sign::Negative);
        assert_eq!(SignOf.apply(0.0f32), Sign::Zero);
        assert_eq!(SignOf.apply(12.5f64), Sign::Positive);
    }

    #[test]
    fn identity_and_closures() {
        assert_eq!(Identity.apply(0.25f64), 0.25);

        // Quantize the field into unit shells
        let shells = FnTransform(|v: f64| v.floor() as i32);
        assert_eq!(shells.apply(2.7), 2);
        assert_eq!(shells.apply(-0.1), -1);
    }
}
