use std::ops::Neg;

use super::ImplicitSurface;
use crate::{kernel::Kernel, primitive::BoundingSphere};

/// The same zero set with inside and outside swapped
///
/// Handy for hollow shapes: the complement of a sphere is a cavity, every query
/// starting at its center begins "outside" the solid.
#[derive(Debug, Clone, Copy)]
pub struct Complement<S>(pub S);

impl<K, S> ImplicitSurface<K> for Complement<S>
where
    K: Kernel,
    S: ImplicitSurface<K>,
    S::Value: Neg<Output = S::Value>,
{
    type Value = S::Value;

    fn impl_f(&self, p: &K::Point) -> S::Value {
        -self.0.impl_f(p)
    }

    fn bounding_sphere(&self) -> BoundingSphere<K> {
        self.0.bounding_sphere()
    }

    fn squared_error_bound(&self) -> K::FT {
        self.0.squared_error_bound()
    }
}
