//! An implicit surface from an anonymous function

use std::fmt::Debug;

use super::ImplicitSurface;
use crate::{kernel::Kernel, math::HasSign, primitive::BoundingSphere};

/// A thin wrapper around a function that allow to mesh arbitrary implicit surfaces
pub struct Anonymous<K: Kernel, F> {
    pub f: F,
    pub bounding_sphere: BoundingSphere<K>,
    pub squared_error_bound: K::FT,
}

impl<K: Kernel, F> Anonymous<K, F> {
    pub fn new(f: F, bounding_sphere: BoundingSphere<K>, squared_error_bound: K::FT) -> Self {
        Self {
            f,
            bounding_sphere,
            squared_error_bound,
        }
    }

    /// The error bound is given relatively to the bounding sphere radius
    pub fn with_relative_error(
        f: F,
        bounding_sphere: BoundingSphere<K>,
        relative_error: K::FT,
    ) -> Self {
        let squared_error_bound =
            bounding_sphere.squared_radius() * relative_error * relative_error;
        Self::new(f, bounding_sphere, squared_error_bound)
    }
}

impl<K, F, V> ImplicitSurface<K> for Anonymous<K, F>
where
    K: Kernel,
    F: Fn(&K::Point) -> V,
    V: HasSign + Copy + Debug,
{
    type Value = V;

    fn impl_f(&self, p: &K::Point) -> V {
        (self.f)(p)
    }

    fn bounding_sphere(&self) -> BoundingSphere<K> {
        self.bounding_sphere
    }

    fn squared_error_bound(&self) -> K::FT {
        self.squared_error_bound
    }
}
