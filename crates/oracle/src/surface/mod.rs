//! Implicit surfaces: the zero level set of a scalar field.
//!
//! By convention the field is positive outside and negative inside. A surface
//! also tells the oracle where it lives ([`ImplicitSurface::bounding_sphere`], the
//! whole zero set must be inside) and how precise intersection points must be
//! ([`ImplicitSurface::squared_error_bound`]).
//!
//! The shipped surfaces are analytic. Anything else, a sampled grid or a
//! signed distance field, only has to implement [`ImplicitSurface`] or be wrapped
//! in an [`Anonymous`] surface.

mod anonymous;
mod complement;
mod cube;
mod sphere;
mod torus;

pub use anonymous::Anonymous;
pub use complement::Complement;
pub use cube::Cube;
pub use sphere::Sphere;
pub use torus::Torus;

use std::fmt::Debug;

use crate::{kernel::Kernel, math::HasSign, primitive::BoundingSphere};

/// Defines a surface by an implicit parametrisation, given by impl_f
pub trait ImplicitSurface<K: Kernel> {
    /// What the field evaluates to
    type Value: HasSign + Copy + Debug;

    fn impl_f(&self, p: &K::Point) -> Self::Value;

    /// A sphere containing the whole surface
    fn bounding_sphere(&self) -> BoundingSphere<K>;

    /// Intersection points are searched until the bracketing points are closer than this
    fn squared_error_bound(&self) -> K::FT;
}

impl<K: Kernel, S: ImplicitSurface<K> + ?Sized> ImplicitSurface<K> for &S {
    type Value = S::Value;

    fn impl_f(&self, p: &K::Point) -> Self::Value {
        (**self).impl_f(p)
    }

    fn bounding_sphere(&self) -> BoundingSphere<K> {
        (**self).bounding_sphere()
    }

    fn squared_error_bound(&self) -> K::FT {
        (**self).squared_error_bound()
    }
}

impl<K: Kernel, S: ImplicitSurface<K> + ?Sized> ImplicitSurface<K> for Box<S> {
    type Value = S::Value;

    fn impl_f(&self, p: &K::Point) -> Self::Value {
        (**self).impl_f(p)
    }

    fn bounding_sphere(&self) -> BoundingSphere<K> {
        (**self).bounding_sphere()
    }

    fn squared_error_bound(&self) -> K::FT {
        (**self).squared_error_bound()
    }
}
