use super::ImplicitSurface;
use crate::{kernel::Kernel, math::Scalar, primitive::BoundingSphere};

/// An implicit sphere, `|p - center|² - radius²`
///
/// The default bounding sphere has twice the radius, so queries starting far
/// outside still see a sign change once clipped.
#[derive(Debug, Clone, Copy)]
pub struct Sphere<K: Kernel> {
    pub center: K::Point,
    pub radius: K::FT,
    pub bounding_sphere: BoundingSphere<K>,
    pub squared_error_bound: K::FT,
}

impl<K: Kernel> Sphere<K> {
    pub fn new(center: K::Point, radius: K::FT, squared_error_bound: K::FT) -> Self {
        Self {
            center,
            radius,
            bounding_sphere: BoundingSphere::from_radius(center, K::FT::from_f64(2.0) * radius),
            squared_error_bound,
        }
    }

    pub fn with_bounding_sphere(self, bounding_sphere: BoundingSphere<K>) -> Self {
        Self {
            bounding_sphere,
            ..self
        }
    }
}

impl<K: Kernel> ImplicitSurface<K> for Sphere<K> {
    type Value = K::FT;

    fn impl_f(&self, p: &K::Point) -> K::FT {
        K::squared_distance(p, &self.center) - self.radius * self.radius
    }

    fn bounding_sphere(&self) -> BoundingSphere<K> {
        self.bounding_sphere
    }

    fn squared_error_bound(&self) -> K::FT {
        self.squared_error_bound
    }
}
