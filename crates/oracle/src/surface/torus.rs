use super::ImplicitSurface;
use crate::{kernel::Kernel, math::Scalar, primitive::BoundingSphere};

/// A torus around the z axis going through `center`
///
/// Its field `(sqrt(x² + y²) - major)² + z² - minor²` is evaluated in `f64`.
/// The hole makes it a good test for the sampler: rays cast from the center of
/// the bounding sphere start outside the solid.
#[derive(Debug, Clone, Copy)]
pub struct Torus<K: Kernel> {
    pub center: K::Point,
    pub major_radius: f64,
    pub minor_radius: f64,
    pub bounding_sphere: BoundingSphere<K>,
    pub squared_error_bound: K::FT,
}

impl<K: Kernel> Torus<K> {
    pub fn new(
        center: K::Point,
        major_radius: f64,
        minor_radius: f64,
        squared_error_bound: K::FT,
    ) -> Self {
        let radius = K::FT::from_f64(major_radius + 2.0 * minor_radius);
        Self {
            center,
            major_radius,
            minor_radius,
            bounding_sphere: BoundingSphere::from_radius(center, radius),
            squared_error_bound,
        }
    }
}

impl<K: Kernel> ImplicitSurface<K> for Torus<K> {
    type Value = K::FT;

    fn impl_f(&self, p: &K::Point) -> K::FT {
        let [x, y, z] = K::point_coordinates(p);
        let [cx, cy, cz] = K::point_coordinates(&self.center);
        let (x, y, z) = (x - cx, y - cy, z - cz);

        let ring = f64::sqrt(x * x + y * y) - self.major_radius;
        K::FT::from_f64(ring * ring + z * z - self.minor_radius * self.minor_radius)
    }

    fn bounding_sphere(&self) -> BoundingSphere<K> {
        self.bounding_sphere
    }

    fn squared_error_bound(&self) -> K::FT {
        self.squared_error_bound
    }
}

#[cfg(test)]
mod tests {
    use super::Torus;
    use crate::{kernel::Kernel64, math::DPoint, surface::ImplicitSurface};

    #[test]
    fn torus_sides() {
        let torus = Torus::<Kernel64>::new(DPoint::ORIGIN, 1.0, 0.25, 1e-10);

        // Center of the hole and far away are outside, the tube core is inside
        assert!(torus.impl_f(&DPoint::ORIGIN) > 0.0);
        assert!(torus.impl_f(&DPoint::new(3.0, 0.0, 0.0)) > 0.0);
        assert!(torus.impl_f(&DPoint::new(0.0, 1.0, 0.0)) < 0.0);
        assert!(torus.impl_f(&DPoint::new(0.0, -1.25, 0.0)).abs() < 1e-12);
        assert!(torus.impl_f(&DPoint::new(1.0, 0.0, 0.25)).abs() < 1e-12);
    }
}
