use super::ImplicitSurface;
use crate::{kernel::Kernel, math::Scalar, primitive::BoundingSphere};

/// An implicit axis aligned cube, `max(|x|, |y|, |z|) - size / 2`
///
/// The field is not smooth on edges, bisection does not care: it only looks at signs.
#[derive(Debug, Clone, Copy)]
pub struct Cube<K: Kernel> {
    /// The center of the cube
    pub center: K::Point,
    /// The size of an edge of the cube
    pub size: f64,
    pub bounding_sphere: BoundingSphere<K>,
    pub squared_error_bound: K::FT,
}

impl<K: Kernel> Cube<K> {
    pub fn new(center: K::Point, size: f64, squared_error_bound: K::FT) -> Self {
        // Half diagonal is size * sqrt(3) / 2 < size
        Self {
            center,
            size,
            bounding_sphere: BoundingSphere::from_radius(center, K::FT::from_f64(size)),
            squared_error_bound,
        }
    }
}

impl<K: Kernel> ImplicitSurface<K> for Cube<K> {
    type Value = K::FT;

    fn impl_f(&self, p: &K::Point) -> K::FT {
        let p = K::point_coordinates(p);
        let c = K::point_coordinates(&self.center);
        let max_element = (0..3)
            .map(|i| (p[i] - c[i]).abs())
            .fold(0.0, f64::max);
        K::FT::from_f64(max_element - self.size / 2.0)
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
    use super::Cube;
    use crate::{kernel::Kernel64, math::DPoint, surface::ImplicitSurface};

    #[test]
    fn cube_faces() {
        let cube = Cube::<Kernel64>::new(DPoint::new(1.0, 1.0, 1.0), 2.0, 1e-10);

        assert_eq!(cube.impl_f(&DPoint::new(1.0, 1.0, 1.0)), -1.0);
        assert_eq!(cube.impl_f(&DPoint::new(2.0, 1.5, 0.5)), 0.0);
        assert_eq!(cube.impl_f(&DPoint::new(1.0, 1.0, 4.0)), 2.0);
        assert!(cube.bounding_sphere().has_on_bounded_side(&DPoint::new(2.0, 2.0, 2.0)));
    }
}
