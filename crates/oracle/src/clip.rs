//! Clipping of line-like queries against a bounding sphere.
//!
//! Every query is parametrized as `a + t * v` and the sphere equation
//! `|a + t * v - c|² = r²` is solved for `t`. Each primitive then keeps the part of
//! `[t1, t2]` its own parameter range allows. The square root of the discriminant
//! is taken through `f64`.

use crate::{
    error::{GeometryIssue, Result},
    kernel::Kernel,
    math::Scalar,
    primitive::{BoundingSphere, Line, Ray, Segment},
};

/// A query the oracle can clip against the bounding sphere of a surface
pub trait Clip<K: Kernel> {
    /// Endpoints of the part of `self` inside `sphere`, None if they do not overlap
    fn clip(&self, sphere: &BoundingSphere<K>) -> Option<(K::Point, K::Point)>;

    /// Rejects queries with non finite coordinates or without a direction
    fn validate(&self) -> Result<()>;

    /// The unclipped endpoints, for bounded queries only
    fn extremities(&self) -> Option<(K::Point, K::Point)> {
        None
    }
}

/// Parameters `t1 <= t2` at which the line `a + t * v` crosses the sphere.
///
/// None when the line misses the sphere or when `v` is zero.
pub fn line_sphere_lambdas<K: Kernel>(
    sphere: &BoundingSphere<K>,
    a: &K::Point,
    v: &K::Vector,
) -> Option<(K::FT, K::FT)> {
    let center = sphere.center();
    let sq_length = K::squared_length(v);
    if !(sq_length > K::FT::ZERO) {
        return None;
    }

    // t² |v|² - 2 t (v.(c - a)) + |a - c|² - r² = 0
    let half_b = K::scalar_product(v, &K::vector(a, &center));
    let c = K::squared_distance(&center, a) - sphere.squared_radius();

    let delta = half_b * half_b - sq_length * c;
    if delta < K::FT::ZERO {
        return None;
    }
    let sqrt_delta = delta.approximate_sqrt();

    Some((
        (half_b - sqrt_delta) / sq_length,
        (half_b + sqrt_delta) / sq_length,
    ))
}

fn point_at<K: Kernel>(a: &K::Point, v: &K::Vector, t: K::FT) -> K::Point {
    K::translate(a, &K::scale(v, t))
}

fn validate_direction<K: Kernel>(origin: &K::Point, direction: &K::Vector) -> Result<()> {
    if !K::point_is_finite(origin) {
        return Err(GeometryIssue::NonFiniteQuery.into());
    }
    if !K::vector_is_finite(direction) || !(K::squared_length(direction) > K::FT::ZERO) {
        return Err(GeometryIssue::ZeroDirection.into());
    }
    Ok(())
}

impl<K: Kernel> Clip<K> for Segment<K> {
    fn clip(&self, sphere: &BoundingSphere<K>) -> Option<(K::Point, K::Point)> {
        if self.is_degenerate() {
            return None;
        }
        let (a, b) = (self.point(0), self.point(1));
        let v = self.to_vector();
        let (t1, t2) = line_sphere_lambdas(sphere, &a, &v)?;
        if t1 > K::FT::ONE || t2 < K::FT::ZERO {
            return None;
        }

        let p1 = if t1 > K::FT::ZERO {
            point_at::<K>(&a, &v, t1)
        } else {
            a
        };
        let p2 = if t2 < K::FT::ONE {
            point_at::<K>(&a, &v, t2)
        } else {
            b
        };
        Some((p1, p2))
    }

    fn validate(&self) -> Result<()> {
        if K::point_is_finite(&self.source) && K::point_is_finite(&self.target) {
            Ok(())
        } else {
            Err(GeometryIssue::NonFiniteQuery.into())
        }
    }

    fn extremities(&self) -> Option<(K::Point, K::Point)> {
        Some((self.point(0), self.point(1)))
    }
}

impl<K: Kernel> Clip<K> for Ray<K> {
    fn clip(&self, sphere: &BoundingSphere<K>) -> Option<(K::Point, K::Point)> {
        let (t1, t2) = line_sphere_lambdas(sphere, &self.origin, &self.direction)?;
        if t2 < K::FT::ZERO {
            return None;
        }

        let p1 = if t1 > K::FT::ZERO {
            self.at_unchecked(t1)
        } else {
            self.origin
        };
        Some((p1, self.at_unchecked(t2)))
    }

    fn validate(&self) -> Result<()> {
        validate_direction::<K>(&self.origin, &self.direction)
    }
}

impl<K: Kernel> Clip<K> for Line<K> {
    fn clip(&self, sphere: &BoundingSphere<K>) -> Option<(K::Point, K::Point)> {
        let (t1, t2) = line_sphere_lambdas(sphere, &self.point, &self.direction)?;
        Some((self.at(t1), self.at(t2)))
    }

    fn validate(&self) -> Result<()> {
        validate_direction::<K>(&self.point, &self.direction)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::{line_sphere_lambdas, Clip};
    use crate::{
        error::{GeometryIssue, OracleError},
        kernel::Kernel64,
        math::DPoint,
        primitive::{BoundingSphere, Line, Ray, Segment},
    };

    const EPS: f64 = 1e-12;

    fn sphere() -> BoundingSphere<Kernel64> {
        BoundingSphere::from_radius(DPoint::ORIGIN, 2.0)
    }

    fn close(a: DPoint, b: DPoint) -> bool {
        a.distance_squared(b) < EPS
    }

    #[test]
    fn lambdas_through_center() {
        let (t1, t2) =
            line_sphere_lambdas(&sphere(), &DPoint::new(-4., 0., 0.), &DVec3::new(2., 0., 0.))
                .unwrap();
        assert!((t1 - 1.0).abs() < EPS);
        assert!((t2 - 3.0).abs() < EPS);
    }

    #[test]
    fn segment_crossing_the_sphere_is_cut() {
        let s = Segment::<Kernel64>::new(DPoint::new(0., 0., 0.), DPoint::new(3., 0., 0.));
        let (a, b) = s.clip(&sphere()).unwrap();
        assert_eq!(a, DPoint::ORIGIN);
        assert!(close(b, DPoint::new(2., 0., 0.)), "{b:?}");
    }

    #[test]
    fn segment_inside_is_kept() {
        let s = Segment::<Kernel64>::new(DPoint::new(-1., 0., 0.), DPoint::new(0., 1., 0.));
        assert_eq!(s.clip(&sphere()), Some((s.source, s.target)));
    }

    #[test]
    fn segment_outside_is_dropped() {
        let beyond = Segment::<Kernel64>::new(DPoint::new(2.5, 0., 0.), DPoint::new(3., 0., 0.));
        assert_eq!(beyond.clip(&sphere()), None);

        let aside = Segment::<Kernel64>::new(DPoint::new(-3., 5., 0.), DPoint::new(3., 5., 0.));
        assert_eq!(aside.clip(&sphere()), None);

        let point = Segment::<Kernel64>::new(DPoint::ORIGIN, DPoint::ORIGIN);
        assert_eq!(point.clip(&sphere()), None);
    }

    #[test]
    fn ray_keeps_forward_part() {
        let inside = Ray::<Kernel64>::new(DPoint::ORIGIN, DVec3::new(0., 0., 5.));
        let (a, b) = inside.clip(&sphere()).unwrap();
        assert_eq!(a, DPoint::ORIGIN);
        assert!(close(b, DPoint::new(0., 0., 2.)));

        let outside = Ray::<Kernel64>::through(DPoint::new(0., -5., 0.), DPoint::ORIGIN);
        let (a, b) = outside.clip(&sphere()).unwrap();
        assert!(close(a, DPoint::new(0., -2., 0.)));
        assert!(close(b, DPoint::new(0., 2., 0.)));

        let away = Ray::<Kernel64>::new(DPoint::new(0., -5., 0.), DVec3::new(0., -1., 0.));
        assert_eq!(away.clip(&sphere()), None);
    }

    #[test]
    fn line_is_clipped_on_both_sides() {
        let line = Line::<Kernel64>::new(DPoint::new(0., 1., 7.), DVec3::new(0., 0., 1.));
        let (a, b) = line.clip(&sphere()).unwrap();
        let h = f64::sqrt(3.0);
        assert!(close(a, DPoint::new(0., 1., -h)), "{a:?}");
        assert!(close(b, DPoint::new(0., 1., h)), "{b:?}");
    }

    #[test]
    fn invalid_queries() {
        let ray = Ray::<Kernel64>::new(DPoint::ORIGIN, DVec3::ZERO);
        assert_eq!(
            ray.validate(),
            Err(OracleError::InvalidGeometry(GeometryIssue::ZeroDirection))
        );

        let line = Line::<Kernel64>::new(DPoint::new(f64::INFINITY, 0., 0.), DVec3::X);
        assert_eq!(
            line.validate(),
            Err(OracleError::InvalidGeometry(GeometryIssue::NonFiniteQuery))
        );

        let segment = Segment::<Kernel64>::new(DPoint::ORIGIN, DPoint::new(0., f64::NAN, 0.));
        assert_eq!(
            segment.validate(),
            Err(OracleError::InvalidGeometry(GeometryIssue::NonFiniteQuery))
        );
        assert!(Segment::<Kernel64>::new(DPoint::ORIGIN, DPoint::ORIGIN)
            .validate()
            .is_ok());
    }
}
