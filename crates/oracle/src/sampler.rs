//! Scatters a few points on a surface, to seed a mesher.
//!
//! Segments are cast from a center to random points of the bounding sphere.
//! When a segment misses the surface the center jumps to a random point inside
//! the bounding ball, so surfaces not enclosing the bounding sphere center (a
//! torus, a shell) are still found.

use log::{debug, info, warn};
use rand::{prelude::Distribution, Rng};

use crate::{
    counter,
    error::{OracleError, Result},
    kernel::Kernel,
    math::{
        distributions::{UniformBall3, UniformSphere3},
        Scalar,
    },
    oracle::{validate_surface, ImplicitSurfaceOracle},
    primitive::Segment,
    surface::ImplicitSurface,
    timed_scope_accumulate,
    transform::Transform,
    visitor::OracleVisitor,
};

impl<K, T, V> ImplicitSurfaceOracle<K, T, V>
where
    K: Kernel,
    V: OracleVisitor<K::Point>,
{
    /// Appends `n` points of the surface to `out`, returns how many were appended.
    ///
    /// The random stream is seeded from the oracle configuration on every call.
    pub fn construct_initial_points<S, E>(&self, surface: &S, n: usize, out: &mut E) -> Result<usize>
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
        E: Extend<K::Point>,
    {
        let mut rng = self.config.rng();
        self.construct_initial_points_with_rng(surface, n, &mut rng, out)
    }

    /// Same as [`Self::construct_initial_points`] drawing from `rng`.
    ///
    /// Gives up after `config.max_attempts` segments with
    /// [`OracleError::SamplingExhausted`]. The points found until then are
    /// already in `out`.
    pub fn construct_initial_points_with_rng<S, R, E>(
        &self,
        surface: &S,
        n: usize,
        rng: &mut R,
        out: &mut E,
    ) -> Result<usize>
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
        R: Rng + ?Sized,
        E: Extend<K::Point>,
    {
        let (sphere, _) = validate_surface(surface)?;
        let center = sphere.center();
        let radius = sphere.radius().to_f64();

        let offset = K::vector(&K::origin(), &center);
        let around_center =
            |[x, y, z]: [f64; 3]| K::translate(&K::construct_point(x, y, z), &offset);
        let on_sphere = UniformSphere3 { radius };
        let in_ball = UniformBall3 { radius };

        let mut source = center;
        let mut found = 0;
        let mut attempts = 0;
        while found < n {
            if attempts >= self.config.max_attempts {
                warn!(
                    "Gave up sampling after {} segments, {} points found out of {}",
                    attempts, found, n
                );
                return Err(OracleError::SamplingExhausted {
                    requested: n,
                    found,
                    attempts,
                });
            }
            attempts += 1;

            let target = around_center(on_sphere.sample(rng));
            match self.intersect_segment(surface, Segment::new(source, target))? {
                Some(p) => {
                    out.extend(std::iter::once(p));
                    found += 1;
                }
                None => {
                    source = around_center(in_ball.sample(rng));
                    counter!("Sampler relocations");
                    debug!(
                        "No intersection, new search center: {:?}",
                        K::point_coordinates(&source)
                    );
                }
            }
        }

        info!("{} initial points found with {} segments", found, attempts);
        Ok(found)
    }

    /// `config.initial_points` points of the surface
    pub fn initial_points<S>(&self, surface: &S) -> Result<Vec<K::Point>>
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
    {
        timed_scope_accumulate!("Initial points construction", || -> Result<Vec<K::Point>> {
            let mut points = Vec::with_capacity(self.config.initial_points);
            self.construct_initial_points(surface, self.config.initial_points, &mut points)?;
            Ok(points)
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use crate::{
        error::OracleError,
        kernel::{Kernel32, Kernel64},
        math::{DPoint, Point},
        oracle::{ImplicitSurfaceOracle, OracleConfig},
        primitive::BoundingSphere,
        surface::{Anonymous, Complement, ImplicitSurface, Sphere, Torus},
        visitor::CountingVisitor,
    };

    const BOUND: f64 = 1e-10;

    fn unit_sphere() -> Sphere<Kernel64> {
        Sphere::new(DPoint::ORIGIN, 1.0, BOUND)
            .with_bounding_sphere(BoundingSphere::from_radius(DPoint::ORIGIN, 2.0))
    }

    #[test]
    fn twenty_points_on_the_unit_sphere() {
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new().with_visitor(CountingVisitor::new());
        assert_eq!(oracle.config.initial_points, 20);

        let points = oracle.initial_points(&unit_sphere()).unwrap();
        assert_eq!(points.len(), 20);
        assert_eq!(oracle.visitor().count(), 20);

        for (i, p) in points.iter().enumerate() {
            let error = p.0.length() - 1.0;
            assert!(error * error < BOUND, "{p:?} is too far from the sphere");
            assert!(points[i + 1..].iter().all(|q| q != p), "{p:?} found twice");
        }
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new();
        let sphere = unit_sphere();
        assert_eq!(
            oracle.initial_points(&sphere).unwrap(),
            oracle.initial_points(&sphere).unwrap()
        );

        let reseeded = oracle.with_config(OracleConfig::default().with_seed(7));
        assert_ne!(
            oracle.initial_points(&sphere).unwrap(),
            reseeded.initial_points(&sphere).unwrap()
        );
    }

    #[test]
    fn appends_to_any_sink() {
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new();
        let mut points = vec![DPoint::new(9.0, 9.0, 9.0)];
        let found = oracle
            .construct_initial_points(&unit_sphere(), 5, &mut points)
            .unwrap();
        assert_eq!(found, 5);
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], DPoint::new(9.0, 9.0, 9.0));

        assert_eq!(
            oracle.construct_initial_points(&unit_sphere(), 0, &mut points),
            Ok(0)
        );
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn caller_provided_rng() {
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new();
        let sphere = unit_sphere();

        let mut rng = crate::Rng::seed_from_u64(42);
        let mut first = Vec::new();
        oracle
            .construct_initial_points_with_rng(&sphere, 3, &mut rng, &mut first)
            .unwrap();
        // The stream goes on, the next points differ
        let mut second = Vec::new();
        oracle
            .construct_initial_points_with_rng(&sphere, 3, &mut rng, &mut second)
            .unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn relocates_around_the_hole_of_a_torus() {
        // The bounding sphere center lies in the hole: the first segments all miss
        let torus = Torus::<Kernel64>::new(DPoint::new(1.0, -2.0, 0.5), 1.0, 0.25, BOUND);
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new();
        let points = oracle.initial_points(&torus).unwrap();
        assert_eq!(points.len(), 20);
        for p in points {
            assert!(torus.impl_f(&p).abs() < 1e-4, "{p:?} is too far from the torus");
        }
    }

    #[test]
    fn hollow_shapes_are_sampled() {
        let shell = Complement(unit_sphere());
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new();
        let points = oracle.initial_points(&shell).unwrap();
        assert!(points
            .iter()
            .all(|p| (p.0.length() - 1.0).abs() < 1e-4));
    }

    #[test]
    fn empty_surface_exhausts_the_budget() {
        let nothing = Anonymous::<Kernel64, _>::new(
            |_: &DPoint| 1.0f64,
            BoundingSphere::from_radius(DPoint::ORIGIN, 1.0),
            BOUND,
        );
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new()
            .with_config(OracleConfig::default().with_max_attempts(50));
        let mut points = Vec::new();
        assert_eq!(
            oracle.construct_initial_points(&nothing, 20, &mut points),
            Err(OracleError::SamplingExhausted {
                requested: 20,
                found: 0,
                attempts: 50
            })
        );
        assert!(points.is_empty());
    }

    #[test]
    fn exhaustion_keeps_found_points() {
        // Only the x > 0 half of the surface can be reached from the first center
        let half = Anonymous::<Kernel64, _>::new(
            |p: &DPoint| if p.0.x > 0.0 { p.0.length_squared() - 1.0 } else { 1.0 },
            BoundingSphere::from_radius(DPoint::ORIGIN, 2.0),
            BOUND,
        );
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new()
            .with_config(OracleConfig::default().with_max_attempts(1));
        let mut points = Vec::new();
        match oracle.construct_initial_points(&half, 20, &mut points) {
            Err(OracleError::SamplingExhausted {
                requested,
                found,
                attempts,
            }) => {
                assert_eq!((requested, attempts), (20, 1));
                assert_eq!(found, points.len());
            }
            res => panic!("{res:?}"),
        }
    }

    #[test]
    fn single_precision_kernel() {
        let sphere = Sphere::<Kernel32>::new(Point::new(0.5, 0.0, -1.0), 0.5, 1e-8);
        let oracle = ImplicitSurfaceOracle::<Kernel32>::new()
            .with_config(OracleConfig::default().with_initial_points(8));
        let points = oracle.initial_points(&sphere).unwrap();
        assert_eq!(points.len(), 8);
        for p in points {
            assert!((p.0.distance(sphere.center.0) - 0.5).abs() < 1e-3);
        }
    }

    #[test]
    fn invalid_surfaces_are_rejected() {
        let flat = unit_sphere().with_bounding_sphere(BoundingSphere::new(DPoint::ORIGIN, -1.0));
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new();
        assert!(matches!(
            oracle.initial_points(&flat),
            Err(OracleError::InvalidGeometry(_))
        ));
    }
}
