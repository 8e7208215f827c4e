//! The implicit surface oracle: intersections by bisection and volume membership.
//!
//! Queries are clipped against the bounding sphere of the surface, then the
//! clipped segment `[p1, p2]` is halved until its extremities are closer than the
//! surface error bound. At each step the half whose transformed values differ
//! is kept, so the two tracked points always bracket a change of the transformed
//! field.
//!
//! If both extremities of the clipped segment transform to the same value the
//! query has no intersection. A field crossing zero an even number of times
//! along the query goes unnoticed: surfaces are expected to be crossed at most
//! once per query, which is what the initial point sampler and the mesher
//! using it assume.

use std::{fmt::Debug, marker::PhantomData};

use log::{log_enabled, trace, Level};
use rand::SeedableRng;

use crate::{
    clip::Clip,
    counter,
    error::{GeometryIssue, Result},
    kernel::Kernel,
    math::{HasSign, Scalar},
    primitive::{BoundingSphere, Line, Ray, Segment},
    surface::ImplicitSurface,
    transform::{SignOf, Transform},
    utils::log_once::warn_once,
    visitor::{NullVisitor, OracleVisitor},
};

/// Knobs of the oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleConfig {
    /// How many points [`ImplicitSurfaceOracle::initial_points`] looks for
    pub initial_points: usize,
    /// How many segments the sampler may cast before giving up
    pub max_attempts: usize,
    /// Seed of the sampler random stream.
    /// Given a seed, sampling is deterministic.
    pub seed: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            initial_points: 20,
            max_attempts: 100_000,
            seed: 0,
        }
    }
}

impl OracleConfig {
    pub fn with_initial_points(self, initial_points: usize) -> Self {
        Self {
            initial_points,
            ..self
        }
    }

    pub fn with_max_attempts(self, max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// A fresh random stream, always the same for a given seed
    pub fn rng(&self) -> crate::Rng {
        crate::Rng::seed_from_u64(self.seed)
    }
}

/// Answers intersection and membership queries on any [`ImplicitSurface`] of kernel `K`.
///
/// `T` turns field values into what bisection compares, `V` is told about every
/// accepted point. The oracle keeps no state between queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImplicitSurfaceOracle<K: Kernel, T = SignOf, V = NullVisitor> {
    visitor: V,
    transform: T,
    pub config: OracleConfig,
    _kernel: PhantomData<K>,
}

impl<K: Kernel> ImplicitSurfaceOracle<K> {
    pub fn new() -> Self {
        Self::with_parts(NullVisitor, SignOf)
    }
}

impl<K: Kernel, T, V> ImplicitSurfaceOracle<K, T, V> {
    pub fn with_parts(visitor: V, transform: T) -> Self {
        Self {
            visitor,
            transform,
            config: OracleConfig::default(),
            _kernel: PhantomData,
        }
    }

    pub fn with_config(self, config: OracleConfig) -> Self {
        Self { config, ..self }
    }

    pub fn with_visitor<W>(self, visitor: W) -> ImplicitSurfaceOracle<K, T, W> {
        ImplicitSurfaceOracle {
            visitor,
            transform: self.transform,
            config: self.config,
            _kernel: PhantomData,
        }
    }

    pub fn with_transform<U>(self, transform: U) -> ImplicitSurfaceOracle<K, U, V> {
        ImplicitSurfaceOracle {
            visitor: self.visitor,
            transform,
            config: self.config,
            _kernel: PhantomData,
        }
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }
}

/// Checks a surface can be queried and returns its bounding sphere and error bound
pub fn validate_surface<K, S>(surface: &S) -> Result<(BoundingSphere<K>, K::FT)>
where
    K: Kernel,
    S: ImplicitSurface<K> + ?Sized,
{
    let sphere = surface.bounding_sphere();
    sphere.validate()?;
    let bound = surface
        .squared_error_bound()
        .into_positive()
        .ok_or(GeometryIssue::InvalidErrorBound)?;
    Ok((sphere, bound))
}

impl<K, T, V> ImplicitSurfaceOracle<K, T, V>
where
    K: Kernel,
    V: OracleVisitor<K::Point>,
{
    /// Transformed field value at `p`
    pub fn surf_equation<S>(&self, surface: &S, p: &K::Point) -> T::Output
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
    {
        self.transform.apply(surface.impl_f(p))
    }

    /// Whether `p` is strictly inside the volume bounded by the surface
    pub fn is_in_volume<S>(&self, surface: &S, p: &K::Point) -> bool
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
    {
        self.surf_equation(surface, p).sign().is_negative()
    }

    /// First crossing found along any clippable query, see the module documentation.
    ///
    /// `Ok(None)` when the query misses the bounding sphere or sees no change
    /// of the transformed field. Errors only report invalid queries or surfaces.
    pub fn intersect<S, Q>(&self, surface: &S, query: Q) -> Result<Option<K::Point>>
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
        Q: Clip<K>,
    {
        query.validate()?;
        let (sphere, squared_error_bound) = validate_surface(surface)?;

        // Bounded queries whose transformed extremities lie strictly on the
        // same side are dropped before clipping
        if let Some((a, b)) = query.extremities() {
            let side_a = self.surf_equation(surface, &a).sign();
            let side_b = self.surf_equation(surface, &b).sign();
            if (side_a * side_b).is_positive() {
                return Ok(None);
            }
        }

        let Some((a, b)) = query.clip(&sphere) else {
            return Ok(None);
        };
        Ok(self.intersect_clipped_segment(surface, a, b, squared_error_bound))
    }

    pub fn intersect_segment<S>(&self, surface: &S, segment: Segment<K>) -> Result<Option<K::Point>>
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
    {
        self.intersect(surface, segment)
    }

    pub fn intersect_ray<S>(&self, surface: &S, ray: Ray<K>) -> Result<Option<K::Point>>
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
    {
        self.intersect(surface, ray)
    }

    pub fn intersect_line<S>(&self, surface: &S, line: Line<K>) -> Result<Option<K::Point>>
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
    {
        self.intersect(surface, line)
    }

    fn intersect_clipped_segment<S>(
        &self,
        surface: &S,
        mut p1: K::Point,
        mut p2: K::Point,
        squared_distance_bound: K::FT,
    ) -> Option<K::Point>
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
    {
        let mut value_at_p1 = self.surf_equation(surface, &p1);
        let mut value_at_p2 = self.surf_equation(surface, &p2);

        if value_at_p1 == value_at_p2 {
            return None;
        }

        loop {
            debug_assert!(value_at_p1 != value_at_p2);
            counter!("Bisection steps");
            if log_enabled!(Level::Trace) {
                trace!(
                    "{}, {}",
                    self.debug_point(surface, &p1),
                    self.debug_point(surface, &p2)
                );
            }

            let mut mid = K::midpoint(&p1, &p2);
            let value_at_mid = self.surf_equation(surface, &mid);

            let converged = K::squared_distance(&p1, &p2) < squared_distance_bound;
            // Floating point midpoints stop moving once p1 and p2 are neighbours
            let stalled = mid == p1 || mid == p2;
            if converged || stalled {
                if !converged {
                    warn_once!(
                        "squared error bound {:?} is below the kernel precision, \
                        intersections are returned at full precision instead",
                        squared_distance_bound
                    );
                }
                self.visitor.new_point(&mut mid);
                counter!("Intersections");
                if log_enabled!(Level::Trace) {
                    trace!("= {}", self.debug_point(surface, &mid));
                }
                return Some(mid);
            }

            if value_at_p1 != value_at_mid {
                p2 = mid;
                value_at_p2 = value_at_mid;
            } else {
                p1 = mid;
                value_at_p1 = value_at_mid;
            }
        }
    }

    /// Position, distance to the bounding sphere center and transformed value of `p`
    pub fn debug_point<S>(&self, surface: &S, p: &K::Point) -> String
    where
        S: ImplicitSurface<K> + ?Sized,
        T: Transform<S::Value>,
        T::Output: Debug,
    {
        let distance = K::squared_distance(p, &surface.bounding_sphere().center())
            .to_f64()
            .sqrt();
        format!(
            "{:?} (distance={}, value={:?})",
            K::point_coordinates(p),
            distance,
            self.surf_equation(surface, p)
        )
    }
}
