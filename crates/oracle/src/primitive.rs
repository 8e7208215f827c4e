//! Line-like queries and the bounding sphere they are clipped against.

use crate::{
    error::{GeometryIssue, OracleError, Result},
    kernel::Kernel,
    math::Scalar,
    utils::log_once::warn_once,
};

/// A segment between two points
#[derive(Debug, Clone, Copy)]
pub struct Segment<K: Kernel> {
    pub source: K::Point,
    pub target: K::Point,
}

impl<K: Kernel> Segment<K> {
    pub fn new(source: K::Point, target: K::Point) -> Self {
        Self { source, target }
    }

    /// The `i`-th extremity: the source for even indices, the target for odd ones
    pub fn point(&self, i: usize) -> K::Point {
        if i % 2 == 0 {
            self.source
        } else {
            self.target
        }
    }

    pub fn to_vector(&self) -> K::Vector {
        K::vector(&self.source, &self.target)
    }

    pub fn is_degenerate(&self) -> bool {
        self.source == self.target
    }
}

/// A half line starting at `origin`
///
/// Unlike a rendering ray the direction is not normalized: it only has to be non zero.
#[derive(Debug, Clone, Copy)]
pub struct Ray<K: Kernel> {
    pub origin: K::Point,
    pub direction: K::Vector,
}

impl<K: Kernel> Ray<K> {
    pub fn new(origin: K::Point, direction: K::Vector) -> Self {
        Self { origin, direction }
    }

    /// The ray starting at `origin` and passing through `through`
    pub fn through(origin: K::Point, through: K::Point) -> Self {
        Self::new(origin, K::vector(&origin, &through))
    }

    pub fn at(&self, t: K::FT) -> K::Point {
        if t < K::FT::ZERO {
            warn_once!("a ray has been accessed before its origin");
        }
        self.at_unchecked(t)
    }

    pub fn at_unchecked(&self, t: K::FT) -> K::Point {
        K::translate(&self.origin, &K::scale(&self.direction, t))
    }
}

/// An unbounded line through `point`
#[derive(Debug, Clone, Copy)]
pub struct Line<K: Kernel> {
    pub point: K::Point,
    pub direction: K::Vector,
}

impl<K: Kernel> Line<K> {
    pub fn new(point: K::Point, direction: K::Vector) -> Self {
        Self { point, direction }
    }

    /// The line through `a` and `b`
    pub fn through(a: K::Point, b: K::Point) -> Self {
        Self::new(a, K::vector(&a, &b))
    }

    pub fn at(&self, t: K::FT) -> K::Point {
        K::translate(&self.point, &K::scale(&self.direction, t))
    }
}

/// A sphere given by its center and squared radius, as returned by a surface
#[derive(Debug, Clone, Copy)]
pub struct BoundingSphere<K: Kernel> {
    pub center: K::Point,
    pub squared_radius: K::FT,
}

impl<K: Kernel> BoundingSphere<K> {
    pub fn new(center: K::Point, squared_radius: K::FT) -> Self {
        Self {
            center,
            squared_radius,
        }
    }

    pub fn from_radius(center: K::Point, radius: K::FT) -> Self {
        Self::new(center, radius * radius)
    }

    pub fn center(&self) -> K::Point {
        self.center
    }

    pub fn squared_radius(&self) -> K::FT {
        self.squared_radius
    }

    /// Approximate radius, the square root is taken in `f64`
    pub fn radius(&self) -> K::FT {
        self.squared_radius.approximate_sqrt()
    }

    /// Strictly inside the sphere
    pub fn has_on_bounded_side(&self, p: &K::Point) -> bool {
        K::squared_distance(&self.center, p) < self.squared_radius
    }

    /// Checks the sphere can be used to clip queries: finite center, finite positive radius
    pub fn validate(&self) -> Result<()> {
        if !K::point_is_finite(&self.center) {
            return Err(OracleError::InvalidGeometry(GeometryIssue::NonFiniteCenter));
        }
        if self.squared_radius.into_positive().is_none() {
            return Err(OracleError::InvalidGeometry(GeometryIssue::InvalidRadius));
        }
        Ok(())
    }
}
