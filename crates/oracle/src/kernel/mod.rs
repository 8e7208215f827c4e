//! The geometric kernel the oracle is written against.
//!
//! A kernel is a zero sized type gathering the number type, the point and
//! vector types, and the constructions the oracle needs. Every construction is
//! an associated function so the oracle never has to carry a kernel value
//! around. [`Cartesian`] implements it over `glam` for `f32` and `f64`; any other
//! representation (exact rationals, a foreign geometry library, ...) only has to
//! implement this trait.

mod cartesian;

pub use cartesian::{Cartesian, Kernel32, Kernel64};

use std::fmt::Debug;

use crate::math::Scalar;

pub trait Kernel: Copy + Clone + Debug + Default + Send + Sync + 'static {
    type FT: Scalar;
    type Point: Copy + Debug + PartialEq + Send + Sync;
    type Vector: Copy + Debug + Send + Sync;

    /// Builds a point from approximate coordinates (random sampling, parsing)
    fn construct_point(x: f64, y: f64, z: f64) -> Self::Point;

    /// Approximate coordinates of a point (logging, output)
    fn point_coordinates(p: &Self::Point) -> [f64; 3];

    /// The vector going from `a` to `b`
    fn vector(a: &Self::Point, b: &Self::Point) -> Self::Vector;

    fn translate(p: &Self::Point, v: &Self::Vector) -> Self::Point;

    fn scale(v: &Self::Vector, k: Self::FT) -> Self::Vector;

    fn scalar_product(u: &Self::Vector, v: &Self::Vector) -> Self::FT;

    fn midpoint(a: &Self::Point, b: &Self::Point) -> Self::Point;

    fn squared_distance(a: &Self::Point, b: &Self::Point) -> Self::FT;

    fn point_is_finite(p: &Self::Point) -> bool;

    fn vector_is_finite(v: &Self::Vector) -> bool;

    fn origin() -> Self::Point {
        Self::construct_point(0.0, 0.0, 0.0)
    }

    fn squared_length(v: &Self::Vector) -> Self::FT {
        Self::scalar_product(v, v)
    }
}
