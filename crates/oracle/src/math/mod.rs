pub mod distributions;
pub mod float;
pub mod point;
pub mod sign;

pub use float::Scalar;
pub use point::{DPoint, Point};
pub use sign::{HasSign, Sign};
