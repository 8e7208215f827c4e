//! Intersection oracle for implicitly defined surfaces.
//!
//! A surface is the zero set of a scalar field restricted to a bounding sphere.
//! [`ImplicitSurfaceOracle`] finds where segments, rays and lines cross it,
//! tells whether a point lies inside, and scatters initial points on it.
//!
//! ```
//! use oracle::{kernel::Kernel64, math::DPoint, primitive::Segment, surface::Sphere};
//! use oracle::ImplicitSurfaceOracle;
//!
//! let sphere = Sphere::<Kernel64>::new(DPoint::ORIGIN, 1.0, 1e-10);
//! let oracle = ImplicitSurfaceOracle::<Kernel64>::new();
//!
//! let segment = Segment::new(DPoint::ORIGIN, DPoint::new(1.5, 0.0, 0.0));
//! let p = oracle.intersect_segment(&sphere, segment)?.unwrap();
//! assert!((p.0.x - 1.0).abs() < 1e-5);
//! # Ok::<(), oracle::OracleError>(())
//! ```

pub mod clip;
pub mod error;
pub mod kernel;
pub mod math;
pub mod oracle;
pub mod primitive;
pub mod sampler;
pub mod surface;
pub mod transform;
pub mod utils;
pub mod visitor;

pub use rand_xoshiro::Xoshiro256StarStar as Rng;

pub use error::{GeometryIssue, OracleError, Result};
pub use oracle::{ImplicitSurfaceOracle, OracleConfig};
pub use surface::ImplicitSurface;
