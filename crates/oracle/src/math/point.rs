use std::ops::{Add, Sub};

use glam::{DVec3, Vec3};

macro_rules! point_type {
    ($(#[$meta: meta])* $name: ident, $vec: ty, $ft: ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name(pub $vec);

        impl $name {
            pub const ORIGIN: $name = $name(<$vec>::ZERO);

            pub fn vec(self) -> $vec {
                self.0
            }

            pub fn new(x: $ft, y: $ft, z: $ft) -> Self {
                Self(<$vec>::new(x, y, z))
            }

            pub fn midpoint(self, other: Self) -> Self {
                Self((self.0 + other.0) * 0.5)
            }

            pub fn distance_squared(self, other: Self) -> $ft {
                self.0.distance_squared(other.0)
            }

            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            pub fn to_array(self) -> [$ft; 3] {
                self.0.to_array()
            }
        }

        impl From<[$ft; 3]> for $name {
            fn from(coords: [$ft; 3]) -> Self {
                Self(<$vec>::from_array(coords))
            }
        }

        impl Add<$vec> for $name {
            type Output = Self;

            fn add(self, rhs: $vec) -> Self::Output {
                $name(self.vec() + rhs)
            }
        }

        impl Sub<$vec> for $name {
            type Output = Self;

            fn sub(self, rhs: $vec) -> Self::Output {
                $name(self.vec() - rhs)
            }
        }

        /// We can sub two points but not add them
        impl Sub for $name {
            type Output = $vec;

            fn sub(self, rhs: Self) -> Self::Output {
                self.vec() - rhs.vec()
            }
        }
    };
}

point_type!(
    /// A single precision position, kept apart from [`Vec3`] displacements
    Point,
    Vec3,
    f32
);
point_type!(
    /// A double precision position, kept apart from [`DVec3`] displacements
    DPoint,
    DVec3,
    f64
);
