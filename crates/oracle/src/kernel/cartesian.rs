use std::marker::PhantomData;

use glam::{DVec3, Vec3};

use super::Kernel;
use crate::math::{DPoint, Point};

/// Cartesian kernel over `glam` vectors, parametrized by the number type
#[derive(Debug, Clone, Copy, Default)]
pub struct Cartesian<FT> {
    _phantom: PhantomData<FT>,
}

pub type Kernel32 = Cartesian<f32>;
pub type Kernel64 = Cartesian<f64>;

macro_rules! cartesian_kernel {
    ($ft: ty, $point: ident, $vec: ty) => {
        impl Kernel for Cartesian<$ft> {
            type FT = $ft;
            type Point = $point;
            type Vector = $vec;

            #[inline]
            fn construct_point(x: f64, y: f64, z: f64) -> $point {
                $point::new(x as $ft, y as $ft, z as $ft)
            }

            #[inline]
            fn point_coordinates(p: &$point) -> [f64; 3] {
                let [x, y, z] = p.to_array();
                [x as f64, y as f64, z as f64]
            }

            #[inline]
            fn vector(a: &$point, b: &$point) -> $vec {
                *b - *a
            }

            #[inline]
            fn translate(p: &$point, v: &$vec) -> $point {
                *p + *v
            }

            #[inline]
            fn scale(v: &$vec, k: $ft) -> $vec {
                *v * k
            }

            #[inline]
            fn scalar_product(u: &$vec, v: &$vec) -> $ft {
                u.dot(*v)
            }

            #[inline]
            fn midpoint(a: &$point, b: &$point) -> $point {
                a.midpoint(*b)
            }

            #[inline]
            fn squared_distance(a: &$point, b: &$point) -> $ft {
                a.distance_squared(*b)
            }

            #[inline]
            fn point_is_finite(p: &$point) -> bool {
                p.is_finite()
            }

            #[inline]
            fn vector_is_finite(v: &$vec) -> bool {
                v.is_finite()
            }
        }
    };
}

cartesian_kernel!(f32, Point, Vec3);
cartesian_kernel!(f64, DPoint, DVec3);

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::{
        kernel::{Kernel, Kernel32, Kernel64},
        math::{DPoint, Point},
    };

    #[test]
    fn constructions() {
        let a = Kernel64::construct_point(1.0, 0.0, 0.0);
        let b = Kernel64::construct_point(3.0, 4.0, 0.0);

        assert_eq!(Kernel64::vector(&a, &b), DVec3::new(2.0, 4.0, 0.0));
        assert_eq!(Kernel64::midpoint(&a, &b), DPoint::new(2.0, 2.0, 0.0));
        assert_eq!(Kernel64::squared_distance(&a, &b), 20.0);
        assert_eq!(
            Kernel64::translate(&a, &Kernel64::scale(&Kernel64::vector(&a, &b), 0.5)),
            DPoint::new(2.0, 2.0, 0.0)
        );
        assert_eq!(Kernel64::squared_length(&DVec3::new(1.0, 2.0, 2.0)), 9.0);
        assert_eq!(Kernel64::origin(), DPoint::ORIGIN);
    }

    #[test]
    fn single_precision_coordinates() {
        let p = Kernel32::construct_point(0.5, -1.25, 8.0);
        assert_eq!(p, Point::new(0.5, -1.25, 8.0));
        assert_eq!(Kernel32::point_coordinates(&p), [0.5, -1.25, 8.0]);
    }
}
