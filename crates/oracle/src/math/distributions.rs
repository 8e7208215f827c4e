//! Random points on and in a sphere centered at the origin.
//!
//! Both distributions produce raw `[f64; 3]` coordinates; the oracle turns them
//! into kernel points with [`crate::kernel::Kernel::construct_point`] and moves
//! them to the bounding sphere center. Sampling through a seeded generator gives
//! an infinite stream that restarts whenever the generator is re-seeded.
use std::ops::Deref;

use rand::{distributions::Uniform, prelude::Distribution, Rng};

/// Samples are expected to be in [0;1(^N
pub struct Samples<const N: usize>(pub [f64; N]);

impl<const N: usize> Deref for Samples<N> {
    type Target = [f64; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub trait Samplable<T, const N: usize> {
    fn sample_with(&self, samples: Samples<N>) -> T;
}

/// Uniform distribution on the surface of the sphere of the given radius
#[derive(Debug, Clone, Copy)]
pub struct UniformSphere3 {
    pub radius: f64,
}

impl Samplable<[f64; 3], 2> for UniformSphere3 {
    fn sample_with(&self, samples: Samples<2>) -> [f64; 3] {
        // z uniform in [-1, 1] gives equal area bands (Archimedes)
        let z = 1.0 - 2.0 * samples[0];
        let r = f64::sqrt(f64::max(0.0, 1.0 - z * z));
        let (s, c) = f64::sin_cos(std::f64::consts::TAU * samples[1]);

        [self.radius * r * c, self.radius * r * s, self.radius * z]
    }
}

impl Distribution<[f64; 3]> for UniformSphere3 {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        let uniform = Uniform::new(0., 1.);
        self.sample_with(Samples([uniform.sample(rng), uniform.sample(rng)]))
    }
}

/// Uniform distribution inside the ball of the given radius
///
/// Uses the rejection method on the enclosing cube, about 1.9 draws per point.
#[derive(Debug, Clone, Copy)]
pub struct UniformBall3 {
    pub radius: f64,
}

impl Distribution<[f64; 3]> for UniformBall3 {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        let uniform = Uniform::new_inclusive(-1., 1.);
        let mut x1;
        let mut x2;
        let mut x3;
        loop {
            x1 = uniform.sample(rng);
            x2 = uniform.sample(rng);
            x3 = uniform.sample(rng);
            if x1 * x1 + x2 * x2 + x3 * x3 <= 1. {
                break;
            }
        }
        [self.radius * x1, self.radius * x2, self.radius * x3]
    }
}

#[cfg(test)]
mod tests {
    use rand::{prelude::Distribution, SeedableRng};

    use super::{Samplable, Samples, UniformBall3, UniformSphere3};
    use crate::Rng;

    fn norm(p: [f64; 3]) -> f64 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    #[test]
    fn sphere_poles() {
        let sphere = UniformSphere3 { radius: 2.0 };
        let north = sphere.sample_with(Samples([0.0, 0.3]));
        let south = sphere.sample_with(Samples([1.0, 0.7]));

        assert!((north[2] - 2.0).abs() < 1e-12);
        assert!((south[2] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn sphere_points_lie_on_sphere() {
        let mut rng = Rng::seed_from_u64(7);
        let sphere = UniformSphere3 { radius: 3.5 };
        for _ in 0..1000 {
            let p = sphere.sample(&mut rng);
            assert!((norm(p) - 3.5).abs() < 1e-9, "{p:?}");
        }
    }

    #[test]
    fn sphere_is_balanced() {
        let mut rng = Rng::seed_from_u64(11);
        let sphere = UniformSphere3 { radius: 1.0 };
        let n = 20_000;
        let mut mean = [0.0; 3];
        for _ in 0..n {
            let p = sphere.sample(&mut rng);
            for i in 0..3 {
                mean[i] += p[i] / n as f64;
            }
        }
        // Uniform on the sphere means every coordinate has mean 0 and std 1/sqrt(3)
        for m in mean {
            assert!(m.abs() < 0.03, "{mean:?}");
        }
    }

    #[test]
    fn ball_points_lie_inside() {
        let mut rng = Rng::seed_from_u64(3);
        let ball = UniformBall3 { radius: 0.5 };
        let mut outer_shell = 0;
        for _ in 0..4000 {
            let p = ball.sample(&mut rng);
            assert!(norm(p) <= 0.5 + 1e-12);
            if norm(p) > 0.5 * 0.5f64.cbrt() {
                outer_shell += 1;
            }
        }
        // Half of the volume lies beyond r / cbrt(2)
        assert!((1600..2400).contains(&outer_shell), "{outer_shell}");
    }

    #[test]
    fn seeded_streams_restart() {
        let sphere = UniformSphere3 { radius: 1.0 };
        let a: Vec<_> = sphere
            .sample_iter(Rng::seed_from_u64(42))
            .take(5)
            .collect();
        let b: Vec<_> = sphere
            .sample_iter(Rng::seed_from_u64(42))
            .take(5)
            .collect();
        assert_eq!(a, b);
    }
}
