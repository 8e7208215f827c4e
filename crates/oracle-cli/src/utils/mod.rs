use core::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use oracle::{
    kernel::Kernel64,
    math::DPoint,
    primitive::BoundingSphere,
    surface::{Anonymous, Cube, Sphere, Torus},
    ImplicitSurface,
};

pub type DynSurface = Box<dyn ImplicitSurface<Kernel64, Value = f64> + Sync>;

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableSurface {
    #[default]
    Sphere,
    Torus,
    Cube,
    /// A sphere of radius 1 with a wall 0.2 thick
    HollowSphere,
}

impl AvailableSurface {
    /// Builds the surface, `relative_error` is relative to its bounding sphere radius
    pub fn build(self, relative_error: f64) -> DynSurface {
        let bound_for = |sphere: BoundingSphere<Kernel64>| {
            sphere.squared_radius() * relative_error * relative_error
        };

        match self {
            AvailableSurface::Sphere => {
                let mut sphere = Sphere::new(DPoint::ORIGIN, 1.0, 0.0);
                sphere.squared_error_bound = bound_for(sphere.bounding_sphere);
                Box::new(sphere)
            }
            AvailableSurface::Torus => {
                let mut torus = Torus::new(DPoint::ORIGIN, 1.0, 0.25, 0.0);
                torus.squared_error_bound = bound_for(torus.bounding_sphere);
                Box::new(torus)
            }
            AvailableSurface::Cube => {
                let mut cube = Cube::new(DPoint::ORIGIN, 1.0, 0.0);
                cube.squared_error_bound = bound_for(cube.bounding_sphere);
                Box::new(cube)
            }
            AvailableSurface::HollowSphere => Box::new(Anonymous::with_relative_error(
                |p: &DPoint| {
                    let wall = p.0.length() - 1.0;
                    wall * wall - 0.01
                },
                BoundingSphere::from_radius(DPoint::ORIGIN, 2.0),
                relative_error,
            )),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum QueryKind {
    #[default]
    Segment,
    Ray,
    Line,
}

/// A point given on the command line as `x,y,z`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords(pub DPoint);

impl FromStr for Coords {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split(',').map(str::trim);
        let (Some(x), Some(y), Some(z), None) =
            (split_it.next(), split_it.next(), split_it.next(), split_it.next())
        else {
            return Err(anyhow::anyhow!("Incorrect format, expected `x,y,z`"));
        };

        Ok(Coords(DPoint::new(x.parse()?, y.parse()?, z.parse()?)))
    }
}

impl Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x, y, z] = self.0.to_array();
        f.write_fmt(format_args!("{x},{y},{z}"))
    }
}

#[cfg(test)]
mod tests {
    use oracle::{math::DPoint, ImplicitSurface};

    use super::{AvailableSurface, Coords};

    #[test]
    fn parse_coords() {
        let c: Coords = "1,-2.5, 3e-1".parse().unwrap();
        assert_eq!(c, Coords(DPoint::new(1.0, -2.5, 0.3)));
        assert_eq!(c.to_string(), "1,-2.5,0.3");

        assert!("1,2".parse::<Coords>().is_err());
        assert!("1,2,3,4".parse::<Coords>().is_err());
        assert!("1,a,3".parse::<Coords>().is_err());
    }

    #[test]
    fn surfaces_scale_their_error_bound() {
        let sphere = AvailableSurface::Sphere.build(1e-3);
        // Bounding sphere of radius 2
        assert!((sphere.squared_error_bound() - 4e-6).abs() < 1e-18);

        let hollow = AvailableSurface::HollowSphere.build(1e-3);
        assert!(hollow.impl_f(&DPoint::new(1.0, 0.0, 0.0)) < 0.0);
        assert!(hollow.impl_f(&DPoint::ORIGIN) > 0.0);
    }
}
