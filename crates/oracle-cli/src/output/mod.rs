mod file_output;

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
pub use file_output::FileOutput;
use oracle::math::DPoint;

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum PointFormat {
    /// One `x y z` line per point
    #[default]
    Xyz,
    /// Wavefront OBJ vertices, `v x y z`
    Obj,
}

impl PointFormat {
    pub fn write_points(self, w: &mut impl Write, points: &[DPoint]) -> Result<()> {
        let prefix = match self {
            PointFormat::Xyz => "",
            PointFormat::Obj => "v ",
        };
        for p in points {
            let [x, y, z] = p.to_array();
            writeln!(w, "{prefix}{x} {y} {z}")?;
        }
        w.flush()?;
        Ok(())
    }
}

pub trait FinalOutput {
    fn commit(&self, points: &[DPoint]) -> Result<()>;
}

pub struct StdoutOutput {
    pub format: PointFormat,
}

impl FinalOutput for StdoutOutput {
    fn commit(&self, points: &[DPoint]) -> Result<()> {
        self.format.write_points(&mut std::io::stdout().lock(), points)
    }
}
