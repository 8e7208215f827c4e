mod output;
mod progress;
mod runner;
mod utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use oracle::OracleConfig;
use runner::Runner;
use utils::{AvailableSurface, Coords, QueryKind};

use crate::output::PointFormat;

#[derive(Parser, Debug)]
/// Query implicit surfaces: intersections, volume membership and initial points
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Surface selector
    surface: AvailableSurface,

    #[arg(long, default_value_t = 1e-5)]
    /// Error bound on intersection points, relative to the bounding sphere radius
    error_bound: f64,

    #[arg(long, default_value_t)]
    /// Seed to use for all the random stuff.
    /// Given a seed, sampling and probing are deterministic.
    seed: u64,

    #[arg(long, default_value_t = OracleConfig::default().max_attempts)]
    /// How many segments the sampler casts before giving up
    max_attempts: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Scatter points on the surface
    Sample {
        #[arg(short, long, default_value_t = OracleConfig::default().initial_points)]
        count: usize,

        #[arg(short, long)]
        /// Where to write the points, standard output if not provided
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t)]
        format: PointFormat,
    },
    /// Intersect a single segment, ray or line with the surface
    Intersect {
        #[arg(long, value_enum, default_value_t)]
        kind: QueryKind,

        #[arg(long)]
        /// Segment source, ray origin or a point of the line, as `x,y,z`
        from: Coords,

        #[arg(long)]
        /// Segment target, or any other point the ray or line goes through
        to: Coords,
    },
    /// Cast random rays from the bounding sphere center, in parallel
    Probe {
        #[arg(long, default_value_t = 1000)]
        rays: usize,
    },
    /// Tell whether a point is inside the surface
    Inside {
        #[arg(long)]
        point: Coords,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let runner = Runner::from_args(args)?;
    runner.run()?;

    Ok(())
}
