use anyhow::{Context, Result};
use oracle::{
    kernel::Kernel64,
    math::{distributions::UniformSphere3, DPoint},
    primitive::{Line, Ray, Segment},
    utils::{counter, timer::timed_scope_log},
    visitor::{CountingVisitor, LoggingVisitor},
    ImplicitSurfaceOracle, OracleConfig, OracleError, Rng,
};
use rand::{prelude::Distribution, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    output::{FileOutput, FinalOutput, StdoutOutput},
    progress::Progress,
    utils::{Coords, DynSurface, QueryKind},
    Args, Command,
};

pub struct Runner {
    pub surface: DynSurface,
    pub config: OracleConfig,
    pub command: Command,
}

impl Runner {
    pub fn from_args(args: Args) -> Result<Self> {
        log::info!("building {:?} surface", args.surface);
        anyhow::ensure!(
            args.error_bound.is_finite() && args.error_bound > 0.0,
            "the error bound must be finite and positive, got {}",
            args.error_bound
        );

        let config = OracleConfig::default()
            .with_seed(args.seed)
            .with_max_attempts(args.max_attempts);

        Ok(Self {
            surface: args.surface.build(args.error_bound),
            config,
            command: args.command,
        })
    }

    pub fn run(self) -> Result<()> {
        match &self.command {
            Command::Sample {
                count,
                output,
                format,
            } => {
                let final_output: Box<dyn FinalOutput> = match output {
                    Some(path) => Box::new(FileOutput::new(path.clone(), *format)),
                    None => Box::new(StdoutOutput { format: *format }),
                };
                self.sample(*count, final_output.as_ref())?;
            }
            Command::Intersect { kind, from, to } => self.intersect(*kind, from.0, to.0)?,
            Command::Probe { rays } => self.probe(*rays)?,
            Command::Inside { point } => self.inside(point.0),
        }

        counter::report_counters();
        Ok(())
    }

    fn sample(&self, count: usize, final_output: &dyn FinalOutput) -> Result<()> {
        log::info!("sampling {count} points");
        let progress = Progress::new(count);
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new()
            .with_visitor(&progress)
            .with_config(self.config.with_initial_points(count));

        let mut points = Vec::with_capacity(count);
        let res = timed_scope_log("sample initial points", || {
            oracle.construct_initial_points(&*self.surface, count, &mut points)
        })
        .res;
        progress.finish();

        match res {
            Ok(_) => (),
            Err(err @ OracleError::SamplingExhausted { .. }) => {
                log::warn!("{err}, saving the points found so far")
            }
            Err(err) => return Err(err.into()),
        }

        final_output.commit(&points)
    }

    fn intersect(&self, kind: QueryKind, from: DPoint, to: DPoint) -> Result<()> {
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new()
            .with_visitor(LoggingVisitor::default())
            .with_config(self.config);
        let surface = &*self.surface;

        let hit = match kind {
            QueryKind::Segment => oracle.intersect_segment(surface, Segment::new(from, to)),
            QueryKind::Ray => oracle.intersect_ray(surface, Ray::through(from, to)),
            QueryKind::Line => oracle.intersect_line(surface, Line::through(from, to)),
        }
        .with_context(|| format!("{kind:?} from {} to {}", Coords(from), Coords(to)))?;

        match hit {
            Some(p) => {
                log::info!("{kind:?} crosses the surface at {}", Coords(p));
                println!("{}", Coords(p));
            }
            None => {
                log::info!("{kind:?} does not cross the surface");
                println!("none");
            }
        }
        Ok(())
    }

    /// Casts `rays` random rays from the bounding sphere center through a single oracle
    fn probe(&self, rays: usize) -> Result<()> {
        log::info!("probing with {rays} rays");
        let counting = CountingVisitor::new();
        let progress = Progress::new(rays);
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new()
            .with_visitor(&counting)
            .with_config(self.config);

        let center = self.surface.bounding_sphere().center();
        let directions = UniformSphere3 { radius: 1.0 };
        let seed = self.config.seed;

        let hits = timed_scope_log("cast rays", || {
            (0..rays)
                .into_par_iter()
                .map(|i| {
                    let mut rng = Rng::seed_from_u64(seed.wrapping_add(i as u64));
                    let direction = DPoint::from(directions.sample(&mut rng)) - DPoint::ORIGIN;
                    let hit = oracle.intersect_ray(&*self.surface, Ray::new(center, direction));
                    if progress.add(1) % 64 == 0 {
                        progress.print();
                    }
                    hit
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .res?;
        progress.print();
        progress.finish();

        let found = counting.count();
        let distances: Vec<f64> = hits
            .iter()
            .flatten()
            .map(|p| p.distance_squared(center).sqrt())
            .collect();
        debug_assert_eq!(found, distances.len());

        let ratio = if rays == 0 {
            0.0
        } else {
            found as f64 / rays as f64
        };
        log::info!("{found} of {rays} rays hit the surface ({:.1}%)", 100.0 * ratio);
        if !distances.is_empty() {
            let mean = distances.iter().sum::<f64>() / distances.len() as f64;
            log::info!("mean distance from the center: {mean:.6}");
        }
        println!("{ratio}");
        Ok(())
    }

    fn inside(&self, point: DPoint) {
        let oracle = ImplicitSurfaceOracle::<Kernel64>::new();
        let inside = oracle.is_in_volume(&*self.surface, &point);
        log::info!(
            "{} is {} the surface",
            Coords(point),
            if inside { "inside" } else { "outside" }
        );
        println!("{inside}");
    }
}
