use anyhow::{Context, Result};
use oracle::math::DPoint;
use std::{fs::File, io::BufWriter, path::PathBuf};

use super::{FinalOutput, PointFormat};

pub struct FileOutput {
    pub path: PathBuf,
    pub format: PointFormat,
}

impl FileOutput {
    pub fn new(path: PathBuf, format: PointFormat) -> Self {
        Self { path, format }
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, points: &[DPoint]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }

        log::info!("Saving {} points to {}...", points.len(), self.path.display());
        let file = File::create(&self.path)
            .with_context(|| format!("cannot create {}", self.path.display()))?;
        self.format.write_points(&mut BufWriter::new(file), points)
    }
}
