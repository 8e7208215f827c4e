use std::{fmt::Display, sync::atomic};

use oracle::visitor::OracleVisitor;

/// Shared progress counter, printed on standard error
pub struct Progress {
    current: atomic::AtomicUsize,
    max: usize,
}

impl Progress {
    pub fn new(max: usize) -> Self {
        Self {
            current: Default::default(),
            max,
        }
    }
    pub fn add(&self, k: usize) -> usize {
        self.current.fetch_add(k, atomic::Ordering::SeqCst)
    }
    pub fn get_raw(&self) -> usize {
        self.current.load(atomic::Ordering::SeqCst)
    }

    pub fn print(&self) {
        eprint!("\r{self}");
    }

    pub fn finish(&self) {
        eprintln!();
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let percent = if self.max == 0 {
            1.0
        } else {
            (self.get_raw() as f32 / self.max as f32).clamp(0.0, 1.0)
        };
        PercentBar { percent, width: 50 }.fmt(f)
    }
}

/// Moves forward on every point the oracle accepts
impl<P> OracleVisitor<P> for Progress {
    fn new_point(&self, _point: &mut P) {
        self.add(1);
        self.print();
    }
}

pub struct PercentBar {
    pub percent: f32,
    pub width: usize,
}

impl Display for PercentBar {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filled = ((self.width - 1) as f32 * self.percent).round() as usize;
        write!(
            f,
            "[{empty:=>width_left$}>{empty:.<width_right$}] {percent:.1}%",
            empty = "",
            width_left = filled,
            width_right = self.width - 1 - filled,
            percent = 100. * self.percent
        )
    }
}

#[cfg(test)]
mod tests {
    use oracle::visitor::OracleVisitor;

    use super::{PercentBar, Progress};

    #[test]
    fn percent_bar() {
        let bar = PercentBar {
            percent: 0.5,
            width: 11,
        };
        assert_eq!(bar.to_string(), "[=====>.....] 50.0%");
    }

    #[test]
    fn progress_follows_visited_points() {
        let progress = Progress::new(4);
        let mut p = [0.0f64; 3];
        progress.new_point(&mut p);
        progress.new_point(&mut p);
        assert_eq!(progress.get_raw(), 2);
        assert_eq!(progress.to_string(), PercentBar { percent: 0.5, width: 50 }.to_string());
    }
}
