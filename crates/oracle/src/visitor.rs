//! Hooks called on every intersection point the oracle accepts.
//!
//! A visitor gets the point before the oracle returns it and may adjust it (snap
//! to a grid, project on a feature). Queries only borrow the oracle, so visitors
//! take `&self`: one that records something has to synchronize itself, like
//! [`CountingVisitor`].

use std::{
    fmt::Debug,
    sync::atomic::{AtomicUsize, Ordering},
};

pub trait OracleVisitor<P> {
    fn new_point(&self, point: &mut P);
}

/// Does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisitor;

impl<P> OracleVisitor<P> for NullVisitor {
    #[inline]
    fn new_point(&self, _point: &mut P) {}
}

/// Counts accepted points, can be shared between threads
#[derive(Debug, Default)]
pub struct CountingVisitor {
    count: AtomicUsize,
}

impl CountingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::Release);
    }
}

impl<P> OracleVisitor<P> for CountingVisitor {
    fn new_point(&self, _point: &mut P) {
        self.count.fetch_add(1, Ordering::AcqRel);
    }
}

/// Logs every accepted point at the given level
#[derive(Debug, Clone, Copy)]
pub struct LoggingVisitor {
    pub level: log::Level,
}

impl Default for LoggingVisitor {
    fn default() -> Self {
        Self {
            level: log::Level::Debug,
        }
    }
}

impl<P: Debug> OracleVisitor<P> for LoggingVisitor {
    fn new_point(&self, point: &mut P) {
        log::log!(target: "oracle::visitor", self.level, "new point {point:?}");
    }
}

/// A thin wrapper around a function used as a visitor
#[derive(Debug, Default, Clone, Copy)]
pub struct FnVisitor<F>(pub F);

impl<P, F: Fn(&mut P)> OracleVisitor<P> for FnVisitor<F> {
    fn new_point(&self, point: &mut P) {
        (self.0)(point)
    }
}

/// Both visitors, in order
impl<P, A: OracleVisitor<P>, B: OracleVisitor<P>> OracleVisitor<P> for (A, B) {
    fn new_point(&self, point: &mut P) {
        self.0.new_point(point);
        self.1.new_point(point);
    }
}

impl<P, V: OracleVisitor<P> + ?Sized> OracleVisitor<P> for &V {
    fn new_point(&self, point: &mut P) {
        (**self).new_point(point)
    }
}
