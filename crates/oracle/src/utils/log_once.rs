//! One time warnings.
//!
//! Precision warnings can fire on every query of a bad surface, one line per
//! call site is enough.

/// `log::warn!` the first time this call site is reached, nothing afterwards
#[macro_export]
macro_rules! warn_once {
    (target: $target:expr, $($arg:tt)+) => {{
        static WARNED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
        if !WARNED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            log::warn!(target: $target, $($arg)+);
        }
    }};
    ($($arg:tt)+) => ($crate::warn_once!(target: module_path!(), $($arg)+));
}

pub use warn_once;

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_call_site() {
        for i in 0..3 {
            super::warn_once!("call number {}", i);
        }
        super::warn_once!(target: "oracle::precision", "another call site");
    }
}
