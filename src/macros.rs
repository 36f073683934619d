//! Crate-internal logging shims
//!
//! `debug!` forwards to the `log` crate when the `logging` feature is
//! enabled and compiles to nothing otherwise.

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($tt)*);
        }
    };
}
