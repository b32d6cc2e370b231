//! Crate-internal diagnostics.
//!
//! With the `log` feature these are the `log` crate's macros; without it they
//! expand to nothing so the codec carries no logging cost.

#[cfg(feature = "log")]
pub(crate) use ::log::{debug, trace, warn};

#[cfg(not(feature = "log"))]
macro_rules! __debug {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "log"))]
macro_rules! __trace {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "log"))]
macro_rules! __warn {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "log"))]
pub(crate) use {__debug as debug, __trace as trace, __warn as warn};
