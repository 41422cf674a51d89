//! Platform glue shared by the rest of the workspace: a millisecond sleep,
//! process-wide limits, `PartialOrd` min/max and a logging fatal assertion.

pub mod cmp;
pub mod limits;
pub mod sleep;

#[doc(hidden)]
pub use tracing;

pub use cmp::{max, min};
pub use limits::{Limits, DEFAULT_PATH_MAX, LIMITS, PATH_MAX, SCALE_BASE};
pub use sleep::{sleep_ms, Sleeper, ThreadSleeper};

/// Logs `Assertion failed at <file>:<line>.` and aborts when `cond` is false.
///
/// Unlike `assert!`, this never unwinds and is kept in release builds.
#[macro_export]
macro_rules! fatal_assert {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::tracing::error!("Assertion failed at {}:{}.", file!(), line!());
            ::std::process::abort();
        }
    };
}
