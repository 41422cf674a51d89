//! # sleep.rs
//!
//! Millisecond sleep behind a trait, so callers that pace themselves can be
//! handed a fake clock in tests.

use std::thread;
use std::time::Duration;
use tracing::trace;

/// Suspends the calling thread.
pub trait Sleeper {
    fn sleep_ms(&self, msec: u32);
}

/// Sleeps on the OS scheduler via [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep_ms(&self, msec: u32) {
        trace!(msec, "sleeping");
        thread::sleep(Duration::from_millis(u64::from(msec)));
    }
}

impl<T: Sleeper + ?Sized> Sleeper for &T {
    fn sleep_ms(&self, msec: u32) {
        (**self).sleep_ms(msec);
    }
}

/// Sleeps the current thread for `msec` milliseconds.
pub fn sleep_ms(msec: u32) {
    ThreadSleeper.sleep_ms(msec);
}
