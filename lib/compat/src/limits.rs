//! # limits.rs
//!
//! Process-wide platform limits.
//!
//! `PATH_MAX` is the longest path, in bytes, the platform promises to accept.
//! Platforms that publish no value get [`DEFAULT_PATH_MAX`]. [`LIMITS`] bundles
//! the values and is resolved once, on first use.

use lazy_static::lazy_static;
use tracing::debug;

/// Fallback path length for platforms that do not define one.
pub const DEFAULT_PATH_MAX: usize = 4096;

#[cfg(windows)]
pub const PATH_MAX: usize = 260;

#[cfg(target_os = "macos")]
pub const PATH_MAX: usize = 1024;

#[cfg(not(any(windows, target_os = "macos")))]
pub const PATH_MAX: usize = DEFAULT_PATH_MAX;

/// Fixed-point base used by the scalers: `SCALE_BASE` means a factor of 1.
pub const SCALE_BASE: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub path_max: usize,
    pub scale_base: u32,
}

impl Limits {
    pub fn platform() -> Limits {
        let limits = Limits {
            path_max: PATH_MAX,
            scale_base: SCALE_BASE,
        };
        debug!(
            path_max = limits.path_max,
            scale_base = limits.scale_base,
            "resolved platform limits"
        );
        limits
    }

    /// Whether a path of `len` bytes fits, counting the terminating NUL.
    pub fn fits_path(&self, len: usize) -> bool {
        len < self.path_max
    }
}

lazy_static! {
    pub static ref LIMITS: Limits = Limits::platform();
}
