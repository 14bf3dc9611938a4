//! Frame pacing for the simulator.
//!
//! `Duration` lives in `std`, so the frame budget is kept here rather than in
//! the `no_std` common crate.

#[cfg(feature = "window")]
use std::time::Duration;

/// Target frame time in milliseconds (~50 FPS). Also the snapshot step size.
pub const FRAME_TIME_MS: u32 = 20;

/// Target frame time. The window loop sleeps if a frame completes early.
#[cfg(feature = "window")]
pub const FRAME_TIME: Duration = Duration::from_millis(FRAME_TIME_MS as u64);
