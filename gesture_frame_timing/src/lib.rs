// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gesture_frame_timing --heading-base-level=0

//! Gesture Frame Timing: per-frame coalescing for input-driven state.
//!
//! Input events (`pointermove`, `touchmove`, `wheel`) can arrive far more often
//! than the display refreshes. The pattern used across the gesture frame crates
//! is:
//!
//! - Raw events only update in-memory accumulators.
//! - The accumulator asks for **one** frame callback through a [`Throttle`].
//! - When the host runs that frame, the accumulator is flushed once and reset.
//!
//! The host's frame primitive (`requestAnimationFrame` in a browser, a vsync
//! callback in a native toolkit) is reached through the [`FrameScheduler`]
//! trait. [`FrameQueue`] is a headless implementation that hosts can drive
//! manually and that tests use to step frames deterministically.
//!
//! ## Minimal example
//!
//! ```rust
//! use gesture_frame_timing::{FrameQueue, Throttle};
//!
//! let mut frames = FrameQueue::new();
//! let mut throttle = Throttle::new();
//!
//! // Ten requests within one frame collapse into a single scheduled frame.
//! for _ in 0..10 {
//!     throttle.request(&mut frames);
//! }
//! assert_eq!(frames.len(), 1);
//!
//! // The host runs the frame; the throttle claims it exactly once.
//! let due = frames.take_due();
//! assert!(throttle.fire(due[0]));
//! assert!(!throttle.fire(due[0]));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;
mod throttle;

pub use queue::FrameQueue;
pub use throttle::Throttle;

/// Identifier for a frame callback requested from a [`FrameScheduler`].
///
/// Identifiers are opaque to the gesture frame crates; they are only compared
/// for equality when the host reports which frame is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Host primitive for scheduling work on the next display frame.
pub trait FrameScheduler {
    /// Schedules a frame callback and returns its identifier.
    fn request_frame(&mut self) -> FrameId;

    /// Withdraws a frame callback that has not run yet.
    ///
    /// Cancelling an identifier that already ran, or that was never issued,
    /// must be harmless.
    fn cancel_frame(&mut self, id: FrameId);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> FrameId {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        (**self).cancel_frame(id);
    }
}
