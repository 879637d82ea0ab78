// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gesture_frame_input --heading-base-level=0

//! Gesture Frame Input: gesture interpreters for pan/zoom frames.
//!
//! Each interpreter turns one family of raw input events into viewport steps,
//! coalesced to at most one step per display frame:
//!
//! - [`WheelZoom`]: modifier + wheel (and trackpad pinch) zooms about the cursor.
//! - [`DragPan`]: a held pointer button pans.
//! - [`TouchPinch`]: one touch pans; two or more pan and pinch-zoom.
//! - [`PointerPinch`]: the same for two pointers on platforms without touch
//!   events.
//!
//! Raw events only update accumulators and ask a
//! [`FrameScheduler`](gesture_frame_timing::FrameScheduler) for a frame. When
//! the frame runs, `fire(id)` hands back the accumulated step, if `id` was the
//! interpreter's frame, and resets the accumulator.
//!
//! Steps are expressed in raw client pixels; `gesture_frame_view` folds the
//! ambient transform in when applying them.
//!
//! ## Minimal example
//!
//! ```rust
//! use gesture_frame_input::TouchPinch;
//! use gesture_frame_timing::FrameQueue;
//! use kurbo::Point;
//!
//! let mut frames = FrameQueue::new();
//! let mut touch = TouchPinch::new();
//!
//! touch.start_end(&mut frames, &[Point::new(90.0, 0.0), Point::new(110.0, 0.0)]);
//! touch.update(&mut frames, &[Point::new(70.0, 0.0), Point::new(130.0, 0.0)]);
//!
//! let frame = frames.take_due()[0];
//! let step = touch.fire(frame).unwrap();
//! assert_eq!(step.zoom.unwrap().ratio, 3.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod drag;
mod event;
mod pointers;
mod step;
mod touch;
mod wheel;

pub use drag::DragPan;
pub use event::{
    AUXILIARY_BUTTON, InputEvent, Modifiers, PRIMARY_BUTTON, PointerInput, PointerKind,
    SECONDARY_BUTTON, WheelInput, button_mask,
};
pub use pointers::{MAX_POINTERS, PointerPinch, PointerRecord};
pub use step::{GesturePoint, PanZoomStep, ZoomStep};
pub use touch::TouchPinch;
pub use wheel::WheelZoom;
