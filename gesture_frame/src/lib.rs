// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gesture_frame --heading-base-level=0

//! Gesture Frame: a headless pannable, zoomable viewport component.
//!
//! [`GestureFrame`] is the logic of a `<gesture-frame>` style custom element:
//! scaled content inside a scroll container that can be panned with a
//! pointer drag, zoomed with Ctrl + wheel or a trackpad pinch, and panned and
//! pinch-zoomed with touch. It composes:
//!
//! - [`gesture_frame_view::ViewportStore`] for the viewport state, ambient
//!   transform handling, fit and resize reconciliation;
//! - the interpreters of [`gesture_frame_input`] for wheel, drag, touch and
//!   two-pointer gestures;
//! - [`gesture_frame_timing`] for per-frame coalescing.
//!
//! The host binding implements [`ElementHost`] and forwards:
//!
//! - input events to [`GestureFrame::handle_event`];
//! - animation frames to [`GestureFrame::on_animation_frame`];
//! - `scroll` to [`GestureFrame::on_scroll`] and resize observations to
//!   [`GestureFrame::on_resize`];
//! - attribute changes to [`GestureFrame::attribute_changed`].
//!
//! The frame reflects `scale`, `min-scale`, `max-scale`, `offset-x` and
//! `offset-y` back to attributes and skips the echo of its own writes.
//!
//! Gestures are configured with [`GestureOptions`] or the `pan`, `pan-x`,
//! `pan-y`, `pinch-zoom`, `pan-button`, `event-source`, `anchor-x`, `anchor-y`
//! and `resize-scale` attributes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod attributes;
mod frame;
mod host;
mod options;

pub use attributes::{Attribute, AttributeError};
pub use frame::{EventOutcome, GestureFrame};
pub use host::ElementHost;
pub use options::{EventSource, FitOptions, GestureOptions};
