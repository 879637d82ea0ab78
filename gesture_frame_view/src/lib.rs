// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gesture_frame_view --heading-base-level=0

//! Gesture Frame View: viewport state for pannable, zoomable frames.
//!
//! A pan/zoom frame shows scaled content inside a scrollable element. This
//! crate owns the headless half of that model:
//!
//! - [`ViewportStore`]: scale, scale bounds and offset, with clamping,
//!   idempotent writes, origin-preserving [`zoom`](ViewportStore::zoom),
//!   [`fit`](ViewportStore::fit) and [`resize`](ViewportStore::resize)
//!   reconciliation.
//! - [`AmbientResolver`]: folds the CSS transforms and zoom of the element's
//!   ancestors into one [`AmbientTransform`], recomputed only when the
//!   serialized chain changes.
//! - [`parse_transform`]: a small parser for CSS `transform` values.
//! - [`ZoomOrigin`]: pixel or percentage origins resolved against the
//!   element box.
//!
//! The element itself (scroll position, container layout, content transform,
//! frame callbacks) is reached through the [`FrameHost`] trait, so the store
//! runs unchanged against a DOM binding, a native toolkit, or a test double.
//!
//! ## Offset space
//!
//! The offset is the position of the content's top-left corner relative to
//! the viewport's top-left, measured after the ancestor transforms. Under an
//! ancestor `scale(2)` an offset of `(20, 0)` is `10` local pixels of margin.
//!
//! ```rust
//! use gesture_frame_view::{AmbientResolver, AncestorStyle};
//! use kurbo::Vec2;
//!
//! let mut resolver = AmbientResolver::new();
//! let chain = [AncestorStyle::new("none"), AncestorStyle::new("scale(2)")];
//! let ambient = resolver.resolve(chain).unwrap();
//! assert_eq!(ambient.to_local(Vec2::new(20.0, 0.0)), Vec2::new(10.0, 0.0));
//!
//! // Same chain again: the memoized transform is reused.
//! resolver.resolve(chain).unwrap();
//! assert_eq!(resolver.recomputations(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod ambient;
mod css;
mod fit;
mod geometry;
mod host;
mod origin;
mod resize;
mod state;
mod store;

#[cfg(test)]
mod test_host;

pub use ambient::{AmbientResolver, AmbientTransform, AncestorStyle};
pub use css::{TransformParseError, TransformParseErrorKind, parse_transform};
pub use fit::FitAxes;
pub use geometry::{average_by, clamp, clamp_zero, distance, linear_part, transform_vec};
pub use host::{ContainerLayout, FrameHost};
pub use origin::{Length, OriginParseError, ZoomOrigin};
pub use resize::{AnchorX, AnchorY, ResizePolicy, ResizeScale, UnknownKeyword};
pub use state::{StateChanges, ViewportState};
pub use store::ViewportStore;

pub use gesture_frame_timing::{FrameId, FrameScheduler};
