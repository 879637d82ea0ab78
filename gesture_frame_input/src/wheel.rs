// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel zoom: modifier + wheel (and trackpad pinch) zooms about the cursor.

use gesture_frame_timing::{FrameId, FrameScheduler, Throttle};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`
use kurbo::Point;

use crate::event::{Modifiers, WheelInput};
use crate::step::ZoomStep;

/// Accumulates wheel deltas into one zoom per frame.
///
/// Each event multiplies the pending ratio by `base ^ delta_y`, so a
/// negative delta (wheel up, pinch out) zooms in.
#[derive(Clone, Debug)]
pub struct WheelZoom {
    modifiers: Modifiers,
    base: f64,
    ratio: f64,
    position: Point,
    throttle: Throttle,
}

impl Default for WheelZoom {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelZoom {
    /// Default per-pixel base.
    pub const DEFAULT_BASE: f64 = 0.98;

    /// Creates an interpreter that zooms while `Ctrl` is held.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modifiers: Modifiers::CTRL,
            base: Self::DEFAULT_BASE,
            ratio: 1.0,
            position: Point::ZERO,
            throttle: Throttle::new(),
        }
    }

    /// Modifiers that must be held for a wheel event to zoom.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Sets the required modifiers; empty means every wheel event zooms.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Per-pixel zoom base.
    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Sets the per-pixel base. Values outside `(0, 1)` are ignored.
    pub fn set_base(&mut self, base: f64) {
        if base > 0.0 && base < 1.0 {
            self.base = base;
        } else {
            tracing::warn!(base, "ignoring wheel base outside (0, 1)");
        }
    }

    /// Ratio accumulated since the last flush.
    #[must_use]
    pub fn pending_ratio(&self) -> f64 {
        self.ratio
    }

    /// Pending frame, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.throttle.pending()
    }

    /// Feeds one wheel event.
    ///
    /// Returns `true` if the event was consumed, in which case the host should
    /// prevent its default scrolling.
    pub fn wheel<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        input: &WheelInput,
    ) -> bool {
        if !input.modifiers.contains(self.modifiers) || !input.delta.y.is_finite() {
            return false;
        }
        self.ratio *= self.base.powf(input.delta.y);
        self.position = input.position;
        self.throttle.request(scheduler);
        true
    }

    /// Flushes the accumulated zoom if `id` is this interpreter's frame.
    pub fn fire(&mut self, id: FrameId) -> Option<ZoomStep> {
        if !self.throttle.fire(id) {
            return None;
        }
        let step = ZoomStep {
            ratio: core::mem::replace(&mut self.ratio, 1.0),
            origin: self.position,
        };
        tracing::trace!(ratio = step.ratio, "wheel zoom flushed");
        Some(step)
    }

    /// Drops the pending zoom.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.throttle.cancel(scheduler);
        self.ratio = 1.0;
    }
}
