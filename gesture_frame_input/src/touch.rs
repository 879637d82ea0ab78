// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-touch pan and pinch.
//!
//! One contact pans; two or more pan by the centroid and zoom by the spread of
//! the first two. Every `touchstart` / `touchend` rebaselines, so a finger
//! landing or lifting never makes the content jump.

use gesture_frame_timing::{FrameId, FrameScheduler, Throttle};
use kurbo::Point;
use smallvec::SmallVec;

use crate::step::{GesturePoint, PanZoomStep, ZoomStep};

/// Touch samples gathered between two frames.
#[derive(Clone, Debug, Default)]
pub struct TouchPinch {
    previous: GesturePoint,
    samples: SmallVec<[GesturePoint; 8]>,
    throttle: Throttle,
}

impl TouchPinch {
    /// Creates an idle interpreter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles `touchstart` and `touchend`: drops pending samples and
    /// rebaselines from the contacts still down.
    pub fn start_end<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S, touches: &[Point]) {
        self.throttle.cancel(scheduler);
        self.samples.clear();
        if !touches.is_empty() {
            self.previous = GesturePoint::from_contacts(touches);
        }
        tracing::trace!(contacts = touches.len(), "touch baseline reset");
    }

    /// Handles `touchmove`: records a sample and requests a frame.
    pub fn update<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S, touches: &[Point]) {
        if touches.is_empty() {
            return;
        }
        self.samples.push(GesturePoint::from_contacts(touches));
        self.throttle.request(scheduler);
    }

    /// Withdraws the pending frame and drops samples (`touchcancel`, detach).
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.throttle.cancel(scheduler);
        self.samples.clear();
    }

    /// Flushes the samples if `id` is this interpreter's frame.
    ///
    /// The samples are averaged. The zoom ratio is the averaged spread over
    /// the baseline spread, about the averaged centroid, and only applies when
    /// both spreads are non-zero. The pan is the centroid's motion.
    pub fn fire(&mut self, id: FrameId) -> Option<PanZoomStep> {
        if !self.throttle.fire(id) || self.samples.is_empty() {
            return None;
        }
        let mut current = GesturePoint::average(&self.samples);
        self.samples.clear();
        if self.previous.spread == 0.0 {
            current.spread = 0.0;
        }
        let zoom = (current.spread != 0.0).then(|| ZoomStep {
            ratio: current.spread / self.previous.spread,
            origin: current.centroid,
        });
        let step = PanZoomStep {
            pan: current.centroid - self.previous.centroid,
            zoom,
        };
        self.previous = current;
        tracing::trace!(?step, "touch flushed");
        Some(step)
    }

    /// Baseline the next flush is measured against.
    #[must_use]
    pub fn baseline(&self) -> GesturePoint {
        self.previous
    }

    /// Pending frame, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.throttle.pending()
    }
}
