// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer pinch for platforms that report touches as pointer events.
//!
//! Up to two pointers are tracked. With one pointer down the gesture pans;
//! with two it pans by the centroid and zooms by the distance between them,
//! exactly like [`TouchPinch`](crate::TouchPinch).

use gesture_frame_timing::{FrameId, FrameScheduler, Throttle};
use kurbo::Point;
use smallvec::SmallVec;

use crate::step::{GesturePoint, PanZoomStep, ZoomStep};

/// One tracked pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRecord {
    /// Pointer identifier.
    pub id: u64,
    /// Button that started the pointer.
    pub button: u8,
    /// Latest client position.
    pub position: Point,
    /// Client position at the last flush or rebaseline.
    pub previous: Point,
}

/// Maximum number of pointers tracked at once.
pub const MAX_POINTERS: usize = 2;

/// Pointer-driven pan and pinch, one step per frame.
#[derive(Clone, Debug, Default)]
pub struct PointerPinch {
    records: SmallVec<[PointerRecord; MAX_POINTERS]>,
    throttle: Throttle,
}

impl PointerPinch {
    /// Creates an interpreter with no pointers down.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracked pointers, in the order they went down.
    #[must_use]
    pub fn records(&self) -> &[PointerRecord] {
        &self.records
    }

    /// Returns `true` if `id` is tracked.
    #[must_use]
    pub fn is_tracking(&self, id: u64) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Starts tracking a pointer.
    ///
    /// Returns `false` if it is already tracked or two pointers are down.
    /// Otherwise the pending frame is dropped and every pointer rebaselined.
    pub fn down<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        id: u64,
        button: u8,
        position: Point,
    ) -> bool {
        if self.records.len() >= MAX_POINTERS || self.is_tracking(id) {
            return false;
        }
        self.records.push(PointerRecord {
            id,
            button,
            position,
            previous: position,
        });
        self.rebaseline(scheduler);
        true
    }

    /// Records a move of a tracked pointer and requests a frame.
    pub fn update<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        id: u64,
        position: Point,
    ) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        record.position = position;
        self.throttle.request(scheduler);
        true
    }

    /// Stops tracking a pointer (`pointerup` / `pointercancel`).
    ///
    /// The remaining pointer, if any, is rebaselined.
    pub fn up<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S, id: u64) -> bool {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        self.records.remove(index);
        self.rebaseline(scheduler);
        true
    }

    /// Forgets every pointer and withdraws the pending frame.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.throttle.cancel(scheduler);
        self.records.clear();
    }

    /// Flushes the motion since the last flush if `id` is this interpreter's
    /// frame.
    pub fn fire(&mut self, id: FrameId) -> Option<PanZoomStep> {
        if !self.throttle.fire(id) || self.records.is_empty() {
            return None;
        }
        let before: SmallVec<[Point; MAX_POINTERS]> =
            self.records.iter().map(|r| r.previous).collect();
        let after: SmallVec<[Point; MAX_POINTERS]> =
            self.records.iter().map(|r| r.position).collect();
        let before = GesturePoint::from_contacts(&before);
        let after = GesturePoint::from_contacts(&after);
        for record in &mut self.records {
            record.previous = record.position;
        }

        let zoom = (before.spread != 0.0 && after.spread != 0.0).then(|| ZoomStep {
            ratio: after.spread / before.spread,
            origin: after.centroid,
        });
        let step = PanZoomStep {
            pan: after.centroid - before.centroid,
            zoom,
        };
        tracing::trace!(?step, pointers = self.records.len(), "pointer pinch flushed");
        Some(step)
    }

    /// Pending frame, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.throttle.pending()
    }

    fn rebaseline<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.throttle.cancel(scheduler);
        for record in &mut self.records {
            record.previous = record.position;
        }
    }
}
