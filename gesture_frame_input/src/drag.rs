// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag pan: pointer motion pans the content, one offset change per frame.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragPan::start`] on `pointerdown`.
//! 2) Feed every `pointermove` to [`DragPan::update`]; only the latest position
//!    is kept and one frame is requested.
//! 3) When the frame runs, [`DragPan::fire`] yields the delta since the last
//!    flush.
//! 4) End with [`DragPan::end`] on `pointerup` / `pointercancel`; a pending
//!    frame is withdrawn so no stale delta lands after release.
//!
//! ## Minimal example
//!
//! ```
//! use gesture_frame_input::DragPan;
//! use gesture_frame_timing::FrameQueue;
//! use kurbo::{Point, Vec2};
//!
//! let mut frames = FrameQueue::new();
//! let mut drag = DragPan::default();
//!
//! drag.start(1, Point::new(10.0, 20.0));
//! drag.update(&mut frames, 1, Point::new(12.0, 21.0));
//! drag.update(&mut frames, 1, Point::new(15.0, 25.0));
//!
//! let frame = frames.take_due()[0];
//! assert_eq!(drag.fire(frame), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.pointer(), Some(1));
//! ```

use gesture_frame_timing::{FrameId, FrameScheduler, Throttle};
use kurbo::{Point, Vec2};

/// Tracks one dragging pointer and coalesces its motion per frame.
#[derive(Debug, Clone, Default)]
pub struct DragPan {
    pointer: Option<u64>,
    /// Position already applied by the last flush.
    previous: Option<Point>,
    /// Most recent position reported by a move.
    latest: Option<Point>,
    throttle: Throttle,
}

impl DragPan {
    /// Starts tracking pointer `pointer` from `pos`.
    ///
    /// A drag already in progress is replaced.
    pub fn start(&mut self, pointer: u64, pos: Point) {
        self.pointer = Some(pointer);
        self.previous = Some(pos);
        self.latest = Some(pos);
    }

    /// Records a move of `pointer` and requests a frame.
    ///
    /// Returns `false` when no drag is active or the move belongs to another
    /// pointer.
    pub fn update<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        pointer: u64,
        pos: Point,
    ) -> bool {
        if self.pointer != Some(pointer) {
            return false;
        }
        self.latest = Some(pos);
        self.throttle.request(scheduler);
        true
    }

    /// Flushes the motion since the last flush if `id` is this drag's frame.
    pub fn fire(&mut self, id: FrameId) -> Option<Vec2> {
        if !self.throttle.fire(id) {
            return None;
        }
        let (previous, latest) = (self.previous?, self.latest?);
        self.previous = Some(latest);
        tracing::trace!(dx = latest.x - previous.x, dy = latest.y - previous.y, "drag flushed");
        Some(latest - previous)
    }

    /// Ends the drag, withdrawing any pending frame.
    pub fn end<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.throttle.cancel(scheduler);
        self.pointer = None;
        self.previous = None;
        self.latest = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    /// The dragging pointer, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<u64> {
        self.pointer
    }

    /// Pending frame, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.throttle.pending()
    }
}

#[cfg(test)]
mod tests {
    use gesture_frame_timing::FrameQueue;

    use super::*;

    fn flush(frames: &mut FrameQueue, drag: &mut DragPan) -> Option<Vec2> {
        let due = frames.take_due();
        assert!(due.len() <= 1);
        due.first().and_then(|id| drag.fire(*id))
    }

    #[test]
    fn new_drag_is_idle() {
        let drag = DragPan::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.pointer(), None);
        assert_eq!(drag.pending_frame(), None);
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut frames = FrameQueue::new();
        let mut drag = DragPan::default();

        assert!(!drag.update(&mut frames, 1, Point::new(15.0, 25.0)));
        assert!(frames.is_empty());
    }

    #[test]
    fn other_pointers_are_ignored() {
        let mut frames = FrameQueue::new();
        let mut drag = DragPan::default();
        drag.start(1, Point::ZERO);

        assert!(!drag.update(&mut frames, 2, Point::new(5.0, 5.0)));
        assert!(frames.is_empty());
    }

    #[test]
    fn ten_moves_in_one_frame_flush_once() {
        let mut frames = FrameQueue::new();
        let mut drag = DragPan::default();
        drag.start(7, Point::new(100.0, 100.0));

        for i in 1..=10 {
            let i = f64::from(i);
            assert!(drag.update(&mut frames, 7, Point::new(100.0 + i, 100.0 - 2.0 * i)));
        }
        assert_eq!(frames.len(), 1);
        assert_eq!(flush(&mut frames, &mut drag), Some(Vec2::new(10.0, -20.0)));
        assert_eq!(flush(&mut frames, &mut drag), None);
    }

    #[test]
    fn consecutive_frames_yield_incremental_deltas() {
        let mut frames = FrameQueue::new();
        let mut drag = DragPan::default();
        drag.start(1, Point::new(0.0, 0.0));

        drag.update(&mut frames, 1, Point::new(5.0, 3.0));
        assert_eq!(flush(&mut frames, &mut drag), Some(Vec2::new(5.0, 3.0)));

        drag.update(&mut frames, 1, Point::new(8.0, 7.0));
        assert_eq!(flush(&mut frames, &mut drag), Some(Vec2::new(3.0, 4.0)));

        // A frame without motion since the last flush yields a zero delta.
        drag.update(&mut frames, 1, Point::new(8.0, 7.0));
        assert_eq!(flush(&mut frames, &mut drag), Some(Vec2::ZERO));
    }

    #[test]
    fn stale_frame_ids_are_not_claimed() {
        let mut frames = FrameQueue::new();
        let mut drag = DragPan::default();
        drag.start(1, Point::ZERO);
        drag.update(&mut frames, 1, Point::new(1.0, 1.0));
        let id = frames.take_due()[0];

        assert_eq!(drag.fire(FrameId(id.0 + 100)), None);
        assert_eq!(drag.fire(id), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn end_withdraws_pending_frame() {
        let mut frames = FrameQueue::new();
        let mut drag = DragPan::default();
        drag.start(1, Point::new(10.0, 20.0));
        drag.update(&mut frames, 1, Point::new(15.0, 25.0));

        drag.end(&mut frames);

        assert!(frames.is_empty());
        assert!(!drag.is_dragging());
        assert!(drag.pending_frame().is_none());
    }

    #[test]
    fn end_on_fresh_state_is_safe() {
        let mut frames = FrameQueue::new();
        let mut drag = DragPan::default();

        drag.end(&mut frames);

        assert!(!drag.is_dragging());
        assert_eq!(frames.requested_count(), 0);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut frames = FrameQueue::new();
        let mut drag = DragPan::default();
        drag.start(1, Point::new(0.0, 0.0));
        drag.update(&mut frames, 1, Point::new(10.0, 10.0));

        drag.start(2, Point::new(50.0, 60.0));
        drag.update(&mut frames, 2, Point::new(55.0, 65.0));

        assert_eq!(drag.pointer(), Some(2));
        assert_eq!(flush(&mut frames, &mut drag), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn fractional_coordinates() {
        let mut frames = FrameQueue::new();
        let mut drag = DragPan::default();
        drag.start(1, Point::new(1.5, 2.7));
        drag.update(&mut frames, 1, Point::new(3.2, 4.1));

        let delta = flush(&mut frames, &mut drag).unwrap();
        assert!((delta.x - 1.7).abs() < f64::EPSILON * 10.0);
        assert!((delta.y - 1.4).abs() < f64::EPSILON * 10.0);
    }
}
