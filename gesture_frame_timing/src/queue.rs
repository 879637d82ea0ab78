// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{FrameId, FrameScheduler};

/// Headless [`FrameScheduler`] backed by a FIFO of requested frames.
///
/// Like `requestAnimationFrame`, callbacks requested while a frame is running
/// belong to the next frame: [`FrameQueue::take_due`] drains only the ids that
/// were queued when it was called.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    queued: Vec<FrameId>,
}

impl FrameQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frame callbacks waiting to run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queued.len()
    }

    /// Returns `true` if no frame callback is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    /// Returns `true` if `id` is waiting to run.
    #[must_use]
    pub fn contains(&self, id: FrameId) -> bool {
        self.queued.contains(&id)
    }

    /// Total number of frames ever requested from this queue.
    #[must_use]
    pub fn requested_count(&self) -> u64 {
        self.next_id
    }

    /// Removes and returns every queued frame, in request order.
    pub fn take_due(&mut self) -> Vec<FrameId> {
        core::mem::take(&mut self.queued)
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.queued.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.queued.retain(|queued| *queued != id);
    }
}
