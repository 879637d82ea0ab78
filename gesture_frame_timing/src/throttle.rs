// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{FrameId, FrameScheduler};

/// Collapses repeated frame requests into a single pending frame.
///
/// ## Usage
///
/// 1) Call [`Throttle::request`] whenever there is new work; only the first
///    call per frame reaches the scheduler.
/// 2) When the host runs a frame, call [`Throttle::fire`] with its id. It
///    returns `true` for the frame this throttle is waiting on and clears it,
///    so the next request schedules a fresh frame.
/// 3) Call [`Throttle::cancel`] to withdraw a pending frame, for example when
///    a gesture ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Throttle {
    pending: Option<FrameId>,
}

impl Throttle {
    /// Creates a throttle with no pending frame.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Requests a frame, reusing the pending one if there is any.
    pub fn request<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> FrameId {
        *self.pending.get_or_insert_with(|| scheduler.request_frame())
    }

    /// Withdraws the pending frame.
    ///
    /// Returns `true` if a frame was pending.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        match self.pending.take() {
            Some(id) => {
                scheduler.cancel_frame(id);
                true
            }
            None => false,
        }
    }

    /// Claims `id` if it is the frame this throttle is waiting on.
    pub fn fire(&mut self, id: FrameId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Returns the pending frame, if any.
    #[must_use]
    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    /// Returns `true` while a frame is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
