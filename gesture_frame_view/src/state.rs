// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use kurbo::Vec2;

/// Snapshot of a viewport's observable state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Current content scale.
    pub scale: f64,
    /// Lower bound for `scale`; always positive.
    pub min_scale: f64,
    /// Upper bound for `scale`; always positive.
    pub max_scale: f64,
    /// Content top-left relative to the viewport top-left, in offset space.
    pub offset: Vec2,
}

impl ViewportState {
    /// Default lower scale bound.
    pub const DEFAULT_MIN_SCALE: f64 = 0.1;
    /// Default upper scale bound.
    pub const DEFAULT_MAX_SCALE: f64 = 100.0;
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
            offset: Vec2::ZERO,
        }
    }
}

bitflags! {
    /// Observable fields that changed since the last drain.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StateChanges: u8 {
        /// `scale` changed.
        const SCALE = 1 << 0;
        /// `min_scale` changed.
        const MIN_SCALE = 1 << 1;
        /// `max_scale` changed.
        const MAX_SCALE = 1 << 2;
        /// `offset` changed.
        const OFFSET = 1 << 3;
    }
}
