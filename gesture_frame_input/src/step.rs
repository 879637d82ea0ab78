// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gesture_frame_view::{average_by, distance};
use kurbo::{Point, Vec2};

/// Centroid and spread of a set of contacts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GesturePoint {
    /// Mean client position of the contacts.
    pub centroid: Point,
    /// Distance between the first two contacts, `0.0` with fewer than two.
    pub spread: f64,
}

impl GesturePoint {
    /// Computes centroid and spread of `contacts`.
    ///
    /// An empty slice yields the origin with no spread.
    #[must_use]
    pub fn from_contacts(contacts: &[Point]) -> Self {
        let spread = match contacts {
            [a, b, ..] => distance(*a, *b),
            _ => 0.0,
        };
        Self {
            centroid: Point::new(
                average_by(contacts, |p| p.x),
                average_by(contacts, |p| p.y),
            ),
            spread,
        }
    }

    /// Averages several samples component-wise.
    #[must_use]
    pub fn average(samples: &[Self]) -> Self {
        Self {
            centroid: Point::new(
                average_by(samples, |s| s.centroid.x),
                average_by(samples, |s| s.centroid.y),
            ),
            spread: average_by(samples, |s| s.spread),
        }
    }
}

/// Zoom part of a [`PanZoomStep`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomStep {
    /// Scale multiplier.
    pub ratio: f64,
    /// Raw client point to keep fixed.
    pub origin: Point,
}

/// Viewport change produced by one flushed frame of a gesture.
///
/// Consumers apply `zoom` first, then `pan`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanZoomStep {
    /// Offset change in raw client pixels.
    pub pan: Vec2,
    /// Optional zoom about a client point.
    pub zoom: Option<ZoomStep>,
}

impl PanZoomStep {
    /// A pure pan.
    #[must_use]
    pub fn pan(pan: Vec2) -> Self {
        Self { pan, zoom: None }
    }

    /// A pure zoom.
    #[must_use]
    pub fn zoom(ratio: f64, origin: Point) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: Some(ZoomStep { ratio, origin }),
        }
    }

    /// Returns `true` if applying the step cannot change the viewport.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pan == Vec2::ZERO && self.zoom.is_none_or(|z| z.ratio == 1.0)
    }
}
