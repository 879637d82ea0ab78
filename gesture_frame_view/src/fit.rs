// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting content into the viewport.

use kurbo::{Size, Vec2};

use crate::host::FrameHost;
use crate::store::ViewportStore;

/// Which content dimensions a fit must make visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitAxes {
    /// Fit both dimensions; the smaller of the two scales wins.
    #[default]
    Both,
    /// Fill the viewport width.
    Horizontal,
    /// Fill the viewport height.
    Vertical,
}

impl ViewportStore {
    /// Scales the content so it is fully visible inside the viewport minus
    /// `margin` on each side, and centers it.
    ///
    /// Returns `false` without touching state when there is no content, the
    /// content has an empty dimension, or the margins leave no room.
    pub fn fit<H: FrameHost>(&mut self, host: &mut H, margin: Vec2) -> bool {
        self.fit_axes(host, FitAxes::Both, margin)
    }

    /// Scales the content to fill the viewport width minus `margin` on each
    /// side, and moves it to the left margin. The vertical offset is kept.
    pub fn fit_x<H: FrameHost>(&mut self, host: &mut H, margin: f64) -> bool {
        self.fit_axes(host, FitAxes::Horizontal, Vec2::new(margin, 0.0))
    }

    /// Scales the content to fill the viewport height minus `margin` on each
    /// side, and moves it to the top margin. The horizontal offset is kept.
    pub fn fit_y<H: FrameHost>(&mut self, host: &mut H, margin: f64) -> bool {
        self.fit_axes(host, FitAxes::Vertical, Vec2::new(0.0, margin))
    }

    /// Shared implementation of [`fit`](Self::fit), [`fit_x`](Self::fit_x)
    /// and [`fit_y`](Self::fit_y).
    pub fn fit_axes<H: FrameHost>(&mut self, host: &mut H, axes: FitAxes, margin: Vec2) -> bool {
        let Some(content) = host.content_size() else {
            tracing::debug!("fit without content");
            return false;
        };
        if !(content.width > 0.0 && content.height > 0.0) {
            tracing::debug!(?content, "fit with empty content");
            return false;
        }
        let client = host.client_size();
        let available = Size::new(
            client.width - 2.0 * margin.x,
            client.height - 2.0 * margin.y,
        );
        let scale_x = available.width / content.width;
        let scale_y = available.height / content.height;
        let target = match axes {
            FitAxes::Both => scale_x.min(scale_y),
            FitAxes::Horizontal => scale_x,
            FitAxes::Vertical => scale_y,
        };
        if !(target.is_finite() && target > 0.0) {
            tracing::debug!(?available, "no room to fit content");
            return false;
        }

        self.set_scale(host, target);
        let scale = self.scale();
        // Centering puts the constrained axis exactly at its margin.
        let local = Vec2::new(
            (client.width - content.width * scale) / 2.0,
            (client.height - content.height * scale) / 2.0,
        );
        let centered = self.ambient(host).to_viewport(local);
        let current = self.offset();
        let offset = match axes {
            FitAxes::Both => centered,
            FitAxes::Horizontal => Vec2::new(centered.x, current.y),
            FitAxes::Vertical => Vec2::new(current.x, centered.y),
        };
        self.set_offset(host, offset);
        tracing::debug!(?axes, scale, ?offset, "fitted content");
        true
    }
}
