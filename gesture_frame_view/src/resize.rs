// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Size, Vec2};

use crate::host::FrameHost;
use crate::store::ViewportStore;

/// Which horizontal edge of the content stays put when the element resizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnchorX {
    /// Keep the content's position relative to the left edge.
    #[default]
    Left,
    /// Keep the content's position relative to the horizontal center.
    Center,
    /// Keep the content's position relative to the right edge.
    Right,
}

/// Which vertical edge of the content stays put when the element resizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnchorY {
    /// Keep the content's position relative to the top edge.
    #[default]
    Top,
    /// Keep the content's position relative to the vertical center.
    Center,
    /// Keep the content's position relative to the bottom edge.
    Bottom,
}

/// How the scale follows a resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResizeScale {
    /// Leave the scale alone.
    #[default]
    Keep,
    /// Scale by the width ratio.
    Width,
    /// Scale by the height ratio.
    Height,
    /// Scale by the smaller of the width and height ratios.
    Contain,
}

/// Resize reconciliation settings, consulted by [`ViewportStore::resize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ResizePolicy {
    /// Horizontal anchor.
    pub anchor_x: AnchorX,
    /// Vertical anchor.
    pub anchor_y: AnchorY,
    /// Scale behavior.
    pub scale: ResizeScale,
}

impl AnchorX {
    fn share(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }
}

impl AnchorY {
    fn share(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// Error returned for an unknown anchor or resize-scale keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownKeyword;

impl fmt::Display for UnknownKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown keyword")
    }
}

impl core::error::Error for UnknownKeyword {}

impl FromStr for AnchorX {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(UnknownKeyword),
        }
    }
}

impl FromStr for AnchorY {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => Err(UnknownKeyword),
        }
    }
}

impl FromStr for ResizeScale {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" | "keep" => Ok(Self::Keep),
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            "contain" => Ok(Self::Contain),
            _ => Err(UnknownKeyword),
        }
    }
}

impl ViewportStore {
    /// Reconciles offset and scale after the element's client box changed
    /// from `previous` to `current`.
    ///
    /// The offset moves by the anchored share of the size change, so content
    /// pinned to the right edge stays pinned to it. Scaling policies then zoom
    /// by the size ratio about the anchor point.
    pub fn resize<H: FrameHost>(
        &mut self,
        host: &mut H,
        previous: Size,
        current: Size,
        policy: ResizePolicy,
    ) -> bool {
        if previous == current || !(previous.width > 0.0 && previous.height > 0.0) {
            return false;
        }
        let share = Vec2::new(policy.anchor_x.share(), policy.anchor_y.share());
        let delta = Vec2::new(
            (current.width - previous.width) * share.x,
            (current.height - previous.height) * share.y,
        );
        let mut changed = false;
        if delta != Vec2::ZERO {
            let shift = self.ambient(host).to_viewport(delta);
            changed |= self.set_offset(host, self.offset() + shift);
        }

        let width_ratio = current.width / previous.width;
        let height_ratio = current.height / previous.height;
        let ratio = match policy.scale {
            ResizeScale::Keep => None,
            ResizeScale::Width => Some(width_ratio),
            ResizeScale::Height => Some(height_ratio),
            ResizeScale::Contain => Some(width_ratio.min(height_ratio)),
        };
        if let Some(ratio) = ratio {
            let rect = host.bounding_client_rect();
            let anchor = Point::new(
                rect.x0 + rect.width() * share.x,
                rect.y0 + rect.height() * share.y,
            );
            changed |= self.zoom(host, ratio, anchor);
        }
        tracing::debug!(?previous, ?current, changed, "resize reconciled");
        changed
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::{AnchorX, AnchorY, ResizePolicy, ResizeScale};
    use crate::store::ViewportStore;
    use crate::test_host::TestHost;

    fn resize_host(host: &mut TestHost, size: Size) {
        host.client = size;
        host.element = Rect::from_origin_size(host.element.origin(), size);
    }

    #[test]
    fn left_top_anchor_keeps_offset() {
        let mut host = TestHost::new(Size::new(200.0, 150.0));
        let mut store = ViewportStore::new();
        store.set_offset(&mut host, Vec2::new(10.0, 10.0));
        let previous = host.client;
        let current = Size::new(300.0, 200.0);
        resize_host(&mut host, current);
        assert!(!store.resize(&mut host, previous, current, ResizePolicy::default()));
        assert_eq!(store.offset(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn right_and_center_anchors_follow_the_edge() {
        let mut host = TestHost::new(Size::new(200.0, 150.0));
        let mut store = ViewportStore::new();
        store.set_offset(&mut host, Vec2::new(10.0, 10.0));
        let previous = host.client;
        let current = Size::new(300.0, 170.0);
        resize_host(&mut host, current);
        let policy = ResizePolicy {
            anchor_x: AnchorX::Right,
            anchor_y: AnchorY::Center,
            scale: ResizeScale::Keep,
        };
        assert!(store.resize(&mut host, previous, current, policy));
        assert_eq!(store.offset(), Vec2::new(110.0, 20.0));
        assert_eq!(store.scale(), 1.0);
    }

    #[test]
    fn width_scaling_zooms_about_anchor() {
        let mut host = TestHost::new(Size::new(200.0, 150.0));
        let mut store = ViewportStore::new();
        store.set_offset(&mut host, Vec2::new(20.0, 0.0));
        let previous = host.client;
        let current = Size::new(400.0, 150.0);
        resize_host(&mut host, current);
        let policy = ResizePolicy {
            scale: ResizeScale::Width,
            ..ResizePolicy::default()
        };
        assert!(store.resize(&mut host, previous, current, policy));
        assert_eq!(store.scale(), 2.0);
        // Anchored at the top-left corner of the element: offsets double.
        assert!((store.offset() - Vec2::new(40.0, 0.0)).hypot() < 1e-9);
    }

    #[test]
    fn contain_uses_smaller_ratio() {
        let mut host = TestHost::new(Size::new(200.0, 100.0));
        let mut store = ViewportStore::new();
        let previous = host.client;
        let current = Size::new(400.0, 150.0);
        resize_host(&mut host, current);
        let policy = ResizePolicy {
            scale: ResizeScale::Contain,
            ..ResizePolicy::default()
        };
        store.resize(&mut host, previous, current, policy);
        assert_eq!(store.scale(), 1.5);
    }

    #[test]
    fn degenerate_previous_size_is_ignored() {
        let mut host = TestHost::new(Size::new(200.0, 100.0));
        let mut store = ViewportStore::new();
        let policy = ResizePolicy {
            anchor_x: AnchorX::Right,
            anchor_y: AnchorY::Bottom,
            scale: ResizeScale::Contain,
        };
        let current = host.client;
        assert!(!store.resize(&mut host, Size::ZERO, current, policy));
        assert!(!store.resize(&mut host, current, current, policy));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn keywords_parse() {
        assert_eq!("right".parse::<AnchorX>(), Ok(AnchorX::Right));
        assert_eq!("bottom".parse::<AnchorY>(), Ok(AnchorY::Bottom));
        assert_eq!("none".parse::<ResizeScale>(), Ok(ResizeScale::Keep));
        assert!("top".parse::<AnchorX>().is_err());
    }
}
