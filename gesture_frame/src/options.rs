// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture configuration.

use gesture_frame_input::{Modifiers, PRIMARY_BUTTON, WheelZoom};
use gesture_frame_view::ResizePolicy;
use kurbo::Vec2;

/// Where the host listens for input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EventSource {
    /// The frame element itself.
    #[default]
    Element,
    /// The window, so gestures anywhere on the page drive the frame.
    Window,
}

impl EventSource {
    /// Reads the `event-source` attribute: `window` selects the window, any
    /// other value or absence the element.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim() == "window" => Self::Window,
            _ => Self::Element,
        }
    }

    /// Attribute value reflecting this source.
    #[must_use]
    pub fn to_attribute(self) -> Option<&'static str> {
        match self {
            Self::Element => None,
            Self::Window => Some("window"),
        }
    }
}

/// Which gestures a frame reacts to, and how.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureOptions {
    /// Horizontal panning by drag or touch.
    pub pan_x: bool,
    /// Vertical panning by drag or touch.
    pub pan_y: bool,
    /// Wheel zoom and multi-contact pinch.
    pub pinch_zoom: bool,
    /// Button that drags: 0 primary, 1 auxiliary, 2 secondary.
    pub pan_button: u8,
    /// Modifiers that turn wheel events into zoom.
    pub wheel_modifiers: Modifiers,
    /// Per-pixel wheel zoom base, in `(0, 1)`.
    pub wheel_base: f64,
    /// Where the host listens for input.
    pub event_source: EventSource,
    /// The host delivers touch events; touch-type pointer events are ignored.
    pub touch_events: bool,
    /// Route pointers through two-pointer pinch instead of single-pointer drag.
    pub pointer_pinch: bool,
    /// Offset and scale reconciliation on resize.
    pub resize: ResizePolicy,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            pan_x: false,
            pan_y: false,
            pinch_zoom: false,
            pan_button: PRIMARY_BUTTON,
            wheel_modifiers: Modifiers::CTRL,
            wheel_base: WheelZoom::DEFAULT_BASE,
            event_source: EventSource::Element,
            touch_events: false,
            pointer_pinch: false,
            resize: ResizePolicy::default(),
        }
    }
}

impl GestureOptions {
    /// Options with panning on both axes and pinch zoom enabled.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            pan_x: true,
            pan_y: true,
            pinch_zoom: true,
            ..Self::default()
        }
    }

    /// Returns `true` if either pan axis is enabled.
    #[must_use]
    pub fn pans(&self) -> bool {
        self.pan_x || self.pan_y
    }

    /// Zeroes the components of `delta` on disabled pan axes.
    #[must_use]
    pub fn mask_pan(&self, delta: Vec2) -> Vec2 {
        Vec2::new(
            if self.pan_x { delta.x } else { 0.0 },
            if self.pan_y { delta.y } else { 0.0 },
        )
    }
}

/// Margins for [`GestureFrame::fit`](crate::GestureFrame::fit) and friends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FitOptions {
    /// Space kept free on the left and right.
    pub margin_x: f64,
    /// Space kept free on the top and bottom.
    pub margin_y: f64,
}

impl FitOptions {
    /// The same margin on every side.
    #[must_use]
    pub fn uniform(margin: f64) -> Self {
        Self {
            margin_x: margin,
            margin_y: margin,
        }
    }

    pub(crate) fn margin(self) -> Vec2 {
        Vec2::new(self.margin_x, self.margin_y)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{EventSource, GestureOptions};

    #[test]
    fn defaults_are_inert() {
        let options = GestureOptions::default();
        assert!(!options.pans());
        assert!(!options.pinch_zoom);
        assert_eq!(options.wheel_base, 0.98);
    }

    #[test]
    fn pan_mask_follows_axes() {
        let options = GestureOptions {
            pan_y: true,
            ..GestureOptions::default()
        };
        assert_eq!(options.mask_pan(Vec2::new(3.0, 4.0)), Vec2::new(0.0, 4.0));
    }

    #[test]
    fn event_source_attribute() {
        assert_eq!(EventSource::from_attribute(Some("window")), EventSource::Window);
        assert_eq!(EventSource::from_attribute(Some("")), EventSource::Element);
        assert_eq!(EventSource::from_attribute(None), EventSource::Element);
        assert_eq!(EventSource::Window.to_attribute(), Some("window"));
    }
}
