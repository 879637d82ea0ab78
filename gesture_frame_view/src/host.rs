// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gesture_frame_timing::FrameScheduler;
use kurbo::{Point, Rect, Size, Vec2};

use crate::ambient::AncestorStyle;

/// Layout values written to the frame's inner scroll container.
///
/// `margin` shifts the content right/down while the offset is positive.
/// `extent` enlarges the scrollable area while the offset is negative, so the
/// native scroll position can reach past the nominal content bounds. An
/// `extent` component of `0.0` means "auto".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerLayout {
    /// Left/top margin in element-local pixels.
    pub margin: Vec2,
    /// Explicit width/height in element-local pixels, or `0.0` for auto.
    pub extent: Size,
}

/// Everything the viewport store reads from, or writes to, its host element.
///
/// Client-space values (`bounding_client_rect`, `top_left_client`) are raw:
/// the store folds the ancestor CSS zoom out of them itself.
pub trait FrameHost: FrameScheduler {
    /// Computed styles of the element and each ancestor, element first.
    fn ancestor_styles(&self) -> impl Iterator<Item = AncestorStyle<'_>> + '_;

    /// Size of the element's scrollport (`clientWidth` / `clientHeight`).
    fn client_size(&self) -> Size;

    /// The element's bounding client rectangle.
    fn bounding_client_rect(&self) -> Rect;

    /// Client position of the marker at the content's top-left corner.
    fn top_left_client(&self) -> Point;

    /// Unscaled layout size of the content, or `None` without content.
    fn content_size(&self) -> Option<Size>;

    /// Native scroll position (`scrollLeft` / `scrollTop`).
    fn scroll_position(&self) -> Vec2;

    /// Native scroll-to primitive.
    fn scroll_to(&mut self, position: Point);

    /// Applies `scale(..)` to the content.
    fn set_content_scale(&mut self, scale: f64);

    /// Applies margin and extent to the inner container.
    fn set_container_layout(&mut self, layout: ContainerLayout);
}
