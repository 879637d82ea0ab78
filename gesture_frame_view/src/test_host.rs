// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal layout model of a frame element for unit tests.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use gesture_frame_timing::{FrameId, FrameQueue, FrameScheduler};
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::ambient::AncestorStyle;
use crate::geometry::transform_vec;
use crate::host::{ContainerLayout, FrameHost};
use crate::store::ViewportStore;

/// The element sits at `element.origin()` in client space; its scroll
/// container is shifted by `margin - scroll` in local pixels, and local
/// pixels map to client pixels through `linear`, then through `zoom`.
#[derive(Debug)]
pub(crate) struct TestHost {
    pub(crate) frames: FrameQueue,
    pub(crate) element: Rect,
    pub(crate) client: Size,
    pub(crate) styles: Vec<(String, f64)>,
    pub(crate) linear: Affine,
    pub(crate) zoom: f64,
    pub(crate) content: Option<Size>,
    pub(crate) scroll: Vec2,
    pub(crate) layout: ContainerLayout,
    pub(crate) scale: f64,
    pub(crate) layout_writes: usize,
    pub(crate) scroll_writes: usize,
}

impl TestHost {
    pub(crate) fn new(client: Size) -> Self {
        Self {
            frames: FrameQueue::new(),
            element: Rect::from_origin_size((100.0, 50.0), client),
            client,
            styles: Vec::new(),
            linear: Affine::IDENTITY,
            zoom: 1.0,
            content: Some(Size::new(400.0, 300.0)),
            scroll: Vec2::ZERO,
            layout: ContainerLayout::default(),
            scale: 1.0,
            layout_writes: 0,
            scroll_writes: 0,
        }
    }

    pub(crate) fn with_ancestor_scale(mut self, s: f64) -> Self {
        self.styles
            .push((format!("matrix({s}, 0, 0, {s}, 0, 0)"), 1.0));
        self.linear = Affine::scale(s) * self.linear;
        let size = Size::new(self.element.width() * s, self.element.height() * s);
        self.element = Rect::from_origin_size(self.element.origin(), size);
        self
    }

    pub(crate) fn with_zoom(mut self, zoom: f64) -> Self {
        self.styles.push((String::from("none"), zoom));
        self.zoom *= zoom;
        self
    }

    pub(crate) fn with_content(mut self, content: Size) -> Self {
        self.content = Some(content);
        self
    }

    fn top_left_model(&self) -> Point {
        self.element.origin() + transform_vec(self.linear, self.layout.margin - self.scroll)
    }

    fn raw(&self, model: Point) -> Point {
        Point::new(model.x * self.zoom, model.y * self.zoom)
    }

    /// Unscaled content coordinate under a raw client point.
    pub(crate) fn client_to_content(&self, raw: Point) -> Point {
        let model = Point::new(raw.x / self.zoom, raw.y / self.zoom);
        let local = transform_vec(self.linear.inverse(), model - self.top_left_model());
        (local / self.scale).to_point()
    }

    /// Raw client point showing an unscaled content coordinate.
    pub(crate) fn content_to_client(&self, content: Point) -> Point {
        let local = content.to_vec2() * self.scale;
        self.raw(self.top_left_model() + transform_vec(self.linear, local))
    }

    /// Runs every due frame through the store; returns how many it claimed.
    pub(crate) fn run_frames(&mut self, store: &mut ViewportStore) -> usize {
        self.frames
            .take_due()
            .into_iter()
            .filter(|id| store.on_animation_frame(*id))
            .count()
    }
}

impl FrameScheduler for TestHost {
    fn request_frame(&mut self) -> FrameId {
        self.frames.request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.frames.cancel_frame(id);
    }
}

impl FrameHost for TestHost {
    fn ancestor_styles(&self) -> impl Iterator<Item = AncestorStyle<'_>> + '_ {
        self.styles
            .iter()
            .map(|(transform, zoom)| AncestorStyle::new(transform).with_zoom(*zoom))
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn bounding_client_rect(&self) -> Rect {
        Rect::from_points(self.raw(self.element.origin()), self.raw(Point::new(
            self.element.x1,
            self.element.y1,
        )))
    }

    fn top_left_client(&self) -> Point {
        self.raw(self.top_left_model())
    }

    fn content_size(&self) -> Option<Size> {
        self.content
    }

    fn scroll_position(&self) -> Vec2 {
        self.scroll
    }

    fn scroll_to(&mut self, position: Point) {
        self.scroll = position.to_vec2();
        self.scroll_writes += 1;
    }

    fn set_content_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn set_container_layout(&mut self, layout: ContainerLayout) {
        self.layout = layout;
        self.layout_writes += 1;
    }
}
