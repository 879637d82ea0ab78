// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording element host shared by the integration tests.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::collections::BTreeMap;

use gesture_frame::{ElementHost, EventSource, GestureFrame, GestureOptions};
use gesture_frame_timing::{FrameId, FrameQueue, FrameScheduler};
use gesture_frame_view::{AncestorStyle, ContainerLayout, FrameHost};
use kurbo::{Point, Rect, Size, Vec2};

/// Attribute change the host would report back to the frame.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Notification {
    pub(crate) name: String,
    pub(crate) old: Option<String>,
    pub(crate) new: Option<String>,
}

/// An untransformed element at `element.origin()` whose scroll container is
/// shifted by `margin - scroll`.
#[derive(Debug)]
pub(crate) struct MockHost {
    pub(crate) frames: FrameQueue,
    pub(crate) element: Rect,
    pub(crate) client: Size,
    pub(crate) styles: Vec<String>,
    pub(crate) content: Option<Size>,
    pub(crate) scroll: Vec2,
    pub(crate) layout: ContainerLayout,
    pub(crate) scale: f64,
    pub(crate) layout_writes: usize,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) bound: Vec<EventSource>,
    pub(crate) root_listeners: Vec<bool>,
    pub(crate) captured: Vec<u64>,
    pub(crate) context_menu: Vec<bool>,
    pub(crate) observing: Vec<bool>,
}

impl MockHost {
    pub(crate) fn new(client: Size) -> Self {
        Self {
            frames: FrameQueue::new(),
            element: Rect::from_origin_size((100.0, 50.0), client),
            client,
            styles: Vec::new(),
            content: Some(Size::new(400.0, 300.0)),
            scroll: Vec2::ZERO,
            layout: ContainerLayout::default(),
            scale: 1.0,
            layout_writes: 0,
            attributes: BTreeMap::new(),
            notifications: Vec::new(),
            bound: Vec::new(),
            root_listeners: Vec::new(),
            captured: Vec::new(),
            context_menu: Vec::new(),
            observing: Vec::new(),
        }
    }

    pub(crate) fn resize(&mut self, client: Size) {
        self.client = client;
        self.element = Rect::from_origin_size(self.element.origin(), client);
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Unscaled content coordinate under a client point.
    pub(crate) fn client_to_content(&self, client: Point) -> Point {
        ((client - self.top_left_client()) / self.scale).to_point()
    }
}

impl FrameScheduler for MockHost {
    fn request_frame(&mut self) -> FrameId {
        self.frames.request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.frames.cancel_frame(id);
    }
}

impl FrameHost for MockHost {
    fn ancestor_styles(&self) -> impl Iterator<Item = AncestorStyle<'_>> + '_ {
        self.styles.iter().map(|s| AncestorStyle::new(s.as_str()))
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn bounding_client_rect(&self) -> Rect {
        self.element
    }

    fn top_left_client(&self) -> Point {
        self.element.origin() + self.layout.margin - self.scroll
    }

    fn content_size(&self) -> Option<Size> {
        self.content
    }

    fn scroll_position(&self) -> Vec2 {
        self.scroll
    }

    fn scroll_to(&mut self, position: Point) {
        self.scroll = position.to_vec2();
    }

    fn set_content_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn set_container_layout(&mut self, layout: ContainerLayout) {
        self.layout = layout;
        self.layout_writes += 1;
    }
}

impl ElementHost for MockHost {
    fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        let old = match value {
            Some(value) => self.attributes.insert(name.into(), value.into()),
            None => self.attributes.remove(name),
        };
        self.notifications.push(Notification {
            name: name.into(),
            old,
            new: value.map(String::from),
        });
    }

    fn bind_event_source(&mut self, source: EventSource) {
        self.bound.push(source);
    }

    fn set_root_pointer_listeners(&mut self, enabled: bool) {
        self.root_listeners.push(enabled);
    }

    fn capture_pointer(&mut self, pointer: u64) {
        self.captured.push(pointer);
    }

    fn suppress_context_menu(&mut self, enabled: bool) {
        self.context_menu.push(enabled);
    }

    fn observe_resize(&mut self, enabled: bool) {
        self.observing.push(enabled);
    }
}

/// An attached frame over a 200x150 element.
pub(crate) fn attached(options: GestureOptions) -> GestureFrame<MockHost> {
    let mut frame = GestureFrame::with_options(MockHost::new(Size::new(200.0, 150.0)), options);
    frame.attach();
    frame
}

/// Runs every due frame callback; returns how many the frame claimed.
pub(crate) fn run_frames(frame: &mut GestureFrame<MockHost>) -> usize {
    let due = frame.host_mut().frames.take_due();
    due.into_iter()
        .filter(|id| frame.on_animation_frame(*id))
        .count()
}

/// Reports every pending attribute change back to the frame; returns the
/// results in order.
pub(crate) fn deliver_notifications(
    frame: &mut GestureFrame<MockHost>,
) -> Vec<Result<bool, gesture_frame::AttributeError>> {
    let notifications = core::mem::take(&mut frame.host_mut().notifications);
    notifications
        .iter()
        .map(|n| frame.attribute_changed(&n.name, n.old.as_deref(), n.new.as_deref()))
        .collect()
}

/// Writes an attribute the way page script would, and reports it.
pub(crate) fn set_external(
    frame: &mut GestureFrame<MockHost>,
    name: &str,
    value: Option<&str>,
) -> Result<bool, gesture_frame::AttributeError> {
    let host = frame.host_mut();
    let old = match value {
        Some(value) => host.attributes.insert(name.into(), value.into()),
        None => host.attributes.remove(name),
    };
    frame.attribute_changed(name, old.as_deref(), value)
}

pub(crate) fn assert_near(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

pub(crate) fn assert_vec_near(a: Vec2, b: Vec2) {
    assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
}
