// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gesture_frame_input::{
    AUXILIARY_BUTTON, DragPan, InputEvent, Modifiers, PRIMARY_BUTTON, PanZoomStep, PointerInput,
    PointerKind, PointerPinch, SECONDARY_BUTTON, TouchPinch, WheelInput, WheelZoom,
};
use gesture_frame_timing::FrameId;
use gesture_frame_view::{
    FitAxes, FrameHost, ResizePolicy, StateChanges, ViewportState, ViewportStore, ZoomOrigin,
};
use kurbo::{Point, Size, Vec2};

use crate::attributes::{
    Attribute, AttributeError, EchoTracker, anchor_x_keyword, anchor_y_keyword, format_number,
    parse_keyword, parse_number, resize_scale_keyword,
};
use crate::host::ElementHost;
use crate::options::{EventSource, FitOptions, GestureOptions};

/// What the host should do with an input event after
/// [`GestureFrame::handle_event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The frame did not use the event.
    Ignored,
    /// The frame used the event; default handling may proceed.
    Handled,
    /// The frame used the event; the host should call `preventDefault`.
    PreventDefault,
}

/// A pannable, zoomable frame bound to its host element.
///
/// The frame owns its host. Input events, scroll and resize notifications,
/// attribute changes and animation frames are forwarded to it by the host's
/// binding; everything the frame changes is written back through
/// [`ElementHost`], including attribute reflection of the viewport state.
#[derive(Debug)]
pub struct GestureFrame<H> {
    host: H,
    store: ViewportStore,
    options: GestureOptions,
    wheel: WheelZoom,
    drag: DragPan,
    touch: TouchPinch,
    pointers: PointerPinch,
    multi_touch: bool,
    echoes: EchoTracker,
    client_size: Size,
    attached: bool,
    root_listeners: bool,
}

impl<H: ElementHost> GestureFrame<H> {
    /// Creates a frame with default options (no gestures enabled).
    pub fn new(host: H) -> Self {
        Self::with_options(host, GestureOptions::default())
    }

    /// Creates a frame with the given options.
    pub fn with_options(host: H, options: GestureOptions) -> Self {
        let mut wheel = WheelZoom::new();
        wheel.set_modifiers(options.wheel_modifiers);
        wheel.set_base(options.wheel_base);
        Self {
            host,
            store: ViewportStore::new(),
            options,
            wheel,
            drag: DragPan::default(),
            touch: TouchPinch::new(),
            pointers: PointerPinch::new(),
            multi_touch: false,
            echoes: EchoTracker::default(),
            client_size: Size::ZERO,
            attached: false,
            root_listeners: false,
        }
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the frame and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// The viewport store.
    pub fn store(&self) -> &ViewportStore {
        &self.store
    }

    /// Current options.
    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    /// Returns `true` between [`attach`](Self::attach) and [`detach`](Self::detach).
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Snapshot of the viewport state.
    pub fn state(&self) -> ViewportState {
        self.store.state()
    }

    /// Current scale.
    pub fn scale(&self) -> f64 {
        self.store.scale()
    }

    /// Lower scale bound.
    pub fn min_scale(&self) -> f64 {
        self.store.min_scale()
    }

    /// Upper scale bound.
    pub fn max_scale(&self) -> f64 {
        self.store.max_scale()
    }

    /// Current offset.
    pub fn offset(&self) -> Vec2 {
        self.store.offset()
    }

    /// Horizontal offset.
    pub fn offset_x(&self) -> f64 {
        self.store.offset().x
    }

    /// Vertical offset.
    pub fn offset_y(&self) -> f64 {
        self.store.offset().y
    }

    /// Connects the frame: reflects the scale attributes, binds the event
    /// source and starts observing resizes.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.write_number(Attribute::Scale, self.store.scale());
        self.write_number(Attribute::MinScale, self.store.min_scale());
        self.write_number(Attribute::MaxScale, self.store.max_scale());
        self.client_size = self.host.client_size();
        self.host.bind_event_source(self.options.event_source);
        if self.options.pan_button == SECONDARY_BUTTON {
            self.host.suppress_context_menu(true);
        }
        self.host.observe_resize(true);
        tracing::debug!(client = ?self.client_size, "gesture frame attached");
    }

    /// Disconnects the frame: ends gestures, withdraws every pending frame,
    /// releases root listeners and stops observing resizes.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.end_gestures();
        self.store.cancel_pending(&mut self.host);
        if self.options.pan_button == SECONDARY_BUTTON {
            self.host.suppress_context_menu(false);
        }
        self.host.observe_resize(false);
        self.attached = false;
        tracing::debug!("gesture frame detached");
    }

    /// Sets the scale, clamped into the bounds.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        let changed = self.store.set_scale(&mut self.host, scale);
        self.reflect();
        changed
    }

    /// Sets the lower scale bound.
    pub fn set_min_scale(&mut self, min_scale: f64) -> bool {
        let changed = self.store.set_min_scale(&mut self.host, min_scale);
        self.reflect();
        changed
    }

    /// Sets the upper scale bound.
    pub fn set_max_scale(&mut self, max_scale: f64) -> bool {
        let changed = self.store.set_max_scale(&mut self.host, max_scale);
        self.reflect();
        changed
    }

    /// Sets the offset.
    pub fn set_offset(&mut self, offset: Vec2) -> bool {
        let changed = self.store.set_offset(&mut self.host, offset);
        self.reflect();
        changed
    }

    /// Sets the horizontal offset, keeping the vertical one.
    pub fn set_offset_x(&mut self, x: f64) -> bool {
        self.set_offset(Vec2::new(x, self.store.offset().y))
    }

    /// Sets the vertical offset, keeping the horizontal one.
    pub fn set_offset_y(&mut self, y: f64) -> bool {
        self.set_offset(Vec2::new(self.store.offset().x, y))
    }

    /// Multiplies the scale by `ratio` about `origin`, the element center by
    /// default.
    pub fn zoom(&mut self, ratio: f64, origin: Option<ZoomOrigin>) -> bool {
        let rect = self.host.bounding_client_rect();
        let origin: Point = origin.unwrap_or_default().resolve(rect);
        let changed = self.store.zoom(&mut self.host, ratio, origin);
        self.reflect();
        changed
    }

    /// Scales and centers the content to fit both dimensions.
    pub fn fit(&mut self, options: FitOptions) -> bool {
        self.fit_axes(FitAxes::Both, options)
    }

    /// Scales the content to fill the width, keeping the vertical offset.
    pub fn fit_x(&mut self, options: FitOptions) -> bool {
        self.fit_axes(FitAxes::Horizontal, options)
    }

    /// Scales the content to fill the height, keeping the horizontal offset.
    pub fn fit_y(&mut self, options: FitOptions) -> bool {
        self.fit_axes(FitAxes::Vertical, options)
    }

    fn fit_axes(&mut self, axes: FitAxes, options: FitOptions) -> bool {
        let changed = self.store.fit_axes(&mut self.host, axes, options.margin());
        self.reflect();
        changed
    }

    /// Enables or disables panning on both axes.
    pub fn set_pan(&mut self, enabled: bool) {
        self.set_pan_x(enabled);
        self.set_pan_y(enabled);
    }

    /// Enables or disables horizontal panning.
    pub fn set_pan_x(&mut self, enabled: bool) {
        if self.options.pan_x != enabled {
            self.options.pan_x = enabled;
            self.write_flag(Attribute::PanX, enabled);
        }
    }

    /// Enables or disables vertical panning.
    pub fn set_pan_y(&mut self, enabled: bool) {
        if self.options.pan_y != enabled {
            self.options.pan_y = enabled;
            self.write_flag(Attribute::PanY, enabled);
        }
    }

    /// Enables or disables wheel and pinch zoom.
    pub fn set_pinch_zoom(&mut self, enabled: bool) {
        if self.options.pinch_zoom != enabled {
            self.options.pinch_zoom = enabled;
            self.write_flag(Attribute::PinchZoom, enabled);
        }
    }

    /// Selects the drag button: 0 primary, 1 auxiliary, 2 secondary.
    ///
    /// Other values are ignored.
    pub fn set_pan_button(&mut self, button: u8) {
        if button > SECONDARY_BUTTON {
            tracing::warn!(button, "ignoring pan button");
            return;
        }
        if self.apply_pan_button(button) {
            self.write_number(Attribute::PanButton, f64::from(button));
        }
    }

    /// Moves the event listeners to `source`.
    pub fn set_event_source(&mut self, source: EventSource) {
        if self.apply_event_source(source) {
            self.write_attribute(Attribute::EventSource, source.to_attribute());
        }
    }

    /// Sets how resizes move and scale the content.
    pub fn set_resize_policy(&mut self, policy: ResizePolicy) {
        let previous = core::mem::replace(&mut self.options.resize, policy);
        if previous.anchor_x != policy.anchor_x {
            self.write_attribute(Attribute::AnchorX, Some(anchor_x_keyword(policy.anchor_x)));
        }
        if previous.anchor_y != policy.anchor_y {
            self.write_attribute(Attribute::AnchorY, Some(anchor_y_keyword(policy.anchor_y)));
        }
        if previous.scale != policy.scale {
            self.write_attribute(
                Attribute::ResizeScale,
                Some(resize_scale_keyword(policy.scale)),
            );
        }
    }

    /// Sets the modifiers that turn wheel events into zoom.
    pub fn set_wheel_modifiers(&mut self, modifiers: Modifiers) {
        self.options.wheel_modifiers = modifiers;
        self.wheel.set_modifiers(modifiers);
    }

    /// Sets the per-pixel wheel zoom base.
    pub fn set_wheel_base(&mut self, base: f64) {
        self.wheel.set_base(base);
        self.options.wheel_base = self.wheel.base();
    }

    /// Declares whether the host delivers touch events.
    pub fn set_touch_events(&mut self, enabled: bool) {
        if self.options.touch_events != enabled {
            self.end_gestures();
            self.options.touch_events = enabled;
        }
    }

    /// Routes pointers through two-pointer pinch instead of single-pointer drag.
    pub fn set_pointer_pinch(&mut self, enabled: bool) {
        if self.options.pointer_pinch != enabled {
            self.end_gestures();
            self.options.pointer_pinch = enabled;
        }
    }

    /// Applies an attribute change reported by the host.
    ///
    /// Echoes of the frame's own writes and unchanged values are skipped and
    /// return `Ok(false)`. Unknown attributes and unparsable values leave the
    /// frame untouched and are logged.
    pub fn attribute_changed(
        &mut self,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Result<bool, AttributeError> {
        let result = match name.parse::<Attribute>() {
            Ok(attr) if self.echoes.take_echo(attr, new) => Ok(false),
            Ok(_) if old == new => Ok(false),
            Ok(attr) => self.apply_attribute(attr, new),
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            tracing::warn!(name, value = ?new, %err, "ignoring attribute change");
        }
        result
    }

    /// Reads a native scroll of the element back into the offset.
    pub fn on_scroll(&mut self) -> bool {
        let changed = self.store.on_scroll(&self.host);
        self.reflect();
        changed
    }

    /// Reconciles the viewport after the element was resized.
    pub fn on_resize(&mut self) -> bool {
        let current = self.host.client_size();
        let previous = core::mem::replace(&mut self.client_size, current);
        let changed = self
            .store
            .resize(&mut self.host, previous, current, self.options.resize);
        self.reflect();
        changed
    }

    /// Runs the frame callback `id`.
    ///
    /// Returns `true` if `id` belonged to this frame. Each frame id belongs to
    /// at most one interpreter, so a frame applies at most one step.
    pub fn on_animation_frame(&mut self, id: FrameId) -> bool {
        if self.store.on_animation_frame(id) {
            return true;
        }
        // Several contacts pan freely while pinch zoom is on; single
        // contacts follow the axis flags.
        let (step, multi_contact) = if let Some(zoom) = self.wheel.fire(id) {
            let step = PanZoomStep {
                pan: Vec2::ZERO,
                zoom: Some(zoom),
            };
            (step, false)
        } else if let Some(delta) = self.drag.fire(id) {
            (PanZoomStep::pan(delta), false)
        } else if let Some(step) = self.touch.fire(id) {
            (step, self.multi_touch)
        } else if let Some(step) = self.pointers.fire(id) {
            (step, self.pointers.records().len() > 1)
        } else {
            return false;
        };
        self.apply_step(step, multi_contact);
        true
    }

    /// Routes an input event to the interpreters.
    pub fn handle_event(&mut self, event: InputEvent<'_>) -> EventOutcome {
        if !self.attached {
            return EventOutcome::Ignored;
        }
        match event {
            InputEvent::Wheel(input) => self.on_wheel(&input),
            InputEvent::PointerDown(input) => self.on_pointer_down(&input),
            InputEvent::PointerMove(input) => self.on_pointer_move(&input),
            InputEvent::PointerUp(input) | InputEvent::PointerCancel(input) => {
                self.on_pointer_up(&input)
            }
            InputEvent::TouchStart(touches) | InputEvent::TouchEnd(touches) => {
                self.touch.start_end(&mut self.host, touches);
                self.multi_touch = touches.len() > 1;
                EventOutcome::Handled
            }
            InputEvent::TouchMove(touches) => self.on_touch_move(touches),
            InputEvent::TouchCancel(_) => {
                self.touch.cancel(&mut self.host);
                self.multi_touch = false;
                EventOutcome::Handled
            }
        }
    }

    fn on_wheel(&mut self, input: &WheelInput) -> EventOutcome {
        if self.options.pinch_zoom && self.wheel.wheel(&mut self.host, input) {
            EventOutcome::PreventDefault
        } else {
            EventOutcome::Ignored
        }
    }

    fn on_pointer_down(&mut self, input: &PointerInput) -> EventOutcome {
        if self.options.touch_events && input.kind == PointerKind::Touch {
            return EventOutcome::Ignored;
        }
        if self.options.pointer_pinch {
            let enabled = self.options.pans() || self.options.pinch_zoom;
            if !enabled
                || !self
                    .pointers
                    .down(&mut self.host, input.id, input.button, input.position)
            {
                return EventOutcome::Ignored;
            }
        } else {
            if !self.options.pans() || input.button != self.options.pan_button {
                return EventOutcome::Ignored;
            }
            self.drag.start(input.id, input.position);
        }
        self.host.capture_pointer(input.id);
        self.set_root_listeners(true);
        EventOutcome::Handled
    }

    fn on_pointer_move(&mut self, input: &PointerInput) -> EventOutcome {
        if self.options.pointer_pinch {
            return if self.pointers.update(&mut self.host, input.id, input.position) {
                EventOutcome::PreventDefault
            } else {
                EventOutcome::Ignored
            };
        }
        if self.drag.pointer() != Some(input.id) {
            return EventOutcome::Ignored;
        }
        if !input.is_held(self.options.pan_button) {
            // The release was missed.
            self.end_drag();
            return EventOutcome::Ignored;
        }
        self.drag.update(&mut self.host, input.id, input.position);
        EventOutcome::PreventDefault
    }

    fn on_pointer_up(&mut self, input: &PointerInput) -> EventOutcome {
        if self.options.pointer_pinch {
            if !self.pointers.up(&mut self.host, input.id) {
                return EventOutcome::Ignored;
            }
            if self.pointers.records().is_empty() {
                self.set_root_listeners(false);
            }
            return EventOutcome::Handled;
        }
        if self.drag.pointer() != Some(input.id) {
            return EventOutcome::Ignored;
        }
        self.end_drag();
        EventOutcome::Handled
    }

    fn on_touch_move(&mut self, touches: &[Point]) -> EventOutcome {
        let enabled = match touches.len() {
            0 => false,
            1 => self.options.pans(),
            _ => self.options.pinch_zoom,
        };
        if !enabled {
            return EventOutcome::Ignored;
        }
        self.touch.update(&mut self.host, touches);
        EventOutcome::PreventDefault
    }

    fn apply_step(&mut self, step: PanZoomStep, multi_contact: bool) {
        if let Some(zoom) = step.zoom.filter(|_| self.options.pinch_zoom) {
            self.store.zoom(&mut self.host, zoom.ratio, zoom.origin);
        }
        let pan = if multi_contact && self.options.pinch_zoom {
            step.pan
        } else {
            self.options.mask_pan(step.pan)
        };
        self.store.pan(&mut self.host, pan);
        self.reflect();
    }

    fn apply_pan_button(&mut self, button: u8) -> bool {
        let previous = core::mem::replace(&mut self.options.pan_button, button);
        if previous == button {
            return false;
        }
        self.end_drag();
        let secondary = button == SECONDARY_BUTTON;
        if self.attached && secondary != (previous == SECONDARY_BUTTON) {
            self.host.suppress_context_menu(secondary);
        }
        true
    }

    fn end_drag(&mut self) {
        self.drag.end(&mut self.host);
        self.set_root_listeners(false);
    }

    fn end_gestures(&mut self) {
        self.wheel.cancel(&mut self.host);
        self.drag.end(&mut self.host);
        self.touch.cancel(&mut self.host);
        self.multi_touch = false;
        self.pointers.cancel(&mut self.host);
        self.set_root_listeners(false);
    }

    fn set_root_listeners(&mut self, enabled: bool) {
        if self.root_listeners != enabled {
            self.root_listeners = enabled;
            self.host.set_root_pointer_listeners(enabled);
        }
    }

    fn apply_event_source(&mut self, source: EventSource) -> bool {
        if self.options.event_source == source {
            return false;
        }
        self.end_gestures();
        self.options.event_source = source;
        self.host.bind_event_source(source);
        tracing::debug!(?source, "event source changed");
        true
    }

    fn apply_attribute(
        &mut self,
        attr: Attribute,
        value: Option<&str>,
    ) -> Result<bool, AttributeError> {
        let number = |value: Option<&str>| value.map(|v| parse_number(attr, v)).transpose();
        let flag = value.is_some();
        let changed = match attr {
            Attribute::Scale => number(value)?.is_some_and(|v| self.set_scale(v)),
            Attribute::MinScale => number(value)?.is_some_and(|v| self.set_min_scale(v)),
            Attribute::MaxScale => number(value)?.is_some_and(|v| self.set_max_scale(v)),
            Attribute::OffsetX => number(value)?.is_some_and(|v| self.set_offset_x(v)),
            Attribute::OffsetY => number(value)?.is_some_and(|v| self.set_offset_y(v)),
            Attribute::Pan => {
                let changed = self.options.pan_x != flag || self.options.pan_y != flag;
                self.options.pan_x = flag;
                self.options.pan_y = flag;
                changed
            }
            Attribute::PanX => core::mem::replace(&mut self.options.pan_x, flag) != flag,
            Attribute::PanY => core::mem::replace(&mut self.options.pan_y, flag) != flag,
            Attribute::PinchZoom => core::mem::replace(&mut self.options.pinch_zoom, flag) != flag,
            Attribute::PanButton => {
                let button = match number(value)? {
                    None => PRIMARY_BUTTON,
                    Some(v) => [PRIMARY_BUTTON, AUXILIARY_BUTTON, SECONDARY_BUTTON]
                        .into_iter()
                        .find(|b| f64::from(*b) == v)
                        .ok_or(AttributeError::InvalidNumber(attr))?,
                };
                self.apply_pan_button(button)
            }
            Attribute::EventSource => self.apply_event_source(EventSource::from_attribute(value)),
            Attribute::AnchorX => {
                let anchor = parse_keyword(attr, value)?;
                core::mem::replace(&mut self.options.resize.anchor_x, anchor) != anchor
            }
            Attribute::AnchorY => {
                let anchor = parse_keyword(attr, value)?;
                core::mem::replace(&mut self.options.resize.anchor_y, anchor) != anchor
            }
            Attribute::ResizeScale => {
                let scale = parse_keyword(attr, value)?;
                core::mem::replace(&mut self.options.resize.scale, scale) != scale
            }
        };
        tracing::trace!(%attr, ?value, changed, "attribute applied");
        Ok(changed)
    }

    fn reflect(&mut self) {
        let changes = self.store.take_changes();
        if changes.contains(StateChanges::SCALE) {
            self.write_number(Attribute::Scale, self.store.scale());
        }
        if changes.contains(StateChanges::MIN_SCALE) {
            self.write_number(Attribute::MinScale, self.store.min_scale());
        }
        if changes.contains(StateChanges::MAX_SCALE) {
            self.write_number(Attribute::MaxScale, self.store.max_scale());
        }
        if changes.contains(StateChanges::OFFSET) {
            let offset = self.store.offset();
            self.write_number(Attribute::OffsetX, offset.x);
            self.write_number(Attribute::OffsetY, offset.y);
        }
    }

    fn write_number(&mut self, attr: Attribute, value: f64) {
        let value = format_number(value);
        self.write_attribute(attr, Some(value.as_str()));
    }

    fn write_flag(&mut self, attr: Attribute, enabled: bool) {
        self.write_attribute(attr, enabled.then_some(""));
    }

    fn write_attribute(&mut self, attr: Attribute, value: Option<&str>) {
        self.echoes.record(attr, value);
        self.host.set_attribute(attr.name(), value);
    }
}
