// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gesture_frame_view::FrameHost;

use crate::options::EventSource;

/// The element side of a [`GestureFrame`](crate::GestureFrame).
///
/// Extends [`FrameHost`] with the attribute, listener and observer plumbing
/// of a custom element.
pub trait ElementHost: FrameHost {
    /// Writes (`Some`) or removes (`None`) an attribute.
    ///
    /// Hosts that observe attributes are expected to report the change back
    /// through [`GestureFrame::attribute_changed`](crate::GestureFrame::attribute_changed)
    /// later; the frame recognizes and skips its own writes.
    fn set_attribute(&mut self, name: &str, value: Option<&str>);

    /// Moves the wheel, pointer and touch listeners to `source`.
    fn bind_event_source(&mut self, source: EventSource);

    /// Adds or removes `pointermove` / `pointerup` listeners at the root
    /// scope, so a drag keeps tracking after the pointer leaves the element.
    ///
    /// Calls always alternate between `true` and `false`.
    fn set_root_pointer_listeners(&mut self, enabled: bool);

    /// Suppresses or restores the element's context menu.
    ///
    /// Enabled while the pan button is the secondary button. Calls always
    /// alternate between `true` and `false`.
    fn suppress_context_menu(&mut self, enabled: bool);

    /// Captures a pointer to the element.
    fn capture_pointer(&mut self, pointer: u64);

    /// Starts or stops observing the element's size.
    fn observe_resize(&mut self, enabled: bool);
}
