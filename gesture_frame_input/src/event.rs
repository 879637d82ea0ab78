// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events as the interpreters consume them.
//!
//! Positions are raw client coordinates. Movement fields (`movementX/Y`) are
//! deliberately absent: they ignore page zoom and drift away from the
//! client-coordinate model.

use bitflags::bitflags;
use kurbo::{Point, Vec2};

bitflags! {
    /// Keyboard modifiers held during an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control key.
        const CTRL = 1 << 0;
        /// Shift key.
        const SHIFT = 1 << 1;
        /// Alt / Option key.
        const ALT = 1 << 2;
        /// Meta / Command key.
        const META = 1 << 3;
    }
}

/// Device that produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerKind {
    /// Mouse or trackpad.
    #[default]
    Mouse,
    /// Stylus.
    Pen,
    /// Finger on a touch screen.
    Touch,
}

/// Primary button index (`event.button == 0`).
pub const PRIMARY_BUTTON: u8 = 0;
/// Auxiliary (middle) button index.
pub const AUXILIARY_BUTTON: u8 = 1;
/// Secondary (right) button index.
pub const SECONDARY_BUTTON: u8 = 2;

/// Bit of `buttons` that is set while `button` is held.
///
/// The `buttons` bitmask orders secondary before auxiliary, unlike the
/// `button` index.
#[must_use]
pub fn button_mask(button: u8) -> u16 {
    match button {
        PRIMARY_BUTTON => 1,
        AUXILIARY_BUTTON => 4,
        SECONDARY_BUTTON => 2,
        3..=15 => 1 << button,
        _ => 0,
    }
}

/// A pointer event (`pointerdown`, `pointermove`, `pointerup`, `pointercancel`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer identifier, unique among active pointers.
    pub id: u64,
    /// Device kind.
    pub kind: PointerKind,
    /// Button whose state changed (meaningful on down/up).
    pub button: u8,
    /// Bitmask of held buttons.
    pub buttons: u16,
    /// Client position.
    pub position: Point,
}

impl PointerInput {
    /// Mouse event for pointer `id` at `position` with the primary button held.
    #[must_use]
    pub fn mouse(id: u64, position: Point) -> Self {
        Self {
            id,
            kind: PointerKind::Mouse,
            button: PRIMARY_BUTTON,
            buttons: button_mask(PRIMARY_BUTTON),
            position,
        }
    }

    /// Returns a copy reporting `button` as the changed and only held button.
    #[must_use]
    pub fn with_button(self, button: u8) -> Self {
        Self {
            button,
            buttons: button_mask(button),
            ..self
        }
    }

    /// Returns a copy with the given held-buttons mask.
    #[must_use]
    pub fn with_buttons(self, buttons: u16) -> Self {
        Self { buttons, ..self }
    }

    /// Returns a copy with the given device kind.
    #[must_use]
    pub fn with_kind(self, kind: PointerKind) -> Self {
        Self { kind, ..self }
    }

    /// Returns `true` while `button` is held.
    #[must_use]
    pub fn is_held(&self, button: u8) -> bool {
        self.buttons & button_mask(button) != 0
    }
}

/// A wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Scroll delta in pixels.
    pub delta: Vec2,
    /// Client position of the cursor.
    pub position: Point,
    /// Held modifiers. Trackpad pinches arrive as wheel events with `CTRL`.
    pub modifiers: Modifiers,
}

/// Input routed to a gesture frame.
///
/// Touch events carry the client positions of every contact still on the
/// surface (`TouchEvent.touches`), in the platform's order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// `wheel`.
    Wheel(WheelInput),
    /// `pointerdown`.
    PointerDown(PointerInput),
    /// `pointermove`.
    PointerMove(PointerInput),
    /// `pointerup`.
    PointerUp(PointerInput),
    /// `pointercancel`.
    PointerCancel(PointerInput),
    /// `touchstart`.
    TouchStart(&'a [Point]),
    /// `touchmove`.
    TouchMove(&'a [Point]),
    /// `touchend`.
    TouchEnd(&'a [Point]),
    /// `touchcancel`.
    TouchCancel(&'a [Point]),
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{AUXILIARY_BUTTON, PRIMARY_BUTTON, PointerInput, SECONDARY_BUTTON, button_mask};

    #[test]
    fn button_masks_follow_dom_order() {
        assert_eq!(button_mask(PRIMARY_BUTTON), 1);
        assert_eq!(button_mask(SECONDARY_BUTTON), 2);
        assert_eq!(button_mask(AUXILIARY_BUTTON), 4);
        assert_eq!(button_mask(4), 16);
        assert_eq!(button_mask(200), 0);
    }

    #[test]
    fn held_buttons_are_read_from_mask() {
        let input = PointerInput::mouse(1, Point::ZERO).with_button(AUXILIARY_BUTTON);
        assert!(input.is_held(AUXILIARY_BUTTON));
        assert!(!input.is_held(PRIMARY_BUTTON));
        let both = input.with_buttons(button_mask(PRIMARY_BUTTON) | button_mask(AUXILIARY_BUTTON));
        assert!(both.is_held(PRIMARY_BUTTON));
        assert!(both.is_held(AUXILIARY_BUTTON));
    }
}
