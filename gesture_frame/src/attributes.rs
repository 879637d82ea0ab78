// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observed attributes: names, value coercion and echo tracking.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use gesture_frame_view::{AnchorX, AnchorY, ResizeScale};
use smallvec::SmallVec;

/// An attribute the frame observes and reflects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// `scale` (number).
    Scale,
    /// `min-scale` (number).
    MinScale,
    /// `max-scale` (number).
    MaxScale,
    /// `offset-x` (number).
    OffsetX,
    /// `offset-y` (number).
    OffsetY,
    /// `pan` (boolean, both axes).
    Pan,
    /// `pan-x` (boolean).
    PanX,
    /// `pan-y` (boolean).
    PanY,
    /// `pinch-zoom` (boolean).
    PinchZoom,
    /// `pan-button` (number: 0, 1 or 2).
    PanButton,
    /// `event-source` (`window` or absent).
    EventSource,
    /// `anchor-x` (`left`, `center` or `right`).
    AnchorX,
    /// `anchor-y` (`top`, `center` or `bottom`).
    AnchorY,
    /// `resize-scale` (`none`, `width`, `height` or `contain`).
    ResizeScale,
}

impl Attribute {
    /// Every observed attribute, for hosts that register `observedAttributes`.
    pub const ALL: [Self; 14] = [
        Self::Scale,
        Self::MinScale,
        Self::MaxScale,
        Self::OffsetX,
        Self::OffsetY,
        Self::Pan,
        Self::PanX,
        Self::PanY,
        Self::PinchZoom,
        Self::PanButton,
        Self::EventSource,
        Self::AnchorX,
        Self::AnchorY,
        Self::ResizeScale,
    ];

    /// The attribute's name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::MinScale => "min-scale",
            Self::MaxScale => "max-scale",
            Self::OffsetX => "offset-x",
            Self::OffsetY => "offset-y",
            Self::Pan => "pan",
            Self::PanX => "pan-x",
            Self::PanY => "pan-y",
            Self::PinchZoom => "pinch-zoom",
            Self::PanButton => "pan-button",
            Self::EventSource => "event-source",
            Self::AnchorX => "anchor-x",
            Self::AnchorY => "anchor-y",
            Self::ResizeScale => "resize-scale",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.name() == s)
            .ok_or(AttributeError::Unknown)
    }
}

/// Error returned when an attribute change cannot be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeError {
    /// The name is not an observed attribute.
    Unknown,
    /// A numeric attribute holds something other than a finite number.
    InvalidNumber(Attribute),
    /// A keyword attribute holds an unknown keyword.
    InvalidKeyword(Attribute),
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown attribute"),
            Self::InvalidNumber(attr) => write!(f, "`{attr}` expects a finite number"),
            Self::InvalidKeyword(attr) => write!(f, "`{attr}` holds an unknown keyword"),
        }
    }
}

impl core::error::Error for AttributeError {}

/// Coerces a numeric attribute value.
pub(crate) fn parse_number(attr: Attribute, value: &str) -> Result<f64, AttributeError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AttributeError::InvalidNumber(attr)),
    }
}

/// Serializes a number for reflection.
pub(crate) fn format_number(value: f64) -> String {
    alloc::format!("{value}")
}

/// Coerces a keyword attribute value; absence selects the default.
pub(crate) fn parse_keyword<T: FromStr + Default>(
    attr: Attribute,
    value: Option<&str>,
) -> Result<T, AttributeError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| AttributeError::InvalidKeyword(attr)),
        None => Ok(T::default()),
    }
}

pub(crate) fn anchor_x_keyword(anchor: AnchorX) -> &'static str {
    match anchor {
        AnchorX::Left => "left",
        AnchorX::Center => "center",
        AnchorX::Right => "right",
    }
}

pub(crate) fn anchor_y_keyword(anchor: AnchorY) -> &'static str {
    match anchor {
        AnchorY::Top => "top",
        AnchorY::Center => "center",
        AnchorY::Bottom => "bottom",
    }
}

pub(crate) fn resize_scale_keyword(scale: ResizeScale) -> &'static str {
    match scale {
        ResizeScale::Keep => "none",
        ResizeScale::Width => "width",
        ResizeScale::Height => "height",
        ResizeScale::Contain => "contain",
    }
}

/// Pending writes kept per attribute before the oldest is forgotten.
const MAX_PENDING_PER_ATTRIBUTE: usize = 4;

/// Attribute writes the frame made and whose change notification has not
/// come back yet.
///
/// Notifications arrive in write order, so the oldest pending write of an
/// attribute is the one the next notification echoes. A notification carrying
/// a different value is an external write.
#[derive(Clone, Debug, Default)]
pub(crate) struct EchoTracker {
    pending: SmallVec<[(Attribute, Option<String>); 8]>,
}

impl EchoTracker {
    /// Remembers a write.
    pub(crate) fn record(&mut self, attr: Attribute, value: Option<&str>) {
        if self.pending.iter().filter(|(a, _)| *a == attr).count() >= MAX_PENDING_PER_ATTRIBUTE {
            if let Some(oldest) = self.pending.iter().position(|(a, _)| *a == attr) {
                self.pending.remove(oldest);
                tracing::debug!(%attr, "host is not echoing attribute writes");
            }
        }
        self.pending.push((attr, value.map(String::from)));
    }

    /// Consumes the oldest pending write of `attr`; returns `true` if `value`
    /// is its echo.
    pub(crate) fn take_echo(&mut self, attr: Attribute, value: Option<&str>) -> bool {
        let Some(index) = self.pending.iter().position(|(a, _)| *a == attr) else {
            return false;
        };
        let (_, written) = self.pending.remove(index);
        written.as_deref() == value
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
