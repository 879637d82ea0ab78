// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom origins: pixel or percentage positions resolved against the element box.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect};

/// One coordinate of a [`ZoomOrigin`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Pixels from the element's left/top edge.
    Px(f64),
    /// Percentage of the element's bounding box, measured from its left/top edge.
    Percent(f64),
}

impl Length {
    /// Resolves against a box edge at `start` spanning `extent` pixels.
    #[must_use]
    pub fn resolve(self, start: f64, extent: f64) -> f64 {
        match self {
            Self::Px(px) => start + px,
            Self::Percent(pct) => start + extent * pct / 100.0,
        }
    }
}

/// Error returned when a zoom origin string cannot be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OriginParseError {
    /// The string was empty.
    Empty,
    /// A component is neither a number, a percentage nor a keyword.
    InvalidLength,
    /// A keyword was used on the wrong axis, such as `top` for x.
    MisplacedKeyword,
    /// More than two components were given.
    TooManyValues,
}

impl fmt::Display for OriginParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty zoom origin",
            Self::InvalidLength => "zoom origin component is not a length or percentage",
            Self::MisplacedKeyword => "zoom origin keyword used on the wrong axis",
            Self::TooManyValues => "zoom origin takes at most two components",
        })
    }
}

impl core::error::Error for OriginParseError {}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

fn parse_component(text: &str, axis: Axis) -> Result<Length, OriginParseError> {
    let keyword = match text {
        "center" => Some((50.0, None)),
        "left" => Some((0.0, Some(Axis::X))),
        "right" => Some((100.0, Some(Axis::X))),
        "top" => Some((0.0, Some(Axis::Y))),
        "bottom" => Some((100.0, Some(Axis::Y))),
        _ => None,
    };
    if let Some((pct, only)) = keyword {
        return match only {
            Some(only) if only != axis => Err(OriginParseError::MisplacedKeyword),
            _ => Ok(Length::Percent(pct)),
        };
    }
    let (number, percent) = match text.strip_suffix('%') {
        Some(number) => (number, true),
        None => (text.strip_suffix("px").unwrap_or(text), false),
    };
    let value: f64 = number
        .parse()
        .map_err(|_| OriginParseError::InvalidLength)?;
    if !value.is_finite() {
        return Err(OriginParseError::InvalidLength);
    }
    Ok(if percent {
        Length::Percent(value)
    } else {
        Length::Px(value)
    })
}

/// Point that stays fixed during a zoom.
///
/// The default is the center of the element box (`50% 50%`).
///
/// ```rust
/// use gesture_frame_view::{Length, ZoomOrigin};
/// use kurbo::{Point, Rect};
///
/// let origin: ZoomOrigin = "25% 120".parse().unwrap();
/// assert_eq!(origin.x, Length::Percent(25.0));
/// let rect = Rect::new(100.0, 20.0, 300.0, 420.0);
/// assert_eq!(origin.resolve(rect), Point::new(150.0, 140.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomOrigin {
    /// Horizontal component.
    pub x: Length,
    /// Vertical component.
    pub y: Length,
}

impl Default for ZoomOrigin {
    fn default() -> Self {
        Self::CENTER
    }
}

impl From<Point> for ZoomOrigin {
    fn from(point: Point) -> Self {
        Self {
            x: Length::Px(point.x),
            y: Length::Px(point.y),
        }
    }
}

impl ZoomOrigin {
    /// Center of the element box.
    pub const CENTER: Self = Self {
        x: Length::Percent(50.0),
        y: Length::Percent(50.0),
    };

    /// Resolves to a client point against the element's bounding rect.
    #[must_use]
    pub fn resolve(self, rect: Rect) -> Point {
        Point::new(
            self.x.resolve(rect.x0, rect.width()),
            self.y.resolve(rect.y0, rect.height()),
        )
    }
}

impl FromStr for ZoomOrigin {
    type Err = OriginParseError;

    /// Parses one or two whitespace separated components: numbers (optionally
    /// suffixed with `px`), percentages, or the keywords `left`, `center`,
    /// `right`, `top` and `bottom`. A single component sets x; y stays centered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_ascii_whitespace();
        let x = parts.next().ok_or(OriginParseError::Empty)?;
        let y = parts.next();
        if parts.next().is_some() {
            return Err(OriginParseError::TooManyValues);
        }
        // `top left` style ordering is allowed when the keywords say so.
        let (x, y) = match (x, y) {
            ("top" | "bottom", Some(other)) if other != "top" && other != "bottom" => {
                (other, Some(x))
            }
            _ => (x, y),
        };
        Ok(Self {
            x: parse_component(x, Axis::X)?,
            y: match y {
                Some(y) => parse_component(y, Axis::Y)?,
                None => Length::Percent(50.0),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{Length, OriginParseError, ZoomOrigin};

    #[test]
    fn default_is_center() {
        let rect = Rect::new(10.0, 20.0, 110.0, 220.0);
        assert_eq!(ZoomOrigin::default().resolve(rect), Point::new(60.0, 120.0));
    }

    #[test]
    fn parses_numbers_percentages_and_keywords() {
        assert_eq!(
            "12px 30%".parse::<ZoomOrigin>().unwrap(),
            ZoomOrigin {
                x: Length::Px(12.0),
                y: Length::Percent(30.0),
            }
        );
        assert_eq!(
            "right".parse::<ZoomOrigin>().unwrap(),
            ZoomOrigin {
                x: Length::Percent(100.0),
                y: Length::Percent(50.0),
            }
        );
        assert_eq!(
            "top left".parse::<ZoomOrigin>().unwrap(),
            ZoomOrigin {
                x: Length::Percent(0.0),
                y: Length::Percent(0.0),
            }
        );
        assert_eq!(
            "  -4.5   center ".parse::<ZoomOrigin>().unwrap(),
            ZoomOrigin {
                x: Length::Px(-4.5),
                y: Length::Percent(50.0),
            }
        );
    }

    #[test]
    fn rejects_malformed_origins() {
        assert_eq!("".parse::<ZoomOrigin>(), Err(OriginParseError::Empty));
        assert_eq!(
            "1 2 3".parse::<ZoomOrigin>(),
            Err(OriginParseError::TooManyValues)
        );
        assert_eq!(
            "10em".parse::<ZoomOrigin>(),
            Err(OriginParseError::InvalidLength)
        );
        assert_eq!(
            "inf".parse::<ZoomOrigin>(),
            Err(OriginParseError::InvalidLength)
        );
        assert_eq!(
            "left right".parse::<ZoomOrigin>(),
            Err(OriginParseError::MisplacedKeyword)
        );
    }

    #[test]
    fn pixels_are_measured_from_the_element_corner() {
        let origin = ZoomOrigin::from(Point::new(3.0, 4.0));
        assert_eq!(
            origin.resolve(Rect::new(100.0, 50.0, 200.0, 150.0)),
            Point::new(103.0, 54.0)
        );
        let origin: ZoomOrigin = "0 0".parse().unwrap();
        assert_eq!(
            origin.resolve(Rect::new(100.0, 50.0, 200.0, 150.0)),
            Point::new(100.0, 50.0)
        );
    }
}
