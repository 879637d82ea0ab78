// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parser for CSS `transform` values.
//!
//! Computed styles serialize transforms as `none`, `matrix(...)` or
//! `matrix3d(...)`. Hand-authored values (useful in tests and for hosts that
//! read inline styles) may also use the individual transform functions:
//! `translate`, `translateX`, `translateY`, `translate3d`, `scale`, `scaleX`,
//! `scaleY`, `scale3d`, `rotate`, `skew`, `skewX` and `skewY`.
//!
//! A list of functions composes left to right, so `scale(2) rotate(90deg)`
//! rotates first and then scales, exactly like the browser.
//!
//! ```rust
//! use gesture_frame_view::parse_transform;
//!
//! let m = parse_transform("matrix(2, 0, 0, 2, 10, 20)").unwrap();
//! assert_eq!(m.as_coeffs(), [2.0, 0.0, 0.0, 2.0, 10.0, 20.0]);
//! ```

use core::f64::consts::PI;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `tan`
use kurbo::Affine;
use smallvec::SmallVec;

/// Why a transform value failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformParseErrorKind {
    /// Expected a function name such as `matrix`.
    ExpectedFunction,
    /// The function name is not a supported 2-D transform function.
    UnknownFunction,
    /// A function name was not followed by `(`.
    ExpectedOpenParen,
    /// The input ended before the closing `)`.
    UnclosedFunction,
    /// An argument is not a valid number.
    InvalidNumber,
    /// An argument carries a unit the function does not accept.
    InvalidUnit,
    /// The function received the wrong number of arguments.
    ArgumentCount,
    /// The resulting matrix cannot be inverted.
    Singular,
}

impl TransformParseErrorKind {
    fn describe(self) -> &'static str {
        match self {
            Self::ExpectedFunction => "expected a transform function",
            Self::UnknownFunction => "unknown transform function",
            Self::ExpectedOpenParen => "expected `(` after function name",
            Self::UnclosedFunction => "missing `)`",
            Self::InvalidNumber => "invalid number",
            Self::InvalidUnit => "unit not allowed here",
            Self::ArgumentCount => "wrong number of arguments",
            Self::Singular => "transform is not invertible",
        }
    }
}

/// Error returned when a transform value cannot be turned into an invertible matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransformParseError {
    /// What went wrong.
    pub kind: TransformParseErrorKind,
    /// Byte offset into the input where the problem was detected.
    pub position: usize,
}

impl TransformParseError {
    pub(crate) fn new(kind: TransformParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for TransformParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid transform at byte {}: {}",
            self.position,
            self.kind.describe()
        )
    }
}

impl core::error::Error for TransformParseError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unit {
    None,
    Px,
    Percent,
    Deg,
    Rad,
    Grad,
    Turn,
}

#[derive(Clone, Copy, Debug)]
struct Arg {
    value: f64,
    unit: Unit,
    position: usize,
}

impl Arg {
    fn number(self) -> Result<f64, TransformParseError> {
        match self.unit {
            Unit::None => Ok(self.value),
            _ => Err(self.invalid_unit()),
        }
    }

    fn length(self) -> Result<f64, TransformParseError> {
        match self.unit {
            Unit::None | Unit::Px => Ok(self.value),
            _ => Err(self.invalid_unit()),
        }
    }

    fn factor(self) -> Result<f64, TransformParseError> {
        match self.unit {
            Unit::None => Ok(self.value),
            Unit::Percent => Ok(self.value / 100.0),
            _ => Err(self.invalid_unit()),
        }
    }

    fn angle(self) -> Result<f64, TransformParseError> {
        match self.unit {
            // CSS only allows a unitless zero here; any unitless value is read as radians.
            Unit::None | Unit::Rad => Ok(self.value),
            Unit::Deg => Ok(self.value * PI / 180.0),
            Unit::Grad => Ok(self.value * PI / 200.0),
            Unit::Turn => Ok(self.value * 2.0 * PI),
            _ => Err(self.invalid_unit()),
        }
    }

    fn invalid_unit(self) -> TransformParseError {
        TransformParseError::new(TransformParseErrorKind::InvalidUnit, self.position)
    }
}

type Args = SmallVec<[Arg; 16]>;

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace() || b == b',') {
            self.pos += 1;
        }
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if pred(b)) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    fn error(&self, kind: TransformParseErrorKind) -> TransformParseError {
        TransformParseError::new(kind, self.pos)
    }

    fn function(&mut self) -> Result<Affine, TransformParseError> {
        let name_start = self.pos;
        let name = self.take_while(|b| b.is_ascii_alphanumeric() || b == b'-');
        if name.is_empty() {
            return Err(self.error(TransformParseErrorKind::ExpectedFunction));
        }
        self.skip_ws();
        if self.peek() != Some(b'(') {
            return Err(self.error(TransformParseErrorKind::ExpectedOpenParen));
        }
        self.pos += 1;
        let args = self.arguments()?;
        build_function(name, &args).map_err(|mut err| {
            if err.kind == TransformParseErrorKind::UnknownFunction
                || err.kind == TransformParseErrorKind::ArgumentCount
            {
                err.position = name_start;
            }
            err
        })
    }

    fn arguments(&mut self) -> Result<Args, TransformParseError> {
        let mut args = Args::new();
        loop {
            self.skip_separators();
            match self.peek() {
                None => return Err(self.error(TransformParseErrorKind::UnclosedFunction)),
                Some(b')') => {
                    self.pos += 1;
                    return Ok(args);
                }
                Some(_) => args.push(self.argument()?),
            }
        }
    }

    fn argument(&mut self) -> Result<Arg, TransformParseError> {
        let start = self.pos;
        let mut end = start;
        let bytes = self.src.as_bytes();
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        while matches!(bytes.get(end), Some(b) if b.is_ascii_digit() || *b == b'.') {
            end += 1;
        }
        // Exponent, but only when followed by digits so `1em` is not eaten.
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            if matches!(bytes.get(exp), Some(b) if b.is_ascii_digit()) {
                while matches!(bytes.get(exp), Some(b) if b.is_ascii_digit()) {
                    exp += 1;
                }
                end = exp;
            }
        }
        let value: f64 = self.src[start..end]
            .parse()
            .map_err(|_| TransformParseError::new(TransformParseErrorKind::InvalidNumber, start))?;
        self.pos = end;
        let unit_text = self.take_while(|b| b.is_ascii_alphabetic() || b == b'%');
        let unit = parse_unit(unit_text)
            .ok_or_else(|| TransformParseError::new(TransformParseErrorKind::InvalidUnit, end))?;
        Ok(Arg {
            value,
            unit,
            position: start,
        })
    }
}

fn parse_unit(text: &str) -> Option<Unit> {
    let unit = match text {
        "" => Unit::None,
        "%" => Unit::Percent,
        _ if text.eq_ignore_ascii_case("px") => Unit::Px,
        _ if text.eq_ignore_ascii_case("deg") => Unit::Deg,
        _ if text.eq_ignore_ascii_case("rad") => Unit::Rad,
        _ if text.eq_ignore_ascii_case("grad") => Unit::Grad,
        _ if text.eq_ignore_ascii_case("turn") => Unit::Turn,
        _ => return None,
    };
    Some(unit)
}

fn arity(args: &[Arg], allowed: &[usize]) -> Result<(), TransformParseError> {
    if allowed.contains(&args.len()) {
        Ok(())
    } else {
        Err(TransformParseError::new(
            TransformParseErrorKind::ArgumentCount,
            0,
        ))
    }
}

fn skew_matrix(ax: f64, ay: f64) -> Affine {
    Affine::new([1.0, ay.tan(), ax.tan(), 1.0, 0.0, 0.0])
}

fn build_function(name: &str, args: &[Arg]) -> Result<Affine, TransformParseError> {
    let lower = |expected: &str| name.eq_ignore_ascii_case(expected);
    if lower("matrix") {
        arity(args, &[6])?;
        let mut coeffs = [0.0; 6];
        for (coeff, arg) in coeffs.iter_mut().zip(args) {
            *coeff = arg.number()?;
        }
        Ok(Affine::new(coeffs))
    } else if lower("matrix3d") {
        arity(args, &[16])?;
        // Column-major 4x4; keep the terms that act on the z = 0 plane.
        let m = |i: usize| args[i].number();
        Ok(Affine::new([m(0)?, m(1)?, m(4)?, m(5)?, m(12)?, m(13)?]))
    } else if lower("translate") {
        arity(args, &[1, 2])?;
        let x = args[0].length()?;
        let y = match args.get(1) {
            Some(arg) => arg.length()?,
            None => 0.0,
        };
        Ok(Affine::translate((x, y)))
    } else if lower("translatex") {
        arity(args, &[1])?;
        Ok(Affine::translate((args[0].length()?, 0.0)))
    } else if lower("translatey") {
        arity(args, &[1])?;
        Ok(Affine::translate((0.0, args[0].length()?)))
    } else if lower("translate3d") {
        arity(args, &[3])?;
        args[2].length()?;
        Ok(Affine::translate((args[0].length()?, args[1].length()?)))
    } else if lower("scale") {
        arity(args, &[1, 2])?;
        let x = args[0].factor()?;
        let y = match args.get(1) {
            Some(arg) => arg.factor()?,
            None => x,
        };
        Ok(Affine::scale_non_uniform(x, y))
    } else if lower("scalex") {
        arity(args, &[1])?;
        Ok(Affine::scale_non_uniform(args[0].factor()?, 1.0))
    } else if lower("scaley") {
        arity(args, &[1])?;
        Ok(Affine::scale_non_uniform(1.0, args[0].factor()?))
    } else if lower("scale3d") {
        arity(args, &[3])?;
        args[2].factor()?;
        Ok(Affine::scale_non_uniform(args[0].factor()?, args[1].factor()?))
    } else if lower("rotate") {
        arity(args, &[1])?;
        Ok(Affine::rotate(args[0].angle()?))
    } else if lower("skew") {
        arity(args, &[1, 2])?;
        let ax = args[0].angle()?;
        let ay = match args.get(1) {
            Some(arg) => arg.angle()?,
            None => 0.0,
        };
        Ok(skew_matrix(ax, ay))
    } else if lower("skewx") {
        arity(args, &[1])?;
        Ok(skew_matrix(args[0].angle()?, 0.0))
    } else if lower("skewy") {
        arity(args, &[1])?;
        Ok(skew_matrix(0.0, args[0].angle()?))
    } else {
        Err(TransformParseError::new(
            TransformParseErrorKind::UnknownFunction,
            0,
        ))
    }
}

/// Parses a CSS `transform` value into an affine matrix.
///
/// `none` and the empty string yield [`Affine::IDENTITY`]. The returned matrix
/// keeps its translation; callers interested only in the linear part should
/// zero it (see [`crate::linear_part`]).
pub fn parse_transform(input: &str) -> Result<Affine, TransformParseError> {
    let mut parser = Parser { src: input, pos: 0 };
    parser.skip_ws();
    if parser.rest().trim_end().eq_ignore_ascii_case("none") {
        return Ok(Affine::IDENTITY);
    }
    let mut acc = Affine::IDENTITY;
    while parser.peek().is_some() {
        acc = acc * parser.function()?;
        parser.skip_ws();
    }
    Ok(acc)
}
