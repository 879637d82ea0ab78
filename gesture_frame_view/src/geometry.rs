// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small numeric helpers shared by the store and the gesture interpreters.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `hypot`
use kurbo::{Affine, Point, Vec2};

/// Clamps `x` into `[min, max]` by comparison.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the lower bound
/// wins, and a NaN `x` is returned unchanged.
#[must_use]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Clamps negative values to zero.
#[must_use]
pub fn clamp_zero(x: f64) -> f64 {
    if x < 0.0 { 0.0 } else { x }
}

/// Arithmetic mean of `selector` over `items`.
///
/// A single item is returned as is (no division), and an empty slice
/// averages to `0.0`.
pub fn average_by<T>(items: &[T], selector: impl Fn(&T) -> f64) -> f64 {
    match items {
        [] => 0.0,
        [only] => selector(only),
        _ => items.iter().map(&selector).sum::<f64>() / items.len() as f64,
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Returns `affine` with its translation zeroed.
#[must_use]
pub fn linear_part(affine: Affine) -> Affine {
    affine.with_translation(Vec2::ZERO)
}

/// Applies the linear part of `affine` to a vector.
#[must_use]
pub fn transform_vec(affine: Affine, v: Vec2) -> Vec2 {
    let [a, b, c, d, _, _] = affine.as_coeffs();
    Vec2::new(a * v.x + c * v.y, b * v.x + d * v.y)
}
