// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ambient transform: the accumulated CSS transforms of an element's ancestors.
//!
//! Only the linear part (scale, rotation, skew) matters for mapping deltas
//! between client pixels and the element's local coordinate space; the
//! translation is handled by layout and is always zeroed here.

use alloc::string::String;

use kurbo::{Affine, Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::css::{TransformParseError, TransformParseErrorKind, parse_transform};
use crate::geometry::{linear_part, transform_vec};

/// Determinants below this are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// Computed style values of one element in the ancestor chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AncestorStyle<'a> {
    /// Computed `transform` (`"none"` or empty when absent).
    pub transform: &'a str,
    /// Computed CSS `zoom` factor, `1.0` when unsupported.
    pub zoom: f64,
}

impl<'a> AncestorStyle<'a> {
    /// Style with the given transform and no CSS zoom.
    #[must_use]
    pub fn new(transform: &'a str) -> Self {
        Self {
            transform,
            zoom: 1.0,
        }
    }

    /// Returns a copy with the given CSS zoom factor.
    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }

    fn has_transform(&self) -> bool {
        let t = self.transform.trim();
        !t.is_empty() && !t.eq_ignore_ascii_case("none")
    }
}

/// A pair of mutually inverse linear maps plus the accumulated CSS zoom.
///
/// `forward` maps element-local vectors into (zoom corrected) client space;
/// `inverse` maps them back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientTransform {
    forward: Affine,
    inverse: Affine,
    zoom: f64,
}

impl Default for AmbientTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AmbientTransform {
    /// No ancestor transform and no zoom.
    pub const IDENTITY: Self = Self {
        forward: Affine::IDENTITY,
        inverse: Affine::IDENTITY,
        zoom: 1.0,
    };

    /// Builds an ambient transform from a matrix, dropping its translation.
    pub fn from_matrix(matrix: Affine) -> Result<Self, TransformParseError> {
        let forward = linear_part(matrix);
        let det = forward.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return Err(TransformParseError::new(
                TransformParseErrorKind::Singular,
                0,
            ));
        }
        Ok(Self {
            forward,
            inverse: forward.inverse(),
            zoom: 1.0,
        })
    }

    /// Returns a copy with the given CSS zoom factor.
    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }

    /// Local → client linear map.
    #[must_use]
    pub fn forward(&self) -> Affine {
        self.forward
    }

    /// Client → local linear map.
    #[must_use]
    pub fn inverse(&self) -> Affine {
        self.inverse
    }

    /// Accumulated CSS zoom of the chain.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Maps an element-local vector into the viewport's offset space.
    #[must_use]
    pub fn to_viewport(&self, local: Vec2) -> Vec2 {
        transform_vec(self.forward, local)
    }

    /// Maps an offset-space vector into element-local pixels.
    #[must_use]
    pub fn to_local(&self, viewport: Vec2) -> Vec2 {
        transform_vec(self.inverse, viewport)
    }

    /// Folds the CSS zoom out of a raw client coordinate.
    #[must_use]
    pub fn normalize_client(&self, raw: Point) -> Point {
        Point::new(raw.x / self.zoom, raw.y / self.zoom)
    }

    /// Folds the CSS zoom out of a raw client rectangle.
    #[must_use]
    pub fn normalize_client_rect(&self, raw: Rect) -> Rect {
        Rect::new(
            raw.x0 / self.zoom,
            raw.y0 / self.zoom,
            raw.x1 / self.zoom,
            raw.y1 / self.zoom,
        )
    }
}

/// Memoizing resolver for an element's [`AmbientTransform`].
///
/// The concatenated transform serialization of the chain is the cache key, so
/// walking the ancestors on every pointer move is cheap as long as nothing
/// changed: no parsing and no inversion happen on a cache hit.
#[derive(Clone, Debug)]
pub struct AmbientResolver {
    key: String,
    scratch: String,
    linear: AmbientTransform,
    zoom: f64,
    recomputations: u64,
    failed_key: String,
    failure: Option<TransformParseError>,
    failures: u64,
}

impl Default for AmbientResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbientResolver {
    /// Creates a resolver whose memoized value is the identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key: String::new(),
            scratch: String::new(),
            linear: AmbientTransform::IDENTITY,
            zoom: 1.0,
            recomputations: 0,
            failed_key: String::new(),
            failure: None,
            failures: 0,
        }
    }

    /// Resolves the ambient transform of a chain given element-first.
    ///
    /// On a parse failure the previously memoized transform stays in place and
    /// the error is returned; see [`AmbientResolver::current`]. A failing
    /// chain is remembered, so resolving it again returns the same error
    /// without parsing or logging.
    pub fn resolve<'a, I>(&mut self, chain: I) -> Result<AmbientTransform, TransformParseError>
    where
        I: IntoIterator<Item = AncestorStyle<'a>>,
    {
        let mut transforms = SmallVec::<[&'a str; 8]>::new();
        let mut zoom = 1.0;
        for style in chain {
            if style.has_transform() {
                transforms.push(style.transform.trim());
            }
            if style.zoom.is_finite() && style.zoom > 0.0 {
                zoom *= style.zoom;
            }
        }
        self.zoom = zoom;

        // Outermost ancestor first, matching how the matrices compose.
        self.scratch.clear();
        for transform in transforms.iter().rev() {
            if !self.scratch.is_empty() {
                self.scratch.push(' ');
            }
            self.scratch.push_str(transform);
        }

        if self.scratch == self.key {
            return Ok(self.current());
        }
        if let Some(err) = self.failure.filter(|_| self.scratch == self.failed_key) {
            return Err(err);
        }
        match parse_transform(&self.scratch).and_then(AmbientTransform::from_matrix) {
            Ok(linear) => {
                core::mem::swap(&mut self.key, &mut self.scratch);
                self.linear = linear;
                self.failure = None;
                self.recomputations += 1;
                tracing::debug!(key = %self.key, "ambient transform recomputed");
                Ok(self.current())
            }
            Err(err) => {
                tracing::warn!(transform = %self.scratch, %err, "ignoring ambient transform");
                core::mem::swap(&mut self.failed_key, &mut self.scratch);
                self.failure = Some(err);
                self.failures += 1;
                Err(err)
            }
        }
    }

    /// The last successfully resolved transform.
    #[must_use]
    pub fn current(&self) -> AmbientTransform {
        self.linear.with_zoom(self.zoom)
    }

    /// Cache key of the memoized transform.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// How many times the matrices were parsed and inverted.
    #[must_use]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// How many distinct chains failed to parse or invert.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.failures
    }
}
