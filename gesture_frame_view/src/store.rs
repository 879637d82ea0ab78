// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gesture_frame_timing::{FrameId, Throttle};
use kurbo::{Point, Size, Vec2};

use crate::ambient::{AmbientResolver, AmbientTransform};
use crate::geometry::{clamp, clamp_zero};
use crate::host::{ContainerLayout, FrameHost};
use crate::state::{StateChanges, ViewportState};

/// Scale, bounds and offset of a pan/zoom frame, kept in sync with its host.
///
/// Every mutation goes through a [`FrameHost`]: scale changes are written as
/// the content transform, offset changes as container margin/extent plus a
/// native scroll position. User scrolling flows back in through
/// [`ViewportStore::on_scroll`].
///
/// Writes that would not change the state are no-ops, so they neither touch
/// the host nor bump [`ViewportStore::revision`].
#[derive(Clone, Debug)]
pub struct ViewportStore {
    state: ViewportState,
    margin: Vec2,
    resolver: AmbientResolver,
    scroll_listening: bool,
    scroll_echo: Throttle,
    changes: StateChanges,
    revision: u64,
}

impl Default for ViewportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportStore {
    /// Creates a store with default state (scale 1, bounds `[0.1, 100]`, no offset).
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ViewportState::default(),
            margin: Vec2::ZERO,
            resolver: AmbientResolver::new(),
            scroll_listening: true,
            scroll_echo: Throttle::new(),
            changes: StateChanges::empty(),
            revision: 0,
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Lower scale bound.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.state.min_scale
    }

    /// Upper scale bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.state.max_scale
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.state.offset
    }

    /// Container margin written by the last offset change, in local pixels.
    #[must_use]
    pub fn margin(&self) -> Vec2 {
        self.margin
    }

    /// Counter bumped once per observable change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns and clears the set of fields changed since the last call.
    pub fn take_changes(&mut self) -> StateChanges {
        core::mem::take(&mut self.changes)
    }

    /// Returns `true` unless a programmatic scroll is still echoing.
    #[must_use]
    pub fn is_scroll_listening(&self) -> bool {
        self.scroll_listening
    }

    /// Frame that re-enables the scroll listener, if one is pending.
    #[must_use]
    pub fn pending_scroll_frame(&self) -> Option<FrameId> {
        self.scroll_echo.pending()
    }

    /// Resolves the host's ambient transform, falling back to the last good one.
    pub fn ambient<H: FrameHost>(&mut self, host: &H) -> AmbientTransform {
        match self.resolver.resolve(host.ancestor_styles()) {
            Ok(ambient) => ambient,
            Err(_) => self.resolver.current(),
        }
    }

    /// The memoizing resolver behind [`ViewportStore::ambient`].
    #[must_use]
    pub fn resolver(&self) -> &AmbientResolver {
        &self.resolver
    }

    fn mark(&mut self, change: StateChanges) {
        self.changes |= change;
        self.revision += 1;
    }

    /// Sets the scale, clamped into `[min_scale, max_scale]`.
    ///
    /// Returns `true` if the scale changed.
    pub fn set_scale<H: FrameHost>(&mut self, host: &mut H, scale: f64) -> bool {
        if scale.is_nan() {
            tracing::debug!("ignoring NaN scale");
            return false;
        }
        let scale = clamp(scale, self.state.min_scale, self.state.max_scale);
        if scale == self.state.scale {
            return false;
        }
        self.state.scale = scale;
        self.mark(StateChanges::SCALE);
        host.set_content_scale(scale);
        true
    }

    /// Sets the lower scale bound.
    ///
    /// Non-positive and non-finite bounds are ignored. The scale is pulled up
    /// into the new bound, and the upper bound follows if it would end up below.
    pub fn set_min_scale<H: FrameHost>(&mut self, host: &mut H, min_scale: f64) -> bool {
        if !(min_scale.is_finite() && min_scale > 0.0) {
            tracing::debug!(min_scale, "ignoring invalid min scale");
            return false;
        }
        if min_scale == self.state.min_scale {
            return false;
        }
        self.state.min_scale = min_scale;
        self.mark(StateChanges::MIN_SCALE);
        if self.state.max_scale < min_scale {
            self.state.max_scale = min_scale;
            self.mark(StateChanges::MAX_SCALE);
        }
        if self.state.scale < min_scale {
            self.set_scale(host, min_scale);
        }
        true
    }

    /// Sets the upper scale bound.
    ///
    /// Non-positive and non-finite bounds are ignored. The scale is pulled down
    /// into the new bound, and the lower bound follows if it would end up above.
    pub fn set_max_scale<H: FrameHost>(&mut self, host: &mut H, max_scale: f64) -> bool {
        if !(max_scale.is_finite() && max_scale > 0.0) {
            tracing::debug!(max_scale, "ignoring invalid max scale");
            return false;
        }
        if max_scale == self.state.max_scale {
            return false;
        }
        self.state.max_scale = max_scale;
        self.mark(StateChanges::MAX_SCALE);
        if self.state.min_scale > max_scale {
            self.state.min_scale = max_scale;
            self.mark(StateChanges::MIN_SCALE);
        }
        if self.state.scale > max_scale {
            self.set_scale(host, max_scale);
        }
        true
    }

    /// Moves the content so its top-left sits at `offset`.
    ///
    /// Equal offsets (exact comparison) are a no-op. Otherwise the container
    /// layout and native scroll position are rewritten, and the scroll
    /// listener is muted until the next frame so the resulting scroll event is
    /// not read back as a user scroll.
    pub fn set_offset<H: FrameHost>(&mut self, host: &mut H, offset: Vec2) -> bool {
        if !offset.is_finite() {
            tracing::debug!(?offset, "ignoring non-finite offset");
            return false;
        }
        if offset == self.state.offset {
            return false;
        }
        self.state.offset = offset;
        self.mark(StateChanges::OFFSET);

        let local = self.ambient(host).to_local(offset);
        self.margin = Vec2::new(clamp_zero(local.x), clamp_zero(local.y));
        let client = host.client_size();
        let extent = Size::new(
            if local.x < 0.0 { client.width - local.x } else { 0.0 },
            if local.y < 0.0 { client.height - local.y } else { 0.0 },
        );
        host.set_container_layout(ContainerLayout {
            margin: self.margin,
            extent,
        });
        self.mute_scroll_listener(host);
        host.scroll_to(Point::new(clamp_zero(-local.x), clamp_zero(-local.y)));
        true
    }

    /// Multiplies the scale by `ratio` while keeping `origin` (raw client
    /// coordinates) visually fixed.
    ///
    /// No-op for a ratio of `1`, for invalid ratios, without content, and when
    /// the scale is already at the bound in the requested direction.
    pub fn zoom<H: FrameHost>(&mut self, host: &mut H, ratio: f64, origin: Point) -> bool {
        if ratio == 1.0 || !(ratio.is_finite() && ratio > 0.0) {
            return false;
        }
        if host.content_size().is_none() {
            tracing::debug!("zoom without content");
            return false;
        }
        let previous = self.state.scale;
        let scale = clamp(previous * ratio, self.state.min_scale, self.state.max_scale);
        if scale == previous {
            return false;
        }
        let offset_scale = scale / previous - 1.0;
        let ambient = self.ambient(host);
        let top_left = ambient.normalize_client(host.top_left_client());
        let origin = ambient.normalize_client(origin);
        self.set_scale(host, scale);
        self.set_offset(host, self.state.offset + (top_left - origin) * offset_scale);
        tracing::trace!(ratio, scale, "zoomed");
        true
    }

    /// Moves the content by `delta` raw client pixels.
    ///
    /// The ancestor CSS zoom is folded out so the content follows the pointer
    /// exactly.
    pub fn pan<H: FrameHost>(&mut self, host: &mut H, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        let delta = delta / self.ambient(host).zoom();
        self.set_offset(host, self.state.offset + delta)
    }

    /// Reads a native scroll back into the offset.
    ///
    /// Returns `true` if the offset changed. While muted by a programmatic
    /// scroll this does nothing.
    pub fn on_scroll<H: FrameHost>(&mut self, host: &H) -> bool {
        if !self.scroll_listening {
            tracing::trace!("scroll echo suppressed");
            return false;
        }
        let local = self.margin - host.scroll_position();
        let offset = self.ambient(host).to_viewport(local);
        if offset == self.state.offset {
            return false;
        }
        self.state.offset = offset;
        self.mark(StateChanges::OFFSET);
        true
    }

    /// Offers a running frame to the store.
    ///
    /// Returns `true` if `id` was the frame that re-enables scroll listening.
    pub fn on_animation_frame(&mut self, id: FrameId) -> bool {
        if self.scroll_echo.fire(id) {
            self.scroll_listening = true;
            true
        } else {
            false
        }
    }

    /// Withdraws the pending re-enable frame and listens to scrolls again.
    pub fn cancel_pending<H: FrameHost>(&mut self, host: &mut H) {
        self.scroll_echo.cancel(host);
        self.scroll_listening = true;
    }

    fn mute_scroll_listener<H: FrameHost>(&mut self, host: &mut H) {
        self.scroll_echo.request(host);
        self.scroll_listening = false;
    }
}
