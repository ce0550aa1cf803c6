// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::Point;
use raven_time::TimeRange;

/// Fraction of the visible span that one pan step moves.
const PAN_STEP_FRACTION: f64 = 0.25;

/// Factor one zoom step scales the visible span by.
const ZOOM_STEP_FACTOR: f64 = 1.5;

/// Clamp behavior for panning and zooming relative to the data bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Do not apply any clamping; the window may move freely.
    Free,
    /// Clamp so that the window never moves completely past the data
    /// bounds.
    ///
    /// When bounds are present, this mode keeps at least the nearest edge
    /// of the data reachable; it does not forbid looking at the empty
    /// margin around it.
    #[default]
    KeepSomeVisible,
}

/// Visible time window over a horizontal timeline.
///
/// `TimeWindow` tracks the [`TimeRange`] currently shown through a span of
/// device pixels, against the bounds of the data behind it. State is the
/// visible range itself rather than a zoom/pan scalar pair: every
/// operation rewrites `visible`, and the device transform is derived from
/// it on demand.
#[derive(Clone, Debug)]
pub struct TimeWindow {
    visible: TimeRange,
    bounds: TimeRange,
    view_span: Range<f64>,
    min_span: f64,
    policy: BoundsPolicy,
}

impl TimeWindow {
    /// Creates a window showing all of `bounds` through `view_span`.
    ///
    /// - `view_span` is expressed in device units (typically pixels).
    /// - The minimum visible span defaults to one second.
    /// - Clamping defaults to [`BoundsPolicy::KeepSomeVisible`].
    ///
    /// Empty bounds yield an empty window; every operation is then a no-op
    /// until [`TimeWindow::set_bounds`] supplies real data.
    #[must_use]
    pub fn new(bounds: TimeRange, view_span: Range<f64>) -> Self {
        let mut window = Self {
            visible: bounds,
            bounds,
            view_span,
            min_span: 1.0,
            policy: BoundsPolicy::default(),
        };
        window.set_visible(bounds);
        window
    }

    /// Returns the currently visible time range.
    #[must_use]
    pub fn visible(&self) -> TimeRange {
        self.visible
    }

    /// Returns the data bounds.
    #[must_use]
    pub fn bounds(&self) -> TimeRange {
        self.bounds
    }

    /// Replaces the data bounds, e.g. after ingest or point removal.
    ///
    /// The visible range is kept where it is (re-clamped under the current
    /// policy), unless the window was empty, in which case it snaps to the
    /// new bounds.
    pub fn set_bounds(&mut self, bounds: TimeRange) {
        self.bounds = bounds;
        if self.visible.is_empty() {
            self.set_visible(bounds);
        } else {
            self.clamp_to_bounds();
        }
    }

    /// Returns the device span this window maps onto.
    #[must_use]
    pub fn view_span(&self) -> Range<f64> {
        self.view_span.clone()
    }

    /// Sets the device span, e.g. after a resize.
    ///
    /// The visible range is unchanged; only the derived transform moves.
    pub fn set_view_span(&mut self, view_span: Range<f64>) {
        self.view_span = view_span;
    }

    /// Returns the current clamp policy.
    #[must_use]
    pub fn policy(&self) -> BoundsPolicy {
        self.policy
    }

    /// Sets the clamp policy, re-clamping immediately.
    pub fn set_policy(&mut self, policy: BoundsPolicy) {
        if self.policy != policy {
            self.policy = policy;
            self.clamp_to_bounds();
        }
    }

    /// Sets the smallest span the window may zoom down to, in seconds.
    pub fn set_min_span(&mut self, min_span: f64) {
        self.min_span = min_span.max(f64::MIN_POSITIVE);
        self.set_visible(self.visible);
    }

    /// Pans one step toward earlier times.
    pub fn pan_left(&mut self) {
        self.pan_by(-PAN_STEP_FRACTION * self.visible.span());
    }

    /// Pans one step toward later times.
    pub fn pan_right(&mut self) {
        self.pan_by(PAN_STEP_FRACTION * self.visible.span());
    }

    /// Pans by `delta` seconds; positive moves toward later times.
    ///
    /// The span is preserved exactly; only the position changes, subject
    /// to clamping.
    pub fn pan_by(&mut self, delta: f64) {
        if self.visible.is_empty() || delta == 0.0 {
            return;
        }
        self.visible = self.visible.shifted(delta);
        self.clamp_to_bounds();
    }

    /// Shows the given range.
    ///
    /// This is the jump-to-range operation behind "pan to": the window
    /// takes on `range` directly (widened to the minimum span if needed)
    /// and is then clamped. An empty `range` is ignored.
    pub fn pan_to(&mut self, range: TimeRange) {
        if range.is_empty() {
            return;
        }
        self.set_visible(range);
        self.clamp_to_bounds();
    }

    /// Zooms one step in, about the window center.
    pub fn zoom_in(&mut self) {
        self.zoom_about_time(self.center(), ZOOM_STEP_FACTOR);
    }

    /// Zooms one step out, about the window center.
    pub fn zoom_out(&mut self) {
        self.zoom_about_time(self.center(), 1.0 / ZOOM_STEP_FACTOR);
    }

    /// Zooms about an anchor given in device coordinates.
    ///
    /// `factor` greater than one zooms in (the visible span shrinks). The
    /// time under `anchor_view_x` stays at that device position as much as
    /// the minimum span and clamping allow.
    pub fn zoom_about(&mut self, anchor_view_x: f64, factor: f64) {
        self.zoom_about_time(self.view_x_to_time(anchor_view_x), factor);
    }

    /// Zooms about an anchor given in epoch seconds.
    pub fn zoom_about_time(&mut self, anchor: f64, factor: f64) {
        if self.visible.is_empty() || !(factor > 0.0) {
            return;
        }
        let old_span = self.visible.span();
        let new_span = (old_span / factor).max(self.min_span);
        if new_span == old_span {
            return;
        }

        // Keep the anchor at the same relative position in the window.
        let ratio = if old_span > 0.0 {
            (anchor - self.visible.start) / old_span
        } else {
            0.5
        };
        let start = anchor - ratio * new_span;
        self.visible = TimeRange::new(start, start + new_span);
        self.clamp_to_bounds();
    }

    /// Snaps the window back to the data bounds.
    pub fn reset(&mut self) {
        self.set_visible(self.bounds);
    }

    /// Converts epoch seconds to a device X coordinate.
    ///
    /// Times outside the visible range map outside the view span; callers
    /// cull against [`TimeWindow::visible`] first if they care.
    #[must_use]
    pub fn time_to_view_x(&self, time: f64) -> f64 {
        let span = self.visible.span();
        if span <= 0.0 {
            return self.view_span.start;
        }
        let view_len = self.view_span.end - self.view_span.start;
        self.view_span.start + (time - self.visible.start) / span * view_len
    }

    /// Converts a device X coordinate to epoch seconds.
    #[must_use]
    pub fn view_x_to_time(&self, view_x: f64) -> f64 {
        let view_len = self.view_span.end - self.view_span.start;
        if view_len == 0.0 {
            return self.visible.start;
        }
        self.visible.start + (view_x - self.view_span.start) / view_len * self.visible.span()
    }

    /// Convenience conversion from a `Point`, using its X coordinate.
    ///
    /// This helper ignores the point's Y coordinate and uses only `pt.x`;
    /// on a horizontal timeline the vertical position selects a band, not
    /// a time.
    #[must_use]
    pub fn time_at_point(&self, pt: Point) -> f64 {
        self.view_x_to_time(pt.x)
    }

    /// Returns the current seconds-per-pixel ratio.
    #[must_use]
    pub fn seconds_per_pixel(&self) -> f64 {
        let view_len = self.view_span.end - self.view_span.start;
        if view_len == 0.0 {
            return 0.0;
        }
        self.visible.span() / view_len
    }

    /// Snapshot of the current window state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TimeWindowDebugInfo {
        TimeWindowDebugInfo {
            visible: self.visible,
            bounds: self.bounds,
            view_span: self.view_span.clone(),
            min_span: self.min_span,
            seconds_per_pixel: self.seconds_per_pixel(),
            policy: self.policy,
        }
    }

    fn center(&self) -> f64 {
        (self.visible.start + self.visible.end) * 0.5
    }

    /// Assigns the visible range, widening degenerate spans to `min_span`
    /// about their center. Empty input is stored as-is.
    fn set_visible(&mut self, range: TimeRange) {
        if range.is_empty() || range.span() >= self.min_span {
            self.visible = range;
            return;
        }
        let center = (range.start + range.end) * 0.5;
        let half = self.min_span * 0.5;
        self.visible = TimeRange::new(center - half, center + half);
    }

    fn clamp_to_bounds(&mut self) {
        if self.policy == BoundsPolicy::Free {
            return;
        }
        if self.bounds.is_empty() || self.visible.is_empty() {
            return;
        }

        let mut delta = 0.0;
        if self.visible.end < self.bounds.start {
            delta = self.bounds.start - self.visible.end;
        } else if self.visible.start > self.bounds.end {
            delta = self.bounds.end - self.visible.start;
        }

        if delta != 0.0 {
            self.visible = self.visible.shifted(delta);
        }
    }
}

/// Debug snapshot of a [`TimeWindow`] state.
#[derive(Clone, Debug)]
pub struct TimeWindowDebugInfo {
    /// Currently visible time range.
    pub visible: TimeRange,
    /// Data bounds used for clamping and reset.
    pub bounds: TimeRange,
    /// Device span the window maps onto.
    pub view_span: Range<f64>,
    /// Smallest span the window may zoom down to, in seconds.
    pub min_span: f64,
    /// Current seconds-per-pixel ratio.
    pub seconds_per_pixel: f64,
    /// Clamp policy relative to the data bounds.
    pub policy: BoundsPolicy,
}
