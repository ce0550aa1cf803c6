// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An inclusive span of UTC epoch seconds.
///
/// `TimeRange` is the unit of extent bookkeeping: a point covers a range, a
/// band covers the union of its points' ranges, and a timeline covers the
/// union of its bands'. Aggregation starts from [`TimeRange::EMPTY`] and
/// folds spans in with [`TimeRange::include`] or [`TimeRange::union`], for
/// which the empty sentinel is the identity.
///
/// Any range whose `start` exceeds its `end` is treated as empty; the
/// canonical empty value keeps `start` at positive infinity and `end` at
/// negative infinity so that the first folded span always wins both bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    /// Earliest covered time, in UTC epoch seconds.
    pub start: f64,
    /// Latest covered time, in UTC epoch seconds.
    pub end: f64,
}

impl TimeRange {
    /// The empty range: the identity for [`Self::include`] and [`Self::union`].
    pub const EMPTY: Self = Self {
        start: f64::INFINITY,
        end: f64::NEG_INFINITY,
    };

    /// Creates a range from `start` to `end`.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns `true` if this range covers no time at all.
    ///
    /// A degenerate range with `start == end` is *not* empty; it covers a
    /// single instant, which is how instantaneous points report their extent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.start <= self.end)
    }

    /// Returns the covered duration in seconds, or `0.0` when empty.
    #[must_use]
    pub fn span(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.end - self.start
        }
    }

    /// Widens this range to also cover `start..=end`.
    pub fn include(&mut self, start: f64, end: f64) {
        self.start = self.start.min(start);
        self.end = self.end.max(end);
    }

    /// Returns the smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns `true` if `time` falls inside this range, bounds included.
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }

    /// Returns `true` if `self` and `other` cover any instant in common.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns this range translated by `delta` seconds.
    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_identity_for_include() {
        let mut range = TimeRange::EMPTY;
        assert!(range.is_empty());
        range.include(10.0, 20.0);
        assert_eq!(range, TimeRange::new(10.0, 20.0));
    }

    #[test]
    fn include_widens_both_bounds() {
        let mut range = TimeRange::new(10.0, 20.0);
        range.include(5.0, 12.0);
        range.include(18.0, 25.0);
        assert_eq!(range, TimeRange::new(5.0, 25.0));
    }

    #[test]
    fn union_matches_include() {
        let a = TimeRange::new(0.0, 5.0);
        let b = TimeRange::new(3.0, 9.0);
        assert_eq!(a.union(b), TimeRange::new(0.0, 9.0));
        assert_eq!(TimeRange::EMPTY.union(b), b);
        assert_eq!(b.union(TimeRange::EMPTY), b);
    }

    #[test]
    fn instant_ranges_are_not_empty() {
        let instant = TimeRange::new(7.0, 7.0);
        assert!(!instant.is_empty());
        assert_eq!(instant.span(), 0.0);
        assert!(instant.contains(7.0));
    }

    #[test]
    fn empty_span_is_zero() {
        assert_eq!(TimeRange::EMPTY.span(), 0.0);
        assert!(!TimeRange::EMPTY.contains(0.0));
    }

    #[test]
    fn intersects_includes_shared_endpoints() {
        let a = TimeRange::new(0.0, 5.0);
        assert!(a.intersects(&TimeRange::new(5.0, 9.0)));
        assert!(!a.intersects(&TimeRange::new(5.1, 9.0)));
        assert!(!a.intersects(&TimeRange::EMPTY));
    }

    #[test]
    fn shifted_translates_both_bounds() {
        let range = TimeRange::new(10.0, 20.0).shifted(-10.0);
        assert_eq!(range, TimeRange::new(0.0, 10.0));
    }
}
