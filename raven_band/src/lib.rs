// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=raven_band --heading-base-level=0

//! Raven Band: the composite band containment model.
//!
//! A timeline is drawn as a stack of [`Band`]s; each band holds ordered
//! [`SubBand`]s, and each sub-band owns the normalized points placed into
//! it. This crate is the bookkeeping around that nesting: guarded point
//! placement (a point learns its sub-band id exactly once, when placed),
//! removal that hands the point back so callers can recompute ranges,
//! ordered lookup by `(band id, point id)`, and the rule for retiring a
//! selected point when its source or sub-band goes away.
//!
//! The presentation layer owns the band structure and decides what each
//! band means; nothing here knows how bands are drawn.
//!
//! ## Minimal example
//!
//! ```rust
//! use raven_band::{Band, SubBand, find_point};
//! use raven_points::{PointIdAllocator, ResourcePoint, ResourceRecord};
//!
//! let ids = PointIdAllocator::new();
//! let record = ResourceRecord {
//!     document_id: "doc-1".into(),
//!     timestamp: "2022-179T12:00:00".into(),
//!     value: 7.5,
//! };
//! let point = ResourcePoint::from_record(&ids, "/plan/power", &record).unwrap();
//! let point_id = point.unique_id;
//!
//! let mut sub_band = SubBand::new("band-0-0", "Battery");
//! sub_band.place(point);
//!
//! let mut band = Band::new("band-0", "Power");
//! band.push_sub_band(sub_band);
//!
//! let bands = [band];
//! let found = find_point(&bands, "band-0", point_id).unwrap();
//! assert_eq!(found.sub_band_id(), "band-0-0");
//! assert!(find_point(&bands, "band-1", point_id).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use raven_points::{Point, PointId, max_time_range};
use raven_time::TimeRange;

/// An ordered run of points inside a band.
///
/// Sub-bands are where points actually live: one sub-band per legend for
/// activities, one per source for states and resources. The point list is
/// private so that placement always stamps the point with this sub-band's
/// id; that stamp happens once, here, and is never revisited even if the
/// sub-band is later renamed (lookup reports the current id instead, see
/// [`find_point`]).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubBand {
    id: String,
    label: String,
    points: Vec<Point>,
}

impl SubBand {
    /// Creates an empty sub-band.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            points: Vec::new(),
        }
    }

    /// Returns this sub-band's id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Renames this sub-band.
    ///
    /// Points already placed keep their original stamp; [`find_point`]
    /// papers over the difference by reporting the current id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sets the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Returns the points in placement order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns `true` if no points have been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of placed points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Places a point into this sub-band, stamping it with the sub-band id.
    ///
    /// This is the one-time `sub_band_id` assignment: points arrive from
    /// normalization with an empty id and leave here owned by this
    /// sub-band.
    pub fn place(&mut self, point: impl Into<Point>) {
        let mut point = point.into();
        point.set_sub_band_id(self.id.clone());
        self.points.push(point);
    }

    /// Removes and returns the point with the given id, if present.
    ///
    /// Remaining points keep their order. The caller gets the point back
    /// so it can decide what the removal means (and recompute ranges via
    /// [`SubBand::time_range`]).
    pub fn remove(&mut self, point_id: PointId) -> Option<Point> {
        let idx = self
            .points
            .iter()
            .position(|point| point.unique_id() == point_id)?;
        Some(self.points.remove(idx))
    }

    /// Recomputes the smallest range covering this sub-band's points.
    ///
    /// An independent pass each call; an empty sub-band yields
    /// [`TimeRange::EMPTY`].
    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        max_time_range(&self.points)
    }
}

/// One visual timeline track: a named, ordered collection of sub-bands.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Band {
    id: String,
    name: String,
    sub_bands: Vec<SubBand>,
}

impl Band {
    /// Creates a band with no sub-bands.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sub_bands: Vec::new(),
        }
    }

    /// Returns this band's id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the sub-bands in display order.
    #[must_use]
    pub fn sub_bands(&self) -> &[SubBand] {
        &self.sub_bands
    }

    /// Returns the sub-band with the given id, if present, for mutation.
    pub fn sub_band_mut(&mut self, sub_band_id: &str) -> Option<&mut SubBand> {
        self.sub_bands
            .iter_mut()
            .find(|sub_band| sub_band.id == sub_band_id)
    }

    /// Appends a sub-band.
    pub fn push_sub_band(&mut self, sub_band: SubBand) {
        self.sub_bands.push(sub_band);
    }

    /// Removes and returns the sub-band with the given id, if present.
    pub fn remove_sub_band(&mut self, sub_band_id: &str) -> Option<SubBand> {
        let idx = self
            .sub_bands
            .iter()
            .position(|sub_band| sub_band.id == sub_band_id)?;
        Some(self.sub_bands.remove(idx))
    }

    /// Returns `true` if this band has no sub-bands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sub_bands.is_empty()
    }

    /// Recomputes the smallest range covering every point in every
    /// sub-band.
    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        let mut range = TimeRange::EMPTY;
        for sub_band in &self.sub_bands {
            range = range.union(sub_band.time_range());
        }
        range
    }
}

/// Looks up one point by `(band id, point id)` across a band list.
///
/// Bands are scanned in order; within each band whose id matches, sub-bands
/// and their points are scanned in order. The first point whose
/// `unique_id` matches wins, and is returned as a clone with its
/// `sub_band_id` overwritten by the containing sub-band's *current* id (the
/// stored stamp can be stale after a rename). Returns [`None`] when no
/// band, sub-band, or point matches; never an error.
///
/// Duplicate ids are not validated; under the id-uniqueness guarantee
/// they cannot occur.
#[must_use]
pub fn find_point(bands: &[Band], band_id: &str, point_id: PointId) -> Option<Point> {
    for band in bands {
        if band.id != band_id {
            continue;
        }
        for sub_band in &band.sub_bands {
            for point in &sub_band.points {
                if point.unique_id() == point_id {
                    let mut found = point.clone();
                    found.set_sub_band_id(sub_band.id.clone());
                    return Some(found);
                }
            }
        }
    }
    None
}

/// Decides whether a selected point survives a structural removal.
///
/// When a source is closed or a sub-band deleted, a selection pointing
/// into it must be retired: the result is [`None`] when `current` exists
/// and its sub-band id equals `sub_band_id` or its source id equals
/// `source_id`. Otherwise `current` passes through untouched.
///
/// This only ever clears. It never selects anything from the given ids;
/// picking a new selection is a different gesture and a different code
/// path.
#[must_use]
pub fn selection_after_removal(
    current: Option<Point>,
    source_id: Option<&str>,
    sub_band_id: Option<&str>,
) -> Option<Point> {
    let selected = current.as_ref()?;

    let in_sub_band = sub_band_id == Some(selected.sub_band_id());
    let from_source = source_id == Some(selected.source_id());

    if in_sub_band || from_source { None } else { current }
}

#[cfg(test)]
mod tests {
    use super::*;

    use raven_points::{PointIdAllocator, ResourcePoint, ResourceRecord};

    fn resource(ids: &PointIdAllocator, source_id: &str, timestamp: &str) -> ResourcePoint {
        let record = ResourceRecord {
            document_id: "doc".into(),
            timestamp: timestamp.into(),
            value: 0.0,
        };
        ResourcePoint::from_record(ids, source_id, &record).unwrap()
    }

    #[test]
    fn place_stamps_the_sub_band_id() {
        let ids = PointIdAllocator::new();
        let mut sub_band = SubBand::new("band-0-0", "Battery");

        let point = resource(&ids, "src", "2022-179T00:00:00");
        assert_eq!(point.sub_band_id, "");
        sub_band.place(point);

        assert_eq!(sub_band.points()[0].sub_band_id(), "band-0-0");
    }

    #[test]
    fn remove_returns_the_point_and_shrinks_the_range() {
        let ids = PointIdAllocator::new();
        let mut sub_band = SubBand::new("band-0-0", "Battery");
        sub_band.place(resource(&ids, "src", "2022-179T00:00:00"));
        let late = resource(&ids, "src", "2022-179T12:00:00");
        let late_id = late.unique_id;
        sub_band.place(late);

        let before = sub_band.time_range();
        let removed = sub_band.remove(late_id).unwrap();
        assert_eq!(removed.unique_id(), late_id);
        assert_eq!(sub_band.len(), 1);

        let after = sub_band.time_range();
        assert_eq!(after.start, before.start);
        assert!(after.end < before.end);
    }

    #[test]
    fn remove_of_absent_id_is_none() {
        let ids = PointIdAllocator::new();
        let mut sub_band = SubBand::new("band-0-0", "Battery");
        sub_band.place(resource(&ids, "src", "2022-179T00:00:00"));

        let absent = resource(&ids, "src", "2022-179T00:00:00").unique_id;
        assert!(sub_band.remove(absent).is_none());
        assert_eq!(sub_band.len(), 1);
    }

    #[test]
    fn band_range_unions_its_sub_bands() {
        let ids = PointIdAllocator::new();
        let mut early = SubBand::new("band-0-0", "A");
        early.place(resource(&ids, "src", "2022-179T00:00:00"));
        let mut late = SubBand::new("band-0-1", "B");
        late.place(resource(&ids, "src", "2022-179T06:00:00"));

        let mut band = Band::new("band-0", "Power");
        band.push_sub_band(early);
        band.push_sub_band(late);

        let range = band.time_range();
        assert_eq!(range.span(), 6.0 * 3_600.0);
    }

    #[test]
    fn empty_structures_have_empty_ranges() {
        let band = Band::new("band-0", "Power");
        assert!(band.time_range().is_empty());
        assert!(SubBand::new("band-0-0", "A").time_range().is_empty());
    }
}
