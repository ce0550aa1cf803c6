// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batch transforms: whole server responses to normalized points.
//!
//! Each transform makes a single pass over its records, normalizing,
//! accumulating the batch's time range, and (for activities) bucketing by
//! legend as it goes. The first record that fails to normalize aborts the
//! whole call; callers that want skip-and-continue semantics can compose
//! the per-record normalizers themselves.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;
use raven_palette::Palette;
use raven_time::{TimeRange, TimestampParseError};

use crate::id::PointIdAllocator;
use crate::point::{ActivityPoint, ResourcePoint, StatePoint};
use crate::record::{ActivityRecord, ResourceRecord, StateRecord};

/// Activity points grouped by legend, in order of first appearance.
///
/// Legends are how activity sub-bands get split out of one server response:
/// every distinct `legend` value becomes one bucket, keyed by the literal
/// value (the empty string is an ordinary key). Buckets keep insertion
/// order twice over: the buckets themselves appear in the order their
/// legends first occurred, and points within a bucket stay in input order.
///
/// Lookup by legend is O(1) through a hashed index kept beside the ordered
/// buckets.
#[derive(Clone, Debug, Default)]
pub struct LegendBuckets {
    /// In order of first appearance.
    buckets: Vec<(String, Vec<ActivityPoint>)>,
    index: HashMap<String, usize>,
}

impl LegendBuckets {
    /// Appends a point to its legend's bucket, creating the bucket if this
    /// is the legend's first appearance.
    pub fn push(&mut self, point: ActivityPoint) {
        if let Some(&idx) = self.index.get(&point.legend) {
            self.buckets[idx].1.push(point);
        } else {
            self.index.insert(point.legend.clone(), self.buckets.len());
            let legend = point.legend.clone();
            self.buckets.push((legend, vec![point]));
        }
    }

    /// Returns `true` if there are no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the number of distinct legends seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the total number of points across all buckets.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.buckets.iter().map(|(_, points)| points.len()).sum()
    }

    /// Returns the points bucketed under exactly `legend`, if any.
    #[must_use]
    pub fn get(&self, legend: &str) -> Option<&[ActivityPoint]> {
        self.index
            .get(legend)
            .map(|&idx| self.buckets[idx].1.as_slice())
    }

    /// Returns the legends in order of first appearance.
    pub fn legends<'a>(&'a self) -> impl Iterator<Item = &'a str> {
        self.buckets.iter().map(|(legend, _)| legend.as_str())
    }

    /// Iterates buckets as `(legend, points)`, in order of first appearance.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a [ActivityPoint])> {
        self.buckets
            .iter()
            .map(|(legend, points)| (legend.as_str(), points.as_slice()))
    }
}

impl IntoIterator for LegendBuckets {
    type Item = (String, Vec<ActivityPoint>);
    type IntoIter = vec::IntoIter<(String, Vec<ActivityPoint>)>;

    /// Consumes the buckets in order of first appearance, yielding owned
    /// point vectors ready to be placed into sub-bands.
    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Result of [`activities_by_legend`].
#[derive(Clone, Debug)]
pub struct ActivityBatch {
    /// Normalized points grouped by legend.
    pub legends: LegendBuckets,
    /// Smallest range covering every point in the batch.
    pub range: TimeRange,
}

/// Result of [`state_points`].
#[derive(Clone, Debug)]
pub struct StateBatch {
    /// Normalized points, in input order.
    pub points: Vec<StatePoint>,
    /// Smallest range covering every interval in the batch.
    pub range: TimeRange,
}

/// Result of [`resource_points`].
#[derive(Clone, Debug)]
pub struct ResourceBatch {
    /// Normalized points, in input order.
    pub points: Vec<ResourcePoint>,
    /// Smallest range covering every sample time in the batch.
    pub range: TimeRange,
}

/// Normalizes a batch of activity records, bucketing by legend.
///
/// One pass: each record is normalized, folded into the running time range
/// (min of starts, max of ends), and appended to its legend's bucket. Input
/// order is preserved within each bucket. An empty batch yields no buckets
/// and [`TimeRange::EMPTY`].
///
/// The first unparsable timestamp aborts and discards the partial batch.
pub fn activities_by_legend(
    ids: &PointIdAllocator,
    palette: &Palette,
    source_id: &str,
    records: &[ActivityRecord],
) -> Result<ActivityBatch, TimestampParseError> {
    let mut legends = LegendBuckets::default();
    let mut range = TimeRange::EMPTY;

    for record in records {
        let point = ActivityPoint::from_record(ids, palette, source_id, record)?;
        range.include(point.start, point.end);
        legends.push(point);
    }

    Ok(ActivityBatch { legends, range })
}

/// Normalizes a batch of state records.
///
/// Records must be in time order: each interval ends where the next record
/// begins, and the final record is extended by
/// [`TRAILING_STATE_EXTENSION_SECS`](crate::TRAILING_STATE_EXTENSION_SECS).
/// The range accumulates interval ends, so the trailing extension is part
/// of it.
///
/// The first unparsable timestamp aborts and discards the partial batch.
pub fn state_points(
    ids: &PointIdAllocator,
    source_id: &str,
    records: &[StateRecord],
) -> Result<StateBatch, TimestampParseError> {
    let mut points = Vec::with_capacity(records.len());
    let mut range = TimeRange::EMPTY;

    for (i, record) in records.iter().enumerate() {
        let point = StatePoint::from_record(ids, source_id, record, records.get(i + 1))?;
        range.include(point.start, point.end);
        points.push(point);
    }

    Ok(StateBatch { points, range })
}

/// Normalizes a batch of resource records.
///
/// Samples are instantaneous, so the range covers sample times only.
///
/// The first unparsable timestamp aborts and discards the partial batch.
pub fn resource_points(
    ids: &PointIdAllocator,
    source_id: &str,
    records: &[ResourceRecord],
) -> Result<ResourceBatch, TimestampParseError> {
    let mut points = Vec::with_capacity(records.len());
    let mut range = TimeRange::EMPTY;

    for record in records {
        let point = ResourcePoint::from_record(ids, source_id, record)?;
        range.include(point.start, point.start);
        points.push(point);
    }

    Ok(ResourceBatch { points, range })
}
