// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized timeline points and per-record normalizers.
//!
//! A *point* is a record after normalization: timestamps parsed to epoch
//! seconds, color resolved, legend extracted, and a session-unique
//! [`PointId`] attached. The three point kinds stay distinct structs
//! (activities, states, and resources carry genuinely different data) with
//! [`Point`] as the tagged union for heterogeneous storage inside bands.

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use raven_palette::Palette;
use raven_time::{TimeRange, TimestampParseError, parse_timestamp};

use crate::id::{PointId, PointIdAllocator};
use crate::metadata::{self, ActivityParameter, MetadataEntry};
use crate::record::{ActivityRecord, ResourceRecord, StateRecord};

/// How far past its sample a trailing state point is assumed to extend, in
/// seconds.
///
/// The services deliver state samples without end times; each sample ends
/// where the next begins, which leaves the *last* sample of a batch with no
/// successor to consult. Rather than give it zero width (invisible) it is
/// extended by this fixed amount.
// TODO: Let callers supply the day or query bounds so the trailing sample
// can extend to the real end of the window instead of a fixed 30 seconds.
pub const TRAILING_STATE_EXTENSION_SECS: f64 = 30.0;

/// An activity instance on the timeline.
///
/// Built from an [`ActivityRecord`] by [`ActivityPoint::from_record`]. The
/// original wire strings (`start_timestamp`, `end_timestamp`, `metadata`)
/// are retained alongside the derived values so detail panes can show them
/// and colors can be re-resolved against a different palette.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityPoint {
    /// Session-unique id, assigned at normalization and never changed.
    pub unique_id: PointId,
    /// Id of the data source this point was ingested from.
    pub source_id: String,
    /// Id of the containing sub-band; empty until the point is placed.
    pub sub_band_id: String,
    /// Server document id.
    pub id: String,
    /// Plan-level activity identifier.
    pub activity_id: String,
    /// Human-readable activity name.
    pub activity_name: String,
    /// Activity type name in the mission dictionary.
    pub activity_type: String,
    /// Formal parameters, passed through from the record.
    pub parameters: Vec<ActivityParameter>,
    /// Annotations, passed through from the record.
    pub metadata: Vec<MetadataEntry>,
    /// Ids of enclosing activities, outermost first.
    pub ancestors: Vec<String>,
    /// Service URL for fetching direct children.
    pub children_url: String,
    /// Service URL for fetching the whole subtree.
    pub descendants_url: String,
    /// Start time in UTC epoch seconds.
    pub start: f64,
    /// End time in UTC epoch seconds.
    pub end: f64,
    /// `end - start`, in seconds.
    pub duration: f64,
    /// Scheduled start as delivered, mission-time text.
    pub start_timestamp: String,
    /// Scheduled end as delivered, mission-time text.
    pub end_timestamp: String,
    /// Display color resolved from metadata.
    pub color: Color,
    /// Legend bucket key; empty when the record carries no `legend` entry.
    pub legend: String,
}

impl ActivityPoint {
    /// Normalizes one activity record.
    ///
    /// Both timestamps are parsed (the first failure aborts), `duration` is
    /// derived from them, the color is resolved through `palette`, and the
    /// legend is the value of the last metadata entry named exactly
    /// `legend`, or empty. Everything else is carried over as-is.
    pub fn from_record(
        ids: &PointIdAllocator,
        palette: &Palette,
        source_id: &str,
        record: &ActivityRecord,
    ) -> Result<Self, TimestampParseError> {
        let start = parse_timestamp(&record.start_timestamp)?;
        let end = parse_timestamp(&record.end_timestamp)?;
        let color = palette.resolve(metadata::name_value_pairs(&record.metadata));
        let legend = metadata::last_value(&record.metadata, "legend")
            .unwrap_or("")
            .into();

        Ok(Self {
            unique_id: ids.allocate(),
            source_id: source_id.into(),
            sub_band_id: String::new(),
            id: record.document_id.clone(),
            activity_id: record.activity_id.clone(),
            activity_name: record.activity_name.clone(),
            activity_type: record.activity_type.clone(),
            parameters: record.parameters.clone(),
            metadata: record.metadata.clone(),
            ancestors: record.ancestors.clone(),
            children_url: record.children_url.clone(),
            descendants_url: record.descendants_url.clone(),
            start,
            end,
            duration: end - start,
            start_timestamp: record.start_timestamp.clone(),
            end_timestamp: record.end_timestamp.clone(),
            color,
            legend,
        })
    }
}

/// A discrete state interval on the timeline.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatePoint {
    /// Session-unique id, assigned at normalization and never changed.
    pub unique_id: PointId,
    /// Id of the data source this point was ingested from.
    pub source_id: String,
    /// Id of the containing sub-band; empty until the point is placed.
    pub sub_band_id: String,
    /// Server document id.
    pub id: String,
    /// Start time in UTC epoch seconds.
    pub start: f64,
    /// End time in UTC epoch seconds: the successor's start, or
    /// `start + TRAILING_STATE_EXTENSION_SECS` for the last sample.
    pub end: f64,
    /// `end - start`, in seconds.
    pub duration: f64,
    /// The state's symbolic value over this interval.
    pub value: String,
    /// Whether renderers should interpolate toward the next value rather
    /// than hold and step.
    pub interpolate_ending: bool,
}

impl StatePoint {
    /// Normalizes one state record given its successor, if any.
    ///
    /// The interval ends where `next` begins; the batch's final record has
    /// no successor and is extended by [`TRAILING_STATE_EXTENSION_SECS`]
    /// instead. `interpolate_ending` is set on every point, the trailing
    /// one included.
    pub fn from_record(
        ids: &PointIdAllocator,
        source_id: &str,
        record: &StateRecord,
        next: Option<&StateRecord>,
    ) -> Result<Self, TimestampParseError> {
        let start = parse_timestamp(&record.timestamp)?;
        let end = match next {
            Some(successor) => parse_timestamp(&successor.timestamp)?,
            None => start + TRAILING_STATE_EXTENSION_SECS,
        };

        Ok(Self {
            unique_id: ids.allocate(),
            source_id: source_id.into(),
            sub_band_id: String::new(),
            id: record.document_id.clone(),
            start,
            end,
            duration: end - start,
            value: record.value.clone(),
            interpolate_ending: true,
        })
    }
}

/// An instantaneous numeric resource sample on the timeline.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePoint {
    /// Session-unique id, assigned at normalization and never changed.
    pub unique_id: PointId,
    /// Id of the data source this point was ingested from.
    pub source_id: String,
    /// Id of the containing sub-band; empty until the point is placed.
    pub sub_band_id: String,
    /// Server document id.
    pub id: String,
    /// Sample time in UTC epoch seconds.
    pub start: f64,
    /// Measured or modeled value at that time.
    pub value: f64,
}

impl ResourcePoint {
    /// Normalizes one resource record.
    pub fn from_record(
        ids: &PointIdAllocator,
        source_id: &str,
        record: &ResourceRecord,
    ) -> Result<Self, TimestampParseError> {
        let start = parse_timestamp(&record.timestamp)?;

        Ok(Self {
            unique_id: ids.allocate(),
            source_id: source_id.into(),
            sub_band_id: String::new(),
            id: record.document_id.clone(),
            start,
            value: record.value,
        })
    }
}

/// Any normalized timeline point.
///
/// Bands store heterogeneous points, and lookup/selection rules only care
/// about the fields all kinds share; this enum is that common currency. Use
/// the accessors for shared fields and match on the variant for anything
/// kind-specific.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Point {
    /// An activity instance.
    Activity(ActivityPoint),
    /// A discrete state interval.
    State(StatePoint),
    /// An instantaneous resource sample.
    Resource(ResourcePoint),
}

impl Point {
    /// Returns the session-unique id.
    #[must_use]
    pub fn unique_id(&self) -> PointId {
        match self {
            Self::Activity(point) => point.unique_id,
            Self::State(point) => point.unique_id,
            Self::Resource(point) => point.unique_id,
        }
    }

    /// Returns the id of the data source this point came from.
    #[must_use]
    pub fn source_id(&self) -> &str {
        match self {
            Self::Activity(point) => &point.source_id,
            Self::State(point) => &point.source_id,
            Self::Resource(point) => &point.source_id,
        }
    }

    /// Returns the id of the containing sub-band; empty until placed.
    #[must_use]
    pub fn sub_band_id(&self) -> &str {
        match self {
            Self::Activity(point) => &point.sub_band_id,
            Self::State(point) => &point.sub_band_id,
            Self::Resource(point) => &point.sub_band_id,
        }
    }

    /// Overwrites the containing sub-band id.
    pub fn set_sub_band_id(&mut self, sub_band_id: impl Into<String>) {
        let sub_band_id = sub_band_id.into();
        match self {
            Self::Activity(point) => point.sub_band_id = sub_band_id,
            Self::State(point) => point.sub_band_id = sub_band_id,
            Self::Resource(point) => point.sub_band_id = sub_band_id,
        }
    }

    /// Returns the server document id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Activity(point) => &point.id,
            Self::State(point) => &point.id,
            Self::Resource(point) => &point.id,
        }
    }
}

impl From<ActivityPoint> for Point {
    fn from(point: ActivityPoint) -> Self {
        Self::Activity(point)
    }
}

impl From<StatePoint> for Point {
    fn from(point: StatePoint) -> Self {
        Self::State(point)
    }
}

impl From<ResourcePoint> for Point {
    fn from(point: ResourcePoint) -> Self {
        Self::Resource(point)
    }
}

/// The extent a point contributes to time-range aggregation.
///
/// `end_time` is *not* always the stored end: a point with no duration (an
/// instantaneous sample, or a degenerate interval) contributes only its
/// start, so that stale or meaningless end values cannot stretch a band's
/// range.
pub trait TimelinePoint {
    /// The time this point starts, in UTC epoch seconds.
    fn start_time(&self) -> f64;

    /// The time this point ends for aggregation purposes.
    fn end_time(&self) -> f64;
}

impl TimelinePoint for ActivityPoint {
    fn start_time(&self) -> f64 {
        self.start
    }

    fn end_time(&self) -> f64 {
        if self.duration == 0.0 {
            self.start
        } else {
            self.end
        }
    }
}

impl TimelinePoint for StatePoint {
    fn start_time(&self) -> f64 {
        self.start
    }

    fn end_time(&self) -> f64 {
        if self.duration == 0.0 {
            self.start
        } else {
            self.end
        }
    }
}

impl TimelinePoint for ResourcePoint {
    fn start_time(&self) -> f64 {
        self.start
    }

    fn end_time(&self) -> f64 {
        self.start
    }
}

impl TimelinePoint for Point {
    fn start_time(&self) -> f64 {
        match self {
            Self::Activity(point) => point.start_time(),
            Self::State(point) => point.start_time(),
            Self::Resource(point) => point.start_time(),
        }
    }

    fn end_time(&self) -> f64 {
        match self {
            Self::Activity(point) => point.end_time(),
            Self::State(point) => point.end_time(),
            Self::Resource(point) => point.end_time(),
        }
    }
}

/// Recomputes the smallest [`TimeRange`] covering every point.
///
/// This is an independent O(n) pass over starts and aggregation ends; it
/// does not trust any previously accumulated range. Empty input yields
/// [`TimeRange::EMPTY`], the documented degenerate value.
pub fn max_time_range<'a, P, I>(points: I) -> TimeRange
where
    P: TimelinePoint + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut range = TimeRange::EMPTY;
    for point in points {
        range.include(point.start_time(), point.end_time());
    }
    range
}
