// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=raven_points --heading-base-level=0

//! Raven Points: the timeline point model.
//!
//! This crate sits between the planning services and the timeline: raw
//! server documents come in as [`ActivityRecord`]s, [`StateRecord`]s, and
//! [`ResourceRecord`]s, and normalized points come out, ready for a band to
//! own. Normalization is where timestamps become epoch seconds, metadata
//! becomes a resolved display color and a legend key, and every point gets
//! its session-unique [`PointId`].
//!
//! The batch transforms ([`activities_by_legend`], [`state_points`],
//! [`resource_points`]) each make a single pass over a server response,
//! accumulating the batch's [`TimeRange`] as they go; activities are
//! additionally grouped into [`LegendBuckets`] during that same pass, since
//! each distinct legend becomes its own sub-band downstream.
//!
//! ## Minimal example
//!
//! ```rust
//! use raven_points::{ActivityRecord, MetadataEntry, PointIdAllocator, activities_by_legend};
//! use raven_palette::Palette;
//!
//! let ids = PointIdAllocator::new();
//! let palette = Palette::mission_default();
//!
//! let records = vec![
//!     ActivityRecord {
//!         document_id: "doc-1".into(),
//!         activity_name: "Uplink pass".into(),
//!         metadata: vec![
//!             MetadataEntry::new("legend", "Comm"),
//!             MetadataEntry::new("color", "Dodger Blue"),
//!         ],
//!         start_timestamp: "2022-179T00:00:00".into(),
//!         end_timestamp: "2022-179T00:45:00".into(),
//!         ..Default::default()
//!     },
//!     ActivityRecord {
//!         document_id: "doc-2".into(),
//!         activity_name: "Slew".into(),
//!         start_timestamp: "2022-179T00:30:00".into(),
//!         end_timestamp: "2022-179T00:40:00".into(),
//!         ..Default::default()
//!     },
//! ];
//!
//! let batch = activities_by_legend(&ids, &palette, "/plan/demo", &records).unwrap();
//!
//! // One bucket per distinct legend, the empty legend included.
//! let legends: Vec<_> = batch.legends.legends().collect();
//! assert_eq!(legends, ["Comm", ""]);
//!
//! // The range spans the whole response.
//! assert_eq!(batch.range.span(), 45.0 * 60.0);
//! ```
//!
//! ## Records, points, and ids
//!
//! Records are wire-shaped: all strings, field names matching the service's
//! JSON under the `serde` feature. Points are typed: parsed times, a
//! [`peniko::Color`], and the [`Point`] tagged union for heterogeneous
//! storage. Ids split in two along the same line: a point's `id` is the
//! server document id (stable across sessions, shared by instances of the
//! same activity), while `unique_id` is allocator-issued and unique only
//! for the session, which is what band lookup keys on.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod id;
pub mod metadata;
mod point;
mod record;
mod transform;

pub use id::{PointId, PointIdAllocator};
pub use metadata::{ActivityParameter, MetadataEntry};
pub use point::{
    ActivityPoint, Point, ResourcePoint, StatePoint, TRAILING_STATE_EXTENSION_SECS, TimelinePoint,
    max_time_range,
};
pub use record::{ActivityRecord, ResourceRecord, StateRecord};
pub use transform::{
    ActivityBatch, LegendBuckets, ResourceBatch, StateBatch, activities_by_legend,
    resource_points, state_points,
};
