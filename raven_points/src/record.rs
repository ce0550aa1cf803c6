// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw timeline records as the planning services deliver them.
//!
//! These structs mirror the upstream JSON documents field for field, before
//! any normalization: timestamps are still mission-time strings, colors are
//! still metadata annotations, and nothing has an allocated point id yet.
//! Under the `serde` feature their field renames match the wire names
//! exactly, so a service response deserializes directly into `Vec`s of
//! records.

use alloc::string::String;
use alloc::vec::Vec;

use crate::metadata::{ActivityParameter, MetadataEntry};

/// One activity instance as delivered by the planning service.
///
/// Every textual field is passed through normalization untouched; only the
/// two timestamps are parsed. `metadata`, `parameters`, and `ancestors` are
/// optional on the wire and deserialize as empty lists when absent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityRecord {
    /// Server document id. Instances of the same activity share it.
    #[cfg_attr(feature = "serde", serde(rename = "__document_id"))]
    pub document_id: String,
    /// Plan-level activity identifier.
    #[cfg_attr(feature = "serde", serde(rename = "Activity ID"))]
    pub activity_id: String,
    /// Human-readable activity name.
    #[cfg_attr(feature = "serde", serde(rename = "Activity Name"))]
    pub activity_name: String,
    /// Activity type name in the mission dictionary.
    #[cfg_attr(feature = "serde", serde(rename = "Activity Type"))]
    pub activity_type: String,
    /// Formal parameters of this instance.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Activity Parameters", default)
    )]
    pub parameters: Vec<ActivityParameter>,
    /// Free-form annotations; `color` and `legend` are interpreted.
    #[cfg_attr(feature = "serde", serde(rename = "Metadata", default))]
    pub metadata: Vec<MetadataEntry>,
    /// Ids of enclosing activities, outermost first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ancestors: Vec<String>,
    /// Service URL for fetching direct children.
    #[cfg_attr(feature = "serde", serde(rename = "childrenUrl", default))]
    pub children_url: String,
    /// Service URL for fetching the whole subtree.
    #[cfg_attr(feature = "serde", serde(rename = "descendantsUrl", default))]
    pub descendants_url: String,
    /// Scheduled start, as a mission-time string.
    #[cfg_attr(feature = "serde", serde(rename = "Tstart Assigned"))]
    pub start_timestamp: String,
    /// Scheduled end, as a mission-time string.
    #[cfg_attr(feature = "serde", serde(rename = "Tend Assigned"))]
    pub end_timestamp: String,
}

/// One sample of a discrete state variable.
///
/// State records carry no end time; a state lasts until the next record's
/// timestamp takes over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateRecord {
    /// Server document id.
    #[cfg_attr(feature = "serde", serde(rename = "__document_id"))]
    pub document_id: String,
    /// Sample time, as a mission-time string.
    #[cfg_attr(feature = "serde", serde(rename = "Data Timestamp"))]
    pub timestamp: String,
    /// The state's symbolic value at that time.
    #[cfg_attr(feature = "serde", serde(rename = "Data Value"))]
    pub value: String,
}

/// One sample of a numeric resource profile.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceRecord {
    /// Server document id.
    #[cfg_attr(feature = "serde", serde(rename = "__document_id"))]
    pub document_id: String,
    /// Sample time, as a mission-time string.
    #[cfg_attr(feature = "serde", serde(rename = "Data Timestamp"))]
    pub timestamp: String,
    /// Measured or modeled value at that time.
    #[cfg_attr(feature = "serde", serde(rename = "Data Value"))]
    pub value: f64,
}
