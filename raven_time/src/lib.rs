// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=raven_time --heading-base-level=0

//! Raven Time: mission-time timestamps and time ranges.
//!
//! Mission planning tools exchange timestamps in a day-of-year text format,
//! `YYYY-DOYTHH:MM:SS[.fff]`, while everything downstream of ingestion works
//! in numeric UTC seconds so that points can be compared, sorted, and mapped
//! to screen coordinates with plain arithmetic. This crate is the boundary
//! between the two: [`parse_timestamp`] converts the text form into epoch
//! seconds, [`format_timestamp`] converts epoch seconds back, and
//! [`TimeRange`] is the `{start, end}` pair used to describe the extent of a
//! point, a band, or a whole timeline.
//!
//! Parsing is strict. The upstream services emit zero-padded fields, so a
//! malformed or out-of-range timestamp is a data problem worth surfacing
//! rather than papering over; every failure is reported as a
//! [`TimestampParseError`].
//!
//! ## Minimal example
//!
//! ```rust
//! use raven_time::{TimeRange, format_timestamp, parse_timestamp};
//!
//! // Day 179 of 2022 is June 28.
//! let start = parse_timestamp("2022-179T23:41:54.184").unwrap();
//! assert!((start - 1_656_459_714.184).abs() < 1e-6);
//!
//! // Formatting always carries milliseconds.
//! assert_eq!(format_timestamp(start), "2022-179T23:41:54.184");
//!
//! // Ranges grow from the empty sentinel as points are folded in.
//! let mut range = TimeRange::EMPTY;
//! range.include(start, start + 30.0);
//! assert_eq!(range.span(), 30.0);
//! ```
//!
//! ## Why day-of-year?
//!
//! Operations teams schedule against mission elapsed days, so the products
//! this crate ingests identify a day as `2022-179` rather than `2022-06-28`.
//! The conversion uses the proleptic Gregorian calendar and is exact over the
//! whole `i64` day range; times before 1970 format and parse symmetrically.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod range;
mod timestamp;

pub use range::TimeRange;
pub use timestamp::{TimestampParseError, format_timestamp, parse_timestamp};
