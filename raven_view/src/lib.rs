// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=raven_view --heading-base-level=0

//! Raven View: the visible time-window model for a horizontal timeline.
//!
//! A timeline shows one contiguous slice of mission time through a span of
//! device pixels. [`TimeWindow`] is that slice plus the math around it:
//! - The toolbar operations: pan left/right, step zoom about the window
//!   center, pan-to, and reset-to-bounds.
//! - Anchored zoom, holding the time under a device-space point fixed
//!   (mouse-wheel zoom).
//! - Conversion between epoch seconds and device X coordinates.
//! - Optional clamping against the data bounds via [`BoundsPolicy`].
//!
//! It does **not** draw anything and owns no band data. Callers keep their
//! band structure, feed its aggregate range in as the window's bounds, and
//! read the visible range back out to decide what to draw.
//!
//! ## Minimal example
//!
//! ```rust
//! use raven_time::TimeRange;
//! use raven_view::TimeWindow;
//!
//! // One day of data through an 800 px wide timeline.
//! let bounds = TimeRange::new(0.0, 86_400.0);
//! let mut window = TimeWindow::new(bounds, 0.0..800.0);
//!
//! // Wheel-zoom in, anchored at the view center.
//! let mid = window.view_x_to_time(400.0);
//! window.zoom_about(400.0, 2.0);
//! assert!((window.view_x_to_time(400.0) - mid).abs() < 1e-6);
//!
//! // The toolbar reset snaps back to the data bounds.
//! window.reset();
//! assert_eq!(window.visible(), bounds);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod window;

pub use window::{BoundsPolicy, TimeWindow, TimeWindowDebugInfo};
