// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point identity: session-unique ids and the allocator that issues them.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

/// Identifier for a normalized timeline point.
///
/// This is a small, copyable handle issued by [`PointIdAllocator`] when a
/// point is normalized. Two points normalized through the same allocator
/// never share an id, even when they come from different sources or carry
/// the same server document id (instances of the same activity do).
///
/// ## Semantics
///
/// - Assigned exactly once, at normalization; never recomputed afterwards.
/// - Unique within the allocator that issued it, for the whole session.
/// - *Not* stable across sessions, so it must never be persisted as a key.
///   Cross-session identity lives in a point's `id` field, the server
///   document id.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointId(u64);

impl PointId {
    /// Returns the raw numeric value of this id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues [`PointId`]s from an atomic counter.
///
/// Create one allocator per ingest session and pass it by reference to every
/// normalization call; sharing the one allocator is what makes ids unique
/// across bands and sources. Ids start at `1` and increase monotonically.
///
/// The counter is atomic, so one allocator can serve transforms running on
/// several threads.
#[derive(Debug)]
pub struct PointIdAllocator {
    next: AtomicU64,
}

impl PointIdAllocator {
    /// Creates an allocator whose first issued id is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns a fresh id, distinct from every id this allocator has issued.
    #[must_use]
    pub fn allocate(&self) -> PointId {
        PointId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for PointIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
