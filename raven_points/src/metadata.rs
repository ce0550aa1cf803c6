// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name/value metadata attached to activity records.
//!
//! The planning services hang free-form annotations off activities as flat
//! lists of name/value string pairs. Two of those names carry meaning for
//! the timeline: `color` (resolved through `raven_palette`) and `legend`
//! (the bucketing key). Everything else is passed through untouched for
//! detail panes.

use alloc::string::String;
use alloc::vec::Vec;

/// One metadata annotation on an activity: a name/value string pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetadataEntry {
    /// Annotation name, e.g. `legend` or `color`.
    #[cfg_attr(feature = "serde", serde(rename = "Name"))]
    pub name: String,
    /// Annotation value, always textual on the wire.
    #[cfg_attr(feature = "serde", serde(rename = "Value"))]
    pub value: String,
}

impl MetadataEntry {
    /// Creates an entry from a name and a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One formal parameter of an activity instance.
///
/// Parameters are structurally identical to metadata but semantically
/// different: they are the activity's arguments, not annotations, and the
/// timeline never interprets them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityParameter {
    /// Parameter name.
    #[cfg_attr(feature = "serde", serde(rename = "Name"))]
    pub name: String,
    /// Parameter value, always textual on the wire.
    #[cfg_attr(feature = "serde", serde(rename = "Value"))]
    pub value: String,
}

impl ActivityParameter {
    /// Creates a parameter from a name and a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Returns the value of the *last* entry named exactly `name`.
///
/// Entry names are matched case-sensitively; when the same name appears more
/// than once, later entries shadow earlier ones. This is the lookup rule for
/// the `legend` annotation.
#[must_use]
pub fn last_value<'a>(entries: &'a [MetadataEntry], name: &str) -> Option<&'a str> {
    entries
        .iter()
        .rev()
        .find(|entry| entry.name == name)
        .map(|entry| entry.value.as_str())
}

/// Borrows `entries` as `(name, value)` pairs, in order.
///
/// This is the shape `raven_palette`'s resolver consumes.
pub fn name_value_pairs<'a>(
    entries: &'a [MetadataEntry],
) -> impl Iterator<Item = (&'a str, &'a str)> {
    entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.value.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn last_value_prefers_later_entries() {
        let entries = vec![
            MetadataEntry::new("legend", "Uplink"),
            MetadataEntry::new("priority", "7"),
            MetadataEntry::new("legend", "Downlink"),
        ];
        assert_eq!(last_value(&entries, "legend"), Some("Downlink"));
    }

    #[test]
    fn last_value_is_case_sensitive() {
        let entries = vec![MetadataEntry::new("Legend", "Uplink")];
        assert_eq!(last_value(&entries, "legend"), None);
        assert_eq!(last_value(&entries, "Legend"), Some("Uplink"));
    }

    #[test]
    fn last_value_misses_on_empty() {
        assert_eq!(last_value(&[], "legend"), None);
    }

    #[test]
    fn pairs_preserve_order() {
        let entries = vec![
            MetadataEntry::new("color", "Khaki"),
            MetadataEntry::new("legend", "Uplink"),
        ];
        let pairs: Vec<_> = name_value_pairs(&entries).collect();
        assert_eq!(pairs, vec![("color", "Khaki"), ("legend", "Uplink")]);
    }
}
