// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=raven_palette --heading-base-level=0

//! Raven Palette: the named activity color table.
//!
//! Planning services attach display colors to activities indirectly: an
//! activity's metadata carries a `color` entry whose value is a *name*
//! (`"Dodger Blue"`, `"color3"`), and the client owns the table mapping those
//! names to actual colors. This crate is that table. [`Palette`] is an
//! immutable name → [`Color`] mapping built once with [`PaletteBuilder`] (or
//! taken off the shelf with [`Palette::mission_default`]), and
//! [`Palette::resolve`] implements the lookup rule used during point
//! normalization.
//!
//! Resolution is deliberately forgiving: metadata is user-authored, so an
//! unknown color name or a missing `color` entry falls back to
//! [`Palette::FALLBACK`] rather than failing the whole ingest.
//!
//! ## Minimal example
//!
//! ```rust
//! use raven_palette::Palette;
//!
//! let palette = Palette::mission_default();
//!
//! // Metadata keys match case-insensitively, values exactly.
//! let color = palette.resolve([("Color", "Dodger Blue")]);
//! assert_eq!(Some(color.to_rgba8()), palette.get("Dodger Blue").map(|c| c.to_rgba8()));
//!
//! // Unknown names never overwrite a resolved color.
//! let color = palette.resolve([("color", "Dodger Blue"), ("color", "no-such-name")]);
//! assert_eq!(Some(color.to_rgba8()), palette.get("Dodger Blue").map(|c| c.to_rgba8()));
//!
//! // No usable entry at all: opaque black.
//! let color = palette.resolve([("Power", "3.2")]);
//! assert_eq!(color.to_rgba8(), Palette::FALLBACK.to_rgba8());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

pub use peniko::Color;

/// An immutable mapping from color names to colors.
///
/// Palettes are read-only configuration: they are built once, up front, with
/// [`PaletteBuilder`], and then handed by reference to whatever performs
/// color resolution. Entry names are matched exactly, including case.
///
/// Internally entries are stored in a vector sorted by name, so lookup is
/// O(log n) without requiring hashing.
#[derive(Clone, Debug)]
pub struct Palette {
    /// Sorted by name for binary search lookup.
    entries: Vec<(String, Color)>,
}

impl Palette {
    /// The color resolution falls back to: opaque black.
    pub const FALLBACK: Color = Color::BLACK;

    /// Returns the stock mission palette.
    ///
    /// This is the table the planning tools ship with: a set of named pastel
    /// colors plus the numbered `color1` through `color8` slots that older
    /// plan exports reference.
    #[must_use]
    pub fn mission_default() -> Self {
        const ENTRIES: [(&str, [u8; 3]); 24] = [
            ("Aquamarine", [193, 226, 236]),
            ("Cadet Blue", [92, 144, 198]),
            ("Dodger Blue", [66, 130, 198]),
            ("Hot Pink", [245, 105, 171]),
            ("Khaki", [249, 217, 119]),
            ("Lavender", [218, 154, 190]),
            ("Orange", [249, 189, 133]),
            ("Orange Red", [244, 145, 19]),
            ("Pink", [245, 213, 228]),
            ("Plum", [176, 150, 193]),
            ("Purple", [144, 111, 169]),
            ("Salmon", [255, 191, 193]),
            ("Sky Blue", [166, 203, 240]),
            ("Spring Green", [124, 191, 183]),
            ("Violet Red", [183, 80, 163]),
            ("Yellow", [245, 202, 46]),
            ("color1", [0x5F, 0x99, 0x00]),
            ("color2", [0x00, 0x93, 0xC3]),
            ("color3", [0xEE, 0x99, 0x33]),
            ("color4", [0xCF, 0x30, 0x30]),
            ("color5", [0x89, 0x75, 0xD9]),
            ("color6", [0x3D, 0x3A, 0xAD]),
            ("color7", [0xEC, 0x82, 0xB2]),
            ("color8", [0x57, 0x57, 0x57]),
        ];

        let mut builder = PaletteBuilder::new();
        for (name, [r, g, b]) in ENTRIES {
            builder = builder.set(name, Color::from_rgb8(r, g, b));
        }
        builder.build()
    }

    /// Returns `true` if this palette has no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of named colors in this palette.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up a color by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries
            .binary_search_by(|(n, _)| n.as_str().cmp(name))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Returns `true` if this palette has a color under the exact name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .binary_search_by(|(n, _)| n.as_str().cmp(name))
            .is_ok()
    }

    /// Returns an iterator over the entry names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Resolves a display color from name/value metadata pairs.
    ///
    /// Every pair whose name equals `"color"` (ASCII case-insensitively)
    /// nominates its value as a palette entry name. Nominations are applied
    /// in order: each *recognized* name overwrites the running color, each
    /// unrecognized one is skipped, and the last recognized name wins. When
    /// nothing is recognized the result is [`Self::FALLBACK`].
    ///
    /// Value lookup is exact-case; only the `color` key itself is
    /// case-insensitive.
    #[must_use]
    pub fn resolve<'a, I>(&self, metadata: I) -> Color
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut resolved = Self::FALLBACK;
        for (name, value) in metadata {
            if !name.eq_ignore_ascii_case("color") {
                continue;
            }
            if let Some(color) = self.get(value) {
                resolved = color;
            }
        }
        resolved
    }
}

impl Default for Palette {
    /// Returns an *empty* palette, under which every resolution falls back.
    ///
    /// Use [`Palette::mission_default`] for the stock table.
    fn default() -> Self {
        PaletteBuilder::new().build()
    }
}

/// Builder for [`Palette`] instances.
///
/// ```rust
/// use raven_palette::{Color, PaletteBuilder};
///
/// let palette = PaletteBuilder::new()
///     .set("Go", Color::from_rgb8(0, 200, 80))
///     .set("No Go", Color::from_rgb8(200, 30, 30))
///     .build();
///
/// assert_eq!(palette.len(), 2);
/// assert!(palette.contains("No Go"));
/// ```
#[derive(Debug, Default)]
pub struct PaletteBuilder {
    entries: Vec<(String, Color)>,
}

impl PaletteBuilder {
    /// Creates a new empty palette builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color stored under `name`.
    ///
    /// If the name was already set, the color is replaced.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, color: Color) -> Self {
        let name = name.into();
        match self
            .entries
            .binary_search_by(|(n, _)| n.as_str().cmp(name.as_str()))
        {
            Ok(idx) => {
                self.entries[idx].1 = color;
            }
            Err(idx) => {
                self.entries.insert(idx, (name, color));
            }
        }
        self
    }

    /// Builds the palette.
    #[must_use]
    pub fn build(self) -> Palette {
        Palette {
            entries: self.entries,
        }
    }
}
