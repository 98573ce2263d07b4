// SPDX-License-Identifier: MPL-2.0
//! Known categories and tags.
//!
//! The selectable lists are wider than what the generator draws from, so
//! uploads can use categories that generated images never have.

/// Categories offered to filters and uploads.
pub const CATEGORIES: [&str; 6] = [
    "Natureza",
    "Cidades",
    "Pessoas",
    "Arte",
    "Tecnologia",
    "Animais",
];

/// Tags offered to filters and uploads.
pub const TAGS: [&str; 5] = ["premium", "nova", "popular", "destacada", "exclusiva"];

/// Categories the image generator picks from.
pub const GENERATED_CATEGORIES: [&str; 3] = ["Natureza", "Cidades", "Pessoas"];

/// Tags the image generator picks from.
pub const GENERATED_TAGS: [&str; 3] = ["premium", "nova", "popular"];

/// Returns the selectable categories as owned strings.
#[must_use]
pub fn categories() -> Vec<String> {
    CATEGORIES.iter().map(ToString::to_string).collect()
}

/// Returns the selectable tags as owned strings.
#[must_use]
pub fn tags() -> Vec<String> {
    TAGS.iter().map(ToString::to_string).collect()
}
