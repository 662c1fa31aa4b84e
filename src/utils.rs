// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the matcher and the index builder.
//!
//! Both sides of the index must agree on what a "word" looks like, otherwise
//! the builder writes keys the matcher can never produce. Everything that
//! touches a word goes through [`normalize`].

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, decompose, strip diacritics.
///
/// - "Café" → "cafe"
/// - "tummalachērla" → "tummalacherla"
/// - "naïve" → "naive"
///
/// Whitespace is left untouched. The matcher splits on single spaces after
/// normalizing and has to see the same token boundaries the user typed.
///
/// Lowercasing runs before decomposition so that characters whose lowercase
/// form carries a combining mark (`İ` → `i̇`) lose it too. That keeps the
/// function idempotent.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Split a normalized query into word tokens on the space character.
///
/// Leading, trailing and doubled spaces produce empty tokens. They are kept
/// so the caller sees exactly what was typed; an empty token never matches.
pub fn split_query(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ')
}

/// Split document text into indexable words.
///
/// Anything that is not alphanumeric separates words, so "C++/Java" yields
/// `["c", "java"]`. Expects already-normalized input.
pub fn split_words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

/// Whether a site path points outside the site.
///
/// Internal paths are rooted (`/work/facephi`); anything else
/// (`https://github.com/...`, `mailto:...`) opens in a new context.
pub fn is_external_path(path: &str) -> bool {
    !path.starts_with('/')
}

/// Combining diacritical marks stripped by [`normalize`].
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
