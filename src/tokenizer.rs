// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization.
//!
//! Lowercase, turn every run of non-letter/non-digit characters into a single
//! space, split. "Letter" and "digit" are Unicode general categories `L` and
//! `N`, so Arabic, Latin and everything else tokenize the same way. Arabic
//! diacritics (harakat) are marks, not letters, and act as separators.
//!
//! Duplicates are kept on purpose: a repeated term is scored twice.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}]+").expect("static tokenizer pattern is valid")
});

/// Split a raw query into lowercase terms, in order of appearance.
///
/// Never fails: empty, whitespace-only, or punctuation-only input yields an
/// empty vec.
///
/// ```
/// use mizan::tokenize;
///
/// assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
/// assert_eq!(tokenize("?!..."), Vec::<String>::new());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
