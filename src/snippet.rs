// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpts for the full search page.
//!
//! The window is 60 characters before the first hit of the anchor term and
//! 140 after its start, with `...` on whichever side was cut. Everything is
//! counted in characters, not bytes: a byte window would split Arabic
//! letters in half.
//!
//! Matching is case-insensitive. Lowercasing can change a string's length
//! (`İ` becomes two chars), so the search runs over a folded copy that
//! remembers, for every folded char, which original char it came from.

/// Characters kept before the anchor.
pub const CONTEXT_BEFORE: usize = 60;

/// Characters kept from the anchor onward.
pub const CONTEXT_AFTER: usize = 140;

/// Prefix length used when the anchor is absent.
pub const LEAD_LEN: usize = 200;

/// Marker for cut text.
pub const ELLIPSIS: &str = "...";

/// Excerpt of `body` around the first case-insensitive hit of `anchor`.
///
/// - empty body → `""`
/// - anchor absent or empty → first 200 chars, `...` if cut
/// - otherwise → window around the hit, `...` on cut sides
pub fn snippet(body: &str, anchor: &str) -> String {
    if body.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = body.chars().collect();
    let Some(hit) = find_char_index(&chars, anchor) else {
        return lead(&chars);
    };

    let start = hit.saturating_sub(CONTEXT_BEFORE);
    let end = (hit + CONTEXT_AFTER).min(chars.len());

    let mut out = String::with_capacity((end - start) * 2 + 2 * ELLIPSIS.len());
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.extend(&chars[start..end]);
    if end < chars.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

fn lead(chars: &[char]) -> String {
    let mut out: String = chars.iter().take(LEAD_LEN).collect();
    if chars.len() > LEAD_LEN {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Index (in chars of the original text) of the first case-insensitive
/// occurrence of `needle`.
fn find_char_index(haystack: &[char], needle: &str) -> Option<usize> {
    let needle: Vec<char> = needle.chars().flat_map(fold).collect();
    if needle.is_empty() {
        return None;
    }

    // (folded char, index of the original char it came from)
    let folded: Vec<(char, usize)> = haystack
        .iter()
        .enumerate()
        .flat_map(|(i, c)| fold(*c).map(move |lc| (lc, i)))
        .collect();

    folded
        .windows(needle.len())
        .position(|window| window.iter().zip(&needle).all(|((c, _), n)| c == n))
        .map(|pos| folded[pos].1)
}

/// Per-char case fold. `str::to_lowercase` turns a word-final `Σ` into `ς`
/// and any other into `σ`; both fold to `σ` here so the two sides agree.
fn fold(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|lc| if lc == 'ς' { 'σ' } else { lc })
}
