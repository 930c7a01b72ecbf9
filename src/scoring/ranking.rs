// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Higher score first. Equal scores keep their input order (collection
//! order, then record order within a collection), which is what a stable
//! sort with this comparator gives. No title or id tiebreak: the caller's
//! collection order is the tiebreak.

use std::cmp::Ordering;

/// Compare two scores for ranking (descending).
///
/// Uses `total_cmp` so the order is total even if a NaN ever slipped in;
/// the scorer never produces one.
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Stable sort by score descending, then keep the top `limit`.
///
/// Truncation happens after sorting, never before.
pub fn sort_and_truncate<T>(items: &mut Vec<T>, limit: usize, score: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| compare_scores(score(a), score(b)));
    items.truncate(limit);
}
