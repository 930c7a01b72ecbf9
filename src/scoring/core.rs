// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A record's score is the sum of three parts:
//!
//! ```text
//! score = phrase_bonus · [query phrase occurs in title or body]
//!       + Σ_terms (title_count · title_weight + body_count · body_weight)
//!       + recency(createdAt)            -- only when the sum above is > 0
//! ```
//!
//! # Key Invariant: Weight Ordering
//!
//! ```text
//! phrase_bonus > title_weight > body_weight >= 0
//! ```
//!
//! A title hit always beats a body hit of the same frequency, and a full
//! phrase hit is worth more than any single term in the title. The exact
//! numbers are tunable (`ScoringWeights`); the ordering is not, and
//! `ScoringWeights::validate` rejects configurations that break it.
//!
//! # Recency
//!
//! The bonus is `recency_cap` for a record created now and decays linearly
//! to 0 at `decay_period_days · recency_cap` days old. It rides on top of a
//! text match and never admits a record by itself: an empty query, or a
//! query sharing nothing with the record, scores exactly 0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ContentRecord;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Added once when the whole query phrase appears in title or body.
pub const PHRASE_BONUS: f64 = 20.0;

/// Per occurrence of a term in the title.
pub const TITLE_WEIGHT: f64 = 8.0;

/// Per occurrence of a term in the body.
pub const BODY_WEIGHT: f64 = 2.0;

/// Recency bonus for a brand-new record.
pub const RECENCY_CAP: f64 = 3.0;

/// Days for the recency bonus to drop by one point.
pub const DECAY_PERIOD_DAYS: f64 = 30.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Tunable scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringWeights {
    pub phrase_bonus: f64,
    pub title_weight: f64,
    pub body_weight: f64,
    pub recency_cap: f64,
    pub decay_period_days: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            phrase_bonus: PHRASE_BONUS,
            title_weight: TITLE_WEIGHT,
            body_weight: BODY_WEIGHT,
            recency_cap: RECENCY_CAP,
            decay_period_days: DECAY_PERIOD_DAYS,
        }
    }
}

impl ScoringWeights {
    /// Check the weight ordering and value ranges.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("phraseBonus", self.phrase_bonus),
            ("titleWeight", self.title_weight),
            ("bodyWeight", self.body_weight),
            ("recencyCap", self.recency_cap),
            ("decayPeriodDays", self.decay_period_days),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{} must be finite, got {}", name, value));
        }
        if self.body_weight < 0.0 {
            return Err(format!("bodyWeight must be >= 0, got {}", self.body_weight));
        }
        if self.title_weight <= self.body_weight {
            return Err(format!(
                "titleWeight ({}) must exceed bodyWeight ({})",
                self.title_weight, self.body_weight
            ));
        }
        if self.phrase_bonus <= self.title_weight {
            return Err(format!(
                "phraseBonus ({}) must exceed titleWeight ({})",
                self.phrase_bonus, self.title_weight
            ));
        }
        if self.recency_cap < 0.0 {
            return Err(format!("recencyCap must be >= 0, got {}", self.recency_cap));
        }
        if self.decay_period_days <= 0.0 {
            return Err(format!(
                "decayPeriodDays must be > 0, got {}",
                self.decay_period_days
            ));
        }
        Ok(())
    }
}

/// Non-overlapping literal occurrences of `needle` in `haystack`.
///
/// Plain substring matching: terms are data, never patterns, so `.*` or `(`
/// in a query cannot change what matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Phrase bonus against already-lowercased title and body.
pub fn phrase_bonus(terms: &[String], title: &str, body: &str, weights: &ScoringWeights) -> f64 {
    let phrase = terms.join(" ");
    if phrase.is_empty() {
        return 0.0;
    }
    if title.contains(&phrase) || body.contains(&phrase) {
        weights.phrase_bonus
    } else {
        0.0
    }
}

/// Per-term frequency score against already-lowercased title and body.
pub fn term_score(terms: &[String], title: &str, body: &str, weights: &ScoringWeights) -> f64 {
    terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| {
            count_occurrences(title, term) as f64 * weights.title_weight
                + count_occurrences(body, term) as f64 * weights.body_weight
        })
        .sum()
}

/// Linear recency decay: `max(0, cap - min(age_days / decay, cap))`.
///
/// Future timestamps count as age 0, so the bonus never exceeds the cap.
pub fn recency_bonus(created_at: DateTime<Utc>, now: DateTime<Utc>, weights: &ScoringWeights) -> f64 {
    if weights.decay_period_days.is_nan()
        || weights.decay_period_days <= 0.0
        || weights.recency_cap.is_nan()
        || weights.recency_cap <= 0.0
    {
        return 0.0;
    }
    let age_days = ((now - created_at).num_milliseconds() as f64 / MILLIS_PER_DAY).max(0.0);
    let decayed = (age_days / weights.decay_period_days).min(weights.recency_cap);
    (weights.recency_cap - decayed).max(0.0)
}

/// Score one record against a tokenized query.
///
/// Pure: depends only on its arguments. Returns 0.0 for "no match".
pub fn score_record(
    terms: &[String],
    record: &ContentRecord,
    now: DateTime<Utc>,
    weights: &ScoringWeights,
) -> f64 {
    let title = record.title().to_lowercase();
    let body = record.body().to_lowercase();

    let text = phrase_bonus(terms, &title, &body, weights) + term_score(terms, &title, &body, weights);
    if text.is_nan() || text <= 0.0 {
        return 0.0;
    }

    let recency = record
        .created_at()
        .map_or(0.0, |created| recency_bonus(created, now, weights));
    text + recency
}
