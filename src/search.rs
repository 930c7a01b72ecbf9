// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking and result assembly.
//!
//! One pipeline serves both the search page and the typeahead box:
//!
//! ```text
//! query ─▶ tokenize ─▶ score every record ─▶ keep > 0 ─▶ stable sort ─▶ top-K
//!                                                                    │
//!                                        full mode: attach snippets ◀┘
//! ```
//!
//! The two entry points differ only in `RankOptions` (cap, snippets on/off),
//! so suggestions can never drift from full search in how they score.
//!
//! Records are scored independently. With the `parallel` feature the scoring
//! step fans out over rayon; `collect` keeps input order, so the stable sort
//! sees exactly what the sequential path would.

use chrono::{DateTime, Utc};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::clock::Clock;
use crate::config::SearchConfig;
use crate::scoring::ranking::sort_and_truncate;
use crate::scoring::{score_record, ScoringWeights};
use crate::snippet::snippet;
use crate::tokenizer::tokenize;
use crate::types::{Collection, ContentRecord, ScoredResult, Suggestion};

/// Knobs for one ranking pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    pub include_snippets: bool,
    pub max_results: usize,
    pub weights: ScoringWeights,
}

impl RankOptions {
    /// Search page: snippets on, large cap.
    pub fn full(config: &SearchConfig) -> Self {
        RankOptions {
            include_snippets: true,
            max_results: config.max_results,
            weights: config.weights,
        }
    }

    /// Typeahead: no snippets, small cap.
    pub fn suggestions(config: &SearchConfig) -> Self {
        RankOptions {
            include_snippets: false,
            max_results: config.max_suggestions,
            weights: config.weights,
        }
    }
}

/// Every (collection, record) pair in input order.
fn candidates<'a>(collections: &[Collection<'a>]) -> Vec<(&'a str, &'a ContentRecord)> {
    collections
        .iter()
        .flat_map(|c| c.records.iter().map(move |record| (c.kind, record)))
        .collect()
}

fn keep_match<'a>(
    terms: &[String],
    kind: &'a str,
    record: &'a ContentRecord,
    now: DateTime<Utc>,
    weights: &ScoringWeights,
) -> Option<ScoredResult<'a>> {
    let score = score_record(terms, record, now, weights);
    (score > 0.0).then_some(ScoredResult {
        collection_type: kind,
        record,
        score,
        snippet: None,
    })
}

/// Score every record and keep the matches, in input order.
pub fn score_collections<'a>(
    terms: &[String],
    collections: &[Collection<'a>],
    now: DateTime<Utc>,
    weights: &ScoringWeights,
) -> Vec<ScoredResult<'a>> {
    candidates(collections)
        .into_iter()
        .filter_map(|(kind, record)| keep_match(terms, kind, record, now, weights))
        .collect()
}

/// Parallel version of [`score_collections`]. Same output, same order.
#[cfg(feature = "parallel")]
pub fn score_collections_parallel<'a>(
    terms: &[String],
    collections: &[Collection<'a>],
    now: DateTime<Utc>,
    weights: &ScoringWeights,
) -> Vec<ScoredResult<'a>> {
    candidates(collections)
        .into_par_iter()
        .filter_map(|(kind, record)| keep_match(terms, kind, record, now, weights))
        .collect()
}

/// Rank tokenized `terms` across `collections`.
///
/// Matches (score > 0) are sorted by score descending, ties in input order,
/// then cut to `options.max_results`. Snippets are cut only for survivors,
/// anchored on the first query term.
pub fn rank<'a>(
    terms: &[String],
    collections: &[Collection<'a>],
    now: DateTime<Utc>,
    options: &RankOptions,
) -> Vec<ScoredResult<'a>> {
    #[cfg(feature = "parallel")]
    let mut results = score_collections_parallel(terms, collections, now, &options.weights);
    #[cfg(not(feature = "parallel"))]
    let mut results = score_collections(terms, collections, now, &options.weights);

    let matched = results.len();
    sort_and_truncate(&mut results, options.max_results, |r| r.score);

    if options.include_snippets {
        let anchor = terms.first().map(String::as_str).unwrap_or("");
        for result in &mut results {
            result.snippet = Some(snippet(result.record.snippet_source(), anchor));
        }
    }

    tracing::debug!(
        terms = terms.len(),
        collections = collections.len(),
        matched,
        returned = results.len(),
        "ranked"
    );
    results
}

/// Full search with the default configuration (200 results, snippets).
pub fn rank_full<'a>(
    query: &str,
    collections: &[Collection<'a>],
    clock: &dyn Clock,
) -> Vec<ScoredResult<'a>> {
    rank_full_with(query, collections, clock, &SearchConfig::default())
}

/// Full search with an explicit configuration.
pub fn rank_full_with<'a>(
    query: &str,
    collections: &[Collection<'a>],
    clock: &dyn Clock,
    config: &SearchConfig,
) -> Vec<ScoredResult<'a>> {
    let terms = tokenize(query);
    rank(&terms, collections, clock.now(), &RankOptions::full(config))
}

/// Typeahead suggestions with the default configuration (6 results).
pub fn rank_suggestions(
    query: &str,
    collections: &[Collection<'_>],
    clock: &dyn Clock,
) -> Vec<Suggestion> {
    rank_suggestions_with(query, collections, clock, &SearchConfig::default())
}

/// Typeahead suggestions with an explicit configuration.
pub fn rank_suggestions_with(
    query: &str,
    collections: &[Collection<'_>],
    clock: &dyn Clock,
    config: &SearchConfig,
) -> Vec<Suggestion> {
    let terms = tokenize(query);
    rank(&terms, collections, clock.now(), &RankOptions::suggestions(config))
        .into_iter()
        .map(|result| Suggestion {
            kind: result.collection_type.to_string(),
            id: result.record.id.clone(),
            title: result.record.display_title().to_string(),
            score: result.score,
        })
        .collect()
}
