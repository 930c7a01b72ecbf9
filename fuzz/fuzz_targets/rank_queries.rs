// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the ranking pipeline.
//!
//! Arbitrary queries against arbitrary small collections, with arbitrary
//! (often unparseable) timestamps. Results must be sorted, positive,
//! finite, capped, and identical across repeated runs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mizan::{rank_full, rank_suggestions, Collection, ContentRecord, FixedClock, RecordId};

#[derive(Debug, Arbitrary)]
struct FuzzRecord {
    title: Option<String>,
    content: Option<String>,
    description: Option<String>,
    created_at: Option<String>,
    now_offset_secs: i32,
}

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    records: Vec<FuzzRecord>,
}

fuzz_target!(|input: Input| {
    if input.records.len() > 64 {
        return;
    }

    let records: Vec<ContentRecord> = input
        .records
        .iter()
        .enumerate()
        .map(|(i, r)| ContentRecord {
            id: RecordId::Int(i as i64),
            title: r.title.clone(),
            content: r.content.clone(),
            description: r.description.clone(),
            created_at: r.created_at.clone(),
            ..Default::default()
        })
        .collect();

    let offset = input.records.first().map_or(0, |r| r.now_offset_secs);
    let now = mizan::testing::test_now() + chrono::Duration::seconds(offset as i64);
    let clock = FixedClock(now);
    let collections = [Collection::new("fatwas", &records)];

    // INVARIANT 1: never panics
    let results = rank_full(&input.query, &collections, &clock);

    // INVARIANT 2: capped, positive, finite, sorted
    assert!(results.len() <= 200);
    for result in &results {
        assert!(result.score > 0.0 && result.score.is_finite(), "bad score {}", result.score);
    }
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // INVARIANT 3: deterministic
    assert_eq!(rank_full(&input.query, &collections, &clock), results);

    // INVARIANT 4: suggestions are the head of the full ranking
    let suggestions = rank_suggestions(&input.query, &collections, &clock);
    assert!(suggestions.len() <= 6);
    for (s, r) in suggestions.iter().zip(&results) {
        assert_eq!(s.id, r.record.id);
    }
});
