// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet extraction.
//!
//! Arbitrary bodies and anchors: case folding that changes lengths, RTL
//! text, combining marks. The window must stay on char boundaries and
//! within its size bound.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mizan::snippet;
use mizan::snippet::{CONTEXT_AFTER, CONTEXT_BEFORE, ELLIPSIS, LEAD_LEN};

#[derive(Debug, Arbitrary)]
struct Input {
    body: String,
    anchor: String,
}

fuzz_target!(|input: Input| {
    // INVARIANT 1: never panics
    let out = snippet(&input.body, &input.anchor);

    // INVARIANT 2: bounded length
    let max = LEAD_LEN.max(CONTEXT_BEFORE + CONTEXT_AFTER) + 2 * ELLIPSIS.len();
    assert!(out.chars().count() <= max, "snippet too long: {}", out.len());

    // INVARIANT 3: empty body, empty snippet
    if input.body.is_empty() {
        assert!(out.is_empty());
    }
});
