// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query tokenization.
//!
//! Whatever lands in the search box, the tokenizer must return clean,
//! lowercase terms and agree with itself when fed its own output.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mizan::tokenize;

fuzz_target!(|query: &[u8]| {
    let query = String::from_utf8_lossy(query);

    // INVARIANT 1: never panics
    let terms = tokenize(&query);

    // INVARIANT 2: no empty terms, no separators inside a term
    for term in &terms {
        assert!(!term.is_empty(), "empty term from {:?}", query);
        assert!(
            !term.chars().any(char::is_whitespace),
            "term {:?} contains whitespace",
            term
        );
    }

    // INVARIANT 3: idempotent
    assert_eq!(tokenize(&terms.join(" ")), terms);
});
