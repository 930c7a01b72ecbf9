// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Title/body weighted search for a small content site.
//!
//! The site publishes fatwas, articles, videos and transcribed khutbahs, each
//! collection a JSON array of loosely shaped records. This crate ranks those
//! records against a visitor's query for the search page and the typeahead
//! box.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────┐   ┌──────────────┐
//! │ tokenizer.rs │──▶│ scoring/core.rs │──▶│  search.rs   │
//! │  (tokenize)  │   │ (score_record)  │   │ (rank, top-K)│
//! └──────────────┘   └─────────────────┘   └──────┬───────┘
//!                             ▲                   │
//!                    ┌────────┴───────┐   ┌───────▼──────┐
//!                    │    clock.rs    │   │  snippet.rs  │
//!                    │ (injected now) │   │  (excerpts)  │
//!                    └────────────────┘   └──────────────┘
//!
//! store.rs (ContentStore) ──▶ in-memory collections ──▶ search.rs
//! ```
//!
//! Ranking is pure: no I/O, no globals, no clock reads of its own. Loading
//! collections (`store`) and reading configuration (`config`) are the only
//! fallible steps, and both happen before ranking starts.
//!
//! # Usage
//!
//! ```
//! use chrono::Utc;
//! use mizan::{rank_full, Collection, ContentRecord, FixedClock, RecordId};
//!
//! let fatwas = vec![ContentRecord {
//!     id: RecordId::Int(1),
//!     title: Some("أحكام الصلاة".to_string()),
//!     content: Some("...".to_string()),
//!     ..Default::default()
//! }];
//! let collections = [Collection::new("fatwas", &fatwas)];
//!
//! let results = rank_full("الصلاة", &collections, &FixedClock(Utc::now()));
//! assert_eq!(results.len(), 1);
//! assert!(results[0].snippet.is_some());
//! ```

// Module declarations
pub mod clock;
pub mod config;
pub mod error;
pub mod scoring;
mod search;
pub mod snippet;
pub mod store;
pub mod testing;
mod tokenizer;
mod types;

// Re-exports for public API
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SearchConfig;
pub use error::{MizanError, Result};
pub use scoring::{score_record, ScoringWeights};
pub use search::{
    rank, rank_full, rank_full_with, rank_suggestions, rank_suggestions_with, score_collections,
    RankOptions,
};
#[cfg(feature = "parallel")]
pub use search::score_collections_parallel;
pub use snippet::snippet;
pub use store::{load_collections, ContentStore, JsonDirStore, LoadedCollections, MemoryStore};
pub use tokenizer::tokenize;
pub use types::{
    parse_timestamp, round_display, Collection, ContentRecord, RecordId, ScoredResult,
    Suggestion, SuggestionResponse,
};
