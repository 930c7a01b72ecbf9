// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Everything has a default, so an empty `{}` file is a valid config and a
//! missing config file is never needed. Loaded values are validated once;
//! the ranking path trusts them afterwards.
//!
//! ```json
//! {
//!   "weights": { "phraseBonus": 50, "titleWeight": 10, "bodyWeight": 2 },
//!   "maxResults": 200,
//!   "maxSuggestions": 6,
//!   "collections": ["fatwas", "articles", "videos", "khutbahs"]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MizanError, Result};
use crate::scoring::ScoringWeights;

/// Result cap for the full search page.
pub const DEFAULT_MAX_RESULTS: usize = 200;

/// Result cap for the typeahead box.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 6;

/// Collections searched when none are configured, in ranking tiebreak order.
pub const DEFAULT_COLLECTIONS: [&str; 4] = ["fatwas", "articles", "videos", "khutbahs"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub weights: ScoringWeights,
    pub max_results: usize,
    pub max_suggestions: usize,
    pub collections: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            weights: ScoringWeights::default(),
            max_results: DEFAULT_MAX_RESULTS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            collections: DEFAULT_COLLECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SearchConfig {
    /// Load and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| MizanError::io(path, e))?;
        let config: SearchConfig =
            serde_json::from_str(&raw).map_err(|e| MizanError::json(path, e))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded search config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate().map_err(MizanError::config)?;
        if self.max_results == 0 {
            return Err(MizanError::config("maxResults must be at least 1"));
        }
        if self.max_suggestions == 0 {
            return Err(MizanError::config("maxSuggestions must be at least 1"));
        }
        if let Some(bad) = self.collections.iter().find(|c| !is_collection_name(c)) {
            return Err(MizanError::config(format!(
                "collection name {:?} must be non-empty and contain only letters, digits, '-' or '_'",
                bad
            )));
        }
        Ok(())
    }
}

/// Collection names become file names in the JSON store, so keep them plain.
pub(crate) fn is_collection_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
