// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from the fallible edges: loading collections and configuration.
//!
//! Ranking itself never fails. Bad dates, odd queries and empty collections
//! all degrade to "no score" instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `MizanError`.
pub type Result<T> = std::result::Result<T, MizanError>;

#[derive(Error, Debug)]
pub enum MizanError {
    /// File could not be read.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File was read but is not the JSON we expect.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration values are out of range or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MizanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
