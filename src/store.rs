// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only access to content collections.
//!
//! The ranker only ever sees in-memory slices; this module is where they
//! come from. The site keeps one JSON array per collection under its data
//! directory (`data/fatwas.json`, `data/articles.json`, ...). A collection
//! whose file does not exist yet is simply empty, matching how the site
//! treats a fresh install.
//!
//! Nothing here writes. Backups, uploads and admin edits live elsewhere.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::is_collection_name;
use crate::error::{MizanError, Result};
use crate::types::{Collection, ContentRecord};

/// Anything that can hand over the current records of a named collection.
pub trait ContentStore: Send + Sync {
    fn load(&self, collection: &str) -> Result<Vec<ContentRecord>>;
}

/// Collections stored as `<root>/<name>.json`.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JsonDirStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{}.json", collection))
    }
}

impl ContentStore for JsonDirStore {
    fn load(&self, collection: &str) -> Result<Vec<ContentRecord>> {
        if !is_collection_name(collection) {
            return Err(MizanError::config(format!(
                "invalid collection name {:?}",
                collection
            )));
        }

        let path = self.path_for(collection);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(collection, path = %path.display(), "no collection file, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(MizanError::io(path, e)),
        };

        // The site writes "" for a freshly truncated file.
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<ContentRecord> =
            serde_json::from_str(&raw).map_err(|e| MizanError::json(&path, e))?;
        tracing::debug!(collection, count = records.len(), "loaded collection");
        Ok(records)
    }
}

/// Collections held in memory, for tests and for embedding the ranker in a
/// process that already has its content loaded.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<ContentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, collection: impl Into<String>, records: Vec<ContentRecord>) {
        self.collections.insert(collection.into(), records);
    }

    pub fn with(mut self, collection: impl Into<String>, records: Vec<ContentRecord>) -> Self {
        self.insert(collection, records);
        self
    }
}

impl ContentStore for MemoryStore {
    fn load(&self, collection: &str) -> Result<Vec<ContentRecord>> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }
}

/// Records for several collections, loaded up front and owned here so the
/// ranker can borrow them.
#[derive(Debug, Clone, Default)]
pub struct LoadedCollections {
    entries: Vec<(String, Vec<ContentRecord>)>,
}

impl LoadedCollections {
    /// Borrowed views, in load order.
    pub fn collections(&self) -> Vec<Collection<'_>> {
        self.entries
            .iter()
            .map(|(kind, records)| Collection::new(kind, records))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total records across all collections.
    pub fn record_count(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }
}

/// Load each named collection in order.
///
/// A collection that fails to load is logged and left out; one bad file
/// must not take the whole search page down.
pub fn load_collections<S: ContentStore + ?Sized>(store: &S, names: &[String]) -> LoadedCollections {
    let entries = names
        .iter()
        .filter_map(|name| match store.load(name) {
            Ok(records) => Some((name.clone(), records)),
            Err(e) => {
                tracing::warn!(collection = %name, error = %e, "skipping collection");
                None
            }
        })
        .collect();
    LoadedCollections { entries }
}
