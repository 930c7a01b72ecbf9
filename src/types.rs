// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a ranking pass.
//!
//! Records come in from the content store exactly as the site saved them:
//! loosely shaped JSON where the body may live under `content` or
//! `description`, ids may be numbers or strings, and timestamps may be
//! missing. These types absorb that looseness once, at deserialization, so
//! the scorer never has to second-guess a field.
//!
//! | Type            | Role                                          |
//! |-----------------|-----------------------------------------------|
//! | `RecordId`      | Opaque id, numeric or string                  |
//! | `ContentRecord` | One fatwa/article/video/khutbah, read-only    |
//! | `Collection`    | Named, ordered slice of records               |
//! | `ScoredResult`  | A record that survived ranking, plus snippet  |
//! | `Suggestion`    | Compact link data for the typeahead box       |

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// =============================================================================
// RECORDS
// =============================================================================

/// Record identifier as stored: the site has written both `12345` and
/// `"12345"` over its lifetime, so both must round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

/// One piece of published content.
///
/// Only the fields the ranker reads are modelled; anything else in the
/// stored JSON (`youtubeId`, `file`, `category`, ...) is ignored. A field of
/// the wrong JSON type reads as absent instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Legacy records carry their display name here instead of `title`.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stored as text. Epoch milliseconds are converted to RFC 3339.
    #[serde(default, deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RecordId, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => match n.as_i64() {
            Some(id) => RecordId::Int(id),
            None => RecordId::Text(n.to_string()),
        },
        Value::String(id) => RecordId::Text(id),
        _ => RecordId::default(),
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => Some(raw),
        Value::Number(n) => n
            .as_f64()
            .filter(|ms| ms.is_finite())
            .and_then(|ms| DateTime::<Utc>::from_timestamp_millis(ms as i64))
            .map(|ts| ts.to_rfc3339()),
        _ => None,
    })
}

impl ContentRecord {
    /// The scored title. Empty when the record has none.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Title for links: `title`, then `name`, then empty.
    pub fn display_title(&self) -> &str {
        non_empty(&self.title)
            .or(non_empty(&self.name))
            .unwrap_or("")
    }

    /// The body text: `content` if present, else `description`, else empty.
    /// An empty string counts as absent.
    ///
    /// This is the only place the fallback is decided.
    pub fn body(&self) -> &str {
        non_empty(&self.content)
            .or(non_empty(&self.description))
            .unwrap_or("")
    }

    /// What a snippet is cut from: the body, or the title for records
    /// (typically videos) that have no body text.
    pub fn snippet_source(&self) -> &str {
        match self.body() {
            "" => self.title(),
            body => body,
        }
    }

    /// Parsed `createdAt`, or `None` when missing or unparseable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Parse the timestamp shapes the admin panel has produced.
///
/// RFC 3339 with an offset is the normal case (`toISOString()` output).
/// Naive date-times and bare dates are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A named, ordered set of records of one content kind.
///
/// Borrowed: the ranker never owns or copies the records it scores.
#[derive(Debug, Clone, Copy)]
pub struct Collection<'a> {
    pub kind: &'a str,
    pub records: &'a [ContentRecord],
}

impl<'a> Collection<'a> {
    pub fn new(kind: &'a str, records: &'a [ContentRecord]) -> Self {
        Collection { kind, records }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A record that scored above zero for the current query.
///
/// Lives only for the duration of one response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult<'a> {
    pub collection_type: &'a str,
    #[serde(serialize_with = "serialize_record_link")]
    pub record: &'a ContentRecord,
    #[serde(serialize_with = "serialize_display_score")]
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl ScoredResult<'_> {
    /// Score rounded to one decimal place, for display only.
    pub fn display_score(&self) -> f64 {
        round_display(self.score)
    }
}

/// Typeahead entry: just enough to render a link.
///
/// Field names match what the site's suggestion box reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: RecordId,
    pub title: String,
    pub score: f64,
}

/// Envelope for the suggestion endpoint's JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Round to one decimal place.
pub fn round_display(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

#[derive(Serialize)]
struct RecordLink<'a> {
    id: &'a RecordId,
    title: &'a str,
}

fn serialize_record_link<S: Serializer>(
    record: &&ContentRecord,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    RecordLink {
        id: &record.id,
        title: record.display_title(),
    }
    .serialize(serializer)
}

fn serialize_display_score<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_display(*score))
}
