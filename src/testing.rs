//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::types::{ContentRecord, RecordId};

/// The instant every test pretends is "now".
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Record with a numeric id, title and content, no timestamp.
pub fn make_record(id: i64, title: &str, content: &str) -> ContentRecord {
    ContentRecord {
        id: RecordId::Int(id),
        title: Some(title.to_string()),
        content: Some(content.to_string()),
        ..Default::default()
    }
}

/// Record created `days_old` days before [`test_now`].
pub fn make_dated_record(id: i64, title: &str, content: &str, days_old: i64) -> ContentRecord {
    ContentRecord {
        created_at: Some((test_now() - Duration::days(days_old)).to_rfc3339()),
        ..make_record(id, title, content)
    }
}

/// Record whose body lives in `description` (videos, khutbah PDFs).
pub fn make_described_record(id: i64, title: &str, description: &str) -> ContentRecord {
    ContentRecord {
        id: RecordId::Int(id),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        ..Default::default()
    }
}

/// Owned terms from string literals.
pub fn terms(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
