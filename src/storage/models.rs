use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One persisted short-link record
///
/// Persisted as camelCase JSON; optional fields are omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLink {
    pub id: String,
    pub original_url: String,
    pub short_code: String,
    /// Epoch milliseconds
    pub created_at: i64,
    #[serde(default)]
    pub visits: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Epoch milliseconds of the latest resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visited: Option<i64>,
}

/// Descriptive fields copied from a successful analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMetadata {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ShortLink {
    pub fn new(
        id: String,
        short_code: String,
        original_url: String,
        metadata: Option<LinkMetadata>,
    ) -> Self {
        let metadata = metadata.unwrap_or_default();
        Self {
            id,
            original_url,
            short_code,
            created_at: Utc::now().timestamp_millis(),
            visits: 0,
            title: metadata.title,
            summary: metadata.summary,
            tags: metadata.tags,
            last_visited: None,
        }
    }

    pub fn created_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_at).single()
    }

    pub fn last_visited_datetime(&self) -> Option<DateTime<Utc>> {
        self.last_visited
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    pub fn has_metadata(&self) -> bool {
        self.title.is_some() || self.summary.is_some() || self.tags.is_some()
    }

    /// Count one resolution; `last_visited` never moves backwards
    pub(crate) fn record_visit(&mut self, now_ms: i64) {
        self.visits = self.visits.saturating_add(1);
        self.last_visited = Some(self.last_visited.map_or(now_ms, |prev| prev.max(now_ms)));
    }
}
