//! Recommendation results and their cached form

use super::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value Object: Recommended Item
///
/// One entry of a ranked list. Personalized and fallback lists share this
/// shape; only the score composition differs. This is also the strict wire
/// schema of the remote recommendation service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecommendationItem {
    /// Recommended catalog item
    pub item_id: ItemId,
    /// Ranking score, unbounded but typically 0 to ~1.5
    pub score: f64,
    /// Short explanation tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RecommendationItem {
    /// Create an item without a reason tag
    pub fn new(item_id: impl Into<ItemId>, score: f64) -> Self {
        Self {
            item_id: item_id.into(),
            score,
            reason: None,
        }
    }

    /// Attach a reason tag
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Cached recommendation list
///
/// Stored as JSON in the cache backend. `expires_at` is checked against the
/// injected clock on every read, so an entry the backend has not yet evicted
/// is still reported as a miss once it is past due.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    /// Deterministic cache key
    pub key: String,
    /// Ranked items
    pub value: Vec<RecommendationItem>,
    /// Instant after which the entry is treated as absent
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Whether the entry is expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Result of a cache read
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// Entry present and not expired
    Hit(CacheEntry),
    /// Entry absent, expired, or invalidated
    Miss,
}

impl CacheLookup {
    /// Items of a hit, `None` on a miss
    pub fn into_items(self) -> Option<Vec<RecommendationItem>> {
        match self {
            Self::Hit(entry) => Some(entry.value),
            Self::Miss => None,
        }
    }

    /// True for a hit
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }
}
