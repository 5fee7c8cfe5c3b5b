//! Transformation history — a capped, newest-first log of (original,
//! transformed) pairs that survives restarts.
//!
//! The store sits behind a trait so the persistence backend is swappable
//! without touching the transformation pipeline. The default backend is a
//! single JSON file (`file_store`).

pub mod file_store;
pub mod handlers;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept. Older entries are silently discarded.
pub const HISTORY_LIMIT: usize = 20;

/// A persisted transformation record. Field names match what the browser UI
/// reads and what the original localStorage payload used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Time-derived, unique within the collection.
    pub id: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub original_text: String,
    pub transformed_text: String,
    pub transformation_id: String,
    pub transformation_label: String,
    pub content_profile_id: String,
    pub content_profile_label: String,
}

/// A history entry before the store assigns its id and timestamp.
#[derive(Debug, Clone)]
pub struct HistoryDraft {
    pub original_text: String,
    pub transformed_text: String,
    pub transformation_id: String,
    pub transformation_label: String,
    pub content_profile_id: String,
    pub content_profile_label: String,
}

/// Persistence seam for the transformation history.
///
/// Invariants every implementation upholds: at most [`HISTORY_LIMIT`]
/// entries, newest first, unique ids, whole collection persisted after every
/// mutation.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Current collection, newest first.
    async fn load(&self) -> Vec<HistoryEntry>;

    /// Assigns id and timestamp, inserts at the head, truncates to the cap,
    /// persists, and returns the stored entry.
    async fn append(&self, draft: HistoryDraft) -> Result<HistoryEntry>;

    /// Removes one entry. A no-op (still persisted) when the id is absent.
    async fn remove(&self, id: &str) -> Result<()>;

    /// Drops every entry.
    async fn clear(&self) -> Result<()>;
}
