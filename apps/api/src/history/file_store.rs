//! JSON-file history backend.
//!
//! The whole collection lives in one file, read once at startup and
//! rewritten after every mutation (write-to-temp then rename, so a crash
//! mid-write never corrupts the previous state). Malformed persisted data is
//! logged and treated as an empty history — never fatal.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::{HistoryDraft, HistoryEntry, HistoryStore, HISTORY_LIMIT};

pub struct JsonFileHistoryStore {
    path: PathBuf,
    entries: Mutex<Vec<HistoryEntry>>,
}

impl JsonFileHistoryStore {
    /// Opens the store, loading any previously persisted collection.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(mut entries) => {
                    // Re-assert the invariants in case the file was edited.
                    entries.truncate(HISTORY_LIMIT);
                    info!("Loaded {} history entries from {}", entries.len(), path.display());
                    entries
                }
                Err(e) => {
                    warn!(
                        "Discarding malformed history at {}: {e}",
                        path.display()
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("Could not read history at {}: {e}", path.display());
                Vec::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Rewrites the whole collection. The temp file lives in the same
    /// directory so the final rename is atomic and a failed write leaves the
    /// previous file intact.
    fn persist(&self, entries: &[HistoryEntry]) -> Result<()> {
        let json = serde_json::to_string(entries).context("Failed to serialize history")?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())
            .context("Failed to write history")?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }

    /// Time-derived id, bumped on collision so two appends in the same
    /// millisecond stay distinguishable.
    fn next_id(entries: &[HistoryEntry], now_ms: i64) -> String {
        let mut candidate = now_ms;
        while entries.iter().any(|e| e.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

#[async_trait::async_trait]
impl HistoryStore for JsonFileHistoryStore {
    async fn load(&self) -> Vec<HistoryEntry> {
        self.entries.lock().await.clone()
    }

    async fn append(&self, draft: HistoryDraft) -> Result<HistoryEntry> {
        let mut entries = self.entries.lock().await;

        let now_ms = Utc::now().timestamp_millis();
        let entry = HistoryEntry {
            id: Self::next_id(&entries, now_ms),
            timestamp: now_ms,
            original_text: draft.original_text,
            transformed_text: draft.transformed_text,
            transformation_id: draft.transformation_id,
            transformation_label: draft.transformation_label,
            content_profile_id: draft.content_profile_id,
            content_profile_label: draft.content_profile_label,
        };

        // Persist the candidate collection first; memory moves only on success.
        let mut next = entries.clone();
        next.insert(0, entry.clone());
        next.truncate(HISTORY_LIMIT);
        self.persist(&next)?;
        *entries = next;
        Ok(entry)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        let mut next = entries.clone();
        next.retain(|e| e.id != id);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.lock().await;
        self.persist(&[])?;
        entries.clear();
        Ok(())
    }
}
