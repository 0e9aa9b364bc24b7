//! Chunk persistence boundary.
//!
//! Chunks are stored per summary, numbered by their position in the packer's
//! output. The numbering is what lets a summary be reassembled in reading
//! order later.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

/// One stored chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// The summary this chunk belongs to.
    pub summary_id: i64,
    /// Zero-based position of the chunk in the packer output.
    pub chunk_index: usize,
    /// The chunk text.
    pub chunk_text: String,
}

impl ChunkRecord {
    /// Number `chunks` in order for `summary_id`.
    ///
    /// ```rust
    /// use booksplit::ChunkRecord;
    ///
    /// let records = ChunkRecord::from_chunks(7, ["First.", "Second."]);
    /// assert_eq!(records[1].chunk_index, 1);
    /// assert_eq!(records[1].chunk_text, "Second.");
    /// ```
    pub fn from_chunks<I, S>(summary_id: i64, chunks: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        chunks
            .into_iter()
            .enumerate()
            .map(|(chunk_index, text)| Self {
                summary_id,
                chunk_index,
                chunk_text: text.into(),
            })
            .collect()
    }
}

/// Storage for the chunks of a summary.
///
/// Implemented by the enclosing application over its database.
pub trait ChunkStore {
    /// Store `chunks` for `summary_id`, replacing any chunks already stored
    /// for it. Returns the number of chunks stored.
    ///
    /// # Errors
    ///
    /// Backend-specific storage failures.
    fn store_chunks(&mut self, summary_id: i64, chunks: &[String]) -> Result<usize>;

    /// All chunks for `summary_id`, ordered by `chunk_index`.
    ///
    /// # Errors
    ///
    /// Backend-specific storage failures.
    fn chunks_for(&self, summary_id: i64) -> Result<Vec<ChunkRecord>>;
}

/// In-memory [`ChunkStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryChunkStore {
    records: BTreeMap<i64, Vec<ChunkRecord>>,
}

impl MemoryChunkStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of summaries with stored chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ChunkStore for MemoryChunkStore {
    fn store_chunks(&mut self, summary_id: i64, chunks: &[String]) -> Result<usize> {
        let records = ChunkRecord::from_chunks(summary_id, chunks.iter().cloned());
        let stored = records.len();
        debug!(summary_id, chunks = stored, "storing chunks");
        self.records.insert(summary_id, records);
        Ok(stored)
    }

    fn chunks_for(&self, summary_id: i64) -> Result<Vec<ChunkRecord>> {
        Ok(self.records.get(&summary_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_store_and_read_back_in_order() {
        let mut store = MemoryChunkStore::new();
        let stored = store.store_chunks(1, &chunks(&["a.", "b.", "c."])).unwrap();
        assert_eq!(stored, 3);

        let records = store.chunks_for(1).unwrap();
        let indices: Vec<usize> = records.iter().map(|r| r.chunk_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(records[2].chunk_text, "c.");
        assert!(records.iter().all(|r| r.summary_id == 1));
    }

    #[test]
    fn test_store_replaces_existing() {
        let mut store = MemoryChunkStore::new();
        store.store_chunks(5, &chunks(&["old one.", "old two."])).unwrap();
        store.store_chunks(5, &chunks(&["new."])).unwrap();

        let records = store.chunks_for(5).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].chunk_text, "new.");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_summary_is_empty() {
        let store = MemoryChunkStore::new();
        assert!(store.is_empty());
        assert!(store.chunks_for(42).unwrap().is_empty());
    }

    #[test]
    fn test_record_serializes_with_column_names() {
        let record = ChunkRecord::from_chunks(3, ["Text."]).remove(0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "summary_id": 3, "chunk_index": 0, "chunk_text": "Text." })
        );
    }
}
