//! In-memory store for memory records
//!
//! Holds the authoritative, process-lifetime collection behind
//! `tokio::sync::RwLock`, newest first. Creation runs captures through the
//! classification pipeline; every other operation is synchronous, in-memory,
//! and immediately visible to subsequent reads.

use super::clock::{Clock, IdSource, SystemClock, UuidSource};
use super::types::{
    CaptureInput, Memory, MemoryKind, MemoryPatch, MemoryStats, TypeFilter, DEFAULT_IMPORTANCE,
};
use crate::classify::MetadataClassifier;
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

const TAG_LIMIT: usize = 6;

/// Owner of all memory records.
///
/// Consumers receive cloned read views; mutation goes through the store's
/// operations, each of which refreshes `updated_at`.
pub struct MemoryStore {
    memories: Arc<RwLock<Vec<Memory>>>,
    classifier: Arc<dyn MetadataClassifier>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
}

impl MemoryStore {
    /// Create an empty store backed by the given classifier
    pub fn new(classifier: Arc<dyn MetadataClassifier>) -> Self {
        Self {
            memories: Arc::new(RwLock::new(Vec::new())),
            classifier,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidSource),
        }
    }

    /// Substitute the clock (deterministic tests)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Substitute the id source (deterministic tests)
    pub fn with_ids(mut self, ids: Arc<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Capture a new memory.
    ///
    /// Rejects empty or whitespace-only content before the pipeline runs.
    /// Awaits classification (the pipeline's simulated latency), assembles
    /// the record, and prepends it so the collection stays newest-first.
    pub async fn create(&self, input: CaptureInput) -> Result<Memory> {
        if input.content.trim().is_empty() {
            return Err(Error::Capture("capture content is empty".to_string()));
        }

        let metadata = self.classifier.classify(&input).await;
        let now = self.clock.now();

        let memory = Memory {
            id: self.ids.next_id(),
            kind: input.kind,
            content: input.content,
            source: input.source,
            title: metadata.title,
            summary: metadata.summary,
            tags: metadata.tags,
            categories: metadata.categories,
            topics: metadata.topics,
            sentiment: metadata.sentiment,
            entities: metadata.entities,
            language: metadata.language,
            collection_ids: Vec::new(),
            is_favorite: false,
            is_archived: false,
            importance: DEFAULT_IMPORTANCE,
            created_at: now,
            updated_at: now,
            accessed_at: now,
            access_count: 0,
        };

        self.memories.write().await.insert(0, memory.clone());
        tracing::debug!(id = %memory.id, title = %memory.title, "memory captured");
        Ok(memory)
    }

    /// Retrieve a memory by id
    pub async fn get(&self, id: &Uuid) -> Option<Memory> {
        self.memories
            .read()
            .await
            .iter()
            .find(|m| m.id == *id)
            .cloned()
    }

    /// All memories, newest first
    pub async fn list(&self) -> Vec<Memory> {
        self.memories.read().await.clone()
    }

    /// Number of stored memories
    pub async fn len(&self) -> usize {
        self.memories.read().await.len()
    }

    /// Whether the store holds no memories
    pub async fn is_empty(&self) -> bool {
        self.memories.read().await.is_empty()
    }

    /// Apply a partial update, refreshing `updated_at`.
    ///
    /// Returns the updated record, or `None` for an unknown id. Tag and
    /// category constraints are re-applied to patched values.
    pub async fn update(&self, id: &Uuid, patch: MemoryPatch) -> Option<Memory> {
        let mut memories = self.memories.write().await;
        let memory = memories.iter_mut().find(|m| m.id == *id)?;

        if let Some(title) = patch.title {
            memory.title = title;
        }
        if let Some(summary) = patch.summary {
            memory.summary = summary;
        }
        if let Some(mut tags) = patch.tags {
            let mut seen = HashSet::new();
            tags.retain(|tag| seen.insert(tag.clone()));
            tags.truncate(TAG_LIMIT);
            memory.tags = tags;
        }
        if let Some(categories) = patch.categories {
            memory.categories = if categories.is_empty() {
                vec!["General".to_string()]
            } else {
                categories
            };
        }
        if let Some(topics) = patch.topics {
            memory.topics = topics;
        }
        if let Some(is_favorite) = patch.is_favorite {
            memory.is_favorite = is_favorite;
        }
        if let Some(is_archived) = patch.is_archived {
            memory.is_archived = is_archived;
        }

        memory.updated_at = self.clock.now();
        Some(memory.clone())
    }

    /// Remove a memory, returning it if it existed
    pub async fn delete(&self, id: &Uuid) -> Option<Memory> {
        let mut memories = self.memories.write().await;
        let position = memories.iter().position(|m| m.id == *id)?;
        Some(memories.remove(position))
    }

    /// Flip the favorite flag, refreshing `updated_at`
    pub async fn toggle_favorite(&self, id: &Uuid) -> Option<Memory> {
        let mut memories = self.memories.write().await;
        let memory = memories.iter_mut().find(|m| m.id == *id)?;
        memory.is_favorite = !memory.is_favorite;
        memory.updated_at = self.clock.now();
        Some(memory.clone())
    }

    /// Filtered search over non-archived memories.
    ///
    /// A record matches when it passes the type filter and either the query
    /// is empty or it case-insensitively substring-matches the title,
    /// content, any tag, or any category. Collection order (newest first)
    /// is retained.
    pub async fn search(&self, query: &str, filter: TypeFilter) -> Vec<Memory> {
        let query_lower = query.to_lowercase();
        self.memories
            .read()
            .await
            .iter()
            .filter(|m| {
                !m.is_archived
                    && filter.matches(m.kind.memory_type())
                    && m.matches_query(&query_lower)
            })
            .cloned()
            .collect()
    }

    /// Aggregate statistics over the collection
    pub async fn stats(&self) -> MemoryStats {
        let memories = self.memories.read().await;
        let week_ago = self.clock.now() - chrono::Duration::days(7);

        MemoryStats {
            total: memories.len() as u64,
            this_week: memories.iter().filter(|m| m.created_at >= week_ago).count() as u64,
            collections: 0,
            favorites: memories.iter().filter(|m| m.is_favorite).count() as u64,
        }
    }

    /// Seed the three demo captures, if the store is empty.
    ///
    /// Returns how many memories were created.
    pub async fn seed_samples(&self) -> Result<usize> {
        if !self.is_empty().await {
            return Ok(0);
        }

        let samples = sample_captures();
        let count = samples.len();
        for input in samples {
            self.create(input).await?;
        }
        tracing::info!(count, "seeded sample memories");
        Ok(count)
    }
}

/// Demo captures seeded on first run
fn sample_captures() -> Vec<CaptureInput> {
    vec![
        CaptureInput::new(
            MemoryKind::Url {
                original_url: "https://example.com/react-performance".to_string(),
            },
            "A comprehensive guide to React performance optimization techniques \
             including memoization, lazy loading, and code splitting best practices.",
            "sample",
        ),
        CaptureInput::new(
            MemoryKind::Text,
            "Meeting notes from Q4 product strategy session. Discussed roadmap \
             priorities, user feedback integration, and timeline for new AI features. \
             Action items: review user research, schedule design review, update \
             documentation.",
            "sample",
        ),
        CaptureInput::new(
            MemoryKind::Url {
                original_url: "https://example.com/design-inspiration".to_string(),
            },
            "Beautiful dashboard UI design inspiration with clean layout, excellent \
             use of white space and color contrast. Great example of modern web \
             design principles.",
            "sample",
        ),
    ]
}
