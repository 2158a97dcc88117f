//! Memory domain data types
//!
//! A `Memory` is a single captured unit of content plus the metadata derived
//! for it by the classification pipeline. The capture kind is a closed sum
//! type: each variant carries only the fields that apply to it, and the
//! variant tag is flattened into the record's wire shape as `"type"`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Importance score assigned to every new memory (no mutator exists)
pub const DEFAULT_IMPORTANCE: u8 = 50;

/// The capture kind of a memory, with its kind-specific fields.
///
/// Serializes internally tagged on `"type"` so that flattening into
/// [`Memory`] produces the flat `type` / `originalUrl` / `fileUrl` wire
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MemoryKind {
    /// A captured web link
    Url {
        /// The captured URL itself
        #[serde(rename = "originalUrl")]
        original_url: String,
    },
    /// A free-text note
    Text,
    /// An image capture
    Image {
        /// Where the image file lives
        #[serde(rename = "fileUrl", skip_serializing_if = "Option::is_none")]
        file_url: Option<String>,
        /// Original file name
        #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
        file_name: Option<String>,
    },
    /// A voice recording
    Audio {
        /// Where the audio file lives
        #[serde(rename = "fileUrl", skip_serializing_if = "Option::is_none")]
        file_url: Option<String>,
        /// Original file name
        #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
        file_name: Option<String>,
    },
    /// A document or other file
    File {
        /// Where the file lives
        #[serde(rename = "fileUrl", skip_serializing_if = "Option::is_none")]
        file_url: Option<String>,
        /// Original file name
        #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
        file_name: Option<String>,
    },
}

impl MemoryKind {
    /// The field-less discriminant for this kind
    pub fn memory_type(&self) -> MemoryType {
        match self {
            Self::Url { .. } => MemoryType::Url,
            Self::Text => MemoryType::Text,
            Self::Image { .. } => MemoryType::Image,
            Self::Audio { .. } => MemoryType::Audio,
            Self::File { .. } => MemoryType::File,
        }
    }

    /// Tag appended by the classification pipeline for this kind, if any
    pub fn type_tag(&self) -> Option<&'static str> {
        match self {
            Self::Url { .. } => Some("Article"),
            Self::Text => Some("Note"),
            Self::Image { .. } => Some("Visual"),
            Self::Audio { .. } => Some("Audio"),
            Self::File { .. } => None,
        }
    }

    /// Title used when the derived title would be empty
    pub fn title_fallback(&self) -> &'static str {
        match self {
            Self::Url { .. } => "Web Link",
            Self::Text => "Text Note",
            Self::Image { .. } => "Image",
            Self::Audio { .. } => "Voice Recording",
            Self::File { .. } => "Document",
        }
    }
}

/// Field-less memory kind discriminant, used for filtering and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryType {
    Url,
    Text,
    Image,
    Audio,
    File,
}

impl MemoryType {
    /// Human-readable label for this type
    pub fn label(&self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::File => "File",
        }
    }

    /// Display icon for this type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Url => "🔗",
            Self::Text => "📝",
            Self::Image => "🖼️",
            Self::Audio => "🎤",
            Self::File => "📄",
        }
    }
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url => write!(f, "url"),
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
            Self::Audio => write!(f, "audio"),
            Self::File => write!(f, "file"),
        }
    }
}

impl std::str::FromStr for MemoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(Self::Url),
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "file" => Ok(Self::File),
            other => Err(format!("unknown memory type: {}", other)),
        }
    }
}

/// Type filter for store searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Match every kind
    #[default]
    All,
    /// Match a single kind
    Only(MemoryType),
}

impl TypeFilter {
    /// Whether a memory of the given type passes this filter
    pub fn matches(&self, memory_type: MemoryType) -> bool {
        match self {
            Self::All => true,
            Self::Only(t) => *t == memory_type,
        }
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Sentiment derived for captured content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Neutral => write!(f, "neutral"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// Kind of an extracted entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Place,
    Organization,
    Date,
    Other,
}

/// An entity extracted from captured content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// What kind of entity this is
    pub kind: EntityKind,
    /// The matched text
    pub value: String,
    /// Extraction confidence (0.0–1.0)
    pub confidence: f32,
}

/// Derived metadata produced by the classification pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryMetadata {
    /// Derived title (first line, truncated)
    pub title: String,
    /// Derived summary (first two sentences)
    pub summary: String,
    /// Matched vocabulary tags plus the type tag (deduped, capped)
    pub tags: Vec<String>,
    /// Activated categories, never empty
    pub categories: Vec<String>,
    /// Matched topics in pattern order, never empty
    pub topics: Vec<String>,
    /// Word-count sentiment
    pub sentiment: Sentiment,
    /// Extracted entities, dates first
    pub entities: Vec<Entity>,
    /// Detected language
    pub language: String,
}

/// A memory record: captured content plus derived metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    /// Unique memory identifier
    pub id: Uuid,
    /// Capture kind with its kind-specific fields
    #[serde(flatten)]
    pub kind: MemoryKind,
    /// Raw captured payload
    pub content: String,
    /// Provenance tag (e.g. "quick-capture", "sample")
    pub source: String,
    /// Derived title
    pub title: String,
    /// Derived summary
    pub summary: String,
    /// Derived tags (order-preserving, deduped, at most 6)
    pub tags: Vec<String>,
    /// Derived categories (deduped, never empty)
    pub categories: Vec<String>,
    /// Derived topics in pattern order
    pub topics: Vec<String>,
    /// Derived sentiment
    pub sentiment: Sentiment,
    /// Derived entities (at most 5, dates first)
    pub entities: Vec<Entity>,
    /// Detected language
    pub language: String,
    /// Collections containing this memory (no collection feature yet)
    pub collection_ids: Vec<Uuid>,
    /// Favorite flag
    pub is_favorite: bool,
    /// Archived memories are hidden from search
    pub is_archived: bool,
    /// Importance score, fixed at creation
    pub importance: u8,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
    /// Last access timestamp (set at creation, view tracking unimplemented)
    pub accessed_at: DateTime<Utc>,
    /// Access counter (view tracking unimplemented)
    pub access_count: u32,
}

impl Memory {
    /// Case-insensitive substring match over title, content, tags, categories.
    ///
    /// `query_lower` must already be lowercased.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        if query_lower.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(query_lower)
            || self.content.to_lowercase().contains(query_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(query_lower))
            || self
                .categories
                .iter()
                .any(|cat| cat.to_lowercase().contains(query_lower))
    }
}

/// Input to memory creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureInput {
    /// Capture kind with its kind-specific fields
    #[serde(flatten)]
    pub kind: MemoryKind,
    /// Raw captured payload
    pub content: String,
    /// Provenance tag
    pub source: String,
}

impl CaptureInput {
    /// Create a capture input with an explicit kind
    pub fn new(kind: MemoryKind, content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            source: source.into(),
        }
    }

    /// Build a quick-capture input from free text, auto-detecting URLs
    pub fn quick(text: impl Into<String>) -> Self {
        let content = text.into().trim().to_string();
        let kind = if is_url(&content) {
            MemoryKind::Url {
                original_url: content.clone(),
            }
        } else {
            MemoryKind::Text
        };
        Self {
            kind,
            content,
            source: "quick-capture".to_string(),
        }
    }
}

/// Whether free text looks like a captured web link
fn is_url(text: &str) -> bool {
    let lower: String = text.chars().take(8).collect::<String>().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Partial update applied through [`MemoryStore::update`](super::MemoryStore::update).
///
/// Identity fields (`id`, `kind`, `content`, `created_at`) are not exposed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryPatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub topics: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
    pub is_archived: Option<bool>,
}

/// Aggregate store statistics
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStats {
    /// Total stored memories
    pub total: u64,
    /// Memories created in the last 7 days
    pub this_week: u64,
    /// Collections (no collection feature yet)
    pub collections: u64,
    /// Favorited memories
    pub favorites: u64,
}
