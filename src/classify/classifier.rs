//! Heuristic metadata classification
//!
//! `MetadataClassifier` is the pluggable capability the memory store creates
//! records through: captured content in, derived metadata out. The pipeline
//! is total — every input, including the empty string, yields a defined
//! result via fallback defaults.
//!
//! `HeuristicClassifier` is the deterministic built-in implementation:
//! substring keyword lookup for tags/categories, word-boundary patterns for
//! topics and sentiment, and two regexes for entities. It sleeps a
//! configurable duration before yielding, modeling the latency of the
//! external classification service a real deployment would call.

use crate::error::{Error, Result};
use crate::memory::types::{
    CaptureInput, Entity, EntityKind, MemoryKind, MemoryMetadata, Sentiment,
};
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashSet;
use std::time::Duration;

use super::vocabulary::{NEGATIVE_WORDS, POSITIVE_WORDS, TOPIC_PATTERNS, VOCABULARIES};

/// Simulated processing delay for the default classifier
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

const TITLE_MAX: usize = 60;
const SUMMARY_MAX: usize = 200;
const SUMMARY_FALLBACK_MAX: usize = 150;
const TAG_LIMIT: usize = 6;
const ENTITY_LIMIT: usize = 5;
const CAPITALIZED_LIMIT: usize = 3;
const ELLIPSIS: char = '…';

const DATE_CONFIDENCE: f32 = 0.9;
const CAPITALIZED_CONFIDENCE: f32 = 0.6;

/// Pluggable classification capability.
///
/// Implementations must be total: no input may fail to classify.
#[async_trait]
pub trait MetadataClassifier: Send + Sync {
    /// Derive metadata for a capture
    async fn classify(&self, input: &CaptureInput) -> MemoryMetadata;
}

struct TopicRule {
    pattern: Regex,
    topic: &'static str,
}

/// Deterministic keyword/regex classifier
pub struct HeuristicClassifier {
    topics: Vec<TopicRule>,
    positive: Regex,
    negative: Regex,
    dates: Regex,
    capitalized: Regex,
    latency: Duration,
}

impl HeuristicClassifier {
    /// Create a classifier with the default simulated latency
    pub fn new() -> Result<Self> {
        Self::with_latency(DEFAULT_LATENCY)
    }

    /// Create a classifier with an explicit simulated latency.
    ///
    /// Tests pass `Duration::ZERO` to skip the sleep entirely.
    pub fn with_latency(latency: Duration) -> Result<Self> {
        let topics = TOPIC_PATTERNS
            .iter()
            .map(|&(alternation, topic)| {
                let pattern = compile_word_pattern(alternation)?;
                Ok(TopicRule { pattern, topic })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            topics,
            positive: compile_word_pattern(&POSITIVE_WORDS.join("|"))?,
            negative: compile_word_pattern(&NEGATIVE_WORDS.join("|"))?,
            dates: Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b")
                .map_err(|e| Error::Classify(format!("invalid date pattern: {}", e)))?,
            capitalized: Regex::new(r"\b[A-Z][a-z]+(?:\s[A-Z][a-z]+)*\b")
                .map_err(|e| Error::Classify(format!("invalid name pattern: {}", e)))?,
            latency,
        })
    }

    /// Collect topic labels whose pattern matches, in table order
    fn detect_topics(&self, content: &str) -> Vec<String> {
        let topics: Vec<String> = self
            .topics
            .iter()
            .filter(|rule| rule.pattern.is_match(content))
            .map(|rule| rule.topic.to_string())
            .collect();

        if topics.is_empty() {
            vec!["General".to_string()]
        } else {
            topics
        }
    }

    /// Compare whole-word positive/negative counts; ties are neutral
    fn detect_sentiment(&self, content: &str) -> Sentiment {
        let positive = self.positive.find_iter(content).count();
        let negative = self.negative.find_iter(content).count();

        if positive > negative {
            Sentiment::Positive
        } else if negative > positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Date matches first (all of them), then the first capitalized-word
    /// sequences, capped to the combined entity limit.
    fn extract_entities(&self, content: &str) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self
            .dates
            .find_iter(content)
            .map(|m| Entity {
                kind: EntityKind::Date,
                value: m.as_str().to_string(),
                confidence: DATE_CONFIDENCE,
            })
            .collect();

        entities.extend(
            self.capitalized
                .find_iter(content)
                .take(CAPITALIZED_LIMIT)
                .map(|m| Entity {
                    kind: EntityKind::Other,
                    value: m.as_str().to_string(),
                    confidence: CAPITALIZED_CONFIDENCE,
                }),
        );

        entities.truncate(ENTITY_LIMIT);
        entities
    }
}

#[async_trait]
impl MetadataClassifier for HeuristicClassifier {
    async fn classify(&self, input: &CaptureInput) -> MemoryMetadata {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let content_lower = input.content.to_lowercase();
        let (tags, categories) = extract_tags_and_categories(&content_lower, &input.kind);

        MemoryMetadata {
            title: generate_title(&input.content, &input.kind),
            summary: generate_summary(&input.content),
            tags,
            categories,
            topics: self.detect_topics(&input.content),
            sentiment: self.detect_sentiment(&input.content),
            entities: self.extract_entities(&input.content),
            language: "en".to_string(),
        }
    }
}

/// Compile an alternation of lowercase words into a case-insensitive
/// whole-word pattern.
fn compile_word_pattern(alternation: &str) -> Result<Regex> {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
        .map_err(|e| Error::Classify(format!("invalid word pattern '{}': {}", alternation, e)))
}

/// Derive a title from the first line of content.
///
/// Truncated to 60 characters with an ellipsis; an empty result falls back
/// to the kind's default label.
pub fn generate_title(content: &str, kind: &MemoryKind) -> String {
    let first_line = content.lines().next().unwrap_or("");
    let mut title: String = first_line.chars().take(TITLE_MAX).collect();

    if title.chars().count() < first_line.chars().count() {
        title.push(ELLIPSIS);
    }

    if title.is_empty() {
        title = kind.title_fallback().to_string();
    }

    title
}

/// Derive a summary from the first two sentences of content.
///
/// Capped at 200 characters with an ellipsis; content without any
/// sentence-terminal punctuation falls back to its first 150 characters.
pub fn generate_summary(content: &str) -> String {
    let sentences: Vec<&str> = content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.is_empty() {
        return content.chars().take(SUMMARY_FALLBACK_MAX).collect();
    }

    let summary = sentences[..sentences.len().min(2)].join(". ");
    if summary.chars().count() > SUMMARY_MAX {
        let mut truncated: String = summary.chars().take(SUMMARY_MAX).collect();
        truncated.push(ELLIPSIS);
        truncated
    } else {
        summary + "."
    }
}

/// Match keyword vocabularies against lowercased content.
///
/// Every matched keyword becomes a tag in its vocabulary's casing; each
/// vocabulary activates its category once. The kind's type tag is appended,
/// tags are deduped in order and capped, and empty categories default to
/// "General".
fn extract_tags_and_categories(
    content_lower: &str,
    kind: &MemoryKind,
) -> (Vec<String>, Vec<String>) {
    let mut tags = Vec::new();
    let mut categories = Vec::new();

    for vocabulary in VOCABULARIES {
        let mut matched = false;
        for keyword in vocabulary.keywords {
            if content_lower.contains(keyword) {
                tags.push(vocabulary.casing.apply(keyword));
                matched = true;
            }
        }
        if matched {
            categories.push(vocabulary.category.to_string());
        }
    }

    if let Some(type_tag) = kind.type_tag() {
        tags.push(type_tag.to_string());
    }

    let mut seen = HashSet::new();
    tags.retain(|tag| seen.insert(tag.clone()));
    tags.truncate(TAG_LIMIT);

    if categories.is_empty() {
        categories.push("General".to_string());
    }

    (tags, categories)
}
