//! Classification pipeline — deterministic heuristic metadata derivation
//!
//! Derives title, summary, tags, categories, topics, sentiment, and entities
//! from raw captured content. The classifier is a pluggable capability so a
//! real backend can replace the heuristics without touching the store.

pub mod classifier;
pub mod vocabulary;

pub use classifier::{
    generate_summary, generate_title, HeuristicClassifier, MetadataClassifier, DEFAULT_LATENCY,
};
