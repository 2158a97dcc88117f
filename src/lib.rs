//! MemoMemo - Personal memory capture assistant
//!
//! MemoMemo captures anything a user throws at it — notes, links, files,
//! recordings — runs each capture through a deterministic classification
//! pipeline, and keeps the resulting memories in an in-process store with
//! filtered search. A self-contained chat mockup with canned responses and a
//! markdown-subset renderer rounds out the demo surface.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      HTTP API (axum)                      │
//! │   /api/v1/memories    /api/v1/chat    /api/v1/settings    │
//! └──────────┬──────────────────┬─────────────────┬───────────┘
//!            │                  │                 │
//! ┌──────────▼──────────┐ ┌─────▼───────────┐ ┌───▼──────────┐
//! │     MemoryStore     │ │  ChatResponder  │ │ SettingsStore│
//! │  newest-first Vec   │ │  canned table   │ │  theme flag  │
//! │  CRUD + search      │ │  + renderer     │ │  (json file) │
//! └──────────┬──────────┘ └─────────────────┘ └──────────────┘
//!            │ capture
//! ┌──────────▼──────────┐
//! │ MetadataClassifier  │
//! │  title / summary /  │
//! │  tags / categories /│
//! │  topics / sentiment │
//! │  / entities         │
//! └─────────────────────┘
//! ```
//!
//! Memory creation is the only suspending operation: the classifier sleeps a
//! configurable delay before yielding, modeling the external classification
//! service a real deployment would call. Everything else is synchronous and
//! immediately visible to subsequent reads.
//!
//! ## Modules
//!
//! - [`memory`]: memory records, their store, and the memories API
//! - [`classify`]: the heuristic classification pipeline
//! - [`chat`]: canned chat responder and markdown-subset renderer
//! - [`settings`]: the durable light/dark theme flag
//! - [`api`]: unified HTTP router
//! - [`config`]: configuration management

pub mod api;
pub mod chat;
pub mod classify;
pub mod config;
pub mod error;
pub mod memory;
pub mod settings;

pub use config::MemoConfig;
pub use error::{Error, Result};
