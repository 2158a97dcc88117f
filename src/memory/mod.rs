//! Memory domain — capture records, their store, and the HTTP surface
//!
//! A `Memory` is created only through the classification pipeline, owned
//! exclusively by the `MemoryStore`, and handed out as cloned read views.

pub mod clock;
pub mod handler;
pub mod store;
pub mod types;

pub use clock::{Clock, IdSource, SystemClock, UuidSource};
pub use handler::{memories_router, MemoriesState};
pub use store::MemoryStore;
pub use types::{
    CaptureInput, Entity, EntityKind, Memory, MemoryKind, MemoryMetadata, MemoryPatch,
    MemoryStats, MemoryType, Sentiment, TypeFilter,
};
