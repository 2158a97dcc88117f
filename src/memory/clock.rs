//! Clock and identifier capabilities for the memory store
//!
//! Both are injectable so tests can pin timestamps and ids. Production code
//! uses the system clock and random v4 UUIDs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Supplies the current instant for timestamping
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Supplies a collision-free opaque identifier per call
pub trait IdSource: Send + Sync {
    /// A fresh unique identifier
    fn next_id(&self) -> Uuid;
}

/// Random v4 UUID source
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
