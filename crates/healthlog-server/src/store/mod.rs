//! Entry storage.
//!
//! The service only needs an append-only, ordered log. `LogStore` is the seam
//! a persistent backend would plug into; `MemoryLogStore` is the process-local
//! implementation used today.

mod memory;

use async_trait::async_trait;

use healthlog_core::error::Result;
use healthlog_core::{HealthRecord, StoredLogEntry};

pub use memory::MemoryLogStore;

/// Result of a successful append.
#[derive(Debug, Clone)]
pub struct Appended {
    pub entry: StoredLogEntry,
    /// Store size including the new entry.
    pub total: usize,
}

#[async_trait]
pub trait LogStore: Send + Sync {
    /// Assign `id`/`timestamp` and append. Either the entry is fully stored or
    /// nothing is.
    async fn append(&self, record: HealthRecord) -> Result<Appended>;

    /// All entries in insertion order.
    async fn snapshot(&self) -> Result<Vec<StoredLogEntry>>;

    async fn count(&self) -> usize;
}
