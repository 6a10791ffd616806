//! In-memory `LogStore`.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use async_trait::async_trait;
use healthlog_core::error::{HealthLogError, Result};
use healthlog_core::{HealthRecord, StoredLogEntry};

use super::{Appended, LogStore};

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Default)]
struct Inner {
    entries: Vec<StoredLogEntry>,
    last_id: u64,
}

/// Process-local store. Lives as long as the owning `AppState`.
///
/// Ids are the clock's epoch milliseconds, bumped past the previous id when
/// the clock has not advanced, so they stay strictly increasing.
pub struct MemoryLogStore {
    inner: RwLock<Inner>,
    clock: Clock,
}

impl Default for MemoryLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Use a custom time source (tests pin it to force same-millisecond ids).
    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            inner: RwLock::new(Inner::default()),
            clock: Box::new(clock),
        }
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn append(&self, record: HealthRecord) -> Result<Appended> {
        // id generation and push share one write lock
        let mut inner = self.inner.write().await;

        let now = (self.clock)();
        let millis = u64::try_from(now.timestamp_millis())
            .map_err(|_| HealthLogError::Processing("clock reads before unix epoch".into()))?;
        let id = if millis > inner.last_id {
            millis
        } else {
            inner.last_id + 1
        };

        let entry = StoredLogEntry::new(record, id, now);
        inner.last_id = id;
        inner.entries.push(entry.clone());

        Ok(Appended {
            entry,
            total: inner.entries.len(),
        })
    }

    async fn snapshot(&self) -> Result<Vec<StoredLogEntry>> {
        Ok(self.inner.read().await.entries.clone())
    }

    async fn count(&self) -> usize {
        self.inner.read().await.entries.len()
    }
}
