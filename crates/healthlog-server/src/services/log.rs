//! Log Store Service: submit and list health log entries.

use std::sync::Arc;

use healthlog_core::error::Result;
use healthlog_core::{decode_record, StoredLogEntry};

use crate::store::{Appended, LogStore};

/// Log Store Service: decode, validate, append, list.
#[derive(Clone)]
pub struct LogService {
    store: Arc<dyn LogStore>,
}

impl LogService {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }

    /// Decode and validate a raw body, then append it.
    ///
    /// Validation runs before the store is touched, so a rejected or
    /// undecodable submission leaves the store unchanged.
    pub async fn submit(&self, body: &[u8]) -> Result<Appended> {
        let record = decode_record(body)?;
        record.validate()?;

        let appended = self.store.append(record).await?;
        tracing::info!(
            id = %appended.entry.id,
            total = appended.total,
            entry = ?appended.entry,
            "new health log received"
        );
        Ok(appended)
    }

    pub async fn list(&self) -> Result<Vec<StoredLogEntry>> {
        self.store.snapshot().await
    }

    pub async fn count(&self) -> usize {
        self.store.count().await
    }
}
