//! Shared application state for the healthlog server.
//!
//! Owns the log store for the lifetime of the process; handlers reach it
//! through axum `State`.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::obs::ServiceMetrics;
use crate::services::LogService;
use crate::store::{LogStore, MemoryLogStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    logs: LogService,
    metrics: ServiceMetrics,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_store(cfg, Arc::new(MemoryLogStore::new()))
    }

    pub fn with_store(cfg: ServerConfig, store: Arc<dyn LogStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                logs: LogService::new(store),
                metrics: ServiceMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn logs(&self) -> &LogService {
        &self.inner.logs
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    /// Stop reporting ready; called once shutdown starts.
    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }
}
