//! healthlog core: transport-agnostic record model, decoding, and error types.
//!
//! This crate defines the data contract shared by the server and any SDK
//! tooling: what a caller submits (`HealthRecord`), what the service stores
//! and echoes back (`StoredLogEntry`), and the error surface. It carries no
//! HTTP or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed submissions surface as `HealthLogError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod record;

/// Shared result type.
pub use error::{Result, HealthLogError};
pub use record::{decode_record, HealthRecord, StoredLogEntry};
