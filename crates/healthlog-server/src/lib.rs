//! healthlog server library entry.
//!
//! Wires config, the log store, the log service and the HTTP surface into a
//! single axum router. Consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
pub mod shutdown;
pub mod store;
