//! JSON API consumed by the health form.
//!
//! - `POST /api/log` : submit one record
//! - `GET  /api/log` : list every stored entry

pub mod error;
pub mod log;
