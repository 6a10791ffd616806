//! Domain services behind the HTTP handlers.

pub mod log;

pub use log::LogService;
