//! Top-level facade crate for healthlog.
//!
//! Re-exports the record model and the server library so users can depend on a single crate.

pub mod core {
    pub use healthlog_core::*;
}

pub mod server {
    pub use healthlog_server::*;
}
