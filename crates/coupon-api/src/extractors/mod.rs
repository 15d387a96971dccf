//! Axum extractors for request handling
//!
//! Custom extractors for validation and client identification.

mod client_ip;
mod validated;

pub use client_ip::ClientIp;
pub use validated::ValidatedJson;
