//! HTTP service that builds and signs Ethereum transactions from a
//! mnemonic-derived key.
//!
//! Endpoints:
//! - POST /api/generate-tx — build, sign, and hash a transaction
//! - GET /health

pub mod error;
pub mod server;
pub mod service;
pub mod wire;
