//! Ethereum transaction construction and signing.
//!
//! This crate provides:
//! - A tagged-union transaction model covering legacy (type 0), EIP-2930
//!   (type 1), and EIP-1559 (type 2) shapes
//! - A builder that selects the shape from the supplied fee fields
//! - EIP-155 / typed-transaction signing with k256
//! - Canonical transaction hashing
//! - Address derivation from secp256k1 public keys

pub mod address;
pub mod builder;
pub mod encode;
pub mod error;
pub mod hashing;
pub mod signing;
pub mod types;
