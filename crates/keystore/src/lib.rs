//! Credential loading and deterministic key derivation.
//!
//! The service signs with a single account derived from a mnemonic stored in
//! a local JSON credential file. [`provider::KeyProvider`] is the seam the
//! signing pipeline sees, so the plaintext file store can be swapped for an
//! encrypted or hardware-backed one without touching the builder or signer.

pub mod account;
pub mod derivation;
pub mod error;
pub mod mnemonic;
pub mod provider;
