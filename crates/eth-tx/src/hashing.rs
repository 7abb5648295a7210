use alloy_primitives::B256;
use sha3::{Digest, Keccak256};

use crate::encode;
use crate::types::SignedTransaction;

/// Computes the canonical transaction id: the keccak-256 of the signed
/// encoding (legacy RLP of 9 fields, or type byte plus RLP for typed
/// transactions).
///
/// The signature is part of the preimage, which is why only a
/// [`SignedTransaction`] can be hashed.
pub fn transaction_hash(signed: &SignedTransaction) -> B256 {
    let encoded = encode::signed_encoding(signed);
    B256::from_slice(&Keccak256::digest(&encoded))
}
