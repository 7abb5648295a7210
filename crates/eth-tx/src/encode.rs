//! Canonical RLP encodings for the three transaction shapes.
//!
//! Two encodings exist per shape: the signing preimage (what gets hashed and
//! signed) and the signed form (what gets hashed for the transaction id).
//! Typed transactions (EIP-2718) prefix their type byte before the RLP list;
//! legacy transactions are a bare RLP list.

use alloy_primitives::{Bytes, TxKind, U256};
use alloy_rlp::{Encodable, RlpEncodable};

use crate::types::{AccessListEntry, SignedTransaction, Transaction};

/// Encodes the preimage the signer hashes.
///
/// - Legacy: `rlp([nonce, gas_price, gas_limit, to, value, data, chain_id, 0, 0])`
///   per EIP-155.
/// - Type 1: `0x01 || rlp([chain_id, nonce, gas_price, gas_limit, to, value,
///   data, access_list])`.
/// - Type 2: `0x02 || rlp([chain_id, nonce, max_priority_fee, max_fee,
///   gas_limit, to, value, data, access_list])`.
pub fn signing_payload(tx: &Transaction) -> Vec<u8> {
    match tx {
        Transaction::Legacy(tx) => {
            let fields = LegacySigningFields {
                nonce: tx.nonce,
                gas_price: tx.gas_price,
                gas_limit: tx.gas_limit,
                to: tx.to,
                value: tx.value,
                data: tx.data.clone(),
                chain_id: tx.chain_id,
                zero_r: 0,
                zero_s: 0,
            };
            rlp_bytes(&fields, None)
        }
        Transaction::AccessList(tx) => {
            let fields = AccessListFields {
                chain_id: tx.chain_id,
                nonce: tx.nonce,
                gas_price: tx.gas_price,
                gas_limit: tx.gas_limit,
                to: tx.to,
                value: tx.value,
                data: tx.data.clone(),
                access_list: tx.access_list.clone(),
            };
            rlp_bytes(&fields, Some(0x01))
        }
        Transaction::FeeMarket(tx) => {
            let fields = FeeMarketFields {
                chain_id: tx.chain_id,
                nonce: tx.nonce,
                max_priority_fee_per_gas: tx.max_priority_fee_per_gas,
                max_fee_per_gas: tx.max_fee_per_gas,
                gas_limit: tx.gas_limit,
                to: tx.to,
                value: tx.value,
                data: tx.data.clone(),
                access_list: tx.access_list.clone(),
            };
            rlp_bytes(&fields, Some(0x02))
        }
    }
}

/// Encodes the canonical signed form whose keccak-256 is the transaction id.
///
/// Legacy transactions append `[v, r, s]` to the 6 payload fields (9 fields
/// total); typed transactions append `[y_parity, r, s]` after the access
/// list and keep their type-byte prefix.
pub fn signed_encoding(signed: &SignedTransaction) -> Vec<u8> {
    let sig = &signed.signature;
    match &signed.tx {
        Transaction::Legacy(tx) => {
            let fields = LegacySignedFields {
                nonce: tx.nonce,
                gas_price: tx.gas_price,
                gas_limit: tx.gas_limit,
                to: tx.to,
                value: tx.value,
                data: tx.data.clone(),
                v: signed.v(),
                r: sig.r,
                s: sig.s,
            };
            rlp_bytes(&fields, None)
        }
        Transaction::AccessList(tx) => {
            let fields = AccessListSignedFields {
                chain_id: tx.chain_id,
                nonce: tx.nonce,
                gas_price: tx.gas_price,
                gas_limit: tx.gas_limit,
                to: tx.to,
                value: tx.value,
                data: tx.data.clone(),
                access_list: tx.access_list.clone(),
                y_parity: sig.y_parity as u8,
                r: sig.r,
                s: sig.s,
            };
            rlp_bytes(&fields, Some(0x01))
        }
        Transaction::FeeMarket(tx) => {
            let fields = FeeMarketSignedFields {
                chain_id: tx.chain_id,
                nonce: tx.nonce,
                max_priority_fee_per_gas: tx.max_priority_fee_per_gas,
                max_fee_per_gas: tx.max_fee_per_gas,
                gas_limit: tx.gas_limit,
                to: tx.to,
                value: tx.value,
                data: tx.data.clone(),
                access_list: tx.access_list.clone(),
                y_parity: sig.y_parity as u8,
                r: sig.r,
                s: sig.s,
            };
            rlp_bytes(&fields, Some(0x02))
        }
    }
}

fn rlp_bytes<T: Encodable>(fields: &T, type_byte: Option<u8>) -> Vec<u8> {
    let mut rlp_buf = Vec::new();
    fields.encode(&mut rlp_buf);

    match type_byte {
        Some(byte) => {
            let mut out = Vec::with_capacity(1 + rlp_buf.len());
            out.push(byte);
            out.extend_from_slice(&rlp_buf);
            out
        }
        None => rlp_buf,
    }
}

// ---------------------------------------------------------------------------
// RLP field lists
// ---------------------------------------------------------------------------

/// EIP-155 signing preimage; the trailing zeros stand in for r and s.
#[derive(RlpEncodable)]
struct LegacySigningFields {
    nonce: u64,
    gas_price: U256,
    gas_limit: u64,
    to: TxKind,
    value: U256,
    data: Bytes,
    chain_id: u64,
    zero_r: u8,
    zero_s: u8,
}

#[derive(RlpEncodable)]
struct LegacySignedFields {
    nonce: u64,
    gas_price: U256,
    gas_limit: u64,
    to: TxKind,
    value: U256,
    data: Bytes,
    v: U256,
    r: U256,
    s: U256,
}

#[derive(RlpEncodable)]
struct AccessListFields {
    chain_id: u64,
    nonce: u64,
    gas_price: U256,
    gas_limit: u64,
    to: TxKind,
    value: U256,
    data: Bytes,
    access_list: Vec<AccessListEntry>,
}

#[derive(RlpEncodable)]
struct AccessListSignedFields {
    chain_id: u64,
    nonce: u64,
    gas_price: U256,
    gas_limit: u64,
    to: TxKind,
    value: U256,
    data: Bytes,
    access_list: Vec<AccessListEntry>,
    y_parity: u8,
    r: U256,
    s: U256,
}

#[derive(RlpEncodable)]
struct FeeMarketFields {
    chain_id: u64,
    nonce: u64,
    max_priority_fee_per_gas: U256,
    max_fee_per_gas: U256,
    gas_limit: u64,
    to: TxKind,
    value: U256,
    data: Bytes,
    access_list: Vec<AccessListEntry>,
}

#[derive(RlpEncodable)]
struct FeeMarketSignedFields {
    chain_id: u64,
    nonce: u64,
    max_priority_fee_per_gas: U256,
    max_fee_per_gas: U256,
    gas_limit: u64,
    to: TxKind,
    value: U256,
    data: Bytes,
    access_list: Vec<AccessListEntry>,
    y_parity: u8,
    r: U256,
    s: U256,
}
