//! JSON wire types and their conversions to and from the domain model.
//!
//! Numeric money fields cross the boundary as decimal strings to avoid
//! precision loss; hashes and addresses are 0x-prefixed hex. The `data`
//! field round-trips as a raw (non-hex) string.

use alloy_primitives::{Address, TxKind, B256, U256};
use serde::{Deserialize, Serialize};

use eth_tx::types::{AccessListEntry, SignedTransaction, Transaction};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct GenerateTxRequest {
    pub txn_type: String,
    pub txn: TransactionRequest,
}

#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub recipient_address: String,
    /// Decimal string, to preserve precision.
    pub amount: String,
    pub nonce: u64,
    pub gas_limit: u64,
    /// Decimal string, to preserve precision.
    pub gas_price: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub max_priority_fee: String,
    #[serde(default)]
    pub max_fee: String,
    pub chain_id: u64,
    #[serde(default)]
    pub access_list: Vec<WireAccessTuple>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireAccessTuple {
    pub address: String,
    #[serde(default)]
    pub storage_keys: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct GenerateTxResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_tx: Option<FullTxn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eip1559_tx: Option<FullTxn>,
}

#[derive(Debug, Serialize)]
pub struct FullTxn {
    pub transaction: TransactionData,
    pub transaction_hash: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionData {
    pub chain_id: String,
    pub nonce: u64,
    /// Empty string for contract creation.
    pub to: String,
    pub value: String,
    pub data: String,
    pub gas_limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(rename = "max_priority_fee", skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
    #[serde(rename = "max_fee", skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_list: Option<Vec<WireAccessTuple>>,
    pub v: String,
    pub r: String,
    pub s: String,
    #[serde(rename = "type")]
    pub tx_type: String,
}

/// Parses a decimal string into a 256-bit integer.
///
/// Empty input is rejected up front: `from_str_radix` parses `""` as zero,
/// which would silently build and sign a transaction with a zero amount or
/// gas price.
pub fn parse_u256(value: &str, error_msg: &str) -> Result<U256, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(error_msg.to_string()));
    }
    U256::from_str_radix(value, 10).map_err(|_| ApiError::Validation(error_msg.to_string()))
}

pub fn parse_address(value: &str) -> Result<Address, ApiError> {
    value
        .parse::<Address>()
        .map_err(|_| ApiError::Validation("invalid recipient address".into()))
}

/// Converts wire access tuples into domain entries, preserving storage-key
/// order.
pub fn parse_access_list(
    tuples: &[WireAccessTuple],
) -> Result<Vec<AccessListEntry>, ApiError> {
    tuples
        .iter()
        .map(|tuple| {
            let address = tuple
                .address
                .parse::<Address>()
                .map_err(|_| ApiError::Validation("invalid access list address".into()))?;
            let storage_keys = tuple
                .storage_keys
                .iter()
                .map(|key| {
                    key.parse::<B256>().map_err(|_| {
                        ApiError::Validation("invalid access list storage key".into())
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AccessListEntry {
                address,
                storage_keys,
            })
        })
        .collect()
}

fn kind_to_string(to: &TxKind) -> String {
    match to {
        TxKind::Call(address) => address.to_checksum(None),
        TxKind::Create => String::new(),
    }
}

fn data_to_string(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

fn echo_access_list(entries: &[AccessListEntry]) -> Option<Vec<WireAccessTuple>> {
    if entries.is_empty() {
        return None;
    }
    Some(
        entries
            .iter()
            .map(|entry| WireAccessTuple {
                address: entry.address.to_checksum(None),
                storage_keys: entry
                    .storage_keys
                    .iter()
                    .map(|key| key.to_string())
                    .collect(),
            })
            .collect(),
    )
}

impl TransactionData {
    pub fn from_signed(signed: &SignedTransaction) -> Self {
        let v = signed.v().to_string();
        let r = signed.signature.r.to_string();
        let s = signed.signature.s.to_string();

        match &signed.tx {
            Transaction::Legacy(tx) => TransactionData {
                chain_id: tx.chain_id.to_string(),
                nonce: tx.nonce,
                to: kind_to_string(&tx.to),
                value: tx.value.to_string(),
                data: data_to_string(&tx.data),
                gas_limit: tx.gas_limit,
                gas_price: Some(tx.gas_price.to_string()),
                max_priority_fee_per_gas: None,
                max_fee_per_gas: None,
                access_list: None,
                v,
                r,
                s,
                tx_type: signed.tx.type_name().to_string(),
            },
            Transaction::AccessList(tx) => TransactionData {
                chain_id: tx.chain_id.to_string(),
                nonce: tx.nonce,
                to: kind_to_string(&tx.to),
                value: tx.value.to_string(),
                data: data_to_string(&tx.data),
                gas_limit: tx.gas_limit,
                gas_price: Some(tx.gas_price.to_string()),
                max_priority_fee_per_gas: None,
                max_fee_per_gas: None,
                access_list: echo_access_list(&tx.access_list),
                v,
                r,
                s,
                tx_type: signed.tx.type_name().to_string(),
            },
            Transaction::FeeMarket(tx) => TransactionData {
                chain_id: tx.chain_id.to_string(),
                nonce: tx.nonce,
                to: kind_to_string(&tx.to),
                value: tx.value.to_string(),
                data: data_to_string(&tx.data),
                gas_limit: tx.gas_limit,
                gas_price: None,
                max_priority_fee_per_gas: Some(tx.max_priority_fee_per_gas.to_string()),
                max_fee_per_gas: Some(tx.max_fee_per_gas.to_string()),
                access_list: echo_access_list(&tx.access_list),
                v,
                r,
                s,
                tx_type: signed.tx.type_name().to_string(),
            },
        }
    }
}
