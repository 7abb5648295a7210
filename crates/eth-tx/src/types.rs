use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use alloy_rlp::RlpEncodable;

/// An EIP-2930 access list entry: an address plus the storage slots the
/// transaction pre-declares touching.
///
/// Storage-key order is part of the canonical encoding (and of gas
/// accounting), so it is preserved as given and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable)]
pub struct AccessListEntry {
    pub address: Address,
    pub storage_keys: Vec<B256>,
}

/// A legacy (type 0) transaction. The chain id is not an encoded field of
/// the signed transaction; it is folded into `v` per EIP-155.
#[derive(Debug, Clone)]
pub struct LegacyTx {
    pub chain_id: u64,
    pub nonce: u64,
    /// `TxKind::Create` means contract creation (no recipient).
    pub to: TxKind,
    /// Transfer value in wei.
    pub value: U256,
    /// Calldata (empty for simple transfers).
    pub data: Bytes,
    pub gas_limit: u64,
    pub gas_price: U256,
}

/// An EIP-2930 (type 1) transaction.
#[derive(Debug, Clone)]
pub struct AccessListTx {
    pub chain_id: u64,
    pub nonce: u64,
    pub to: TxKind,
    pub value: U256,
    pub data: Bytes,
    pub gas_limit: u64,
    pub gas_price: U256,
    pub access_list: Vec<AccessListEntry>,
}

/// An EIP-1559 (type 2) transaction.
#[derive(Debug, Clone)]
pub struct FeeMarketTx {
    pub chain_id: u64,
    pub nonce: u64,
    pub to: TxKind,
    pub value: U256,
    pub data: Bytes,
    pub gas_limit: u64,
    pub max_priority_fee_per_gas: U256,
    pub max_fee_per_gas: U256,
    pub access_list: Vec<AccessListEntry>,
}

/// An unsigned Ethereum transaction.
///
/// Each variant carries exactly the fields its shape encodes, so a
/// transaction can never hold both a gas price and a fee-market pair.
#[derive(Debug, Clone)]
pub enum Transaction {
    Legacy(LegacyTx),
    AccessList(AccessListTx),
    FeeMarket(FeeMarketTx),
}

impl Transaction {
    pub fn chain_id(&self) -> u64 {
        match self {
            Transaction::Legacy(tx) => tx.chain_id,
            Transaction::AccessList(tx) => tx.chain_id,
            Transaction::FeeMarket(tx) => tx.chain_id,
        }
    }

    /// EIP-2718 type byte; `None` for legacy transactions, which have no
    /// type prefix.
    pub fn type_byte(&self) -> Option<u8> {
        match self {
            Transaction::Legacy(_) => None,
            Transaction::AccessList(_) => Some(0x01),
            Transaction::FeeMarket(_) => Some(0x02),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Transaction::Legacy(_) => "Legacy",
            Transaction::AccessList(_) => "EIP-2930",
            Transaction::FeeMarket(_) => "EIP-1559",
        }
    }
}

/// A recoverable secp256k1 signature over a transaction preimage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxSignature {
    /// Recovery id (0 or 1).
    pub y_parity: bool,
    pub r: U256,
    pub s: U256,
}

/// A transaction with its signature attached.
///
/// Only signed transactions can be canonically hashed; the signature is part
/// of the hash preimage for every shape.
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    pub tx: Transaction,
    pub signature: TxSignature,
}

impl SignedTransaction {
    /// The reported `v` value: chain-id-adjusted per EIP-155 for legacy
    /// transactions, the raw recovery id for typed transactions.
    pub fn v(&self) -> U256 {
        match &self.tx {
            Transaction::Legacy(tx) => {
                U256::from(2 * tx.chain_id as u128 + 35 + self.signature.y_parity as u128)
            }
            _ => U256::from(self.signature.y_parity as u8),
        }
    }
}
