use alloy_primitives::{Address, Bytes, TxKind, U256};

use crate::error::EthError;
use crate::types::{AccessListEntry, AccessListTx, FeeMarketTx, LegacyTx, Transaction};

/// Input parameters for [`build_transaction`]. Exactly one fee model must be
/// resolvable: either `gas_price`, or the `max_fee_per_gas` /
/// `max_priority_fee_per_gas` pair.
#[derive(Debug, Clone, Default)]
pub struct BuildParams {
    pub chain_id: u64,
    pub nonce: u64,
    /// `None` means contract creation.
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
    pub gas_limit: u64,
    pub gas_price: Option<U256>,
    pub max_fee_per_gas: Option<U256>,
    pub max_priority_fee_per_gas: Option<U256>,
    pub access_list: Vec<AccessListEntry>,
}

/// Builds an unsigned transaction, selecting the shape from the fee fields.
///
/// Dispatch priority:
/// 1. `max_fee_per_gas` set: fee-market (type 2); a stray `gas_price` is
///    ignored.
/// 2. else a non-empty access list: access-list (type 1).
/// 3. else: legacy (type 0).
///
/// A request with an empty access list and only a gas price therefore yields
/// a legacy transaction; an explicit empty-access-list type 1 cannot be
/// expressed through this dispatch.
pub fn build_transaction(params: BuildParams) -> Result<Transaction, EthError> {
    if params.chain_id == 0 {
        return Err(EthError::TransactionBuild(
            "chain id must be positive".into(),
        ));
    }

    let to = TxKind::from(params.to);

    if let Some(max_fee_per_gas) = params.max_fee_per_gas {
        let max_priority_fee_per_gas = params.max_priority_fee_per_gas.ok_or_else(|| {
            EthError::TransactionBuild(
                "max priority fee is required for a fee-market transaction".into(),
            )
        })?;

        return Ok(Transaction::FeeMarket(FeeMarketTx {
            chain_id: params.chain_id,
            nonce: params.nonce,
            to,
            value: params.value,
            data: params.data,
            gas_limit: params.gas_limit,
            max_priority_fee_per_gas,
            max_fee_per_gas,
            access_list: params.access_list,
        }));
    }

    let gas_price = params.gas_price.ok_or_else(|| {
        EthError::TransactionBuild("gas price is required".into())
    })?;

    if !params.access_list.is_empty() {
        return Ok(Transaction::AccessList(AccessListTx {
            chain_id: params.chain_id,
            nonce: params.nonce,
            to,
            value: params.value,
            data: params.data,
            gas_limit: params.gas_limit,
            gas_price,
            access_list: params.access_list,
        }));
    }

    Ok(Transaction::Legacy(LegacyTx {
        chain_id: params.chain_id,
        nonce: params.nonce,
        to,
        value: params.value,
        data: params.data,
        gas_limit: params.gas_limit,
        gas_price,
    }))
}
