use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use eth_tx::builder::BuildParams;
use keystore::provider::FileKeyProvider;

use crate::error::ApiError;
use crate::service;
use crate::wire::{
    parse_access_list, parse_address, parse_u256, FullTxn, GenerateTxRequest,
    GenerateTxResponse, TransactionData,
};

pub struct AppState {
    pub provider: FileKeyProvider,
    /// Serializes the whole credential-read + build + sign sequence across
    /// concurrent requests.
    pub signer_lock: Mutex<()>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/generate-tx", post(generate_tx))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn generate_tx(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateTxRequest>,
) -> Result<Json<GenerateTxResponse>, ApiError> {
    let response = process(&req, &state)?;
    Ok(Json(response))
}

/// Dispatches a request to the generate pipeline.
///
/// `txn_type == "legacy"` produces `legacy_tx` from the request's gas price
/// (and access list, if one is attached). Any other `txn_type` produces
/// `eip1559_tx`, but only when both fee-market fields are non-empty strings;
/// otherwise the response is an empty object, not an error.
pub fn process(
    req: &GenerateTxRequest,
    state: &AppState,
) -> Result<GenerateTxResponse, ApiError> {
    let txn = &req.txn;

    // Both decimal fields are part of the wire contract and are parsed for
    // every request, whichever shape ends up selected.
    let amount = parse_u256(&txn.amount, "invalid amount")?;
    let gas_price = parse_u256(&txn.gas_price, "invalid gas price")?;

    if txn.chain_id == 0 {
        return Err(ApiError::Validation("invalid chain id".into()));
    }

    let to = parse_address(&txn.recipient_address)?;
    let data = txn.data.clone().into_bytes().into();

    let mut response = GenerateTxResponse::default();

    if req.txn_type == "legacy" {
        let params = BuildParams {
            chain_id: txn.chain_id,
            nonce: txn.nonce,
            to: Some(to),
            value: amount,
            data,
            gas_limit: txn.gas_limit,
            gas_price: Some(gas_price),
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
            access_list: parse_access_list(&txn.access_list)?,
        };

        response.legacy_tx = Some(run_pipeline(state, params)?);
    } else if !txn.max_fee.is_empty() && !txn.max_priority_fee.is_empty() {
        let max_fee = parse_u256(&txn.max_fee, "invalid max fee")?;
        let max_priority_fee = parse_u256(&txn.max_priority_fee, "invalid max priority fee")?;

        let params = BuildParams {
            chain_id: txn.chain_id,
            nonce: txn.nonce,
            to: Some(to),
            value: amount,
            data,
            gas_limit: txn.gas_limit,
            // A stray gas price is ignored by the fee-market dispatch.
            gas_price: Some(gas_price),
            max_fee_per_gas: Some(max_fee),
            max_priority_fee_per_gas: Some(max_priority_fee),
            access_list: parse_access_list(&txn.access_list)?,
        };

        response.eip1559_tx = Some(run_pipeline(state, params)?);
    } else {
        debug!(txn_type = %req.txn_type, "fee-market fields absent; returning empty response");
    }

    Ok(response)
}

fn run_pipeline(state: &AppState, params: BuildParams) -> Result<FullTxn, ApiError> {
    // Lock during signing to serialize credential access; the guard is
    // released on every exit path, including errors.
    let generated = {
        let _guard = state
            .signer_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        service::generate_transaction(&state.provider, params)
    }?;

    Ok(FullTxn {
        transaction: TransactionData::from_signed(&generated.signed),
        transaction_hash: generated.hash.to_string(),
    })
}
