//! HTTP API Client
//!
//! JSON-RPC calls to the Anchor Platform API.

use anchor_platform_core::rpc::{
    decode_response, Fees, Heights, RpcFailure, RpcMethod, RpcRequest,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::config;

/// Invoke a method and decode its result
pub async fn call<T: DeserializeOwned>(method: RpcMethod) -> Result<T, RpcFailure> {
    let response = Request::post(&config::rpc_url())
        .header("Content-Type", "application/json")
        .json(&RpcRequest::new(method))
        .map_err(|e| RpcFailure::Unavailable(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| RpcFailure::Unavailable(format!("Network error: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| RpcFailure::Unavailable(format!("Network error: {}", e)))?;

    decode_response(status, &body)
}

/// Fetch directory and entry block heights
pub async fn fetch_heights() -> Result<Heights, RpcFailure> {
    call(RpcMethod::Heights).await
}

/// Fetch ledger fees
pub async fn fetch_fees() -> Result<Fees, RpcFailure> {
    call(RpcMethod::Fees).await
}
