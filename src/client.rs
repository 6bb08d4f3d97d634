//! Anchor Platform API Client
//!
//! Native JSON-RPC client used by the command-line probe.

use anchor_platform_core::rpc::{
    decode_response, endpoint, Fees, Heights, RpcFailure, RpcMethod, RpcRequest,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiSettings;

/// Client construction errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to create HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// JSON-RPC client for the Anchor Platform API
pub struct AnchorClient {
    client: Client,
    endpoint: String,
}

impl AnchorClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint(&settings.url),
        })
    }

    /// Full URL calls are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Invoke a method and decode its result
    pub async fn call<T: DeserializeOwned>(&self, method: RpcMethod) -> Result<T, RpcFailure> {
        tracing::debug!(method = %method, endpoint = %self.endpoint, "Sending JSON-RPC request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&RpcRequest::new(method))
            .send()
            .await
            .map_err(|e| RpcFailure::Unavailable(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RpcFailure::Unavailable(e.to_string()))?;

        decode_response(status, &body)
    }

    pub async fn heights(&self) -> Result<Heights, RpcFailure> {
        self.call(RpcMethod::Heights).await
    }

    pub async fn fees(&self) -> Result<Fees, RpcFailure> {
        self.call(RpcMethod::Fees).await
    }
}
