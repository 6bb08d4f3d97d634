//! JSON-RPC
//!
//! Request envelope and response decoding for the Anchor Platform API.
//!
//! Every call is a `POST /v2` carrying
//! `{"jsonrpc": "2.0", "id": 0, "method": "<name>", "params": {}}`.
//! Decoding is transport independent so the browser client and the native
//! client classify failures the same way.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Protocol version sent in every envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// Path of the JSON-RPC endpoint, relative to the API base URL
pub const RPC_PATH: &str = "/v2";

/// Join an API base URL and the JSON-RPC path
pub fn endpoint(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), RPC_PATH)
}

/// Remote methods the dashboard invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RpcMethod {
    Fees,
    Heights,
}

impl RpcMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::Fees => "fees",
            RpcMethod::Heights => "heights",
        }
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes as an empty object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyParams {}

/// JSON-RPC request envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: RpcMethod,
    pub params: EmptyParams,
}

impl RpcRequest {
    pub fn new(method: RpcMethod) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: 0,
            method,
            params: EmptyParams::default(),
        }
    }
}

/// Result of the `heights` method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heights {
    pub directoryblockheight: u64,
    pub entryblockheight: u64,
}

/// Result of the `fees` method, keyed by ledger or fee name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fees(pub BTreeMap<String, serde_json::Value>);

impl Fees {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten nested objects into `(dotted.key, display value)` rows
    pub fn rows(&self) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        for (key, value) in &self.0 {
            flatten_into(key, value, &mut rows);
        }
        rows
    }
}

fn flatten_into(prefix: &str, value: &serde_json::Value, rows: &mut Vec<(String, String)>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(&format!("{}.{}", prefix, key), nested, rows);
            }
        }
        serde_json::Value::String(s) => rows.push((prefix.to_string(), s.clone())),
        other => rows.push((prefix.to_string(), other.to_string())),
    }
}

/// Failure of a JSON-RPC call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcFailure {
    /// The API answered with an application-level error message
    #[error("{0}")]
    Server(String),

    /// No response was received (connection refused, DNS, timeout)
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// A response was received but its body could not be decoded
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Error member of a response body.
///
/// The platform's Go backend reports plain strings; JSON-RPC 2.0 servers
/// report `{code, message}` objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorPayload {
    Message(String),
    Object { message: String },
    Other(serde_json::Value),
}

impl ErrorPayload {
    fn into_message(self) -> String {
        match self {
            ErrorPayload::Message(message) => message,
            ErrorPayload::Object { message, .. } => message,
            ErrorPayload::Other(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorPayload>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<ErrorPayload>,
}

/// Decode an HTTP response into the method result or a classified failure
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, RpcFailure> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .map(ErrorPayload::into_message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        return Err(RpcFailure::Server(message));
    }

    let response: RpcResponse<T> =
        serde_json::from_str(body).map_err(|e| RpcFailure::Malformed(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(RpcFailure::Server(error.into_message()));
    }

    response
        .result
        .ok_or_else(|| RpcFailure::Malformed("response carries neither result nor error".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        for (method, name) in [(RpcMethod::Fees, "fees"), (RpcMethod::Heights, "heights")] {
            let value = serde_json::to_value(RpcRequest::new(method)).unwrap();
            assert_eq!(
                value,
                json!({"jsonrpc": "2.0", "id": 0, "method": name, "params": {}})
            );
        }
    }

    #[test]
    fn test_envelope_serializes_params_as_empty_object() {
        let text = serde_json::to_string(&RpcRequest::new(RpcMethod::Heights)).unwrap();
        assert_eq!(
            text,
            r#"{"jsonrpc":"2.0","id":0,"method":"heights","params":{}}"#
        );
    }

    #[test]
    fn test_endpoint_join() {
        assert_eq!(endpoint("http://localhost:8082"), "http://localhost:8082/v2");
        assert_eq!(endpoint("http://localhost:8082/"), "http://localhost:8082/v2");
        assert_eq!(endpoint(""), "/v2");
    }

    #[test]
    fn test_decode_heights_result() {
        let body = r#"{"jsonrpc":"2.0","id":0,"result":{"directoryblockheight":251234,"entryblockheight":251233,"leaderheight":251235}}"#;
        let heights: Heights = decode_response(200, body).unwrap();
        assert_eq!(heights.directoryblockheight, 251234);
        assert_eq!(heights.entryblockheight, 251233);
    }

    #[test]
    fn test_decode_error_status_with_message() {
        let err = decode_response::<Heights>(500, r#"{"error":"X"}"#).unwrap_err();
        assert_eq!(err, RpcFailure::Server("X".to_string()));
    }

    #[test]
    fn test_decode_error_status_with_object() {
        let body = r#"{"jsonrpc":"2.0","id":0,"error":{"code":-32601,"message":"Method not found"}}"#;
        let err = decode_response::<Fees>(400, body).unwrap_err();
        assert_eq!(err, RpcFailure::Server("Method not found".to_string()));
    }

    #[test]
    fn test_decode_error_status_without_body() {
        let err = decode_response::<Fees>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            RpcFailure::Server("Request failed with status 502".to_string())
        );
    }

    #[test]
    fn test_decode_in_band_error() {
        let body = r#"{"id":0,"result":null,"error":"rpc: can't find service heights"}"#;
        let err = decode_response::<Heights>(200, body).unwrap_err();
        assert_eq!(
            err,
            RpcFailure::Server("rpc: can't find service heights".to_string())
        );
    }

    #[test]
    fn test_decode_missing_result_is_malformed() {
        let err = decode_response::<Heights>(200, r#"{"id":0}"#).unwrap_err();
        assert!(matches!(err, RpcFailure::Malformed(_)));
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let err = decode_response::<Heights>(200, "not json").unwrap_err();
        assert!(matches!(err, RpcFailure::Malformed(_)));
    }

    #[test]
    fn test_fees_rows_flatten_nested() {
        let body = r#"{"result":{"btc":{"fastestFee":100,"hourFee":82},"eth":{"fast":1030},"note":"gwei/10"}}"#;
        let fees: Fees = decode_response(200, body).unwrap();
        assert_eq!(
            fees.rows(),
            vec![
                ("btc.fastestFee".to_string(), "100".to_string()),
                ("btc.hourFee".to_string(), "82".to_string()),
                ("eth.fast".to_string(), "1030".to_string()),
                ("note".to_string(), "gwei/10".to_string()),
            ]
        );
    }

    #[test]
    fn test_fees_empty() {
        let fees: Fees = decode_response(200, r#"{"result":{}}"#).unwrap();
        assert!(fees.is_empty());
        assert!(fees.rows().is_empty());
    }
}
