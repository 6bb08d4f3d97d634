//! Notification texts shown when a call to the Anchor Platform API fails.

use crate::rpc::RpcFailure;

/// Generic notice for calls that produced no usable response
pub const NETWORK_ERROR_MESSAGE: &str = "Anchor Platform API is unavailable";

/// Text of the error notice for a failed call.
///
/// Server-provided messages are shown verbatim; every other failure
/// collapses into [`NETWORK_ERROR_MESSAGE`].
pub fn notice_for(failure: &RpcFailure) -> String {
    match failure {
        RpcFailure::Server(message) => message.clone(),
        RpcFailure::Unavailable(_) | RpcFailure::Malformed(_) => NETWORK_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{decode_response, Heights};

    #[test]
    fn test_server_message_is_verbatim() {
        let failure = decode_response::<Heights>(500, r#"{"error":"X"}"#).unwrap_err();
        assert_eq!(notice_for(&failure), "X");
    }

    #[test]
    fn test_no_response_is_generic() {
        let failure = RpcFailure::Unavailable("connection refused".to_string());
        assert_eq!(notice_for(&failure), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_malformed_is_generic() {
        let failure = RpcFailure::Malformed("expected value".to_string());
        assert_eq!(notice_for(&failure), NETWORK_ERROR_MESSAGE);
    }
}
