//! Build-time configuration
//!
//! The API base URL comes from the `ANCHOR_API_PATH` environment variable
//! at build time (`ANCHOR_API_PATH=https://anchors.example.com trunk build`).
//! Without it calls go to the page's own origin, where the native host
//! forwards `/v2`.

use anchor_platform_core::rpc::endpoint;

/// API base URL, fixed when the bundle is built
pub const API_BASE: &str = match option_env!("ANCHOR_API_PATH") {
    Some(base) => base,
    None => "",
};

/// URL all JSON-RPC calls are posted to
pub fn rpc_url() -> String {
    endpoint(API_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_url_ends_with_path() {
        assert!(rpc_url().ends_with("/v2"));
        assert!(!rpc_url().contains("//v2"));
    }
}
