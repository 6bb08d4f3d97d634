//! # Anchor Platform Core
//!
//! Target-independent pieces of the Factom Anchor Platform dashboard. This
//! crate compiles for both the WASM front-end and the native tools, so it
//! carries no async runtime and no HTTP client.
//!
//! ## Modules
//!
//! - [`nav`]: Route table and header menu selection
//! - [`boot`]: Root component loading state
//! - [`rpc`]: JSON-RPC envelope and response decoding
//! - [`notify`]: Notification texts for failed calls
//! - [`title`]: Document titles per section

pub mod boot;
pub mod nav;
pub mod notify;
pub mod rpc;
pub mod title;

pub use boot::BootState;
pub use nav::{resolve, MenuEntry, MenuKey, MenuSelection, Route, Section, MENU, ROUTES};
pub use notify::{notice_for, NETWORK_ERROR_MESSAGE};
pub use rpc::{
    decode_response, endpoint, EmptyParams, Fees, Heights, RpcFailure, RpcMethod, RpcRequest,
    JSONRPC_VERSION, RPC_PATH,
};
pub use title::{page_title, APP_NAME, APP_VERSION};
