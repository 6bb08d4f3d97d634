//! # Anchor Platform
//!
//! Native companion of the Factom Anchor Platform dashboard.
//!
//! The dashboard itself is a client-side Leptos application
//! (`anchor-platform-ui`). This crate hosts its built bundle, forwards its
//! JSON-RPC calls to the Anchor Platform API, and offers the same calls from
//! a terminal.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`client`]: JSON-RPC client for `heights` and `fees`
//! - [`server`]: Dashboard host with `/v2` forwarding, built with Axum
//! - [`logging`]: Tracing subscriber setup

pub mod client;
pub mod config;
pub mod logging;
pub mod server;

pub use client::{AnchorClient, ClientError};
pub use config::{ApiSettings, Config, ConfigError, ConfigOrigin, LoggingConfig, ServerSettings};
pub use server::{build_router, serve, AppState, ServerError};
