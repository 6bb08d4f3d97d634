//! Anchor Platform Dashboard Host
//!
//! Run with: cargo run --bin anchor-platform
//!
//! Serves the built dashboard (`trunk build` output) and forwards its
//! `POST /v2` calls to the Anchor Platform API.
//!
//! # Configuration
//!
//! Read from `--config`, or `~/.config/anchor-platform/config.toml`, or
//! `./anchor-platform.toml`; environment variables (`ANCHOR_API_PATH`,
//! `ANCHOR_HOST`, `ANCHOR_PORT`, `ANCHOR_DIST_DIR`, `ANCHOR_LOG_LEVEL`,
//! `ANCHOR_LOG_FORMAT`) override the file. `RUST_LOG` overrides the log level.

use anchor_platform::config::{Config, ConfigOrigin};
use anchor_platform::{logging, serve};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "anchor-platform")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Host the Factom Anchor Platform dashboard")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the built dashboard
    #[arg(long)]
    dist: Option<PathBuf>,

    /// Anchor Platform API base URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, origin) = match &args.config {
        Some(path) => (
            Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            ConfigOrigin::file(path),
        ),
        None => Config::load_default(),
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dist) = args.dist {
        config.server.dist_dir = dist;
    }
    if let Some(url) = args.api_url {
        config.api.url = url;
    }

    logging::init(&config.logging);
    origin.log();

    tracing::info!(
        "Starting Anchor Platform dashboard host v{}",
        env!("CARGO_PKG_VERSION")
    );

    serve(config).await?;

    Ok(())
}
