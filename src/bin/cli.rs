//! Anchor Platform CLI
//!
//! Issues the dashboard's JSON-RPC calls from a terminal:
//! - Chain heights
//! - Ledger fees
//! - Default config generation

use anchor_platform::config::{generate_default_config, Config};
use anchor_platform::{logging, AnchorClient};
use anchor_platform_core::notice_for;
use anchor_platform_core::rpc::{Fees, Heights};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "anchor-platform-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query the Factom Anchor Platform API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and ANCHOR_API_PATH)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show directory and entry block heights
    Heights,

    /// Show ledger fees
    Fees,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::from_env(),
    };
    if let Some(url) = cli.api_url {
        config.api.url = url;
    }

    logging::init(&config.logging);

    match cli.command {
        Commands::Heights => {
            let client = AnchorClient::new(&config.api)?;
            match client.heights().await {
                Ok(heights) => print_heights(&heights, cli.format)?,
                Err(failure) => {
                    tracing::debug!("heights failed: {}", failure);
                    eprintln!("{}", notice_for(&failure));
                    std::process::exit(1);
                }
            }
        }

        Commands::Fees => {
            let client = AnchorClient::new(&config.api)?;
            match client.fees().await {
                Ok(fees) => print_fees(&fees, cli.format)?,
                Err(failure) => {
                    tracing::debug!("fees failed: {}", failure);
                    eprintln!("{}", notice_for(&failure));
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_heights(heights: &Heights, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(heights)?),
        OutputFormat::Table => {
            println!("{:<10} {:>12}", "DBHeight", heights.directoryblockheight);
            println!("{:<10} {:>12}", "EBHeight", heights.entryblockheight);
        }
    }
    Ok(())
}

fn print_fees(fees: &Fees, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(fees)?),
        OutputFormat::Table => {
            let rows = fees.rows();
            if rows.is_empty() {
                println!("No fee data");
            }
            let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
            for (key, value) in rows {
                println!("{:<width$} {}", key, value, width = width);
            }
        }
    }
    Ok(())
}
