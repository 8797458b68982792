//! VaultLens CLI: inspect recorded multicall responses and format amounts.
//!
//! # Commands
//! ```text
//! vaultlens flatten    --file <results.json> [--reference <ref>] [--json]
//! vaultlens queue      --file <results.json> --vault <addr> [--config <addresses.yaml>]
//! vaultlens calls      --vault <addr>... [--config <addresses.yaml>]
//! vaultlens display    --amount <raw> --decimals <n> [--precision <p>]
//! vaultlens abbreviate --amount <decimal>
//! vaultlens stats      <value>...
//! vaultlens leaves     --values <json array>
//! vaultlens info
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vaultlens_core::ContractAddresses;
use vaultlens_observability::{init_tracing, LogConfig, LogFormat};

mod cmd_format;
mod cmd_map;

#[derive(Parser)]
#[command(
    name = "vaultlens",
    about = "Vault multicall mapper and amount formatter (VaultLens CLI)",
    long_about = "
VaultLens CLI: map recorded multicall responses into vault data and format
token amounts for display.

ENVIRONMENT VARIABLES:
  VAULTLENS_ORACLE_ADDRESS              Oracle contract address
  VAULTLENS_STRATEGIES_HELPER_ADDRESS   Strategies helper contract address
  VAULTLENS_USDC_ADDRESS                USDC token address
  VAULTLENS_LOG                         Log filter directives (overrides --verbose)
",
    version
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten each batch of a recorded multicall response into scalars
    Flatten {
        /// Recorded multicall response (JSON)
        #[arg(short, long)]
        file: PathBuf,
        /// Only flatten this reference
        #[arg(long)]
        reference: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a vault's strategy queue from a recorded strategies-helper response
    Queue {
        /// Recorded multicall response (JSON)
        #[arg(short, long)]
        file: PathBuf,
        /// Vault address
        #[arg(long)]
        vault: String,
        /// Contract address overrides (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the strategies-helper call context for a set of vaults
    Calls {
        /// Vault addresses
        #[arg(long = "vault", num_args = 1.., required = true)]
        vaults: Vec<String>,
        /// Contract address overrides (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Render a raw token amount in whole-token units
    Display {
        /// Raw integer amount
        #[arg(long)]
        amount: String,
        /// Token decimals
        #[arg(long)]
        decimals: u32,
        /// Fractional digits (default 5)
        #[arg(long)]
        precision: Option<u32>,
    },

    /// Abbreviate a human amount (MM / K)
    Abbreviate {
        /// Decimal amount, e.g. 1500000 or 1234.5
        #[arg(long)]
        amount: String,
    },

    /// Median, average and sum of a list of numbers
    Stats {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Flatten a nested JSON array into lower-cased leaf strings
    Leaves {
        /// JSON array, e.g. '[1, [2, ["0xAB"]]]'
        #[arg(long)]
        values: String,
    },

    /// Show configured contract addresses and build info
    Info {
        /// Contract address overrides (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_tracing(&LogConfig::for_cli(cli.verbose, format)).context("initialising logging")?;

    match cli.command {
        Commands::Flatten { file, reference, json } => {
            cmd_map::flatten(&file, reference.as_deref(), json)
        }

        Commands::Queue { file, vault, config, json } => {
            let addresses = load_addresses(config.as_deref())?;
            cmd_map::queue(&file, &vault, &addresses, json)
        }

        Commands::Calls { vaults, config } => {
            let addresses = load_addresses(config.as_deref())?;
            cmd_map::calls(&vaults, &addresses)
        }

        Commands::Display { amount, decimals, precision } => {
            cmd_format::display(&amount, decimals, precision)
        }

        Commands::Abbreviate { amount } => cmd_format::abbreviate(&amount),

        Commands::Stats { values } => cmd_format::stats(&values),

        Commands::Leaves { values } => cmd_format::leaves(&values),

        Commands::Info { config } => {
            let addresses = load_addresses(config.as_deref())?;
            cmd_info(&addresses)
        }
    }
}

/// Mainnet defaults, then the YAML file, then environment variables.
fn load_addresses(config: Option<&std::path::Path>) -> Result<ContractAddresses> {
    let base = match config {
        Some(path) => ContractAddresses::from_yaml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ContractAddresses::default(),
    };
    base.apply_env_overrides()
        .context("applying VAULTLENS_* environment overrides")
}

fn cmd_info(addresses: &ContractAddresses) -> Result<()> {
    println!("VaultLens v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Contract addresses:");
    println!("  oracle             {}", addresses.oracle);
    println!("  strategies helper  {}", addresses.strategies_helper);
    println!("  usdc               {}", addresses.usdc);
    Ok(())
}
