//! Bonding curve quote tool
//!
//! Usage:
//!   curve-quote buy --supply 1000000 --eth 0.5
//!   curve-quote sell --supply 1000000 --tokens 250000
//!   curve-quote schedule --max-supply 800000000 --steps 8 --config config/curve.toml

mod commands;

use anyhow::{Context, Result};
use bonding_curve::ExponentialCurve;
use clap::{Parser, Subcommand};
use curve_config::{defaults::DEFAULT_CONFIG_PATH, CurveSettings};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "curve-quote")]
#[command(about = "Quote buys and sells against the launch bonding curve")]
#[command(version)]
struct Args {
    /// Path to curve configuration file (defaults to config/curve.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Enable JSON logging format
    #[arg(long)]
    json_logs: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokens received for an ETH amount
    Buy {
        /// Current token supply (whole tokens)
        #[arg(long)]
        supply: Decimal,
        /// ETH paid
        #[arg(long)]
        eth: Decimal,
    },
    /// ETH received for selling tokens
    Sell {
        /// Current token supply (whole tokens)
        #[arg(long)]
        supply: Decimal,
        /// Tokens sold
        #[arg(long)]
        tokens: Decimal,
    },
    /// ETH needed to buy an exact token amount
    Cost {
        /// Current token supply (whole tokens)
        #[arg(long)]
        supply: Decimal,
        /// Tokens wanted
        #[arg(long)]
        tokens: Decimal,
    },
    /// Spot price at a supply
    Price {
        /// Token supply (whole tokens)
        #[arg(long)]
        supply: Decimal,
    },
    /// Price and ETH raised across the funding phase
    Schedule {
        /// Supply at the end of the schedule (whole tokens)
        #[arg(long)]
        max_supply: Decimal,
        /// Number of intervals
        #[arg(long, default_value_t = 10)]
        steps: u32,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args);

    let config_path = resolve_config_path(args.config.as_deref());
    let settings = CurveSettings::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {:#}", e);
        e
    })?;
    let params = settings.to_parameters()?;
    let curve = ExponentialCurve::new(params).context("Failed to build bonding curve")?;

    info!("Curve ready: A = {} ETH, B = {} per token", settings.a, settings.b);

    match args.command {
        Commands::Buy { supply, eth } => emit(&commands::buy(&curve, supply, eth)?, args.json),
        Commands::Sell { supply, tokens } => {
            emit(&commands::sell(&curve, supply, tokens)?, args.json)
        }
        Commands::Cost { supply, tokens } => {
            emit(&commands::cost(&curve, supply, tokens)?, args.json)
        }
        Commands::Price { supply } => emit(&commands::price(&curve, supply)?, args.json),
        Commands::Schedule { max_supply, steps } => {
            let rows = commands::schedule(&curve, max_supply, steps)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{:>24}  {:>28}  {:>28}", "supply", "spot price", "eth raised");
                for row in &rows {
                    println!(
                        "{:>24}  {:>28}  {:>28}",
                        row.supply, row.spot_price, row.eth_raised
                    );
                }
            }
            Ok(())
        }
    }
}

fn emit<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let default = Path::new(DEFAULT_CONFIG_PATH);
    default.exists().then(|| default.to_path_buf())
}

fn init_logging(args: &Args) {
    let log_level = match args.log_level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };

    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if args.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
