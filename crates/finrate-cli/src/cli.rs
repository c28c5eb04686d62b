//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use crate::commands::{AmortizeArgs, EirArgs, IrrArgs, NpvArgs, RateArgs, XirrArgs, XnpvArgs};

/// Finrate - Loan amortization and cash-flow return analytics
#[derive(Parser)]
#[command(name = "finrate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Calculator configuration file (TOML)
    #[arg(short, long, global = true, env = "FINRATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Starting rate for IRR/XIRR (overrides the config file)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub guess: Option<Decimal>,

    /// Convergence threshold for IRR/XIRR (overrides the config file)
    #[arg(long, global = true)]
    pub epsilon: Option<Decimal>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Amortize a loan over one or more rate segments
    Amortize(AmortizeArgs),

    /// Convert between nominal and effective annual rates
    Rate(RateArgs),

    /// Fee-inclusive payment and effective interest rate of a loan
    Eir(EirArgs),

    /// Net present value of periodic cash flows
    Npv(NpvArgs),

    /// Internal rate of return of periodic cash flows
    Irr(IrrArgs),

    /// Net present value of dated cash flows
    Xnpv(XnpvArgs),

    /// Annualized internal rate of return of dated cash flows
    Xirr(XirrArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
