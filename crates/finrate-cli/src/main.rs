//! Finrate CLI - Command-line interface for loan and cash-flow analytics.
//!
//! # Usage
//!
//! ```bash
//! # 30-year fixed mortgage
//! finrate amortize --principal 200000 --segment 0.0375:360
//!
//! # Same loan with $100 extra each month, summary only
//! finrate amortize -p 200000 -s 0.0375:360 --extra 100 --summary
//!
//! # Effective rate of a loan with a $60 annual fee
//! finrate eir --principal 200000 --rate 0.075 --fee 60
//!
//! # Internal rate of return
//! finrate irr -4000 1200 1410 1875 1050
//!
//! # Dated flows
//! finrate xirr 1985-01-01:-1000 1990-01-01:600 1995-01-01:600
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so table/JSON/CSV output stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format;
    let settings = Settings {
        config: cli.config,
        guess: cli.guess,
        epsilon: cli.epsilon,
    };

    match cli.command {
        Commands::Amortize(args) => commands::amortize::execute(args, format)?,
        Commands::Rate(args) => commands::rate::execute(args, format)?,
        Commands::Eir(args) => commands::eir::execute(args, format)?,
        Commands::Npv(args) => commands::npv::execute(args, format)?,
        Commands::Irr(args) => commands::irr::execute(args, &settings, format)?,
        Commands::Xnpv(args) => commands::xnpv::execute(args, format)?,
        Commands::Xirr(args) => commands::xirr::execute(args, &settings, format)?,
    }

    Ok(())
}
