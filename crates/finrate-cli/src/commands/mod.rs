//! CLI command implementations.

pub mod amortize;
pub mod eir;
pub mod irr;
pub mod npv;
pub mod rate;
pub mod xirr;
pub mod xnpv;

pub use amortize::AmortizeArgs;
pub use eir::EirArgs;
pub use irr::IrrArgs;
pub use npv::NpvArgs;
pub use rate::RateArgs;
pub use xirr::XirrArgs;
pub use xnpv::XnpvArgs;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Args;
use finrate_analytics::config::CalculatorConfig;
use finrate_analytics::AnalyticsError;
use finrate_core::Transaction;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Calculator settings resolved from the global flags.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Optional TOML file holding a `CalculatorConfig`
    pub config: Option<PathBuf>,
    /// Overrides the initial guess
    pub guess: Option<Decimal>,
    /// Overrides the convergence threshold
    pub epsilon: Option<Decimal>,
}

impl Settings {
    /// Loads the config file (if any) and applies the flag overrides.
    pub fn calculator_config(&self) -> CliResult<CalculatorConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => CalculatorConfig::default(),
        };
        if let Some(guess) = self.guess {
            config = config.with_initial_guess(guess);
        }
        if let Some(epsilon) = self.epsilon {
            config = config.with_epsilon(epsilon);
        }
        config
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        debug!(?config, "calculator config");
        Ok(config)
    }
}

/// Hint shown when a solve from the default guess gives up.
pub const GUESS_HINT: &str = "no convergence from the default guess; try --guess 0.1";

/// Returns [`GUESS_HINT`] when `error` is a non-convergence and the solve
/// started from the default initial guess.
pub fn convergence_hint(error: &AnalyticsError, config: &CalculatorConfig) -> Option<&'static str> {
    let default_guess = config.initial_guess == CalculatorConfig::default().initial_guess;
    (default_guess && matches!(error, AnalyticsError::ConvergenceFailed { .. })).then_some(GUESS_HINT)
}

fn load_config(path: &Path) -> CliResult<CalculatorConfig> {
    let text = std::fs::read_to_string(path)?;
    CalculatorConfig::from_toml_str(&text)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
}

/// Periodic cash flows given inline or in a CSV file.
#[derive(Args, Debug)]
pub struct FlowArgs {
    /// Cash flow amounts, one per period (e.g. -100 60 60 60)
    #[arg(allow_negative_numbers = true, required_unless_present = "file")]
    pub amounts: Vec<Decimal>,

    /// CSV file with an `amount` column
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl FlowArgs {
    /// Returns the amounts, reading the CSV file when one was given.
    pub fn amounts(&self) -> CliResult<Vec<Decimal>> {
        match &self.file {
            Some(path) => Ok(read_flows(path)?
                .into_iter()
                .map(|row| row.amount)
                .collect()),
            None => Ok(self.amounts.clone()),
        }
    }
}

/// Dated cash flows given inline or in a CSV file.
#[derive(Args, Debug)]
pub struct DatedFlowArgs {
    /// Dated cash flows as YYYY-MM-DD:AMOUNT (e.g. 1985-01-01:-1000)
    #[arg(required_unless_present = "file")]
    pub flows: Vec<String>,

    /// CSV file with `date` and `amount` columns
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl DatedFlowArgs {
    /// Returns the flows as dated transactions.
    pub fn transactions(&self) -> CliResult<Vec<Transaction>> {
        match &self.file {
            Some(path) => read_flows(path)?
                .into_iter()
                .map(|row| {
                    let date = row
                        .date
                        .ok_or_else(|| CliError::MissingArgument("date column".to_string()))?;
                    Ok(Transaction::dated(row.amount, parse_date(&date)?))
                })
                .collect(),
            None => self.flows.iter().map(|flow| parse_dated_flow(flow)).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FlowRow {
    date: Option<String>,
    amount: Decimal,
}

fn read_flows(path: &Path) -> CliResult<Vec<FlowRow>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| CliError::InvalidCashflow(format!("{}: {e}", path.display())))?;
    reader
        .deserialize()
        .map(|row| row.map_err(|e| CliError::InvalidCashflow(e.to_string())))
        .collect()
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a decimal number.
pub fn parse_decimal(s: &str) -> CliResult<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| CliError::InvalidNumber(s.to_string()))
}

/// Parses a `YYYY-MM-DD:AMOUNT` cash flow.
pub fn parse_dated_flow(s: &str) -> CliResult<Transaction> {
    let (date, amount) = s
        .split_once(':')
        .ok_or_else(|| CliError::InvalidCashflow(s.to_string()))?;
    Ok(Transaction::dated(parse_decimal(amount)?, parse_date(date)?))
}
