//! NPV command implementation.

use anyhow::Result;
use clap::Args;
use finrate_analytics::cashflows::{npv, sum};
use rust_decimal::Decimal;

use crate::cli::OutputFormat;
use crate::commands::FlowArgs;
use crate::output::{print_metrics, KeyValue};

/// Arguments for the npv command.
#[derive(Args, Debug)]
pub struct NpvArgs {
    /// Discount rate per period as a decimal (e.g. 0.1)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Decimal,

    #[command(flatten)]
    pub flows: FlowArgs,
}

/// Execute the npv command.
pub fn execute(args: NpvArgs, format: OutputFormat) -> Result<()> {
    let amounts = args.flows.amounts()?;
    let value = npv(args.rate, &amounts)?;

    let metrics = vec![
        KeyValue::new("Flows", amounts.len().to_string()),
        KeyValue::from_decimal("Sum", sum(&amounts), 2),
        KeyValue::from_percent("Rate", args.rate),
        KeyValue::from_decimal("NPV", value, 4),
    ];

    print_metrics("Net Present Value", &metrics, format)
}
