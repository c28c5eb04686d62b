//! XNPV command implementation.

use anyhow::Result;
use clap::Args;
use finrate_analytics::cashflows::xnpv;
use rust_decimal::Decimal;

use crate::cli::OutputFormat;
use crate::commands::DatedFlowArgs;
use crate::output::{print_metrics, KeyValue};

/// Arguments for the xnpv command.
#[derive(Args, Debug)]
pub struct XnpvArgs {
    /// Annual discount rate as a decimal (e.g. 0.06)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Decimal,

    #[command(flatten)]
    pub flows: DatedFlowArgs,
}

/// Execute the xnpv command.
pub fn execute(args: XnpvArgs, format: OutputFormat) -> Result<()> {
    let flows = args.flows.transactions()?;
    let value = xnpv(args.rate, &flows)?;

    let metrics = vec![
        KeyValue::new("Flows", flows.len().to_string()),
        KeyValue::from_percent("Rate", args.rate),
        KeyValue::from_decimal("XNPV", value, 4),
    ];

    print_metrics("Net Present Value (dated)", &metrics, format)
}
