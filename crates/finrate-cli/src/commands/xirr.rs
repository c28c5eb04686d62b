//! XIRR command implementation.

use anyhow::Result;
use clap::Args;
use finrate_analytics::cashflows::{xirr_with_config, xnpv};
use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::{convergence_hint, DatedFlowArgs, Settings};
use crate::output::{print_metrics, print_warning, KeyValue};

/// Arguments for the xirr command.
#[derive(Args, Debug)]
pub struct XirrArgs {
    #[command(flatten)]
    pub flows: DatedFlowArgs,
}

/// Execute the xirr command.
pub fn execute(args: XirrArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let config = settings.calculator_config()?;
    let flows = args.flows.transactions()?;

    let rate = match xirr_with_config(&flows, &config) {
        Ok(rate) => rate,
        Err(e) => {
            if let Some(hint) = convergence_hint(&e, &config) {
                print_warning(hint);
            }
            return Err(e.into());
        }
    };
    info!(rate = %rate, "xirr solved");

    let metrics = vec![
        KeyValue::new("Flows", flows.len().to_string()),
        KeyValue::from_percent("XIRR", rate.effective()),
        KeyValue::new("Compounding", rate.compounding().to_string()),
        KeyValue::from_decimal("XNPV at XIRR", xnpv(rate.effective(), &flows)?, 10),
    ];

    print_metrics("Internal Rate of Return (dated)", &metrics, format)
}
