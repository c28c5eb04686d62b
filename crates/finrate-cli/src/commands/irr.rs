//! IRR command implementation.

use anyhow::Result;
use clap::Args;
use finrate_analytics::cashflows::{irr_with_config, npv};

use crate::cli::OutputFormat;
use crate::commands::{convergence_hint, FlowArgs, Settings};
use crate::output::{print_metrics, print_warning, KeyValue};

/// Arguments for the irr command.
#[derive(Args, Debug)]
pub struct IrrArgs {
    #[command(flatten)]
    pub flows: FlowArgs,
}

/// Execute the irr command.
pub fn execute(args: IrrArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let config = settings.calculator_config()?;
    let amounts = args.flows.amounts()?;
    let rate = match irr_with_config(&amounts, &config) {
        Ok(rate) => rate,
        Err(e) => {
            if let Some(hint) = convergence_hint(&e, &config) {
                print_warning(hint);
            }
            return Err(e.into());
        }
    };

    let metrics = vec![
        KeyValue::new("Flows", amounts.len().to_string()),
        KeyValue::from_percent("IRR", rate),
        KeyValue::from_decimal("NPV at IRR", npv(rate, &amounts)?, 10),
    ];

    print_metrics("Internal Rate of Return", &metrics, format)
}
