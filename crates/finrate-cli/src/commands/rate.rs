//! Rate command implementation.
//!
//! Shows a quoted rate in both its effective and nominal forms.

use anyhow::Result;
use clap::Args;
use finrate_core::types::{Compounding, Rate, RateKind, RateOptions};
use rust_decimal::Decimal;

use crate::cli::OutputFormat;
use crate::output::{print_metrics, KeyValue};

/// Arguments for the rate command.
#[derive(Args, Debug)]
pub struct RateArgs {
    /// Annual rate as a decimal (e.g. 0.0375 for 3.75%)
    pub value: Decimal,

    /// How the rate is quoted: apr, apy, effective or nominal
    #[arg(short, long, default_value = "apr")]
    pub kind: RateKind,

    /// Compounding: annually, semiannually, quarterly, monthly, daily,
    /// continuously, or periods per year
    #[arg(long, default_value = "monthly")]
    pub compounds: Compounding,
}

/// Execute the rate command.
pub fn execute(args: RateArgs, format: OutputFormat) -> Result<()> {
    let options = RateOptions::default().with_compounds(args.compounds);
    let rate = Rate::with_options(args.value, args.kind, options)?;

    let metrics = vec![
        KeyValue::new("Quoted", format!("{} ({})", args.value, args.kind)),
        KeyValue::new("Compounding", rate.compounding().to_string()),
        KeyValue::from_percent("Effective (APR/APY)", rate.effective()),
        KeyValue::from_percent("Nominal", rate.nominal()),
        KeyValue::from_decimal("Monthly", rate.monthly(), 15),
    ];

    print_metrics("Rate Conversion", &metrics, format)
}
