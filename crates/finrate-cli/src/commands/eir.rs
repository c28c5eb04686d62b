//! Effective interest rate command implementation.
//!
//! Folds an annual fee into the monthly payment of a loan and solves for
//! the rate that payment implies.

use anyhow::Result;
use clap::Args;
use finrate_analytics::effective_rate::{effective_interest_rate, payment_with_fee, PaymentDue};
use finrate_core::decimal::round_money;
use rust_decimal::Decimal;

use crate::cli::OutputFormat;
use crate::output::{format_money, print_metrics, KeyValue};

/// Arguments for the eir command.
#[derive(Args, Debug)]
pub struct EirArgs {
    /// Amount borrowed
    #[arg(short, long)]
    pub principal: Decimal,

    /// Nominal annual rate as a decimal (e.g. 0.075)
    #[arg(short, long)]
    pub rate: Decimal,

    /// Term in months
    #[arg(short = 'n', long, default_value = "360")]
    pub periods: u32,

    /// Annual fee charged on the loan
    #[arg(long, default_value = "0")]
    pub fee: Decimal,

    /// Payments fall at the start of each period
    #[arg(long)]
    pub beginning: bool,
}

/// Execute the eir command.
pub fn execute(args: EirArgs, format: OutputFormat) -> Result<()> {
    let due = if args.beginning {
        PaymentDue::Beginning
    } else {
        PaymentDue::End
    };

    let payment = payment_with_fee(args.principal, args.rate, args.periods, args.fee)?;
    let monthly = effective_interest_rate(
        args.periods,
        payment,
        args.principal,
        Decimal::ZERO,
        due,
        None,
    )?;

    let metrics = vec![
        KeyValue::new("Principal", format_money(args.principal)),
        KeyValue::from_percent("Nominal Rate", args.rate),
        KeyValue::new("Annual Fee", format_money(args.fee)),
        KeyValue::new("Payment", format_money(round_money(payment))),
        KeyValue::from_decimal("Monthly Rate", monthly, 10),
        KeyValue::from_percent("Effective Annual Rate", monthly * Decimal::from(12)),
    ];

    print_metrics("Effective Interest Rate", &metrics, format)
}
