//! Amortize command implementation.
//!
//! Prints the period-by-period schedule of a loan and a summary of its
//! payments and interest.

use anyhow::Result;
use clap::Args;
use finrate_analytics::amortization::{Amortization, ScheduleRow};
use finrate_core::types::{Compounding, Rate, RateKind, RateOptions};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::parse_decimal;
use crate::error::{CliError, CliResult};
use crate::output::{format_money, print_metrics, print_output, KeyValue};

/// Arguments for the amortize command.
#[derive(Args, Debug)]
pub struct AmortizeArgs {
    /// Amount borrowed
    #[arg(short, long)]
    pub principal: Decimal,

    /// Rate segment as RATE:MONTHS (e.g. 0.0375:360). Repeat for adjustable rates.
    #[arg(short, long = "segment", required = true)]
    pub segments: Vec<String>,

    /// How the segment rates are quoted
    #[arg(long, default_value = "apr")]
    pub kind: RateKind,

    /// Compounding of the segment rates
    #[arg(long, default_value = "monthly")]
    pub compounds: Compounding,

    /// Extra amount paid every period
    #[arg(long)]
    pub extra: Option<Decimal>,

    /// Print only the summary, not the schedule
    #[arg(long)]
    pub summary: bool,
}

/// One schedule row for display.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleLine {
    #[tabled(rename = "Period")]
    pub period: u32,
    #[tabled(rename = "Principal")]
    pub principal: String,
    #[tabled(rename = "Rate")]
    pub rate: String,
    #[tabled(rename = "Payment")]
    pub payment: String,
    #[tabled(rename = "Interest")]
    pub interest: String,
    #[tabled(rename = "Balance")]
    pub balance: String,
}

impl From<ScheduleRow> for ScheduleLine {
    fn from(row: ScheduleRow) -> Self {
        Self {
            period: row.period,
            principal: format_money(row.opening_balance),
            rate: format!("{:.6}", row.rate),
            payment: format_money(row.payment),
            interest: format_money(row.interest),
            balance: format_money(row.closing_balance),
        }
    }
}

/// Parses a `RATE:MONTHS` segment.
fn parse_segment(s: &str, kind: RateKind, compounds: Compounding) -> CliResult<Rate> {
    let (value, months) = s
        .split_once(':')
        .ok_or_else(|| CliError::InvalidNumber(format!("{s} (expected RATE:MONTHS)")))?;
    let months: i64 = months
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidNumber(months.to_string()))?;

    let options = RateOptions::default()
        .with_duration(months)
        .with_compounds(compounds);
    Rate::with_options(parse_decimal(value)?, kind, options)
        .map_err(|e| CliError::InvalidNumber(format!("{s}: {e}")))
}

/// Execute the amortize command.
pub fn execute(args: AmortizeArgs, format: OutputFormat) -> Result<()> {
    let rates = args
        .segments
        .iter()
        .map(|s| parse_segment(s, args.kind, args.compounds))
        .collect::<CliResult<Vec<_>>>()?;

    let loan = match args.extra {
        Some(extra) => {
            Amortization::with_adjustment(args.principal, &rates, |p| p.amount() - extra)?
        }
        None => Amortization::new(args.principal, &rates)?,
    };

    if !args.summary {
        let lines: Vec<ScheduleLine> = loan.schedule().into_iter().map(Into::into).collect();
        print_output(&lines, format)?;
    }

    let total = |values: Vec<Decimal>| values.into_iter().sum::<Decimal>();
    let mut metrics = vec![
        KeyValue::new("Principal", format_money(loan.principal())),
        KeyValue::new(
            "Payment",
            loan.payment()
                .map_or_else(|| "varies".to_string(), format_money),
        ),
        KeyValue::new("Periods", loan.duration().to_string()),
        KeyValue::new("Total Payments", format_money(total(loan.payments()))),
        KeyValue::new("Total Interest", format_money(total(loan.interest()))),
    ];
    if args.extra.is_some() {
        metrics.push(KeyValue::new(
            "Additional Payments",
            format_money(total(loan.additional_payments())),
        ));
    }

    if args.summary || format == OutputFormat::Table {
        print_metrics("Loan Summary", &metrics, format)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_segment() {
        let rate = parse_segment("0.0375:360", RateKind::Apr, Compounding::Monthly).unwrap();
        assert_eq!(rate.effective(), dec!(0.0375));
        assert_eq!(rate.duration(), Some(360));

        assert!(parse_segment("0.0375", RateKind::Apr, Compounding::Monthly).is_err());
        assert!(parse_segment("0.0375:-1", RateKind::Apr, Compounding::Monthly).is_err());
    }

    #[test]
    fn test_schedule_line() {
        let line = ScheduleLine::from(ScheduleRow {
            period: 1,
            opening_balance: dec!(200000),
            rate: dec!(0.003125),
            payment: dec!(-926.23),
            interest: dec!(625.00),
            closing_balance: dec!(199698.77),
        });
        assert_eq!(line.principal, "200000.00");
        assert_eq!(line.rate, "0.003125");
        assert_eq!(line.balance, "199698.77");
    }
}
