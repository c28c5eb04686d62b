//! Cash-flow return calculators.
//!
//! - [`npv`] / [`irr`]: evenly spaced cash flows, one per period
//! - [`xnpv`] / [`xirr`]: dated cash flows on a fixed 365-day year
//! - [`sum`]: plain total
//!
//! The calculators accept any slice of [`Cashflow`] values, which covers
//! bare `Decimal` amounts and [`Transaction`]s. [`CashflowSeries`] bundles a
//! sequence with a [`CalculatorConfig`] for method-style use.
//!
//! # Example
//!
//! ```rust
//! use finrate_analytics::cashflows::{irr, npv};
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//!
//! let flows = [dec!(-4000), dec!(1200), dec!(1410), dec!(1875), dec!(1050)];
//! let rate = irr(&flows, Some(dec!(0.1))).unwrap();
//! assert!((rate - dec!(0.143)).abs() < dec!(0.001));
//! assert!(npv(rate, &flows).unwrap().abs() < dec!(0.000001));
//! ```

mod dated;
mod periodic;
mod series;

pub use dated::{xirr, xirr_with_config, xnpv, SECONDS_PER_YEAR};
pub use periodic::{irr, irr_with_config, npv};
pub use series::CashflowSeries;

use chrono::NaiveDateTime;
use finrate_core::Transaction;
use rust_decimal::Decimal;

use crate::error::{AnalyticsError, AnalyticsResult};

/// A single cash flow: a signed amount, optionally dated.
pub trait Cashflow {
    /// Returns the signed amount.
    fn amount(&self) -> Decimal;

    /// Returns the timestamp, if the flow is dated.
    fn date(&self) -> Option<NaiveDateTime> {
        None
    }
}

impl Cashflow for Decimal {
    fn amount(&self) -> Decimal {
        *self
    }
}

impl Cashflow for Transaction {
    fn amount(&self) -> Decimal {
        Transaction::amount(self)
    }

    fn date(&self) -> Option<NaiveDateTime> {
        Transaction::date(self)
    }
}

/// Returns the total of the amounts.
#[must_use]
pub fn sum<C: Cashflow>(cashflows: &[C]) -> Decimal {
    cashflows.iter().map(Cashflow::amount).sum()
}

/// Fails unless the flows contain both a strictly positive and a strictly
/// negative amount; without a sign change there is no rate of return.
fn require_sign_change<C: Cashflow>(cashflows: &[C]) -> AnalyticsResult<()> {
    let positive = cashflows.iter().any(|c| c.amount() > Decimal::ZERO);
    let negative = cashflows.iter().any(|c| c.amount() < Decimal::ZERO);
    if positive && negative {
        Ok(())
    } else {
        Err(AnalyticsError::invalid_argument(
            "calculation does not converge: cash flows need at least one positive and one negative value",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[dec!(-100), dec!(60), dec!(60), dec!(60)]), dec!(80));
        assert_eq!(sum::<Decimal>(&[]), Decimal::ZERO);

        let ledger = [Transaction::interest(dec!(625)), Transaction::payment(dec!(-926.23))];
        assert_eq!(sum(&ledger), dec!(-301.23));
    }

    #[test]
    fn test_sign_change() {
        assert!(require_sign_change(&[dec!(-1), dec!(2)]).is_ok());
        assert!(require_sign_change(&[dec!(10), dec!(20), dec!(30)]).is_err());
        assert!(require_sign_change(&[dec!(-10), dec!(0)]).is_err());
        assert!(require_sign_change::<Decimal>(&[]).is_err());
    }
}
