//! Net present value and internal rate of return for dated cash flows.

use finrate_core::decimal::{add, discount, divide};
use finrate_core::types::{Compounding, Rate, RateKind, RateOptions};
use finrate_math::solvers::newton;
use finrate_math::MathError;
use log::debug;
use rust_decimal::Decimal;

use super::{require_sign_change, Cashflow};
use crate::config::CalculatorConfig;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Seconds in the fixed 365-day year used to measure time between flows.
pub const SECONDS_PER_YEAR: i64 = 365 * 86_400;

/// Net present value of dated flows, discounted to the first flow's date.
///
/// `Σ amount[i] / (1 + rate)^((date[i] - date[0]) / SECONDS_PER_YEAR)`
///
/// Years are a fixed 365 days; leap days are not special.
///
/// # Errors
///
/// Returns `InvalidArgument` if a flow has no date.
pub fn xnpv<C: Cashflow>(rate: Decimal, cashflows: &[C]) -> AnalyticsResult<Decimal> {
    let Some(first) = cashflows.first() else {
        return Ok(Decimal::ZERO);
    };
    let start = first
        .date()
        .ok_or_else(|| AnalyticsError::invalid_argument("xnpv requires dated cash flows"))?;

    let growth = Decimal::ONE + rate;
    let year = Decimal::from(SECONDS_PER_YEAR);
    let mut total = Decimal::ZERO;
    for cashflow in cashflows {
        let date = cashflow
            .date()
            .ok_or_else(|| AnalyticsError::invalid_argument("xnpv requires dated cash flows"))?;
        let elapsed = Decimal::from((date - start).num_seconds());
        let years = divide(elapsed, year, "xnpv year fraction")?;
        let present = discount(cashflow.amount(), growth, years)?;
        total = add(total, present, "xnpv total")?;
    }
    Ok(total)
}

/// Annualized internal rate of return of dated flows.
///
/// Uses the default [`CalculatorConfig`], with `guess` replacing its initial
/// guess when given.
///
/// ```rust
/// use chrono::NaiveDate;
/// use finrate_analytics::cashflows::xirr;
/// use finrate_core::Transaction;
/// use rust_decimal_macros::dec;
///
/// let date = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
/// let flows = [
///     Transaction::dated(dec!(-1000), date(1985)),
///     Transaction::dated(dec!(600), date(1990)),
///     Transaction::dated(dec!(600), date(1995)),
/// ];
///
/// let rate = xirr(&flows, None).unwrap();
/// assert_eq!(rate.effective().round_dp(6), dec!(0.024851));
/// ```
pub fn xirr<C: Cashflow>(cashflows: &[C], guess: Option<Decimal>) -> AnalyticsResult<Rate> {
    let mut config = CalculatorConfig::default();
    if let Some(guess) = guess {
        config = config.with_initial_guess(guess);
    }
    xirr_with_config(cashflows, &config)
}

/// Annualized internal rate of return of dated flows: the rate at which
/// [`xnpv`] is zero, as an annually compounded [`Rate`].
///
/// # Errors
///
/// - `InvalidArgument` if the flows lack a strictly positive or a strictly
///   negative amount, a flow has no date, or the configuration is invalid
/// - `ConvergenceFailed` if the root-finder gives up
pub fn xirr_with_config<C: Cashflow>(
    cashflows: &[C],
    config: &CalculatorConfig,
) -> AnalyticsResult<Rate> {
    require_sign_change(cashflows)?;
    if cashflows.iter().any(|c| c.date().is_none()) {
        return Err(AnalyticsError::invalid_argument(
            "xirr requires dated cash flows",
        ));
    }
    config.validate()?;

    let objective =
        |rate: Decimal| xnpv(rate, cashflows).map_err(|e| MathError::invalid_input(e.to_string()));
    let result = newton(objective, config.initial_guess, &config.solver_config())?;

    debug!(
        "xirr of {} flows = {} ({} iterations)",
        cashflows.len(),
        result.root,
        result.iterations
    );

    let options = RateOptions::default().with_compounds(Compounding::Annually);
    Ok(Rate::with_options(result.root, RateKind::Apr, options)?)
}
