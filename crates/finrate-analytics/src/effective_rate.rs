//! Effective interest rate, payment with fees, and loan term.
//!
//! Spreadsheet-style annuity helpers: [`effective_interest_rate`] solves for
//! the per-period rate (like `RATE`), [`number_of_periods`] for the term
//! (like `NPER`), and [`payment_with_fee`] folds an annual fee into the
//! level payment.

use finrate_core::decimal::{add, divide, ln, multiply, power_int, round_half_up};
use finrate_math::solvers::{secant, SolverConfig};
use finrate_math::MathError;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Convergence threshold for [`effective_interest_rate`] (1e-8).
pub const RATE_PRECISION: Decimal = Decimal::from_parts(1, 0, 0, false, 8);

/// Iteration budget for [`effective_interest_rate`].
pub const RATE_MAX_ITERATIONS: u32 = 128;

/// Default per-period guess for [`effective_interest_rate`].
pub const DEFAULT_RATE_GUESS: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// When payments fall due within each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDue {
    /// Payments at the end of each period (ordinary annuity)
    #[default]
    End,
    /// Payments at the beginning of each period (annuity due)
    Beginning,
}

impl PaymentDue {
    fn factor(self) -> Decimal {
        match self {
            PaymentDue::End => Decimal::ZERO,
            PaymentDue::Beginning => Decimal::ONE,
        }
    }
}

/// Level monthly payment on `principal` at `annual_rate` over `periods`
/// months, with `annual_fee` spread over the term.
///
/// `-(r/12) * (annual_fee * periods / 12 + principal) / (1 - (1 + r/12)^-periods)`
///
/// With no fee this matches the amortization payment before rounding.
///
/// ```rust
/// use finrate_analytics::effective_rate::payment_with_fee;
/// use rust_decimal_macros::dec;
///
/// let pmt = payment_with_fee(dec!(200000), dec!(0.075), 360, dec!(60)).unwrap();
/// assert_eq!(pmt.round_dp(2), dec!(-1411.01));
/// ```
pub fn payment_with_fee(
    principal: Decimal,
    annual_rate: Decimal,
    periods: u32,
    annual_fee: Decimal,
) -> AnalyticsResult<Decimal> {
    if periods == 0 {
        return Err(AnalyticsError::invalid_argument(
            "payment requires a positive number of periods",
        ));
    }

    let months = Decimal::from(periods);
    let twelve = Decimal::from(12);
    let financed = annual_fee * months / twelve + principal;

    if annual_rate.is_zero() {
        return Ok(-divide(financed, months, "zero-rate payment")?);
    }

    let monthly = annual_rate / twelve;
    let growth = power_int(Decimal::ONE + monthly, u64::from(periods))?;
    let discount = divide(Decimal::ONE, growth, "payment with fee")?;
    let value = divide(monthly * financed, Decimal::ONE - discount, "payment with fee")?;
    Ok(-value)
}

/// Per-period interest rate of an annuity, solved with the secant method.
///
/// * `nper` - number of payment periods
/// * `pmt` - payment per period (negative when paid out)
/// * `pv` - present value (e.g. the amount borrowed)
/// * `fv` - future value left after the last payment
/// * `due` - whether payments fall at the start or end of each period
/// * `guess` - starting per-period rate; defaults to 0.1
///
/// The result is a fraction per period; multiply by 12 for an annual rate
/// on monthly payments.
///
/// ```rust
/// use finrate_analytics::effective_rate::{effective_interest_rate, PaymentDue};
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// let monthly = effective_interest_rate(
///     360,
///     dec!(-1433.39),
///     dec!(200000),
///     Decimal::ZERO,
///     PaymentDue::End,
///     None,
/// )
/// .unwrap();
/// assert_eq!((monthly * dec!(12)).round_dp(7), dec!(0.0775409));
/// ```
pub fn effective_interest_rate(
    nper: u32,
    pmt: Decimal,
    pv: Decimal,
    fv: Decimal,
    due: PaymentDue,
    guess: Option<Decimal>,
) -> AnalyticsResult<Decimal> {
    if nper == 0 {
        return Err(AnalyticsError::invalid_argument(
            "rate requires a positive number of periods",
        ));
    }

    let guess = guess.unwrap_or(DEFAULT_RATE_GUESS);
    let second = if guess.is_zero() {
        RATE_PRECISION * Decimal::from(1000)
    } else {
        guess * Decimal::new(99, 2)
    };

    let objective = |rate: Decimal| {
        annuity_balance(rate, nper, pmt, pv, fv, due)
            .map_err(|e| MathError::invalid_input(e.to_string()))
    };
    let config = SolverConfig::new(RATE_PRECISION, RATE_MAX_ITERATIONS);
    let result = secant(objective, guess, second, &config)?;

    debug!(
        "effective rate for {nper} periods of {pmt} on {pv}: {} ({} iterations)",
        result.root, result.iterations
    );
    Ok(result.root)
}

/// Value left over after `nper` payments at `rate`: zero at the annuity's rate.
fn annuity_balance(
    rate: Decimal,
    nper: u32,
    pmt: Decimal,
    pv: Decimal,
    fv: Decimal,
    due: PaymentDue,
) -> AnalyticsResult<Decimal> {
    let n = Decimal::from(nper);
    let due = due.factor();

    if rate.abs() < RATE_PRECISION {
        // Linear approximation; the closed form divides by the rate.
        let principal = pv * (Decimal::ONE + n * rate);
        let payments = pmt * (Decimal::ONE + rate * due) * n;
        return Ok(principal + payments + fv);
    }

    let growth = power_int(Decimal::ONE + rate, u64::from(nper))?;
    let principal = multiply(pv, growth, "annuity principal")?;
    let per_payment = divide(Decimal::ONE, rate, "annuity")? + due;
    let payments = multiply(
        multiply(pmt, per_payment, "annuity payments")?,
        growth - Decimal::ONE,
        "annuity payments",
    )?;
    Ok(add(add(principal, payments, "annuity balance")?, fv, "annuity balance")?)
}

/// Number of periods needed to pay off `pv` with payments of `pmt` at
/// per-period `rate`, rounded to a whole period.
///
/// ```rust
/// use finrate_analytics::effective_rate::{number_of_periods, PaymentDue};
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// let n = number_of_periods(dec!(0.00625), dec!(-1398.43), dec!(200000), Decimal::ZERO, PaymentDue::End)
///     .unwrap();
/// assert_eq!(n, dec!(360));
/// ```
pub fn number_of_periods(
    rate: Decimal,
    pmt: Decimal,
    pv: Decimal,
    fv: Decimal,
    due: PaymentDue,
) -> AnalyticsResult<Decimal> {
    if rate.is_zero() {
        if pmt.is_zero() {
            return Err(AnalyticsError::DivisionByZero(
                "number of periods with zero rate and zero payment".to_string(),
            ));
        }
        let periods = divide(-(fv + pv), pmt, "number of periods")?;
        return Ok(round_half_up(periods, 0));
    }

    let growth = Decimal::ONE + rate;
    let multiplier = match due {
        PaymentDue::Beginning => growth,
        PaymentDue::End => Decimal::ONE,
    };
    let ryr = divide(multiplier * pmt, rate, "number of periods")?;

    let (a1, a2) = if ryr - fv < Decimal::ZERO {
        (ln(fv - ryr)?, ln(-pv - ryr)?)
    } else {
        (ln(ryr - fv)?, ln(pv + ryr)?)
    };
    let a3 = ln(growth)?;

    let periods = divide(a1 - a2, a3, "number of periods")?;
    Ok(round_half_up(periods, 0))
}
