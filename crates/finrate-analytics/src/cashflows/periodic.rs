//! Net present value and internal rate of return for periodic cash flows.

use finrate_core::decimal::{add, discount};
use finrate_math::solvers::newton;
use finrate_math::MathError;
use log::debug;
use rust_decimal::Decimal;

use super::{require_sign_change, Cashflow};
use crate::config::CalculatorConfig;
use crate::error::AnalyticsResult;

/// Net present value of flows one period apart, the first undiscounted.
///
/// `Σ cashflow[i] / (1 + rate)^i`
///
/// Flows too far out for `(1 + rate)^i` to fit in a `Decimal` discount to
/// their (vanishing) present value instead of failing.
///
/// ```rust
/// use finrate_analytics::cashflows::npv;
/// use rust_decimal_macros::dec;
///
/// let value = npv(dec!(0.1), &[dec!(-100), dec!(60), dec!(60), dec!(60)]).unwrap();
/// assert_eq!(value.round_dp(3), dec!(49.211));
/// ```
pub fn npv<C: Cashflow>(rate: Decimal, cashflows: &[C]) -> AnalyticsResult<Decimal> {
    let growth = Decimal::ONE + rate;
    let mut total = Decimal::ZERO;
    for (index, cashflow) in (0u64..).zip(cashflows) {
        let present = discount(cashflow.amount(), growth, Decimal::from(index))?;
        total = add(total, present, "npv total")?;
    }
    Ok(total)
}

/// Internal rate of return of periodic flows.
///
/// Uses the default [`CalculatorConfig`], with `guess` replacing its initial
/// guess when given.
pub fn irr<C: Cashflow>(cashflows: &[C], guess: Option<Decimal>) -> AnalyticsResult<Decimal> {
    let mut config = CalculatorConfig::default();
    if let Some(guess) = guess {
        config = config.with_initial_guess(guess);
    }
    irr_with_config(cashflows, &config)
}

/// Internal rate of return of periodic flows: the rate at which [`npv`] is zero.
///
/// # Errors
///
/// - `InvalidArgument` if the flows lack a strictly positive or a strictly
///   negative amount, or the configuration is invalid
/// - `ConvergenceFailed` if the root-finder gives up
pub fn irr_with_config<C: Cashflow>(
    cashflows: &[C],
    config: &CalculatorConfig,
) -> AnalyticsResult<Decimal> {
    require_sign_change(cashflows)?;
    config.validate()?;

    let objective =
        |rate: Decimal| npv(rate, cashflows).map_err(|e| MathError::invalid_input(e.to_string()));
    let result = newton(objective, config.initial_guess, &config.solver_config())?;

    debug!(
        "irr of {} flows = {} ({} iterations)",
        cashflows.len(),
        result.root,
        result.iterations
    );
    Ok(result.root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;
    use finrate_core::Transaction;
    use rust_decimal_macros::dec;

    #[test]
    fn test_npv() {
        let value = npv(dec!(0.1), &[dec!(-100), dec!(60), dec!(60), dec!(60)]).unwrap();
        assert!((value - dec!(49.211)).abs() < dec!(0.001));
    }

    #[test]
    fn test_npv_at_zero_rate_is_sum() {
        let flows = [dec!(-100), dec!(60), dec!(60)];
        assert_eq!(npv(Decimal::ZERO, &flows).unwrap(), dec!(20));
    }

    #[test]
    fn test_npv_at_minus_one_fails() {
        let result = npv(dec!(-1), &[dec!(-100), dec!(60)]);
        assert!(matches!(
            result,
            Err(AnalyticsError::Core(finrate_core::CoreError::DivisionByZero { .. }))
        ));
    }

    #[test]
    fn test_npv_of_long_sequence_at_high_rate() {
        let mut flows = vec![dec!(-1000)];
        flows.extend(std::iter::repeat(dec!(20)).take(119));

        // 20 * (1 - 2^-119) after the outlay
        let value = npv(Decimal::ONE, &flows).unwrap();
        assert!((value - dec!(-980)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_irr_default_guess() {
        let flows = [dec!(-4000), dec!(1200), dec!(1410), dec!(1875), dec!(1050)];
        let rate = irr(&flows, None).unwrap();
        assert!((rate - dec!(0.143)).abs() < dec!(0.001));
    }

    #[test]
    fn test_irr_of_transactions() {
        let flows: Vec<Transaction> = [dec!(-4000), dec!(1200), dec!(1410), dec!(1875), dec!(1050)]
            .into_iter()
            .map(Transaction::new)
            .collect();
        let rate = irr(&flows, Some(dec!(0.1))).unwrap();
        assert!((rate - dec!(0.142993)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_irr_requires_sign_change() {
        let err = irr(&[dec!(10), dec!(20), dec!(30)], None).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = irr(&[dec!(-10), dec!(-20)], None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_irr_iteration_budget() {
        let flows = [dec!(-4000), dec!(1200), dec!(1410), dec!(1875), dec!(1050)];
        let config = CalculatorConfig::default().with_max_iterations(1);
        let err = irr_with_config(&flows, &config).unwrap_err();
        assert!(matches!(err, AnalyticsError::ConvergenceFailed { .. }));
    }

    #[test]
    fn test_irr_rejects_invalid_config() {
        let flows = [dec!(-100), dec!(110)];
        let config = CalculatorConfig::default().with_initial_guess(dec!(-2));
        assert!(irr_with_config(&flows, &config).unwrap_err().is_invalid_argument());
    }
}
