//! Secant root-finding.

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Secant root-finding algorithm.
///
/// Approximates the derivative from the two most recent iterates, so it
/// needs neither an analytical derivative nor a bracketing interval.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - First seed
/// * `x1` - Second seed (should differ from `x0`)
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use finrate_math::solvers::{secant, SolverConfig};
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// let f = |x: Decimal| Ok(x * x - dec!(2));
///
/// let result = secant(f, dec!(1), dec!(2), &SolverConfig::default()).unwrap();
/// assert!((result.root - dec!(1.41421356237)).abs() < dec!(0.00000000001));
/// ```
pub fn secant<F>(f: F, x0: Decimal, x1: Decimal, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(Decimal) -> MathResult<Decimal>,
{
    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev)?;
    let mut f_curr = f(x_curr)?;

    for iteration in 0..config.max_iterations {
        if f_curr.abs() < config.tolerance {
            debug!("secant converged on residual at {x_curr} after {iteration} iterations");
            return Ok(SolverResult {
                root: x_curr,
                iterations: iteration,
                residual: f_curr,
            });
        }

        let denom = f_curr
            .checked_sub(f_prev)
            .ok_or_else(|| MathError::overflow("secant slope"))?;
        if denom.is_zero() {
            return Err(MathError::DivisionByZero { value: denom });
        }

        // x_next = x_curr - f(x_curr) * (x_curr - x_prev) / (f(x_curr) - f(x_prev))
        let x_next = f_curr
            .checked_mul(x_curr - x_prev)
            .and_then(|num| num.checked_div(denom))
            .and_then(|step| x_curr.checked_sub(step))
            .ok_or_else(|| MathError::overflow("secant step"))?;

        if (x_next - x_curr).abs() < config.tolerance {
            let f_next = f(x_next)?;
            debug!("secant converged on step at {x_next} after {} iterations", iteration + 1);
            return Ok(SolverResult {
                root: x_next,
                iterations: iteration + 1,
                residual: f_next,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr)?;
    }

    warn!("secant did not converge in {} iterations", config.max_iterations);
    Err(MathError::convergence_failed(config.max_iterations, f_curr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sqrt_2() {
        let f = |x: Decimal| Ok(x * x - dec!(2));

        let result = secant(f, dec!(1), dec!(2), &SolverConfig::default()).unwrap();

        assert!((result.root - dec!(1.4142135623730950488)).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_linear_converges_in_one_step() {
        let f = |x: Decimal| Ok(dec!(2) * x - dec!(1));

        let result = secant(f, dec!(0), dec!(1), &SolverConfig::default()).unwrap();

        assert_eq!(result.root, dec!(0.5));
        assert!(result.iterations <= 2);
    }

    #[test]
    fn test_equal_values_error() {
        let f = |x: Decimal| Ok(x * x - dec!(4));

        // f(-1) == f(1), so the secant line is horizontal
        let result = secant(f, dec!(-1), dec!(1), &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_iteration_budget() {
        let f = |x: Decimal| Ok(x * x * x - dec!(27));
        let config = SolverConfig::default().with_max_iterations(2);

        let result = secant(f, dec!(10), dec!(11), &config);

        assert!(matches!(result, Err(MathError::ConvergenceFailed { iterations: 2, .. })));
    }
}
