//! Damped Newton root-finding.

use log::{debug, trace, warn};
use rust_decimal::Decimal;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Smallest fraction of the Newton step tried before giving up on an iteration.
const MIN_STEP_FACTOR: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Relative perturbation used for the forward-difference derivative.
const DERIVATIVE_STEP: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// Damped Newton's method with a forward-difference derivative.
///
/// Each iteration computes the full step `f(x) / f'(x)` and then tries
/// `x - λ·step` for `λ = 1, 1/2, 1/4, ...` until `|f|` decreases, down to
/// `λ = 0.001`. A trial point where `f` fails to evaluate (for instance a
/// rate at or below -100%) counts as no improvement.
///
/// The iteration stops when `|f(x)|` or the full step falls below
/// `config.tolerance`. If no damped step improves `|f|` while the step is
/// below `config.stall_tolerance`, the current point is accepted; otherwise
/// the solve fails with [`MathError::StepReductionFailed`], as it does when
/// `f` cannot be evaluated next to the current point to estimate `f'`.
/// Only a failure at `initial_guess` itself is returned unchanged.
///
/// # Arguments
///
/// * `f` - The objective whose root is sought
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use finrate_math::solvers::{newton, SolverConfig};
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// // Find root of x^2 - 2
/// let f = |x: Decimal| Ok(x * x - dec!(2));
///
/// let result = newton(f, dec!(1.5), &SolverConfig::default()).unwrap();
/// assert!((result.root - dec!(1.41421356237)).abs() < dec!(0.00000000001));
/// ```
pub fn newton<F>(f: F, initial_guess: Decimal, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(Decimal) -> MathResult<Decimal>,
{
    let mut x = initial_guess;
    let mut fx = f(x)?;

    for iteration in 0..config.max_iterations {
        if fx.abs() < config.tolerance {
            debug!("newton converged on residual at {x} after {iteration} iterations");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let Ok(dfx) = forward_difference(&f, x, fx) else {
            warn!("newton could not estimate f'({x})");
            return Err(MathError::step_reduction_failed(iteration, fx));
        };
        if dfx.is_zero() {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx
            .checked_div(dfx)
            .ok_or_else(|| MathError::overflow("newton step"))?;

        if step.abs() < config.tolerance {
            let root = x - step;
            let residual = f(root).unwrap_or(fx);
            debug!("newton converged on step at {root} after {} iterations", iteration + 1);
            return Ok(SolverResult {
                root,
                iterations: iteration + 1,
                residual,
            });
        }

        match damped_step(&f, x, fx, step) {
            Some((next, f_next)) => {
                trace!("newton iteration {iteration}: x = {next}, f(x) = {f_next}");
                x = next;
                fx = f_next;
            }
            None if step.abs() < config.stall_tolerance => {
                debug!("newton stalled within tolerance at {x} after {} iterations", iteration + 1);
                return Ok(SolverResult {
                    root: x,
                    iterations: iteration + 1,
                    residual: fx,
                });
            }
            None => {
                warn!("newton could not reduce |f| = {} at {x}", fx.abs());
                return Err(MathError::step_reduction_failed(iteration + 1, fx));
            }
        }
    }

    warn!(
        "newton did not converge in {} iterations (x = {x}, f(x) = {fx})",
        config.max_iterations
    );
    Err(MathError::convergence_failed(config.max_iterations, fx))
}

/// Estimates `f'(x)` as `(f(x + h) - f(x)) / h` with `h` scaled to `|x|`.
fn forward_difference<F>(f: &F, x: Decimal, fx: Decimal) -> MathResult<Decimal>
where
    F: Fn(Decimal) -> MathResult<Decimal>,
{
    let h = DERIVATIVE_STEP * x.abs().max(Decimal::ONE);
    let shifted = x
        .checked_add(h)
        .ok_or_else(|| MathError::overflow("derivative step"))?;
    let rise = f(shifted)?
        .checked_sub(fx)
        .ok_or_else(|| MathError::overflow("derivative"))?;
    rise.checked_div(h)
        .ok_or_else(|| MathError::overflow("derivative"))
}

/// Halves the step until `|f|` decreases. Returns the accepted point and its value.
fn damped_step<F>(f: &F, x: Decimal, fx: Decimal, step: Decimal) -> Option<(Decimal, Decimal)>
where
    F: Fn(Decimal) -> MathResult<Decimal>,
{
    let mut factor = Decimal::ONE;
    while factor >= MIN_STEP_FACTOR {
        let candidate = factor.checked_mul(step).and_then(|s| x.checked_sub(s));
        if let Some(candidate) = candidate {
            if let Ok(value) = f(candidate) {
                if value.abs() < fx.abs() {
                    return Some((candidate, value));
                }
            }
        }
        factor /= Decimal::TWO;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sqrt_2() {
        let f = |x: Decimal| Ok(x * x - dec!(2));

        let result = newton(f, dec!(1.5), &SolverConfig::default()).unwrap();

        assert!((result.root - dec!(1.4142135623730950488)).abs() < dec!(0.0000000001));
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_cube_root() {
        let f = |x: Decimal| Ok(x * x * x - dec!(27));

        let result = newton(f, dec!(2), &SolverConfig::default()).unwrap();

        assert!((result.root - dec!(3)).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_already_at_root() {
        let f = |x: Decimal| Ok(x - dec!(0.25));

        let result = newton(f, dec!(0.25), &SolverConfig::default()).unwrap();

        assert_eq!(result.root, dec!(0.25));
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_damping_keeps_rate_above_minus_one() {
        // -100 now, 50 in each of the next three periods: about 23.375%.
        // The undamped first step from 5.0 would jump below -100%.
        let f = |r: Decimal| {
            let growth = Decimal::ONE + r;
            if growth <= Decimal::ZERO {
                return Err(MathError::invalid_input("rate at or below -100%"));
            }
            Ok(dec!(-100)
                + dec!(50) / growth
                + dec!(50) / (growth * growth)
                + dec!(50) / (growth * growth * growth))
        };

        let result = newton(f, dec!(5), &SolverConfig::default()).unwrap();

        assert!((result.root - dec!(0.23375)).abs() < dec!(0.0001));
        assert!(result.residual.abs() < dec!(0.000001));
    }

    #[test]
    fn test_flat_objective() {
        let f = |_x: Decimal| Ok(dec!(1));

        let result = newton(f, dec!(0.1), &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_no_root_fails() {
        // x^2 + 1 has no real root; Newton stalls near the minimum at 0
        let f = |x: Decimal| Ok(x * x + dec!(1));

        let result = newton(f, dec!(3), &SolverConfig::default());

        assert!(matches!(
            result,
            Err(MathError::StepReductionFailed { .. }
                | MathError::ConvergenceFailed { .. }
                | MathError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_iteration_budget() {
        let f = |x: Decimal| Ok(x * x * x - dec!(27));
        let config = SolverConfig::default().with_max_iterations(1);

        let result = newton(f, dec!(100), &config);

        assert!(matches!(result, Err(MathError::ConvergenceFailed { iterations: 1, .. })));
    }

    #[test]
    fn test_initial_evaluation_error_propagates() {
        let f = |_x: Decimal| Err(MathError::invalid_input("undefined"));

        let result = newton(f, dec!(0.1), &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_failed_derivative_evaluation_stops_the_solve() {
        // Defined up to x = 1 only; the derivative at the guess needs f(1 + h)
        let f = |x: Decimal| {
            if x > Decimal::ONE {
                return Err(MathError::overflow("objective"));
            }
            Ok(x - dec!(0.5))
        };

        let result = newton(f, Decimal::ONE, &SolverConfig::default());

        assert!(matches!(
            result,
            Err(MathError::StepReductionFailed { iterations: 0, .. })
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn finds_single_period_rate(cents in 1i64..100_000, rate_bp in -5000i64..20_000) {
                // -pv now, pv * (1 + r) one period later
                let pv = Decimal::new(cents, 2);
                let rate = Decimal::new(rate_bp, 4);
                let future = pv * (Decimal::ONE + rate);
                let f = |r: Decimal| {
                    let growth = Decimal::ONE + r;
                    if growth <= Decimal::ZERO {
                        return Err(MathError::invalid_input("rate at or below -100%"));
                    }
                    Ok(-pv + future / growth)
                };

                let result = newton(f, dec!(0.1), &SolverConfig::default()).unwrap();
                prop_assert!((result.root - rate).abs() < dec!(0.000001));
            }
        }
    }
}
