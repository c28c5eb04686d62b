//! Calculator configuration.
//!
//! The root-finder settings shared by the IRR and XIRR calculators. There is
//! no global state: callers build a [`CalculatorConfig`] (or take the
//! default) and pass it to each calculation.

use finrate_math::solvers::SolverConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Default convergence threshold (1e-16).
pub const DEFAULT_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 16);

/// Default starting rate for the root-finder.
pub const DEFAULT_INITIAL_GUESS: Decimal = Decimal::ONE;

/// Default iteration budget for the root-finder.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Settings for the IRR and XIRR root-finder.
///
/// The default guess of 1.0 (100%) can fail to converge for cash flows with
/// long time spans or extreme magnitude ratios; a guess near the expected
/// answer (e.g. 0.1) is the usual remedy.
///
/// # Example
///
/// ```rust
/// use finrate_analytics::config::CalculatorConfig;
/// use rust_decimal_macros::dec;
///
/// let config = CalculatorConfig::from_toml_str("initial_guess = 0.1").unwrap();
/// assert_eq!(config.initial_guess, dec!(0.1));
/// assert_eq!(config.max_iterations, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Convergence threshold on the objective and on the Newton step.
    pub epsilon: Decimal,
    /// Starting rate for the iteration.
    pub initial_guess: Decimal,
    /// Maximum number of Newton iterations.
    pub max_iterations: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            initial_guess: DEFAULT_INITIAL_GUESS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl CalculatorConfig {
    /// Sets the convergence threshold.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: Decimal) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the starting rate.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: Decimal) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> AnalyticsResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| {
            AnalyticsError::invalid_argument(format!("invalid calculator config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings describe a usable solve.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.epsilon <= Decimal::ZERO {
            return Err(AnalyticsError::invalid_argument(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.initial_guess <= -Decimal::ONE {
            return Err(AnalyticsError::invalid_argument(format!(
                "initial guess must be greater than -1, got {}",
                self.initial_guess
            )));
        }
        if self.max_iterations == 0 {
            return Err(AnalyticsError::invalid_argument(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }

    /// Projects the settings onto the root-finder's configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.epsilon, self.max_iterations)
    }
}
