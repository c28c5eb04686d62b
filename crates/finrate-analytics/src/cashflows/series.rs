//! Method-style access to the calculators.

use finrate_core::Rate;
use rust_decimal::Decimal;

use super::{irr_with_config, npv, sum, xirr_with_config, xnpv, Cashflow};
use crate::config::CalculatorConfig;
use crate::error::AnalyticsResult;

/// An ordered sequence of cash flows with the solver settings to use on it.
///
/// ```rust
/// use finrate_analytics::cashflows::CashflowSeries;
/// use rust_decimal_macros::dec;
///
/// let series: CashflowSeries<_> = [dec!(-100), dec!(60), dec!(60), dec!(60)].into_iter().collect();
/// assert_eq!(series.sum(), dec!(80));
/// assert!(series.irr().unwrap() > dec!(0.3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CashflowSeries<C> {
    flows: Vec<C>,
    config: CalculatorConfig,
}

impl<C: Cashflow> CashflowSeries<C> {
    /// Wraps `flows` with the default calculator settings.
    #[must_use]
    pub fn new(flows: Vec<C>) -> Self {
        Self {
            flows,
            config: CalculatorConfig::default(),
        }
    }

    /// Replaces the calculator settings.
    #[must_use]
    pub fn with_config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the initial guess used by [`CashflowSeries::irr`] and [`CashflowSeries::xirr`].
    #[must_use]
    pub fn with_guess(mut self, guess: Decimal) -> Self {
        self.config = self.config.with_initial_guess(guess);
        self
    }

    /// Returns the flows.
    #[must_use]
    pub fn flows(&self) -> &[C] {
        &self.flows
    }

    /// Returns the calculator settings.
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the number of flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if there are no flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// See [`sum`](super::sum).
    #[must_use]
    pub fn sum(&self) -> Decimal {
        sum(&self.flows)
    }

    /// See [`npv`](super::npv).
    pub fn npv(&self, rate: Decimal) -> AnalyticsResult<Decimal> {
        npv(rate, &self.flows)
    }

    /// See [`irr_with_config`](super::irr_with_config).
    pub fn irr(&self) -> AnalyticsResult<Decimal> {
        irr_with_config(&self.flows, &self.config)
    }

    /// See [`xnpv`](super::xnpv).
    pub fn xnpv(&self, rate: Decimal) -> AnalyticsResult<Decimal> {
        xnpv(rate, &self.flows)
    }

    /// See [`xirr_with_config`](super::xirr_with_config).
    pub fn xirr(&self) -> AnalyticsResult<Rate> {
        xirr_with_config(&self.flows, &self.config)
    }
}

impl<C: Cashflow> FromIterator<C> for CashflowSeries<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<C: Cashflow> From<Vec<C>> for CashflowSeries<C> {
    fn from(flows: Vec<C>) -> Self {
        Self::new(flows)
    }
}
