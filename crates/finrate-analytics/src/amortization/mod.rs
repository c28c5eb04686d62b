//! Loan amortization.
//!
//! An [`Amortization`] retires a principal over one or more rate segments,
//! one monthly period at a time, and records every interest charge and
//! payment as a [`Transaction`]. The resulting ledger always balances:
//!
//! ```text
//! principal + Σ interest + Σ payments == 0
//! ```
//!
//! # Example
//!
//! ```rust
//! use finrate_analytics::amortization::Amortization;
//! use finrate_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let rate = Rate::new(dec!(0.0375), RateKind::Apr).unwrap().with_duration(years(30));
//! let loan = Amortization::new(dec!(200000), &[rate]).unwrap();
//!
//! assert_eq!(loan.payment(), Some(dec!(-926.23)));
//! assert_eq!(loan.duration(), 360);
//! assert!(loan.balance().is_zero());
//! ```

mod schedule;

pub use schedule::ScheduleRow;

use finrate_core::decimal::{divide, power_int, round_money};
use finrate_core::{Rate, Transaction};
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Longest loan term accepted, in monthly periods (a thousand years).
pub const MAX_PERIODS: u32 = 12_000;

/// The amortization of a principal over a sequence of rate segments.
#[derive(Debug, Clone)]
pub struct Amortization {
    principal: Decimal,
    rates: Vec<Rate>,
    transactions: Vec<Transaction>,
    balance: Decimal,
    payment: Option<Decimal>,
}

/// Mutable state of an amortization while its ledger is being built.
struct Ledger<'a> {
    balance: Decimal,
    total_periods: u32,
    period: u32,
    transactions: Vec<Transaction>,
    adjust: Option<&'a dyn Fn(&Transaction) -> Decimal>,
}

impl Amortization {
    /// Amortizes `principal` over `rates`, in order.
    ///
    /// Every rate must carry a duration; the loan term is the sum of the
    /// durations.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidArgument` if no rates are given, a
    /// rate has no duration, or the durations sum to zero or to more than
    /// [`MAX_PERIODS`].
    pub fn new(principal: Decimal, rates: &[Rate]) -> AnalyticsResult<Self> {
        Self::compute(principal, rates, None)
    }

    /// Amortizes `principal` over `rates` with a payment adjustment.
    ///
    /// At the start of each rate segment the standard payment is computed and
    /// handed to `adjust` as a payment [`Transaction`]; the returned amount is
    /// paid every period of that segment. Payments are still capped at the
    /// outstanding balance, so an extra payment retires the loan early.
    ///
    /// ```rust
    /// use finrate_analytics::amortization::Amortization;
    /// use finrate_core::prelude::*;
    /// use rust_decimal_macros::dec;
    ///
    /// let rate = Rate::new(dec!(0.0375), RateKind::Apr).unwrap().with_duration(years(30));
    /// // Pay $100 extra every month
    /// let loan = Amortization::with_adjustment(dec!(200000), &[rate], |p| p.amount() - dec!(100))
    ///     .unwrap();
    ///
    /// assert_eq!(loan.duration(), 301);
    /// ```
    pub fn with_adjustment<F>(principal: Decimal, rates: &[Rate], adjust: F) -> AnalyticsResult<Self>
    where
        F: Fn(&Transaction) -> Decimal,
    {
        let adjust: &dyn Fn(&Transaction) -> Decimal = &adjust;
        Self::compute(principal, rates, Some(adjust))
    }

    /// Returns the standard level payment that retires `principal` over
    /// `periods` at per-period rate `rate`, rounded to cents.
    ///
    /// `payment = -principal * (r + r / ((1 + r)^n - 1))`, or
    /// `-principal / n` when the rate is zero.
    ///
    /// ```rust
    /// use finrate_analytics::amortization::Amortization;
    /// use rust_decimal_macros::dec;
    ///
    /// let pmt = Amortization::level_payment(dec!(200000), dec!(0.003125), 360).unwrap();
    /// assert_eq!(pmt, dec!(-926.23));
    /// ```
    pub fn level_payment(principal: Decimal, rate: Decimal, periods: u32) -> AnalyticsResult<Decimal> {
        if periods == 0 {
            return Err(AnalyticsError::invalid_argument(
                "payment requires a positive number of periods",
            ));
        }

        if rate.is_zero() {
            let level = divide(principal, Decimal::from(periods), "zero-rate payment")?;
            return Ok(-round_money(level));
        }

        let growth = power_int(Decimal::ONE + rate, u64::from(periods))?;
        let annuity = rate + divide(rate, growth - Decimal::ONE, "payment")?;
        Ok(-round_money(principal * annuity))
    }

    fn compute(
        principal: Decimal,
        rates: &[Rate],
        adjust: Option<&dyn Fn(&Transaction) -> Decimal>,
    ) -> AnalyticsResult<Self> {
        if rates.is_empty() {
            return Err(AnalyticsError::invalid_argument(
                "an amortization needs at least one rate",
            ));
        }

        let mut total_periods: u32 = 0;
        for rate in rates {
            let duration = rate.duration().ok_or_else(|| {
                AnalyticsError::invalid_argument(format!("{rate} has no duration"))
            })?;
            total_periods = total_periods.checked_add(duration).ok_or_else(|| {
                AnalyticsError::invalid_argument("total duration overflows a period count")
            })?;
        }
        if total_periods == 0 {
            return Err(AnalyticsError::invalid_argument(
                "an amortization needs a positive number of periods",
            ));
        }
        if total_periods > MAX_PERIODS {
            return Err(AnalyticsError::invalid_argument(format!(
                "a term of {total_periods} periods exceeds the {MAX_PERIODS}-period limit"
            )));
        }

        let mut ledger = Ledger {
            balance: principal,
            total_periods,
            period: 0,
            transactions: Vec::with_capacity(2 * total_periods as usize),
            adjust,
        };

        for rate in rates {
            ledger.amortize(rate)?;
        }

        let balance = ledger.reconcile();
        let transactions = ledger.transactions;

        let payment = if rates.len() == 1 {
            transactions.iter().find(|t| t.is_payment()).map(Transaction::amount)
        } else {
            None
        };

        Ok(Self {
            principal,
            rates: rates.to_vec(),
            transactions,
            balance,
            payment,
        })
    }

    /// Returns the amount borrowed.
    #[must_use]
    pub fn principal(&self) -> Decimal {
        self.principal
    }

    /// Returns the outstanding balance; zero once amortized.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns the rate segments, in order.
    #[must_use]
    pub fn rates(&self) -> &[Rate] {
        &self.rates
    }

    /// Returns the full ledger: an interest entry then a payment entry per period.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the payment amounts, in order.
    #[must_use]
    pub fn payments(&self) -> Vec<Decimal> {
        self.transactions
            .iter()
            .filter(|t| t.is_payment())
            .map(Transaction::amount)
            .collect()
    }

    /// Returns the interest charges, in order.
    #[must_use]
    pub fn interest(&self) -> Vec<Decimal> {
        self.transactions
            .iter()
            .filter(|t| t.is_interest())
            .map(Transaction::amount)
            .collect()
    }

    /// Returns, per payment, how much it differs from the standard payment.
    #[must_use]
    pub fn additional_payments(&self) -> Vec<Decimal> {
        self.transactions
            .iter()
            .filter(|t| t.is_payment())
            .map(Transaction::additional_amount)
            .collect()
    }

    /// Returns the number of payments made.
    ///
    /// This is shorter than the sum of the rate durations when extra
    /// payments retire the loan early.
    #[must_use]
    pub fn duration(&self) -> usize {
        self.transactions.iter().filter(|t| t.is_payment()).count()
    }

    /// Returns the level payment for a single-rate loan; `None` when there
    /// are several rate segments.
    #[must_use]
    pub fn payment(&self) -> Option<Decimal> {
        self.payment
    }

    /// Returns one row per period with opening and closing balances.
    #[must_use]
    pub fn schedule(&self) -> Vec<ScheduleRow> {
        schedule::rows(self)
    }
}

impl PartialEq for Amortization {
    fn eq(&self, other: &Self) -> bool {
        self.principal == other.principal
            && self.rates == other.rates
            && self.payments() == other.payments()
    }
}

impl Ledger<'_> {
    /// Runs one rate segment.
    fn amortize(&mut self, rate: &Rate) -> AnalyticsResult<()> {
        let duration = rate.duration().unwrap_or(0);
        if duration == 0 {
            return Ok(());
        }

        // The payment must retire the loan over what is left of the whole
        // term, not just this segment.
        let remaining = self.total_periods - self.period;
        let monthly = rate.monthly();
        let standard = Amortization::level_payment(self.balance, monthly, remaining)?;

        let mut pmt = Transaction::payment(standard);
        if let Some(adjust) = self.adjust {
            pmt.modify(adjust);
        }
        debug!(
            "segment {rate} at period {}: standard payment {standard}, paying {}",
            self.period,
            pmt.amount()
        );

        for _ in 0..duration {
            if self.balance.is_zero() {
                break;
            }
            let number = self.period + 1;

            let interest = round_money(self.balance * monthly);
            self.balance += interest;
            self.transactions
                .push(Transaction::interest(interest).with_period(number));

            if pmt.amount().abs() > self.balance {
                pmt.set_amount(-self.balance);
            }

            self.transactions.push(pmt.clone().with_period(number));
            self.balance += pmt.amount();
            self.period = number;
        }

        Ok(())
    }

    /// Folds any rounding residual into the last payment. Returns the final balance.
    fn reconcile(&mut self) -> Decimal {
        if self.balance.is_zero() {
            return self.balance;
        }

        let residual = self.balance;
        let Some(last) = self.transactions.iter_mut().rev().find(|t| t.is_payment()) else {
            return residual;
        };

        if residual.abs() > Decimal::new(1, 2) * Decimal::from(self.period) {
            warn!("reconciling a rounding residual of {residual} over {} periods", self.period);
        } else {
            debug!("reconciling a rounding residual of {residual}");
        }

        last.set_amount(last.amount() - residual);
        Decimal::ZERO
    }
}
