//! Interest rates with nominal/effective conversion.

use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::Compounding;
use crate::decimal::{divide, exp, ln, power, round_half_up, RATE_SCALE};
use crate::error::{CoreError, CoreResult};

/// How the value passed to [`Rate::new`] should be read.
///
/// `Apr`, `Apy` and `Effective` all denote the effective annual rate;
/// `Nominal` denotes the stated rate before compounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RateKind {
    /// Annual percentage rate (read as the effective rate)
    Apr,
    /// Annual percentage yield (read as the effective rate)
    Apy,
    /// Effective annual rate
    Effective,
    /// Nominal annual rate
    Nominal,
}

impl RateKind {
    /// Returns true if the kind denotes an effective rate.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        !matches!(self, RateKind::Nominal)
    }
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RateKind::Apr => "apr",
            RateKind::Apy => "apy",
            RateKind::Effective => "effective",
            RateKind::Nominal => "nominal",
        };
        write!(f, "{name}")
    }
}

impl FromStr for RateKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apr" => Ok(RateKind::Apr),
            "apy" => Ok(RateKind::Apy),
            "effective" => Ok(RateKind::Effective),
            "nominal" => Ok(RateKind::Nominal),
            _ => Err(CoreError::invalid_argument(format!(
                "type must be one of apr, apy, effective, nominal, got '{s}'"
            ))),
        }
    }
}

/// Optional settings accepted by [`Rate::with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateOptions {
    /// Number of monthly periods the rate applies for.
    pub duration: Option<i64>,
    /// Compounding frequency (monthly by default).
    pub compounds: Compounding,
}

impl RateOptions {
    /// Sets the duration in periods.
    #[must_use]
    pub fn with_duration(mut self, periods: i64) -> Self {
        self.duration = Some(periods);
        self
    }

    /// Sets the compounding frequency.
    #[must_use]
    pub fn with_compounds(mut self, compounds: Compounding) -> Self {
        self.compounds = compounds;
        self
    }
}

/// An annual interest rate held in both nominal and effective form.
///
/// The two forms are kept consistent through the compounding frequency:
/// whichever one is supplied, the other is derived on construction.
/// Rates compare and order by their effective value.
///
/// # Example
///
/// ```rust
/// use finrate_core::types::{Compounding, Rate, RateKind, RateOptions};
/// use rust_decimal_macros::dec;
///
/// // Which is better, 15% compounded monthly or 15.5% compounded semiannually?
/// let r1 = Rate::new(dec!(0.15), RateKind::Nominal).unwrap();
/// let r2 = Rate::with_options(
///     dec!(0.155),
///     RateKind::Nominal,
///     RateOptions::default().with_compounds(Compounding::SemiAnnually),
/// )
/// .unwrap();
/// assert!(r1 < r2);
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rate {
    /// Effective annual rate
    effective: Decimal,
    /// Nominal annual rate
    nominal: Decimal,
    /// Compounding frequency linking the two
    compounding: Compounding,
    /// Number of monthly periods the rate applies for
    duration: Option<u32>,
}

impl Rate {
    /// Creates a rate with monthly compounding and no duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the nominal/effective conversion is undefined for
    /// `value` (e.g. an effective rate at or below -100%).
    pub fn new(value: Decimal, kind: RateKind) -> CoreResult<Self> {
        Self::with_options(value, kind, RateOptions::default())
    }

    /// Creates a rate with explicit duration and compounding.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` if the duration is negative.
    pub fn with_options(value: Decimal, kind: RateKind, options: RateOptions) -> CoreResult<Self> {
        let duration = match options.duration {
            None => None,
            Some(periods) => Some(u32::try_from(periods).map_err(|_| {
                CoreError::invalid_argument(format!(
                    "duration must be a non-negative number of periods, got {periods}"
                ))
            })?),
        };

        let compounding = options.compounds;
        let (effective, nominal) = if kind.is_effective() {
            (value, Self::to_nominal(value, compounding)?)
        } else {
            (Self::to_effective(value, compounding)?, value)
        };

        Ok(Self {
            effective,
            nominal,
            compounding,
            duration,
        })
    }

    /// Creates a rate from string tags for the kind and compounding keyword.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` if either tag is unrecognized.
    pub fn parse(value: Decimal, kind: &str, compounds: &str) -> CoreResult<Self> {
        let kind = kind.parse::<RateKind>()?;
        let compounds = compounds.parse::<Compounding>()?;
        Self::with_options(value, kind, RateOptions::default().with_compounds(compounds))
    }

    /// Converts a nominal rate to an effective rate.
    ///
    /// Finite compounding: `(1 + r/n)^n - 1`. Continuous: `e^r - 1`.
    pub fn to_effective(nominal: Decimal, compounding: Compounding) -> CoreResult<Decimal> {
        match compounding.periods_per_year() {
            Some(n) => {
                let base = Decimal::ONE + divide(nominal, n, "nominal to effective")?;
                Ok(power(base, n)? - Decimal::ONE)
            }
            None => Ok(exp(nominal)? - Decimal::ONE),
        }
    }

    /// Converts an effective rate to a nominal rate.
    ///
    /// Finite compounding: `n * ((1 + e)^(1/n) - 1)`. Continuous: `ln(1 + e)`.
    pub fn to_nominal(effective: Decimal, compounding: Compounding) -> CoreResult<Decimal> {
        let base = Decimal::ONE + effective;
        match compounding.periods_per_year() {
            Some(n) => {
                let inverse = divide(Decimal::ONE, n, "effective to nominal")?;
                Ok(n * (power(base, inverse)? - Decimal::ONE))
            }
            None => ln(base),
        }
    }

    /// Sets the number of periods the rate applies for.
    #[must_use]
    pub fn with_duration(mut self, periods: u32) -> Self {
        self.duration = Some(periods);
        self
    }

    /// Sets the number of periods the rate applies for, in place.
    pub fn set_duration(&mut self, periods: u32) {
        self.duration = Some(periods);
    }

    /// Returns the effective annual rate.
    #[must_use]
    pub fn effective(&self) -> Decimal {
        self.effective
    }

    /// Returns the nominal annual rate.
    #[must_use]
    pub fn nominal(&self) -> Decimal {
        self.nominal
    }

    /// Same as [`Rate::effective`].
    #[must_use]
    pub fn apr(&self) -> Decimal {
        self.effective
    }

    /// Same as [`Rate::effective`].
    #[must_use]
    pub fn apy(&self) -> Decimal {
        self.effective
    }

    /// Returns the compounding frequency.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the number of periods the rate applies for, if set.
    #[must_use]
    pub fn duration(&self) -> Option<u32> {
        self.duration
    }

    /// Returns the per-period rate used for monthly amortization.
    ///
    /// This is `effective / 12` rounded to 15 places; it gets raised to
    /// powers in the hundreds, so it keeps far more precision than money.
    #[must_use]
    pub fn monthly(&self) -> Decimal {
        round_half_up(self.effective / Decimal::from(12), RATE_SCALE)
    }
}

impl PartialEq for Rate {
    fn eq(&self, other: &Self) -> bool {
        self.effective == other.effective
    }
}

impl PartialOrd for Rate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.effective.partial_cmp(&other.effective)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rate({:.6}, apr)", self.effective)
    }
}
