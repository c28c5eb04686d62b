//! Compounding frequency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Number of times per year interest is compounded.
///
/// The named frequencies map to fixed period counts; [`Compounding::PerYear`]
/// carries an arbitrary positive count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Compounded once per year
    Annually,
    /// Compounded twice per year
    SemiAnnually,
    /// Compounded 4 times per year
    Quarterly,
    /// Compounded 12 times per year
    #[default]
    Monthly,
    /// Compounded 365 times per year
    Daily,
    /// Continuous compounding (infinitely many periods)
    Continuously,
    /// A custom positive number of periods per year
    PerYear(Decimal),
}

impl Compounding {
    /// Creates a custom compounding frequency.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` unless `periods` is positive.
    pub fn per_year(periods: Decimal) -> CoreResult<Self> {
        if periods <= Decimal::ZERO {
            return Err(CoreError::invalid_argument(format!(
                "compounding periods per year must be positive, got {periods}"
            )));
        }
        Ok(Compounding::PerYear(periods))
    }

    /// Returns the number of compounding periods per year, or `None` for
    /// continuous compounding.
    #[must_use]
    pub fn periods_per_year(&self) -> Option<Decimal> {
        match self {
            Compounding::Annually => Some(Decimal::ONE),
            Compounding::SemiAnnually => Some(Decimal::TWO),
            Compounding::Quarterly => Some(Decimal::from(4)),
            Compounding::Monthly => Some(Decimal::from(12)),
            Compounding::Daily => Some(Decimal::from(365)),
            Compounding::Continuously => None,
            Compounding::PerYear(n) => Some(*n),
        }
    }

    /// Returns true if this is continuous compounding.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        matches!(self, Compounding::Continuously)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compounding::Annually => write!(f, "annually"),
            Compounding::SemiAnnually => write!(f, "semiannually"),
            Compounding::Quarterly => write!(f, "quarterly"),
            Compounding::Monthly => write!(f, "monthly"),
            Compounding::Daily => write!(f, "daily"),
            Compounding::Continuously => write!(f, "continuously"),
            Compounding::PerYear(n) => write!(f, "{n} per year"),
        }
    }
}

impl FromStr for Compounding {
    type Err = CoreError;

    /// Parses a compounding keyword or a positive number of periods per year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annually" => Ok(Compounding::Annually),
            "semiannually" => Ok(Compounding::SemiAnnually),
            "quarterly" => Ok(Compounding::Quarterly),
            "monthly" => Ok(Compounding::Monthly),
            "daily" => Ok(Compounding::Daily),
            "continuously" => Ok(Compounding::Continuously),
            other => {
                let periods = Decimal::from_str(other).map_err(|_| {
                    CoreError::invalid_argument(format!(
                        "compounds must be one of annually, continuously, daily, monthly, \
                         quarterly, semiannually or a positive number, got '{s}'"
                    ))
                })?;
                Compounding::per_year(periods)
            }
        }
    }
}
