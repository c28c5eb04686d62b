//! Decimal arithmetic helpers.
//!
//! All monetary values and rates are [`Decimal`]s. These helpers fix the
//! rounding convention (half-up, i.e. midpoints away from zero) and turn
//! the `checked_*` operations of `rust_decimal` into typed errors so that
//! a zero divisor or an out-of-domain power never escapes as a panic.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::error::{CoreError, CoreResult};

/// Number of fractional digits kept for money amounts.
pub const MONEY_SCALE: u32 = 2;

/// Number of fractional digits kept for per-period rates.
pub const RATE_SCALE: u32 = 15;

/// Below this exponent `e^x` rounds to zero at 28 decimal places.
const MIN_EXP_ARGUMENT: Decimal = Decimal::from_parts(65, 0, 0, true, 0);

/// Rounds `value` to `places` fractional digits, midpoints away from zero.
///
/// ```rust
/// use finrate_core::decimal::round_half_up;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_half_up(dec!(2.345), 2), dec!(2.35));
/// assert_eq!(round_half_up(dec!(-2.345), 2), dec!(-2.35));
/// ```
#[must_use]
pub fn round_half_up(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a money amount to cents.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    round_half_up(value, MONEY_SCALE)
}

/// Divides `numerator` by `denominator`.
///
/// # Errors
///
/// Returns `CoreError::DivisionByZero` when the denominator is zero or the
/// quotient does not fit in a `Decimal`.
pub fn divide(numerator: Decimal, denominator: Decimal, operation: &str) -> CoreResult<Decimal> {
    if denominator.is_zero() {
        return Err(CoreError::division_by_zero(operation));
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| CoreError::domain(operation, numerator))
}

/// Multiplies two decimals.
///
/// # Errors
///
/// Returns `CoreError::DomainError` when the product does not fit in a `Decimal`.
pub fn multiply(lhs: Decimal, rhs: Decimal, operation: &str) -> CoreResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| CoreError::domain(operation, lhs))
}

/// Adds two decimals.
///
/// # Errors
///
/// Returns `CoreError::DomainError` when the sum does not fit in a `Decimal`.
pub fn add(lhs: Decimal, rhs: Decimal, operation: &str) -> CoreResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| CoreError::domain(operation, lhs))
}

/// Raises `base` to a non-negative integer power.
pub fn power_int(base: Decimal, exponent: u64) -> CoreResult<Decimal> {
    base.checked_powu(exponent)
        .ok_or_else(|| CoreError::domain("integer power", base))
}

/// Raises `base` to an arbitrary decimal power.
///
/// Integral exponents are evaluated exactly by repeated multiplication;
/// fractional exponents go through `exp(exponent * ln(base))` and therefore
/// require a strictly positive base.
pub fn power(base: Decimal, exponent: Decimal) -> CoreResult<Decimal> {
    if exponent.fract().is_zero() {
        let whole = exponent
            .to_i64()
            .ok_or_else(|| CoreError::domain("power", exponent))?;
        return if whole >= 0 {
            power_int(base, whole.unsigned_abs())
        } else {
            let positive = power_int(base, whole.unsigned_abs())?;
            divide(Decimal::ONE, positive, "negative integer power")
        };
    }

    if base <= Decimal::ZERO {
        return Err(CoreError::domain("fractional power", base));
    }
    base.checked_powd(exponent)
        .ok_or_else(|| CoreError::domain("fractional power", base))
}

/// Returns `e^value`.
pub fn exp(value: Decimal) -> CoreResult<Decimal> {
    value
        .checked_exp()
        .ok_or_else(|| CoreError::domain("exp", value))
}

/// Returns the natural logarithm of `value`.
pub fn ln(value: Decimal) -> CoreResult<Decimal> {
    if value <= Decimal::ZERO {
        return Err(CoreError::domain("ln", value));
    }
    value.checked_ln().ok_or_else(|| CoreError::domain("ln", value))
}

/// Discounts `amount` over `periods` periods: `amount / growth^periods`.
///
/// The quotient is exact whenever `growth^periods` fits in a `Decimal`.
/// Otherwise it is taken in log space, so a far-future amount at a high
/// rate discounts to zero rather than failing on the overflowed factor.
///
/// ```rust
/// use finrate_core::decimal::discount;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(discount(dec!(110), dec!(1.1), dec!(1)).unwrap(), dec!(100));
/// assert_eq!(discount(dec!(20), dec!(2), dec!(200)).unwrap(), Decimal::ZERO);
/// ```
///
/// # Errors
///
/// - `CoreError::DivisionByZero` when `growth` is zero
/// - `CoreError::DomainError` when the discounted amount does not fit in a
///   `Decimal`, or a fractional period is applied to a non-positive growth
pub fn discount(amount: Decimal, growth: Decimal, periods: Decimal) -> CoreResult<Decimal> {
    if growth.is_zero() {
        return Err(CoreError::division_by_zero("discount"));
    }
    if amount.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if let Ok(factor) = power(growth, periods) {
        if let Some(value) = amount.checked_div(factor) {
            return Ok(value);
        }
    }

    let decay = multiply(ln(growth)?, periods, "discount")?;
    let exponent = add(ln(amount.abs())?, -decay, "discount")?;
    if exponent < MIN_EXP_ARGUMENT {
        return Ok(Decimal::ZERO);
    }
    let magnitude = exp(exponent)?;
    Ok(if amount.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    })
}
