//! Period-count helpers for rate durations.
//!
//! Amortization periods are months, so these convert a human-friendly
//! span into a number of monthly periods.

/// Returns the number of monthly periods in `n` months.
#[must_use]
pub const fn months(n: u32) -> u32 {
    n
}

/// Returns the number of monthly periods in `n` years, saturating at `u32::MAX`.
///
/// ```rust
/// use finrate_core::types::years;
///
/// assert_eq!(years(30), 360);
/// ```
#[must_use]
pub const fn years(n: u32) -> u32 {
    n.saturating_mul(12)
}
