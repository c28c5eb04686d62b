//! # Finrate Core
//!
//! Core types for the Finrate amortization and cash-flow analytics library.
//!
//! This crate provides the foundational building blocks used throughout Finrate:
//!
//! - **Decimal helpers**: Half-up rounding, checked division and powers over
//!   [`rust_decimal::Decimal`]
//! - **Rates**: Interest rates kept consistent between nominal and effective form
//! - **Transactions**: Signed cash-flow entries tagged as interest or payment
//! - **Intervals**: Month/year helpers for expressing rate durations
//!
//! ## Conventions
//!
//! - Positive amounts are cash received; negative amounts are cash paid out.
//! - Money is rounded to 2 places at period boundaries, rates carry 15 or more.
//! - Native floating point never crosses the public API.
//!
//! ## Example
//!
//! ```rust
//! use finrate_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let rate = Rate::new(dec!(0.0375), RateKind::Apr)
//!     .unwrap()
//!     .with_duration(years(30));
//! assert_eq!(rate.monthly(), dec!(0.003125));
//! assert_eq!(rate.duration(), Some(360));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod decimal;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::decimal::{round_half_up, round_money, MONEY_SCALE, RATE_SCALE};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        months, years, Compounding, Rate, RateKind, RateOptions, Transaction, TransactionKind,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Compounding, Rate, RateKind, Transaction, TransactionKind};
