//! # Finrate Analytics
//!
//! Loan amortization and cash-flow return analytics.
//!
//! This crate builds on the core types and the root-finders:
//! - **Amortization**: Ledger of interest and payment transactions over one
//!   or more rate segments, with optional per-segment payment adjustment
//! - **Cash flows**: `npv`, `irr`, `xnpv`, `xirr` and `sum` over bare
//!   amounts or transactions
//! - **Effective rate**: Fee-inclusive payment, effective interest rate and
//!   number of periods for an annuity
//! - **Config**: Root-finder settings shared by the IRR calculators
//!
//! ## Usage
//!
//! ```rust
//! use finrate_analytics::prelude::*;
//! use finrate_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let rate = Rate::new(dec!(0.0375), RateKind::Apr).unwrap().with_duration(years(30));
//! let loan = Amortization::new(dec!(200000), &[rate]).unwrap();
//! assert_eq!(loan.payment(), Some(dec!(-926.23)));
//!
//! let flows = [dec!(-100), dec!(60), dec!(60), dec!(60)];
//! let rate = irr(&flows, None).unwrap();
//! assert!(npv(rate, &flows).unwrap().abs() < dec!(0.0000001));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod amortization;
pub mod cashflows;
pub mod config;
pub mod effective_rate;
pub mod error;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{Amortization, ScheduleRow};
    pub use crate::cashflows::{
        irr, irr_with_config, npv, sum, xirr, xirr_with_config, xnpv, Cashflow, CashflowSeries,
    };
    pub use crate::config::CalculatorConfig;
    pub use crate::effective_rate::{
        effective_interest_rate, number_of_periods, payment_with_fee, PaymentDue,
    };
    pub use crate::error::{AnalyticsError, AnalyticsResult};
}
