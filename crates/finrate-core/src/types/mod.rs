//! Domain types: rates, compounding frequencies, transactions and intervals.

mod compounding;
mod interval;
mod rate;
mod transaction;

pub use compounding::Compounding;
pub use interval::{months, years};
pub use rate::{Rate, RateKind, RateOptions};
pub use transaction::{Transaction, TransactionKind};
