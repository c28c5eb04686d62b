//! Individual cash flows.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag distinguishing the role of a [`Transaction`] in a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Interest accrued for a period
    Interest,
    /// A payment against the balance
    Payment,
    /// An untagged cash flow
    #[default]
    Generic,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Interest => write!(f, "Interest"),
            TransactionKind::Payment => write!(f, "Payment"),
            TransactionKind::Generic => write!(f, "Transaction"),
        }
    }
}

/// A single signed cash flow, optionally dated and numbered.
///
/// The amount a transaction was created with is kept alongside the current
/// amount, so any later modification can be recovered through
/// [`Transaction::difference`].
///
/// # Example
///
/// ```rust
/// use finrate_core::types::Transaction;
/// use rust_decimal_macros::dec;
///
/// let mut pmt = Transaction::payment(dec!(-500));
/// pmt.modify(|t| t.amount() - dec!(100));
/// assert_eq!(pmt.amount(), dec!(-600));
/// assert_eq!(pmt.difference(), dec!(-100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    amount: Decimal,
    original: Decimal,
    kind: TransactionKind,
    date: Option<NaiveDateTime>,
    period: Option<u32>,
}

impl Transaction {
    /// Creates an untagged transaction.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self::with_kind(amount, TransactionKind::Generic)
    }

    /// Creates an interest transaction.
    #[must_use]
    pub fn interest(amount: Decimal) -> Self {
        Self::with_kind(amount, TransactionKind::Interest)
    }

    /// Creates a payment transaction.
    #[must_use]
    pub fn payment(amount: Decimal) -> Self {
        Self::with_kind(amount, TransactionKind::Payment)
    }

    /// Creates a transaction of the given kind.
    #[must_use]
    pub fn with_kind(amount: Decimal, kind: TransactionKind) -> Self {
        Self {
            amount,
            original: amount,
            kind,
            date: None,
            period: None,
        }
    }

    /// Creates an untagged transaction dated at midnight of `date`.
    #[must_use]
    pub fn dated(amount: Decimal, date: NaiveDate) -> Self {
        Self::new(amount).with_date(date.and_time(NaiveTime::MIN))
    }

    /// Sets the timestamp.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the period number.
    #[must_use]
    pub fn with_period(mut self, period: u32) -> Self {
        self.period = Some(period);
        self
    }

    /// Returns the current amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the amount the transaction was created with.
    #[must_use]
    pub fn original_amount(&self) -> Decimal {
        self.original
    }

    /// Returns `amount - original_amount`.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.amount - self.original
    }

    /// Same as [`Transaction::difference`].
    #[must_use]
    pub fn additional_amount(&self) -> Decimal {
        self.difference()
    }

    /// Returns the kind tag.
    #[must_use]
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Returns the timestamp, if any.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    /// Returns the period number, if any.
    #[must_use]
    pub fn period(&self) -> Option<u32> {
        self.period
    }

    /// Returns true for interest transactions.
    #[must_use]
    pub fn is_interest(&self) -> bool {
        self.kind == TransactionKind::Interest
    }

    /// Returns true for payment transactions.
    #[must_use]
    pub fn is_payment(&self) -> bool {
        self.kind == TransactionKind::Payment
    }

    /// Replaces the current amount. The original amount is untouched.
    pub fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
    }

    /// Replaces the current amount with the value computed by `adjust`.
    ///
    /// The closure sees the transaction as it stands before the change.
    pub fn modify<F>(&mut self, adjust: F)
    where
        F: FnOnce(&Transaction) -> Decimal,
    {
        self.amount = adjust(self);
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_original_amount_is_kept() {
        let mut t = Transaction::new(dec!(500));
        t.set_amount(dec!(750));
        assert_eq!(t.amount(), dec!(750));
        assert_eq!(t.original_amount(), dec!(500));
        assert_eq!(t.difference(), dec!(250));
    }

    #[test]
    fn test_modify() {
        let mut pmt = Transaction::payment(dec!(-500));
        pmt.modify(|t| t.amount() - dec!(100));
        assert_eq!(pmt.amount(), dec!(-600));
        assert_eq!(pmt.additional_amount(), dec!(-100));
    }

    #[test]
    fn test_kind_queries() {
        let pmt = Transaction::payment(dec!(500));
        let int = Transaction::interest(dec!(500));
        let generic = Transaction::new(dec!(500));

        assert!(pmt.is_payment() && !pmt.is_interest());
        assert!(int.is_interest() && !int.is_payment());
        assert!(!generic.is_payment() && !generic.is_interest());
    }

    #[test]
    fn test_dated_and_numbered() {
        let date = NaiveDate::from_ymd_opt(1985, 1, 1).unwrap();
        let t = Transaction::dated(dec!(-1000), date).with_period(3);
        assert_eq!(t.date().map(|d| d.date()), Some(date));
        assert_eq!(t.period(), Some(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Transaction::payment(dec!(-926.23)).to_string(), "Payment(-926.23)");
        assert_eq!(Transaction::interest(dec!(625)).to_string(), "Interest(625)");
        assert_eq!(Transaction::new(dec!(10)).to_string(), "Transaction(10)");
    }

    #[test]
    fn test_serde_roundtrip_keeps_original() {
        let mut t = Transaction::payment(dec!(-926.23)).with_period(1);
        t.set_amount(dec!(-1026.23));

        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"payment\""));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.difference(), dec!(-100));
    }
}
