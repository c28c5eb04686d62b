//! Period-by-period view of an amortization.

use finrate_core::Rate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::Amortization;

/// One period of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    /// Period number, starting at 1
    pub period: u32,
    /// Balance at the start of the period
    pub opening_balance: Decimal,
    /// Per-period rate applied
    pub rate: Decimal,
    /// Payment made (negative)
    pub payment: Decimal,
    /// Interest charged
    pub interest: Decimal,
    /// Balance at the end of the period
    pub closing_balance: Decimal,
}

pub(super) fn rows(amortization: &Amortization) -> Vec<ScheduleRow> {
    let mut balance = amortization.principal();
    let mut segments = Segments::new(amortization.rates());

    amortization
        .transactions()
        .chunks(2)
        .filter_map(|pair| {
            let [interest, payment] = pair else {
                return None;
            };
            let period = payment.period()?;
            let opening_balance = balance;
            balance += interest.amount() + payment.amount();

            Some(ScheduleRow {
                period,
                opening_balance,
                rate: segments.rate_for(period),
                payment: payment.amount(),
                interest: interest.amount(),
                closing_balance: balance,
            })
        })
        .collect()
}

/// Walks the rate segments in step with increasing period numbers.
struct Segments<'a> {
    rates: &'a [Rate],
    index: usize,
    end: u32,
}

impl<'a> Segments<'a> {
    fn new(rates: &'a [Rate]) -> Self {
        let end = rates.first().and_then(Rate::duration).unwrap_or(0);
        Self {
            rates,
            index: 0,
            end,
        }
    }

    fn rate_for(&mut self, period: u32) -> Decimal {
        while period > self.end && self.index + 1 < self.rates.len() {
            self.index += 1;
            self.end += self.rates[self.index].duration().unwrap_or(0);
        }
        self.rates
            .get(self.index)
            .map_or(Decimal::ZERO, Rate::monthly)
    }
}
