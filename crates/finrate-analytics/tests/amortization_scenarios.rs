//! Integration tests for loan amortization.
//!
//! Reference values are standard 30-year mortgage tables: every payment is
//! rounded to cents and interest is charged on the rounded balance.

use finrate_analytics::prelude::*;
use finrate_core::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn apr(value: Decimal, periods: u32) -> Rate {
    Rate::new(value, RateKind::Apr)
        .unwrap()
        .with_duration(periods)
}

fn total(values: &[Decimal]) -> Decimal {
    values.iter().copied().sum()
}

// =============================================================================
// REFERENCE LOANS
// =============================================================================

#[test]
fn fixed_rate_mortgage() {
    let loan = Amortization::new(dec!(200000), &[apr(dec!(0.0375), years(30))]).unwrap();

    assert_eq!(loan.payment(), Some(dec!(-926.23)));
    assert_eq!(loan.duration(), 360);
    assert_eq!(loan.payments().last(), Some(&dec!(-926.96)));
    assert_eq!(total(&loan.payments()), dec!(-333443.53));
    assert_eq!(total(&loan.interest()), dec!(133443.53));
    assert!(loan.balance().is_zero());
}

#[test]
fn adjustable_rate_mortgage() {
    let rates: Vec<Rate> = (0..10)
        .map(|step| apr(dec!(0.0375) + Decimal::new(step, 2), years(3)))
        .collect();
    let loan = Amortization::new(dec!(200000), &rates).unwrap();

    assert_eq!(loan.duration(), 360);
    assert_eq!(loan.payment(), None);
    assert_eq!(total(&loan.interest()), dec!(277505.92));
    assert_eq!(loan.payments().last(), Some(&dec!(-1601.78)));
    assert!(loan.balance().is_zero());

    let segment_payments: Vec<Decimal> =
        loan.payments().chunks(36).map(|segment| segment[0]).collect();
    assert_eq!(
        segment_payments,
        vec![
            dec!(-926.23),
            dec!(-1033.73),
            dec!(-1137.32),
            dec!(-1235.39),
            dec!(-1326.30),
            dec!(-1408.27),
            dec!(-1479.28),
            dec!(-1537.03),
            dec!(-1578.84),
            dec!(-1601.66),
        ]
    );
}

#[test]
fn extra_payment_retires_loan_early() {
    let rate = apr(dec!(0.0375), years(30));
    let loan =
        Amortization::with_adjustment(dec!(200000), &[rate], |p| p.amount() - dec!(100)).unwrap();

    assert_eq!(loan.duration(), 301);
    assert_eq!(loan.payments().first(), Some(&dec!(-1026.23)));
    assert_eq!(loan.payments().last(), Some(&dec!(-1011.09)));
    assert_eq!(total(&loan.payments()), dec!(-308880.09));
    assert_eq!(total(&loan.additional_payments()), dec!(-30084.86));
    assert_eq!(total(&loan.interest()), dec!(108880.09));
    assert!(loan.balance().is_zero());
}

#[test]
fn larger_extra_payment() {
    let rate = apr(dec!(0.0375), years(30));
    let loan =
        Amortization::with_adjustment(dec!(300000), &[rate], |p| p.amount() - dec!(300)).unwrap();

    assert_eq!(loan.duration(), 260);
    assert_eq!(loan.payments().last(), Some(&dec!(-785.41)));
}

#[test]
fn zero_rate_loan_splits_evenly() {
    let loan = Amortization::new(dec!(1000), &[apr(Decimal::ZERO, 3)]).unwrap();

    assert_eq!(loan.payments(), vec![dec!(-333.33), dec!(-333.33), dec!(-333.34)]);
    assert_eq!(total(&loan.interest()), Decimal::ZERO);
}

#[test]
fn schedule_matches_ledger() {
    let loan = Amortization::new(dec!(200000), &[apr(dec!(0.0375), years(30))]).unwrap();
    let schedule = loan.schedule();

    assert_eq!(schedule.len(), loan.duration());
    assert_eq!(schedule[0].interest, dec!(625.00));
    assert_eq!(schedule[0].closing_balance, dec!(199698.77));
    assert!(schedule.last().unwrap().closing_balance.is_zero());
}

// =============================================================================
// PAYMENT TABLES AT 7.5%
// =============================================================================

#[test]
fn payment_by_amount() {
    let cases = [
        (dec!(200000), dec!(-1398.43)),
        (dec!(205000), dec!(-1433.39)),
        (dec!(250000), dec!(-1748.04)),
        (dec!(500000), dec!(-3496.07)),
        (dec!(600000), dec!(-4195.29)),
    ];
    for (principal, expected) in cases {
        let loan = Amortization::new(principal, &[apr(dec!(0.075), years(30))]).unwrap();
        assert_eq!(loan.payment(), Some(expected), "principal {principal}");
    }
}

#[test]
fn payment_by_rate() {
    let cases = [
        (dec!(0.04), dec!(-954.83)),
        (dec!(0.041), dec!(-966.40)),
        (dec!(0.047), dec!(-1037.28)),
        (dec!(0.053), dec!(-1110.61)),
        (dec!(0.059), dec!(-1186.27)),
    ];
    for (rate, expected) in cases {
        let loan = Amortization::new(dec!(200000), &[apr(rate, years(30))]).unwrap();
        assert_eq!(loan.payment(), Some(expected), "rate {rate}");
    }
}

#[test]
fn payment_by_term() {
    let cases = [
        (120, dec!(-2374.04)),
        (180, dec!(-1854.02)),
        (234, dec!(-1629.12)),
    ];
    for (periods, expected) in cases {
        let loan = Amortization::new(dec!(200000), &[apr(dec!(0.075), months(periods))]).unwrap();
        assert_eq!(loan.payment(), Some(expected), "{periods} months");
        assert_eq!(loan.duration(), periods as usize);
    }
}

// =============================================================================
// TERM LIMITS
// =============================================================================

#[test]
fn oversized_terms_are_rejected() {
    use finrate_analytics::amortization::MAX_PERIODS;

    for periods in [u32::MAX / 2, u32::MAX, MAX_PERIODS + 1] {
        let err = Amortization::new(dec!(100), &[apr(dec!(0.05), periods)]).unwrap_err();
        assert!(err.is_invalid_argument(), "{periods} periods: {err}");
    }

    let err = Amortization::new(dec!(100), &[apr(Decimal::ZERO, years(u32::MAX))]).unwrap_err();
    assert!(err.is_invalid_argument());
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn ledger_always_balances(
        principal in 1_000i64..1_000_000,
        basis_points in 0i64..2_000,
        periods in 1u32..=360,
        extra in 0i64..500,
    ) {
        let principal = Decimal::from(principal);
        let rate = apr(Decimal::new(basis_points, 4), periods);
        let loan = Amortization::with_adjustment(principal, &[rate], |p| {
            p.amount() - Decimal::from(extra)
        })
        .unwrap();

        let settled = principal + total(&loan.interest()) + total(&loan.payments());
        prop_assert!(settled.is_zero());
        prop_assert!(loan.balance().is_zero());
        prop_assert!(loan.duration() <= periods as usize);
    }
}
