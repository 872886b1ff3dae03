use fingrow_core::rate_math::{annuity_maturity, simple_interest_maturity};
use fingrow_core::FingrowError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Zero-rate identities
// ===========================================================================

#[test]
fn test_zero_rate_returns_principal_for_every_term() {
    let principal = dec!(7_300_000);
    for months in 1..=60u32 {
        let lump = simple_interest_maturity(principal, Decimal::ZERO, months).unwrap();
        assert_eq!(lump, principal, "lump sum, {months} months");

        let monthly = principal / Decimal::from(months);
        let annuity = annuity_maturity(monthly, Decimal::ZERO, months).unwrap();
        assert!(
            (annuity - principal).abs() < dec!(0.0001),
            "installment, {months} months: got {annuity}"
        );
    }
}

#[test]
fn test_negative_rate_is_treated_as_zero() {
    assert_eq!(
        simple_interest_maturity(dec!(1_000_000), dec!(-2.5), 12).unwrap(),
        dec!(1_000_000)
    );
    assert_eq!(
        annuity_maturity(dec!(100_000), dec!(-2.5), 12).unwrap(),
        dec!(1_200_000)
    );
}

// ===========================================================================
// Positive rates
// ===========================================================================

#[test]
fn test_positive_rate_grows_principal() {
    for months in [1u32, 3, 6, 12, 24, 36, 60] {
        for rate in [dec!(0.1), dec!(2.0), dec!(3.5), dec!(7.25)] {
            let lump = simple_interest_maturity(dec!(1_000_000), rate, months).unwrap();
            assert!(lump > dec!(1_000_000), "{rate}% over {months} months: {lump}");

            let annuity = annuity_maturity(dec!(100_000), rate, months).unwrap();
            let paid_in = dec!(100_000) * Decimal::from(months);
            assert!(annuity > paid_in, "{rate}% over {months} months: {annuity}");
        }
    }
}

#[test]
fn test_higher_rate_strictly_increases_maturity() {
    let rates = [dec!(0), dec!(0.5), dec!(1.0), dec!(2.8), dec!(3.5), dec!(4.2), dec!(10)];
    for months in [1u32, 12, 36, 60] {
        for pair in rates.windows(2) {
            let (low, high) = (pair[0], pair[1]);
            assert!(
                simple_interest_maturity(dec!(5_000_000), high, months).unwrap()
                    > simple_interest_maturity(dec!(5_000_000), low, months).unwrap(),
                "lump sum not monotone between {low}% and {high}% at {months} months"
            );
            assert!(
                annuity_maturity(dec!(200_000), high, months).unwrap()
                    > annuity_maturity(dec!(200_000), low, months).unwrap(),
                "installment not monotone between {low}% and {high}% at {months} months"
            );
        }
    }
}

#[test]
fn test_installment_beats_plain_annuity_by_one_period() {
    // 500,000/month at 4.2% for 12 months. Without the end-of-term crediting
    // period the result would be smaller by exactly a factor of (1 + r).
    let r = dec!(4.2) / dec!(100) / dec!(12);
    let with_crediting = annuity_maturity(dec!(500_000), dec!(4.2), 12).unwrap();
    let mut growth = Decimal::ONE;
    for _ in 0..12 {
        growth *= Decimal::ONE + r;
    }
    let ordinary = dec!(500_000) * (growth - Decimal::ONE) / r;
    assert!(
        (with_crediting - ordinary * (Decimal::ONE + r)).abs() < dec!(0.0001),
        "got {with_crediting}, ordinary annuity {ordinary}"
    );
    assert!(with_crediting > ordinary);
}

#[test]
fn test_zero_term_is_rejected() {
    assert!(simple_interest_maturity(dec!(1), dec!(1), 0).is_err());
    assert!(annuity_maturity(dec!(1), dec!(1), 0).is_err());
}

// ===========================================================================
// Out-of-range results
// ===========================================================================

#[test]
fn test_extreme_terms_return_errors_instead_of_panicking() {
    // 100% a year over 1000 months grows past the Decimal range.
    let err = annuity_maturity(dec!(100_000), dec!(100), 1000).unwrap_err();
    assert!(matches!(err, FingrowError::Overflow { .. }), "got {err:?}");

    let err = simple_interest_maturity(Decimal::MAX, dec!(100), u32::MAX).unwrap_err();
    assert!(matches!(err, FingrowError::Overflow { .. }), "got {err:?}");

    // A long but ordinary plan stays computable.
    assert!(annuity_maturity(dec!(100_000), dec!(12), 1200).is_ok());
}
