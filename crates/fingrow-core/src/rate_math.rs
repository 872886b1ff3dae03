use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::FingrowError;
use crate::types::{Money, Rate};
use crate::FingrowResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Effective rate of an option: the preferential rate when it is present and
/// positive, otherwise the base rate, otherwise zero.
///
/// Every rate comparison and every return projection goes through this.
pub fn best_rate(base_rate: Option<Rate>, preferential_rate: Option<Rate>) -> Rate {
    match preferential_rate {
        Some(pref) if pref > Decimal::ZERO => pref,
        _ => base_rate.unwrap_or(Decimal::ZERO),
    }
}

/// Compute (1 + r)^n via iterative multiplication (exact for integral n).
fn compound(rate: Decimal, n: u32) -> FingrowResult<Decimal> {
    let factor = Decimal::ONE
        .checked_add(rate)
        .ok_or_else(|| FingrowError::overflow("compound growth factor"))?;
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| FingrowError::overflow("compound growth"))?;
    }
    Ok(result)
}

fn require_term(months: u32) -> FingrowResult<()> {
    if months == 0 {
        return Err(FingrowError::invalid("months", "Term must be at least 1 month"));
    }
    Ok(())
}

fn contributions(monthly_amount: Money, months: u32) -> FingrowResult<Money> {
    monthly_amount
        .checked_mul(Decimal::from(months))
        .ok_or_else(|| FingrowError::overflow("installment contributions"))
}

/// Maturity value of a lump sum under simple interest:
/// `principal * (1 + rate/100 * months/12)`.
///
/// A non-positive rate returns the principal unchanged. Results beyond the
/// Decimal range are an `Overflow` error.
pub fn simple_interest_maturity(
    principal: Money,
    annual_rate_pct: Rate,
    months: u32,
) -> FingrowResult<Money> {
    require_term(months)?;

    if annual_rate_pct <= Decimal::ZERO {
        return Ok(principal);
    }

    let years = Decimal::from(months) / MONTHS_PER_YEAR;
    (annual_rate_pct / PERCENT)
        .checked_mul(years)
        .and_then(|growth| Decimal::ONE.checked_add(growth))
        .and_then(|factor| principal.checked_mul(factor))
        .ok_or_else(|| FingrowError::overflow("simple interest maturity"))
}

/// Maturity value of a monthly installment plan.
///
/// With `r = rate/100/12`: `monthly * ((1+r)^n - 1) / r * (1+r)`. The trailing
/// `(1+r)` credits one more period of interest at the end of the term.
/// A non-positive rate returns the contributions only (`monthly * months`).
/// Results beyond the Decimal range are an `Overflow` error.
pub fn annuity_maturity(
    monthly_amount: Money,
    annual_rate_pct: Rate,
    months: u32,
) -> FingrowResult<Money> {
    require_term(months)?;

    let r = annual_rate_pct / PERCENT / MONTHS_PER_YEAR;
    // Rates too small to survive the monthly division accrue nothing.
    if r <= Decimal::ZERO {
        return contributions(monthly_amount, months);
    }

    let growth = compound(r, months)?;
    (growth - Decimal::ONE)
        .checked_div(r)
        .and_then(|factor| factor.checked_mul(monthly_amount))
        .and_then(|fv| fv.checked_mul(Decimal::ONE + r))
        .ok_or_else(|| FingrowError::overflow("installment maturity"))
}
