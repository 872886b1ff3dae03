use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::product::{Product, ProductKind};
use crate::rate_math::{annuity_maturity, simple_interest_maturity};
use crate::recommend::request::RecommendationRequest;
use crate::types::{round_money, Money, Rate};
use crate::FingrowResult;

/// A single recommended product with its projected outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecommendation {
    pub product_type: String,
    pub bank_name: String,
    pub product_name: String,
    pub interest_rate: Rate,
    pub term: u32,
    pub expected_return: Money,
    /// Lump-sum products only.
    pub input_amount: Option<Money>,
    /// Installment products only.
    pub monthly_amount: Option<Money>,
    pub maturity_amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_condition: Option<String>,
}

/// Unrounded projection of one funding leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegProjection {
    /// Total principal paid in.
    pub principal: Money,
    /// Per-month contribution; equals `principal` for a lump sum.
    pub periodic_amount: Money,
    pub maturity_amount: Money,
    pub expected_return: Money,
}

/// Simple-interest projection of a single upfront deposit.
pub fn project_lump_sum(principal: Money, rate: Rate, months: u32) -> FingrowResult<LegProjection> {
    let maturity = simple_interest_maturity(principal, rate, months)?;
    Ok(LegProjection {
        principal,
        periodic_amount: principal,
        maturity_amount: maturity,
        expected_return: maturity - principal,
    })
}

/// Annuity projection of saving `total` in equal monthly parts.
pub fn project_installment(total: Money, rate: Rate, months: u32) -> FingrowResult<LegProjection> {
    let total = total.max(Decimal::ZERO);
    let monthly = total / Decimal::from(months.max(1));
    let maturity = annuity_maturity(monthly, rate, months)?;
    Ok(LegProjection {
        principal: total,
        periodic_amount: monthly,
        maturity_amount: maturity,
        expected_return: maturity - total,
    })
}

/// Build the recommendation for one product, or `None` when the product has
/// no option for the requested term.
pub fn build_recommendation(
    product: &Product,
    request: &RecommendationRequest,
) -> FingrowResult<Option<ProductRecommendation>> {
    let term = request.target_months;
    let Some(option) = product.best_option_for_term(term) else {
        return Ok(None);
    };
    let rate = option.best_rate();

    let (projection, input_amount, monthly_amount) = match product.kind {
        ProductKind::LumpSum => {
            let p = project_lump_sum(request.target_amount, rate, term)?;
            (p, Some(round_money(p.principal)), None)
        }
        ProductKind::Installment => {
            let p = project_installment(request.shortfall(), rate, term)?;
            (p, None, Some(round_money(p.periodic_amount)))
        }
    };

    Ok(Some(ProductRecommendation {
        product_type: product.kind.label().to_string(),
        bank_name: product.bank_name.clone(),
        product_name: product.product_name.clone(),
        interest_rate: rate,
        term: option.term_months,
        expected_return: round_money(projection.expected_return),
        input_amount,
        monthly_amount,
        maturity_amount: round_money(projection.maturity_amount),
        special_condition: product.special_condition.clone(),
    }))
}
