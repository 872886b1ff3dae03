use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::product::{Product, ProductKind};
use crate::error::FingrowError;
use crate::recommend::builder::{project_installment, project_lump_sum, LegProjection};
use crate::recommend::request::RecommendationRequest;
use crate::recommend::selector::select_top_by_term;
use crate::types::{round_money, Money, Rate};
use crate::FingrowResult;

const SUMMARY_UNIT: Decimal = dec!(10_000);
const RISK_LEVEL_LABEL: &str = "낮음";
const DESCRIPTION: &str = "최고 금리 예금과 적금의 최적 조합";

/// How the target is divided between the lump-sum and installment legs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationPolicy {
    /// Held funds go to the lump-sum leg (at most half the target); the
    /// shortfall is saved monthly.
    #[default]
    HeldFundsFirst,
    /// Target split in half regardless of held funds.
    EvenSplit,
}

/// One leg of the combined plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationProduct {
    pub product_type: String,
    pub bank_name: String,
    pub product_name: String,
    pub term: u32,
    pub interest_rate: Rate,
    pub special_condition: Option<String>,
    /// Lump-sum leg only.
    pub deposit_amount: Option<Money>,
    /// Installment leg only.
    pub monthly_amount: Option<Money>,
    /// Installment leg only.
    pub total_saving_amount: Option<Money>,
    pub maturity_amount: Money,
    pub expected_return: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimalCombination {
    pub products: Vec<CombinationProduct>,
    pub combination_summary: String,
    pub total_expected_return: Money,
    pub expected_total_amount: Money,
    pub risk_level: String,
    pub description: String,
}

/// Principal assigned to each leg before product selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationSplit {
    pub lump_sum_amount: Money,
    pub installment_total: Money,
}

pub fn split_target(request: &RecommendationRequest, policy: AllocationPolicy) -> AllocationSplit {
    let half = request.target_amount / dec!(2);
    match policy {
        AllocationPolicy::HeldFundsFirst => AllocationSplit {
            lump_sum_amount: request.current_amount.min(half),
            installment_total: request.shortfall(),
        },
        AllocationPolicy::EvenSplit => AllocationSplit {
            lump_sum_amount: half,
            installment_total: half,
        },
    }
}

/// `월 {N}만원 · {T}개월 · 예금+적금 혼합`, N in units of 10,000 won.
pub fn combination_summary(monthly_amount: Money, months: u32) -> String {
    let units = (monthly_amount / SUMMARY_UNIT)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("월 {units}만원 · {months}개월 · 예금+적금 혼합")
}

fn term_rate(product: &Product, months: u32) -> Rate {
    product
        .best_option_for_term(months)
        .map(|o| o.best_rate())
        .unwrap_or(Decimal::ZERO)
}

fn leg(product: &Product, months: u32, rate: Rate, projection: LegProjection) -> CombinationProduct {
    let (deposit_amount, monthly_amount, total_saving_amount) = match product.kind {
        ProductKind::LumpSum => (Some(round_money(projection.principal)), None, None),
        ProductKind::Installment => (
            None,
            Some(round_money(projection.periodic_amount)),
            Some(round_money(projection.principal)),
        ),
    };
    CombinationProduct {
        product_type: product.kind.label().to_string(),
        bank_name: product.bank_name.clone(),
        product_name: product.product_name.clone(),
        term: months,
        interest_rate: rate,
        special_condition: product.special_condition.clone(),
        deposit_amount,
        monthly_amount,
        total_saving_amount,
        maturity_amount: round_money(projection.maturity_amount),
        expected_return: round_money(projection.expected_return),
    }
}

/// Combine the best lump-sum and best installment product for the term.
///
/// A leg is omitted when no product offers the term or when its principal is
/// zero. With both legs absent the plan is empty with zero returns.
pub fn plan_allocation(
    request: &RecommendationRequest,
    deposits: &[Product],
    savings: &[Product],
    policy: AllocationPolicy,
) -> FingrowResult<OptimalCombination> {
    let months = request.target_months;
    let split = split_target(request, policy);
    let mut products = Vec::with_capacity(2);

    if split.lump_sum_amount > Decimal::ZERO {
        if let Some(&deposit) = select_top_by_term(deposits, months, 1).first() {
            let rate = term_rate(deposit, months);
            let projection = project_lump_sum(split.lump_sum_amount, rate, months)?;
            products.push(leg(deposit, months, rate, projection));
        } else {
            tracing::debug!(months, "no lump-sum product for term; leg omitted");
        }
    }

    let installment_monthly = split.installment_total / Decimal::from(months.max(1));
    if split.installment_total > Decimal::ZERO {
        if let Some(&saving) = select_top_by_term(savings, months, 1).first() {
            let rate = term_rate(saving, months);
            let projection = project_installment(split.installment_total, rate, months)?;
            products.push(leg(saving, months, rate, projection));
        } else {
            tracing::debug!(months, "no installment product for term; leg omitted");
        }
    }

    // Legs are already rounded, so the total matches their sum exactly.
    let total_expected_return: Money = products.iter().map(|p| p.expected_return).sum();
    let expected_total_amount = round_money(request.target_amount)
        .checked_add(total_expected_return)
        .ok_or_else(|| FingrowError::overflow("expected total amount"))?;

    Ok(OptimalCombination {
        combination_summary: combination_summary(installment_monthly, months),
        total_expected_return,
        expected_total_amount,
        risk_level: RISK_LEVEL_LABEL.to_string(),
        description: DESCRIPTION.to_string(),
        products,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::RateOption;
    use pretty_assertions::assert_eq;

    fn product(id: &str, kind: ProductKind, term: u32, rate: Rate) -> Product {
        Product {
            id: id.into(),
            kind,
            bank_name: format!("{id} Bank"),
            product_name: id.into(),
            special_condition: None,
            max_limit: None,
            disclosed_from: None,
            options: vec![RateOption {
                term_months: term,
                base_rate: Some(rate),
                preferential_rate: None,
                interest_type: None,
                contribution_type: None,
            }],
        }
    }

    #[test]
    fn test_held_funds_first_split() {
        let req = RecommendationRequest::new(dec!(10_000_000), 12, dec!(3_000_000));
        let split = split_target(&req, AllocationPolicy::HeldFundsFirst);
        assert_eq!(split.lump_sum_amount, dec!(3_000_000));
        assert_eq!(split.installment_total, dec!(7_000_000));

        let rich = RecommendationRequest::new(dec!(10_000_000), 12, dec!(8_000_000));
        let split = split_target(&rich, AllocationPolicy::HeldFundsFirst);
        assert_eq!(split.lump_sum_amount, dec!(5_000_000));
        assert_eq!(split.installment_total, dec!(2_000_000));
    }

    #[test]
    fn test_even_split_ignores_held_funds() {
        let req = RecommendationRequest::new(dec!(10_000_000), 12, dec!(3_000_000));
        let split = split_target(&req, AllocationPolicy::EvenSplit);
        assert_eq!(split.lump_sum_amount, dec!(5_000_000));
        assert_eq!(split.installment_total, dec!(5_000_000));
    }

    #[test]
    fn test_summary_rounds_to_ten_thousands() {
        assert_eq!(combination_summary(dec!(416_666.67), 12), "월 42만원 · 12개월 · 예금+적금 혼합");
        assert_eq!(combination_summary(dec!(0), 6), "월 0만원 · 6개월 · 예금+적금 혼합");
    }

    #[test]
    fn test_both_legs_present_total_matches_sum() {
        let deposits = vec![product("D", ProductKind::LumpSum, 12, dec!(3.5))];
        let savings = vec![product("S", ProductKind::Installment, 12, dec!(4.2))];
        let req = RecommendationRequest::new(dec!(10_000_000), 12, dec!(4_000_000));

        let plan = plan_allocation(&req, &deposits, &savings, AllocationPolicy::HeldFundsFirst).unwrap();
        assert_eq!(plan.products.len(), 2);
        assert_eq!(plan.products[0].deposit_amount, Some(dec!(4_000_000)));
        assert_eq!(plan.products[0].expected_return, dec!(140_000));
        assert_eq!(plan.products[1].total_saving_amount, Some(dec!(6_000_000)));
        assert_eq!(plan.products[1].monthly_amount, Some(dec!(500_000)));

        let sum: Money = plan.products.iter().map(|p| p.expected_return).sum();
        assert_eq!(plan.total_expected_return, sum);
        assert_eq!(plan.expected_total_amount, dec!(10_000_000) + sum);
        assert_eq!(plan.combination_summary, "월 50만원 · 12개월 · 예금+적금 혼합");
    }

    #[test]
    fn test_no_products_for_term_yields_empty_plan() {
        let deposits = vec![product("D", ProductKind::LumpSum, 6, dec!(3.5))];
        let req = RecommendationRequest::new(dec!(10_000_000), 12, dec!(4_000_000));
        let plan = plan_allocation(&req, &deposits, &[], AllocationPolicy::HeldFundsFirst).unwrap();
        assert!(plan.products.is_empty());
        assert_eq!(plan.total_expected_return, Decimal::ZERO);
        assert_eq!(plan.expected_total_amount, dec!(10_000_000));
    }

    #[test]
    fn test_zero_held_funds_omits_lump_leg() {
        let deposits = vec![product("D", ProductKind::LumpSum, 12, dec!(3.5))];
        let savings = vec![product("S", ProductKind::Installment, 12, dec!(4.2))];
        let req = RecommendationRequest::new(dec!(5_000_000), 12, dec!(0));
        let plan = plan_allocation(&req, &deposits, &savings, AllocationPolicy::HeldFundsFirst).unwrap();
        assert_eq!(plan.products.len(), 1);
        assert_eq!(plan.products[0].product_type, "적금");
        assert_eq!(plan.products[0].monthly_amount, Some(dec!(416_667)));
        assert!(plan.products[0].expected_return > Decimal::ZERO);
    }
}
