use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::catalog::product::Product;
use crate::recommend::allocation::{plan_allocation, OptimalCombination};
use crate::recommend::builder::{build_recommendation, ProductRecommendation};
use crate::recommend::request::{EngineSettings, RecommendationRequest};
use crate::recommend::selector::select_top_by_term;
use crate::risk::classifier::classify_risk;
use crate::risk::survey::RiskTier;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FingrowResult;

/// Everything the engine produces for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub target_amount: Money,
    pub target_months: u32,
    pub risk_tier: Option<RiskTier>,
    pub recommendations: Vec<ProductRecommendation>,
    pub optimal_combination: OptimalCombination,
    pub total_products: usize,
}

fn recommend_family(
    family: &[Product],
    request: &RecommendationRequest,
    top_n: usize,
    out: &mut Vec<ProductRecommendation>,
    warnings: &mut Vec<String>,
) -> FingrowResult<usize> {
    let mut added = 0;
    for product in select_top_by_term(family, request.target_months, top_n) {
        let Some(rec) = build_recommendation(product, request)? else {
            continue;
        };
        if let (Some(limit), Some(input)) = (product.max_limit, rec.input_amount) {
            if input > limit {
                warnings.push(format!(
                    "{} {}: input amount {} exceeds the product limit of {}",
                    product.bank_name, product.product_name, input, limit
                ));
            }
        }
        out.push(rec);
        added += 1;
    }
    Ok(added)
}

/// Recommend deposit and installment products for a savings goal and plan
/// the best two-product combination.
///
/// Lump-sum recommendations come first, then installment ones, each ranked by
/// rate. Missing products for the term produce warnings, never errors.
pub fn recommend_products(
    request: &RecommendationRequest,
    deposits: &[Product],
    savings: &[Product],
    settings: &EngineSettings,
) -> FingrowResult<ComputationOutput<RecommendationResponse>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    request.validate()?;

    let risk_tier = request
        .survey
        .as_ref()
        .map(|survey| classify_risk(survey, settings.risk_strategy));

    let mut recommendations = Vec::new();
    let lump_sum_count = recommend_family(
        deposits,
        request,
        settings.top_n,
        &mut recommendations,
        &mut warnings,
    )?;
    if !deposits.iter().any(|p| p.has_term(request.target_months)) {
        warnings.push(format!(
            "No lump-sum product offers a {}-month term",
            request.target_months
        ));
    }

    let installment_count = recommend_family(
        savings,
        request,
        settings.top_n,
        &mut recommendations,
        &mut warnings,
    )?;
    if !savings.iter().any(|p| p.has_term(request.target_months)) {
        warnings.push(format!(
            "No installment product offers a {}-month term",
            request.target_months
        ));
    }
    if settings.top_n == 0 {
        warnings.push("top_n is 0: individual recommendations are not listed".to_string());
    }

    let optimal_combination =
        plan_allocation(request, deposits, savings, settings.allocation_policy)?;

    tracing::debug!(
        target_months = request.target_months,
        lump_sum_count,
        installment_count,
        combination_legs = optimal_combination.products.len(),
        "built recommendations"
    );

    let response = RecommendationResponse {
        target_amount: request.target_amount,
        target_months: request.target_months,
        risk_tier,
        total_products: recommendations.len(),
        recommendations,
        optimal_combination,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Goal-based deposit/installment recommendation (simple interest for lump sums, annuity accrual for installments)",
        &serde_json::json!({
            "target_amount": request.target_amount.to_string(),
            "target_months": request.target_months,
            "current_amount": request.current_amount.to_string(),
            "risk_preference": request.risk_preference,
            "top_n": settings.top_n,
            "allocation_policy": format!("{:?}", settings.allocation_policy),
            "risk_strategy": format!("{:?}", settings.risk_strategy),
            "deposit_catalog_size": deposits.len(),
            "saving_catalog_size": savings.len(),
        }),
        warnings,
        elapsed,
        response,
    ))
}
