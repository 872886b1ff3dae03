use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::risk::classifier::{classify_risk, risk_score, RiskStrategy};
use crate::risk::survey::{RiskTier, SurveyAnswers};
use crate::types::{with_metadata, ComputationOutput, Rate};

/// Fixed narrative for a risk tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentAnalysis {
    pub risk_profile: String,
    pub investment_strategy: String,
    pub expected_return: String,
    pub recommendation: String,
}

/// Product archetype suited to a tier. Not drawn from any catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedProduct {
    pub product_type: String,
    pub product_name: String,
    pub provider: String,
    pub indicative_rate: Rate,
    pub description: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    /// Present for the scored strategy only.
    pub score: Option<u32>,
    pub analysis: InvestmentAnalysis,
    pub suggested_product: SuggestedProduct,
}

pub fn investment_analysis(tier: RiskTier) -> InvestmentAnalysis {
    let (strategy, expected_return, recommendation) = match tier {
        RiskTier::Stable => (
            "원금보장 중심의 안정적 투자",
            "연 2-3% 수익률",
            "정기예금, 적금 등 원금보장 상품을 권장합니다",
        ),
        RiskTier::StabilitySeeking => (
            "안정성을 우선하되 적절한 수익 추구",
            "연 3-4% 수익률",
            "정기예금과 안전한 채권형 펀드를 조합한 투자를 권장합니다",
        ),
        RiskTier::RiskNeutral => (
            "위험과 수익의 균형잡힌 투자",
            "연 4-5% 수익률",
            "예적금과 균형형 펀드를 적절히 배분한 투자를 권장합니다",
        ),
        RiskTier::ActiveInvestment => (
            "적극적인 수익 추구를 위한 투자",
            "연 5-7% 수익률",
            "성장형 펀드와 주식형 펀드를 포함한 적극적 투자를 권장합니다",
        ),
        RiskTier::AggressiveInvestment => (
            "고위험 고수익을 추구하는 공격적 투자",
            "연 7% 이상 수익률",
            "고수익 투자상품과 주식 직접투자를 포함한 공격적 투자를 권장합니다",
        ),
    };
    InvestmentAnalysis {
        risk_profile: tier.label().to_string(),
        investment_strategy: strategy.to_string(),
        expected_return: expected_return.to_string(),
        recommendation: recommendation.to_string(),
    }
}

pub fn suggested_product(tier: RiskTier) -> SuggestedProduct {
    let (product_type, product_name, provider, rate, description, reason): (_, _, _, Decimal, _, _) =
        match tier {
            RiskTier::Stable => (
                "예/적금",
                "안심 정기예금",
                "시중은행",
                dec!(3.5),
                "원금 100% 보장되는 정기예금",
                "안정형 투자자에게 가장 적합한 안전한 예금상품",
            ),
            RiskTier::StabilitySeeking => (
                "예/적금",
                "우대금리 정기적금",
                "시중은행",
                dec!(4.2),
                "우대 금리 적용 가능한 정기적금",
                "안정성을 우선하면서도 합리적인 수익을 추구하는 분께 적합",
            ),
            RiskTier::RiskNeutral => (
                "국채",
                "3년 만기 국고채",
                "한국은행",
                dec!(3.8),
                "국가 신용도를 바탕으로 한 안전한 채권",
                "중간 정도의 위험을 감내하며 안정적인 수익을 원하는 분께 적합",
            ),
            RiskTier::ActiveInvestment => (
                "ETF",
                "코스피 200 지수 ETF",
                "자산운용사",
                dec!(7.2),
                "코스피 200 지수를 추종하는 대표 ETF",
                "적극적인 투자를 통해 주식시장 수익률을 추구하는 분께 적합",
            ),
            RiskTier::AggressiveInvestment => (
                "펀드",
                "글로벌 성장 펀드",
                "자산운용사",
                dec!(12.5),
                "글로벌 성장주에 투자하는 적극적 운용 펀드",
                "높은 위험을 감수하고 최대 수익을 추구하는 공격적 투자자에게 적합",
            ),
        };
    SuggestedProduct {
        product_type: product_type.to_string(),
        product_name: product_name.to_string(),
        provider: provider.to_string(),
        indicative_rate: rate,
        description: description.to_string(),
        reason: reason.to_string(),
    }
}

/// Classify the survey and attach the tier's narrative and archetype product.
pub fn assess_risk(
    answers: &SurveyAnswers,
    strategy: RiskStrategy,
) -> ComputationOutput<RiskAssessment> {
    let start = Instant::now();

    let tier = classify_risk(answers, strategy);
    let score = match strategy {
        RiskStrategy::Scored => Some(risk_score(answers)),
        RiskStrategy::Direct => None,
    };
    tracing::debug!(?strategy, ?tier, ?score, "classified survey");

    let assessment = RiskAssessment {
        tier,
        score,
        analysis: investment_analysis(tier),
        suggested_product: suggested_product(tier),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Rule-based investor risk classification",
        &serde_json::json!({
            "strategy": format!("{:?}", strategy),
            "loss_tolerance": answers.loss_tolerance,
            "investment_method": answers.investment_method,
            "preferred_investment_types": answers.preferred_investment_types,
            "horizon_months": answers.horizon_months(),
        }),
        Vec::new(),
        elapsed,
        assessment,
    )
}
