//! Survey-to-tier classification.
//!
//! Two rule sets are supported:
//! 1. **Scored** (canonical) -- loss tolerance, investment method and preferred
//!    instrument type each contribute points; the capped sum maps to a tier.
//! 2. **Direct** -- loss tolerance alone picks the tier, with the top band
//!    split by horizon and appetite for market-risk instruments.

use serde::{Deserialize, Serialize};

use crate::risk::survey::{
    InvestmentMethod, LossTolerance, PreferredInvestmentType, RiskTier, SurveyAnswers,
};

const TYPE_SCORE_CAP: u32 = 4;
const TOTAL_SCORE_CAP: u32 = 11;
const LONG_HORIZON_MONTHS: u32 = 60;

/// Named classification rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStrategy {
    #[default]
    Scored,
    Direct,
}

fn loss_tolerance_points(tolerance: LossTolerance) -> u32 {
    match tolerance {
        LossTolerance::None => 0,
        LossTolerance::TenPercent => 2,
        LossTolerance::TwentyToThirtyPercent => 3,
        LossTolerance::HalfOrMore => 4,
    }
}

fn investment_method_points(method: InvestmentMethod) -> u32 {
    match method {
        InvestmentMethod::OneTimeOnePlace => 1,
        InvestmentMethod::OneTimeMultiplePlaces => 2,
        InvestmentMethod::MultipleTimesOnePlace => 2,
        InvestmentMethod::MultipleTimesMultiplePlaces => 3,
    }
}

fn investment_type_points(kind: PreferredInvestmentType) -> u32 {
    match kind {
        PreferredInvestmentType::DepositSavings => 0,
        PreferredInvestmentType::GovernmentBonds => 1,
        PreferredInvestmentType::Etf => 2,
        PreferredInvestmentType::Funds => 3,
    }
}

/// Preferred-type component: the riskiest selected type's points, scaled by
/// 0.8 (rounded up) when more than one type is selected, capped at 4.
fn preferred_types_points(answers: &SurveyAnswers) -> u32 {
    let types = &answers.preferred_investment_types;
    let max = types
        .iter()
        .map(|t| investment_type_points(*t))
        .max()
        .unwrap_or(0);
    let scaled = if types.len() > 1 {
        // ceil(max * 0.8) in integers
        (max * 4).div_ceil(5)
    } else {
        max
    };
    scaled.min(TYPE_SCORE_CAP)
}

/// Total risk score in `0..=11`.
pub fn risk_score(answers: &SurveyAnswers) -> u32 {
    let score = loss_tolerance_points(answers.loss_tolerance)
        + investment_method_points(answers.investment_method)
        + preferred_types_points(answers);
    score.min(TOTAL_SCORE_CAP)
}

fn tier_for_score(score: u32) -> RiskTier {
    match score {
        0..=3 => RiskTier::Stable,
        4..=5 => RiskTier::StabilitySeeking,
        6..=7 => RiskTier::RiskNeutral,
        8..=9 => RiskTier::ActiveInvestment,
        _ => RiskTier::AggressiveInvestment,
    }
}

fn classify_direct(answers: &SurveyAnswers) -> RiskTier {
    match answers.loss_tolerance {
        LossTolerance::None => RiskTier::Stable,
        LossTolerance::TenPercent => RiskTier::StabilitySeeking,
        LossTolerance::TwentyToThirtyPercent => RiskTier::RiskNeutral,
        LossTolerance::HalfOrMore => {
            let long_horizon = answers
                .horizon_months()
                .is_some_and(|m| m >= LONG_HORIZON_MONTHS);
            let wants_market_risk = answers
                .preferred_investment_types
                .iter()
                .any(|t| t.is_higher_risk());
            if long_horizon && wants_market_risk {
                RiskTier::AggressiveInvestment
            } else {
                RiskTier::ActiveInvestment
            }
        }
    }
}

/// Classify survey answers into a risk tier with the given rule set.
pub fn classify_risk(answers: &SurveyAnswers, strategy: RiskStrategy) -> RiskTier {
    match strategy {
        RiskStrategy::Scored => tier_for_score(risk_score(answers)),
        RiskStrategy::Direct => classify_direct(answers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn answers(
        tolerance: LossTolerance,
        method: InvestmentMethod,
        types: &[PreferredInvestmentType],
        horizon: Option<u32>,
    ) -> SurveyAnswers {
        SurveyAnswers {
            loss_tolerance: tolerance,
            investment_method: method,
            preferred_investment_types: types.iter().copied().collect::<BTreeSet<_>>(),
            min_investment_months: None,
            max_investment_months: horizon,
            investment_goal: None,
        }
    }

    #[test]
    fn test_most_conservative_is_stable() {
        let a = answers(LossTolerance::None, InvestmentMethod::OneTimeOnePlace, &[PreferredInvestmentType::DepositSavings], None);
        assert_eq!(risk_score(&a), 1);
        assert_eq!(classify_risk(&a, RiskStrategy::Scored), RiskTier::Stable);
    }

    #[test]
    fn test_max_type_contribution_not_sum() {
        // ETF(2) + Funds(3) selected: max=3, ceil(3*0.8)=3
        let a = answers(
            LossTolerance::TenPercent,
            InvestmentMethod::OneTimeMultiplePlaces,
            &[PreferredInvestmentType::Etf, PreferredInvestmentType::Funds],
            None,
        );
        assert_eq!(preferred_types_points(&a), 3);
        assert_eq!(risk_score(&a), 7);
        assert_eq!(classify_risk(&a, RiskStrategy::Scored), RiskTier::RiskNeutral);
    }

    #[test]
    fn test_single_type_not_scaled() {
        let a = answers(LossTolerance::None, InvestmentMethod::OneTimeOnePlace, &[PreferredInvestmentType::Etf], None);
        assert_eq!(preferred_types_points(&a), 2);
    }

    #[test]
    fn test_empty_types_score_zero() {
        let a = answers(LossTolerance::TwentyToThirtyPercent, InvestmentMethod::MultipleTimesOnePlace, &[], None);
        assert_eq!(preferred_types_points(&a), 0);
        assert_eq!(risk_score(&a), 5);
        assert_eq!(classify_risk(&a, RiskStrategy::Scored), RiskTier::StabilitySeeking);
        assert_eq!(classify_risk(&a, RiskStrategy::Direct), RiskTier::RiskNeutral);
    }

    #[test]
    fn test_highest_answers_are_aggressive() {
        let a = answers(
            LossTolerance::HalfOrMore,
            InvestmentMethod::MultipleTimesMultiplePlaces,
            &[PreferredInvestmentType::Funds],
            Some(60),
        );
        assert_eq!(risk_score(&a), 10);
        assert_eq!(classify_risk(&a, RiskStrategy::Scored), RiskTier::AggressiveInvestment);
        assert_eq!(classify_risk(&a, RiskStrategy::Direct), RiskTier::AggressiveInvestment);
    }

    #[test]
    fn test_score_band_boundaries() {
        assert_eq!(tier_for_score(3), RiskTier::Stable);
        assert_eq!(tier_for_score(4), RiskTier::StabilitySeeking);
        assert_eq!(tier_for_score(6), RiskTier::RiskNeutral);
        assert_eq!(tier_for_score(8), RiskTier::ActiveInvestment);
        assert_eq!(tier_for_score(9), RiskTier::ActiveInvestment);
        assert_eq!(tier_for_score(11), RiskTier::AggressiveInvestment);
    }

    #[test]
    fn test_direct_half_or_more_needs_horizon_and_market_risk() {
        let short = answers(LossTolerance::HalfOrMore, InvestmentMethod::OneTimeOnePlace, &[PreferredInvestmentType::Etf], Some(36));
        assert_eq!(classify_risk(&short, RiskStrategy::Direct), RiskTier::ActiveInvestment);

        let safe_types = answers(LossTolerance::HalfOrMore, InvestmentMethod::OneTimeOnePlace, &[PreferredInvestmentType::GovernmentBonds], Some(72));
        assert_eq!(classify_risk(&safe_types, RiskStrategy::Direct), RiskTier::ActiveInvestment);

        let no_horizon = answers(LossTolerance::HalfOrMore, InvestmentMethod::OneTimeOnePlace, &[PreferredInvestmentType::Funds], None);
        assert_eq!(classify_risk(&no_horizon, RiskStrategy::Direct), RiskTier::ActiveInvestment);
    }

    #[test]
    fn test_direct_lower_bands() {
        let none = answers(LossTolerance::None, InvestmentMethod::MultipleTimesMultiplePlaces, &[PreferredInvestmentType::Funds], Some(60));
        assert_eq!(classify_risk(&none, RiskStrategy::Direct), RiskTier::Stable);
        let ten = answers(LossTolerance::TenPercent, InvestmentMethod::OneTimeOnePlace, &[], None);
        assert_eq!(classify_risk(&ten, RiskStrategy::Direct), RiskTier::StabilitySeeking);
    }
}
