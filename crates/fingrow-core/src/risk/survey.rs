//! Survey vocabulary shared by the questionnaire and the classifier.
//!
//! Enum values serialise in the upper snake case used on the wire
//! (`TEN_PERCENT`, `ONE_TIME_ONE_PLACE`, ...). Unknown values fail
//! deserialisation, which is how invalid survey input is rejected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How much principal loss the investor can accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LossTolerance {
    None,
    TenPercent,
    TwentyToThirtyPercent,
    HalfOrMore,
}

/// Lump-sum vs recurring, single vs spread placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentMethod {
    OneTimeOnePlace,
    OneTimeMultiplePlaces,
    MultipleTimesOnePlace,
    MultipleTimesMultiplePlaces,
}

/// Instrument families the investor is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferredInvestmentType {
    DepositSavings,
    GovernmentBonds,
    Etf,
    Funds,
}

impl PreferredInvestmentType {
    /// Market-risk instruments beyond principal-protected deposits and bonds.
    pub fn is_higher_risk(self) -> bool {
        matches!(self, PreferredInvestmentType::Etf | PreferredInvestmentType::Funds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentGoal {
    Retirement,
    HousePurchase,
    Education,
    EmergencyFund,
    WealthBuilding,
    Travel,
    Wedding,
    CarPurchase,
    BusinessStartup,
    Other,
}

/// Discrete investor risk classification, least to most risk-seeking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Stable,
    StabilitySeeking,
    RiskNeutral,
    ActiveInvestment,
    AggressiveInvestment,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Stable => "안정형",
            RiskTier::StabilitySeeking => "안정추구형",
            RiskTier::RiskNeutral => "위험중립형",
            RiskTier::ActiveInvestment => "적극투자형",
            RiskTier::AggressiveInvestment => "공격투자형",
        }
    }
}

/// Answers to the onboarding survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyAnswers {
    pub loss_tolerance: LossTolerance,
    pub investment_method: InvestmentMethod,
    #[serde(default)]
    pub preferred_investment_types: BTreeSet<PreferredInvestmentType>,
    #[serde(default)]
    pub min_investment_months: Option<u32>,
    #[serde(default)]
    pub max_investment_months: Option<u32>,
    #[serde(default)]
    pub investment_goal: Option<InvestmentGoal>,
}

impl SurveyAnswers {
    /// Investment horizon in months: the longest period the investor named.
    pub fn horizon_months(&self) -> Option<u32> {
        self.max_investment_months.or(self.min_investment_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialises_wire_vocabulary() {
        let answers: SurveyAnswers = serde_json::from_value(json!({
            "loss_tolerance": "TWENTY_TO_THIRTY_PERCENT",
            "investment_method": "MULTIPLE_TIMES_ONE_PLACE",
            "preferred_investment_types": ["ETF", "GOVERNMENT_BONDS"],
            "max_investment_months": 36,
            "investment_goal": "HOUSE_PURCHASE"
        }))
        .unwrap();
        assert_eq!(answers.loss_tolerance, LossTolerance::TwentyToThirtyPercent);
        assert_eq!(answers.preferred_investment_types.len(), 2);
        assert_eq!(answers.horizon_months(), Some(36));
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let res = serde_json::from_value::<SurveyAnswers>(json!({
            "loss_tolerance": "ALL_IN",
            "investment_method": "ONE_TIME_ONE_PLACE"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_types_default_to_empty() {
        let answers: SurveyAnswers = serde_json::from_value(json!({
            "loss_tolerance": "NONE",
            "investment_method": "ONE_TIME_ONE_PLACE"
        }))
        .unwrap();
        assert!(answers.preferred_investment_types.is_empty());
        assert_eq!(answers.horizon_months(), None);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::Stable < RiskTier::AggressiveInvestment);
        assert_eq!(RiskTier::RiskNeutral.label(), "위험중립형");
    }
}
