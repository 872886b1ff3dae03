use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FingrowError;
use crate::recommend::allocation::AllocationPolicy;
use crate::risk::classifier::RiskStrategy;
use crate::risk::survey::SurveyAnswers;
use crate::types::Money;
use crate::FingrowResult;

pub const MIN_TARGET_MONTHS: u32 = 1;
pub const MAX_TARGET_MONTHS: u32 = 60;

/// Stated risk appetite. Carried through for display; it does not filter products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskPreference {
    #[default]
    Low,
    Medium,
    High,
}

/// A savings goal to build recommendations for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub target_amount: Money,
    pub target_months: u32,
    #[serde(default)]
    pub current_amount: Money,
    #[serde(default)]
    pub risk_preference: RiskPreference,
    /// When present, the response carries a classified risk tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey: Option<SurveyAnswers>,
}

impl RecommendationRequest {
    pub fn new(target_amount: Money, target_months: u32, current_amount: Money) -> Self {
        Self {
            target_amount,
            target_months,
            current_amount,
            risk_preference: RiskPreference::default(),
            survey: None,
        }
    }

    /// Boundary checks. Components past this point assume a valid request.
    pub fn validate(&self) -> FingrowResult<()> {
        if self.target_amount <= Decimal::ZERO {
            return Err(FingrowError::invalid("target_amount", "Target amount must be > 0"));
        }
        if !(MIN_TARGET_MONTHS..=MAX_TARGET_MONTHS).contains(&self.target_months) {
            return Err(FingrowError::invalid(
                "target_months",
                format!("Target term must be between {MIN_TARGET_MONTHS} and {MAX_TARGET_MONTHS} months"),
            ));
        }
        if self.current_amount < Decimal::ZERO {
            return Err(FingrowError::invalid("current_amount", "Current amount must be >= 0"));
        }
        Ok(())
    }

    /// Amount still to be saved, floored at zero.
    pub fn shortfall(&self) -> Money {
        (self.target_amount - self.current_amount).max(Decimal::ZERO)
    }
}

/// Engine knobs. Every field has a default so partial settings files work.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Products recommended per family.
    pub top_n: usize,
    pub allocation_policy: AllocationPolicy,
    pub risk_strategy: RiskStrategy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            top_n: 3,
            allocation_policy: AllocationPolicy::default(),
            risk_strategy: RiskStrategy::default(),
        }
    }
}
