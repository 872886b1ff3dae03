use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rate_math;
use crate::types::{Money, Rate};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How a product is funded, which also fixes its accrual formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductKind {
    /// One upfront deposit, simple interest (정기예금).
    LumpSum,
    /// Recurring monthly contributions, annuity accrual (적금).
    Installment,
}

impl ProductKind {
    /// Display label used in recommendation output.
    pub fn label(self) -> &'static str {
        match self {
            ProductKind::LumpSum => "예금",
            ProductKind::Installment => "적금",
        }
    }
}

/// Contribution schedule of an installment option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionType {
    /// Same amount every month (정액적립식).
    Fixed,
    /// Any amount, any month (자유적립식).
    Free,
}

/// Interest type as disclosed by the bank. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestType {
    Simple,
    Compound,
}

/// A single term/rate combination offered by a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateOption {
    pub term_months: u32,
    pub base_rate: Option<Rate>,
    #[serde(default)]
    pub preferential_rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_type: Option<InterestType>,
    /// Installment products only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contribution_type: Option<ContributionType>,
}

impl RateOption {
    pub fn best_rate(&self) -> Rate {
        rate_math::best_rate(self.base_rate, self.preferential_rate)
    }
}

/// A deposit or installment-savings product with its rate options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub kind: ProductKind,
    pub bank_name: String,
    pub product_name: String,
    #[serde(default)]
    pub special_condition: Option<String>,
    #[serde(default)]
    pub max_limit: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclosed_from: Option<NaiveDate>,
    #[serde(default)]
    pub options: Vec<RateOption>,
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

impl Product {
    /// Highest-rate option whose term equals `term_months` exactly.
    ///
    /// Duplicate options for the same term collapse to the best rate; the
    /// earliest one wins a tie.
    pub fn best_option_for_term(&self, term_months: u32) -> Option<&RateOption> {
        best_of(self.options.iter().filter(|o| o.term_months == term_months))
    }

    /// Highest-rate option across all terms.
    pub fn best_option(&self) -> Option<&RateOption> {
        best_of(self.options.iter())
    }

    pub fn has_term(&self, term_months: u32) -> bool {
        self.options.iter().any(|o| o.term_months == term_months)
    }
}

fn best_of<'a>(options: impl Iterator<Item = &'a RateOption>) -> Option<&'a RateOption> {
    let mut best: Option<&RateOption> = None;
    for option in options {
        match best {
            Some(current) if option.best_rate() <= current.best_rate() => {}
            _ => best = Some(option),
        }
    }
    best
}
