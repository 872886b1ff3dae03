use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fingrow_core::catalog::product::ProductKind;
use fingrow_core::recommend::engine::recommend_products;
use fingrow_core::recommend::request::{EngineSettings, RecommendationRequest};

use crate::commands::catalog::{load_catalog, CatalogFormat};
use crate::input;

/// Arguments for goal-based recommendation
#[derive(Args)]
pub struct RecommendArgs {
    /// Path to a JSON/YAML request file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Savings goal in won
    #[arg(long)]
    pub target_amount: Option<Decimal>,

    /// Months to reach the goal (1-60)
    #[arg(long)]
    pub target_months: Option<u32>,

    /// Funds already held, in won
    #[arg(long)]
    pub current_amount: Option<Decimal>,

    /// Deposit (lump-sum) catalog file
    #[arg(long)]
    pub deposits: String,

    /// Installment-savings catalog file
    #[arg(long)]
    pub savings: String,

    /// Catalog file format
    #[arg(long, value_enum, default_value_t = CatalogFormat::Normalized)]
    pub catalog_format: CatalogFormat,

    /// Engine settings file (JSON or YAML)
    #[arg(long)]
    pub settings: Option<String>,
}

fn read_request(args: &RecommendArgs) -> Result<RecommendationRequest, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_structured(path);
    }
    if let Some(request) = input::stdin::read_stdin()? {
        return Ok(request);
    }
    let target = args
        .target_amount
        .ok_or("--target-amount is required (or provide --input)")?;
    let months = args
        .target_months
        .ok_or("--target-months is required (or provide --input)")?;
    Ok(RecommendationRequest::new(
        target,
        months,
        args.current_amount.unwrap_or(Decimal::ZERO),
    ))
}

pub fn run_recommend(args: RecommendArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = read_request(&args)?;
    let settings: EngineSettings = match args.settings {
        Some(ref path) => input::file::read_structured(path)?,
        None => EngineSettings::default(),
    };

    let deposits = load_catalog(&args.deposits, ProductKind::LumpSum, args.catalog_format)?;
    let savings = load_catalog(&args.savings, ProductKind::Installment, args.catalog_format)?;

    let result = recommend_products(&request, &deposits, &savings, &settings)?;
    Ok(serde_json::to_value(result)?)
}
