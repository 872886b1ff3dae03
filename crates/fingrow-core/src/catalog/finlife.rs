//! Adapter for the public deposit/saving product disclosure API.
//!
//! The payload arrives as two flat lists: `baseList` with one row per product
//! and `optionList` with one row per term/rate option, joined on
//! `fin_prdt_cd`. Numeric fields are sometimes sent as strings, so they are
//! read leniently. The engine only ever sees the typed `Product` values this
//! module produces.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

use crate::catalog::product::{ContributionType, InterestType, Product, ProductKind, RateOption};
use crate::error::FingrowError;
use crate::FingrowResult;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ApiResponse {
    result: Option<ApiResult>,
}

#[derive(Debug, Deserialize)]
struct ApiResult {
    #[serde(rename = "baseList", default)]
    base_list: Option<Vec<BaseRow>>,
    #[serde(rename = "optionList", default)]
    option_list: Option<Vec<OptionRow>>,
}

#[derive(Debug, Deserialize)]
struct BaseRow {
    fin_prdt_cd: String,
    #[serde(default)]
    kor_co_nm: Option<String>,
    #[serde(default)]
    fin_prdt_nm: Option<String>,
    #[serde(default)]
    spcl_cnd: Option<String>,
    #[serde(default)]
    max_limit: Option<Value>,
    #[serde(default)]
    dcls_strt_day: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OptionRow {
    fin_prdt_cd: String,
    #[serde(default)]
    intr_rate_type: Option<String>,
    #[serde(default)]
    rsrv_type: Option<String>,
    #[serde(default)]
    intr_rate: Option<Value>,
    #[serde(default)]
    intr_rate2: Option<Value>,
    #[serde(default)]
    save_trm: Option<Value>,
}

// ---------------------------------------------------------------------------
// Lenient field parsing
// ---------------------------------------------------------------------------

fn decimal_field(value: &Option<Value>) -> Option<Decimal> {
    match value.as_ref()? {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

fn term_field(value: &Option<Value>) -> Option<u32> {
    match value.as_ref()? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn disclosure_date(raw: &Option<String>) -> Option<NaiveDate> {
    let raw = raw.as_deref()?.trim();
    NaiveDate::parse_from_str(raw, "%Y%m%d").ok()
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn contribution_type(kind: ProductKind, raw: Option<&str>) -> Option<ContributionType> {
    match kind {
        ProductKind::LumpSum => None,
        ProductKind::Installment => Some(match raw.map(str::trim) {
            Some("F") => ContributionType::Free,
            _ => ContributionType::Fixed,
        }),
    }
}

fn interest_type(raw: Option<&str>) -> Option<InterestType> {
    match raw.map(str::trim) {
        Some("S") => Some(InterestType::Simple),
        Some("M") => Some(InterestType::Compound),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Parse a disclosure API payload into products of the given kind.
///
/// Base-row order is preserved. Option rows without a matching base row or
/// without a term are dropped.
pub fn parse_finlife_catalog(kind: ProductKind, payload: &str) -> FingrowResult<Vec<Product>> {
    let response: ApiResponse = serde_json::from_str(payload)?;
    let result = response
        .result
        .ok_or_else(|| FingrowError::Catalog("payload has no `result` object".into()))?;

    let base_rows = result.base_list.unwrap_or_default();
    let option_rows = result.option_list.unwrap_or_default();

    let mut products: Vec<Product> = Vec::with_capacity(base_rows.len());
    // A code may appear in several base rows; options attach to each of them.
    let mut by_code: HashMap<String, Vec<usize>> = HashMap::new();

    for row in base_rows {
        let code = row.fin_prdt_cd.trim().to_string();
        if code.is_empty() {
            tracing::debug!("skipping base row without product code");
            continue;
        }
        by_code.entry(code.clone()).or_default().push(products.len());
        products.push(Product {
            id: code,
            kind,
            bank_name: non_blank(row.kor_co_nm).unwrap_or_default(),
            product_name: non_blank(row.fin_prdt_nm).unwrap_or_default(),
            special_condition: non_blank(row.spcl_cnd),
            max_limit: decimal_field(&row.max_limit),
            disclosed_from: disclosure_date(&row.dcls_strt_day),
            options: Vec::new(),
        });
    }

    let mut orphans = 0usize;
    for row in option_rows {
        let Some(indices) = by_code.get(row.fin_prdt_cd.trim()) else {
            orphans += 1;
            continue;
        };
        let Some(term_months) = term_field(&row.save_trm) else {
            orphans += 1;
            continue;
        };
        let option = RateOption {
            term_months,
            base_rate: decimal_field(&row.intr_rate),
            preferential_rate: decimal_field(&row.intr_rate2),
            interest_type: interest_type(row.intr_rate_type.as_deref()),
            contribution_type: contribution_type(kind, row.rsrv_type.as_deref()),
        };
        for &idx in indices {
            products[idx].options.push(option.clone());
        }
    }

    tracing::debug!(
        ?kind,
        products = products.len(),
        dropped_options = orphans,
        "parsed disclosure catalog"
    );

    Ok(products)
}
