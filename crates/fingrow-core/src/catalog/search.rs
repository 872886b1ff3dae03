use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::product::{Product, ProductKind};
use crate::error::FingrowError;
use crate::types::Rate;
use crate::FingrowResult;

/// Compact listing row for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub bank_name: String,
    pub product_name: String,
    pub product_type: String,
    pub best_rate: Rate,
    pub best_term: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub keyword: String,
    pub products: Vec<ProductSummary>,
    pub total_count: usize,
}

/// Summarise a product by its best option across every term.
pub fn summarize_product(product: &Product) -> ProductSummary {
    let best = product.best_option();
    ProductSummary {
        id: product.id.clone(),
        bank_name: product.bank_name.clone(),
        product_name: product.product_name.clone(),
        product_type: product.kind.label().to_string(),
        best_rate: best.map(|o| o.best_rate()).unwrap_or(Decimal::ZERO),
        best_term: best.map(|o| o.term_months),
    }
}

/// Case-insensitive substring search over product and bank names.
///
/// Deposits are listed before savings; each `(kind, id)` appears once.
pub fn search_products(
    keyword: &str,
    deposits: &[Product],
    savings: &[Product],
) -> FingrowResult<SearchResponse> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return Err(FingrowError::invalid("keyword", "Search keyword must not be blank"));
    }

    let mut seen: HashSet<(ProductKind, &str)> = HashSet::new();
    let mut products = Vec::new();

    for product in deposits.iter().chain(savings.iter()) {
        let hit = product.product_name.to_lowercase().contains(&needle)
            || product.bank_name.to_lowercase().contains(&needle);
        if hit && seen.insert((product.kind, product.id.as_str())) {
            products.push(summarize_product(product));
        }
    }

    Ok(SearchResponse {
        keyword: keyword.trim().to_string(),
        total_count: products.len(),
        products,
    })
}
