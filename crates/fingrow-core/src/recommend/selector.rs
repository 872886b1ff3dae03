use std::collections::HashMap;

use crate::catalog::product::Product;
use crate::types::Rate;

struct Candidate<'a> {
    product: &'a Product,
    rate: Rate,
}

/// Rank products by their best rate for `term_months`, highest first.
///
/// Only products with an option for exactly that term are eligible. Records
/// sharing an id collapse into one entry, keeping the record with the best
/// rate at the position of the id's first appearance. Equal rates keep
/// catalog order.
pub fn select_top_by_term(products: &[Product], term_months: u32, limit: usize) -> Vec<&Product> {
    if limit == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate<'_>> = Vec::new();
    let mut slot_by_id: HashMap<&str, usize> = HashMap::new();

    for product in products {
        let Some(option) = product.best_option_for_term(term_months) else {
            continue;
        };
        let rate = option.best_rate();
        match slot_by_id.get(product.id.as_str()) {
            Some(&slot) => {
                if rate > candidates[slot].rate {
                    candidates[slot] = Candidate { product, rate };
                }
            }
            None => {
                slot_by_id.insert(product.id.as_str(), candidates.len());
                candidates.push(Candidate { product, rate });
            }
        }
    }

    // sort_by is stable, so ties stay in catalog order.
    candidates.sort_by(|a, b| b.rate.cmp(&a.rate));

    tracing::debug!(
        term_months,
        eligible = candidates.len(),
        limit,
        "selected products for term"
    );

    candidates
        .into_iter()
        .take(limit)
        .map(|c| c.product)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::{ProductKind, RateOption};
    use rust_decimal_macros::dec;

    fn product(id: &str, name: &str, rates: &[(u32, Rate)]) -> Product {
        Product {
            id: id.into(),
            kind: ProductKind::LumpSum,
            bank_name: "Bank".into(),
            product_name: name.into(),
            special_condition: None,
            max_limit: None,
            disclosed_from: None,
            options: rates
                .iter()
                .map(|&(term, rate)| RateOption {
                    term_months: term,
                    base_rate: Some(rate),
                    preferential_rate: None,
                    interest_type: None,
                    contribution_type: None,
                })
                .collect(),
        }
    }

    fn names(selected: &[&Product]) -> Vec<String> {
        selected.iter().map(|p| p.product_name.clone()).collect()
    }

    #[test]
    fn test_ranks_by_rate_for_term() {
        let catalog = vec![
            product("A", "a", &[(12, dec!(3.0)), (24, dec!(9.0))]),
            product("B", "b", &[(12, dec!(3.5))]),
            product("C", "c", &[(6, dec!(5.0))]),
        ];
        let top = select_top_by_term(&catalog, 12, 3);
        assert_eq!(names(&top), vec!["b", "a"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            product("A", "first", &[(12, dec!(3.0))]),
            product("B", "second", &[(12, dec!(3.0))]),
            product("C", "third", &[(12, dec!(3.0))]),
        ];
        let top = select_top_by_term(&catalog, 12, 3);
        assert_eq!(names(&top), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_ids_collapse_to_best_record() {
        let catalog = vec![
            product("A", "a-old", &[(12, dec!(2.0))]),
            product("B", "b", &[(12, dec!(3.0))]),
            product("A", "a-new", &[(12, dec!(4.0))]),
        ];
        let top = select_top_by_term(&catalog, 12, 5);
        assert_eq!(names(&top), vec!["a-new", "b"]);
    }

    #[test]
    fn test_limit_and_empty_cases() {
        let catalog = vec![
            product("A", "a", &[(12, dec!(3.0))]),
            product("B", "b", &[(12, dec!(3.5))]),
        ];
        assert_eq!(select_top_by_term(&catalog, 12, 1).len(), 1);
        assert!(select_top_by_term(&catalog, 12, 0).is_empty());
        assert!(select_top_by_term(&catalog, 36, 3).is_empty());
        assert!(select_top_by_term(&[], 12, 3).is_empty());
    }
}
