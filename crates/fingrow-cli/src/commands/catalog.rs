use clap::{Args, ValueEnum};
use serde_json::Value;

use fingrow_core::catalog::finlife::parse_finlife_catalog;
use fingrow_core::catalog::product::{Product, ProductKind};
use fingrow_core::catalog::search::search_products;

use crate::input;

/// On-disk layout of a product catalog file.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CatalogFormat {
    /// Array of products (JSON or YAML)
    #[default]
    Normalized,
    /// Raw disclosure API payload with baseList/optionList
    Finlife,
}

/// Load one product family from disk.
pub fn load_catalog(
    path: &str,
    kind: ProductKind,
    format: CatalogFormat,
) -> Result<Vec<Product>, Box<dyn std::error::Error>> {
    let products = match format {
        CatalogFormat::Normalized => {
            let products: Vec<Product> = input::file::read_structured(path)?;
            if let Some(stray) = products.iter().find(|p| p.kind != kind) {
                return Err(format!(
                    "'{}': product {} is {:?}, expected {:?}",
                    path, stray.id, stray.kind, kind
                )
                .into());
            }
            products
        }
        CatalogFormat::Finlife => parse_finlife_catalog(kind, &input::file::read_text(path)?)?,
    };
    tracing::debug!(path, ?kind, count = products.len(), "loaded catalog");
    Ok(products)
}

/// Arguments for catalog keyword search
#[derive(Args)]
pub struct SearchArgs {
    /// Keyword matched against product and bank names
    #[arg(long)]
    pub keyword: String,

    /// Deposit (lump-sum) catalog file
    #[arg(long)]
    pub deposits: String,

    /// Installment-savings catalog file
    #[arg(long)]
    pub savings: String,

    /// Catalog file format
    #[arg(long, value_enum, default_value_t = CatalogFormat::Normalized)]
    pub catalog_format: CatalogFormat,
}

pub fn run_search(args: SearchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let deposits = load_catalog(&args.deposits, ProductKind::LumpSum, args.catalog_format)?;
    let savings = load_catalog(&args.savings, ProductKind::Installment, args.catalog_format)?;
    let result = search_products(&args.keyword, &deposits, &savings)?;
    Ok(serde_json::to_value(result)?)
}
