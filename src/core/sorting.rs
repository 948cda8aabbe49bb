use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

use crate::models::Product;

/// Catalog ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Dataset order, untouched
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

#[derive(Debug, Error)]
#[error("Unknown sort key: {0} (expected popular, priceAsc, priceDesc or nameAsc)")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(SortKey::Popular),
            "priceAsc" | "price-asc" => Ok(SortKey::PriceAsc),
            "priceDesc" | "price-desc" => Ok(SortKey::PriceDesc),
            "nameAsc" | "name-asc" => Ok(SortKey::NameAsc),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// Sort products in place. All orderings are stable.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Popular => {}
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::NameAsc => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
}

/// Collation-style name comparison.
///
/// Letters compare case-insensitively first; the raw strings break ties so
/// the order stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}
