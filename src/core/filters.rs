use crate::models::{Product, ALL_CATEGORIES};

/// Category selection, with "All" meaning no constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl From<&str> for CategoryFilter {
    fn from(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(name.to_string())
        }
    }
}

/// Inclusive price bounds; a missing bound imposes no constraint
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Build bounds from raw user input, dropping anything non-numeric
    pub fn from_raw(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min: parse_price_bound(min),
            max: parse_price_bound(max),
        }
    }
}

/// Parse a user-entered price bound.
///
/// Empty, non-numeric and non-finite input yields `None`.
pub fn parse_price_bound(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Case-insensitive substring match against name or category.
///
/// `needle` must already be lowercased; an empty needle matches everything.
#[inline]
pub fn matches_search(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

#[inline]
pub fn matches_category(product: &Product, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Named(name) => product.category == *name,
    }
}

#[inline]
pub fn within_price_range(product: &Product, range: &PriceRange) -> bool {
    if let Some(min) = range.min {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = range.max {
        if product.price > max {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_product(name: &str, category: &str, price: f64) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            price,
            image: String::new(),
            category: category.to_string(),
            rating: 4.5,
            slug: "test-product".to_string(),
        }
    }

    #[test]
    fn test_parse_price_bound() {
        assert_eq!(parse_price_bound(Some("15000")), Some(15000.0));
        assert_eq!(parse_price_bound(Some(" 99.5 ")), Some(99.5));
        assert_eq!(parse_price_bound(Some("")), None);
        assert_eq!(parse_price_bound(Some("cheap")), None);
        assert_eq!(parse_price_bound(Some("NaN")), None);
        assert_eq!(parse_price_bound(Some("inf")), None);
        assert_eq!(parse_price_bound(None), None);
    }

    #[test]
    fn test_search_matches_name_or_category() {
        let product = create_test_product("Blanco Stainless Kitchen Sink", "Sinks", 24999.0);

        assert!(matches_search(&product, "blanco"));
        assert!(matches_search(&product, "sinks"));
        assert!(matches_search(&product, ""));
        assert!(!matches_search(&product, "faucet"));
    }

    #[test]
    fn test_category_filter() {
        let product = create_test_product("Granite Kitchen Sink", "Sinks", 14999.0);

        assert!(matches_category(&product, &CategoryFilter::from("All")));
        assert!(matches_category(&product, &CategoryFilter::from("Sinks")));
        assert!(!matches_category(&product, &CategoryFilter::from("sinks")));
        assert!(!matches_category(&product, &CategoryFilter::from("Faucets")));
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let product = create_test_product("Granite Kitchen Sink", "Sinks", 14999.0);

        let exact = PriceRange { min: Some(14999.0), max: Some(14999.0) };
        assert!(within_price_range(&product, &exact));

        let above = PriceRange { min: Some(15000.0), max: None };
        assert!(!within_price_range(&product, &above));

        let below = PriceRange { min: None, max: Some(14998.0) };
        assert!(!within_price_range(&product, &below));

        assert!(within_price_range(&product, &PriceRange::default()));
    }

    #[test]
    fn test_invalid_bound_is_no_constraint() {
        let range = PriceRange::from_raw(Some("abc"), Some("20000"));
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(20000.0));
    }
}
