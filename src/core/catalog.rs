use crate::core::filters::{matches_category, matches_search, within_price_range, CategoryFilter, PriceRange};
use crate::core::sorting::{sort_products, SortKey};
use crate::models::{CatalogQuery, Product};

/// Narrow a product list by search text, category and price, then sort.
///
/// The search text is matched as given, whitespace included. All filters
/// compose with AND. Sorting is always the last step, and the
/// `Popular` key keeps the input order.
pub fn filter_and_sort(
    products: &[Product],
    search_query: &str,
    category: &CategoryFilter,
    price: &PriceRange,
    sort_key: SortKey,
) -> Vec<Product> {
    let needle = search_query.to_lowercase();

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|product| matches_search(product, &needle))
        .filter(|product| matches_category(product, category))
        .filter(|product| within_price_range(product, price))
        .cloned()
        .collect();

    tracing::debug!(
        "Catalog filter kept {} of {} products (search={:?}, category={:?}, price={:?})",
        filtered.len(),
        products.len(),
        needle,
        category,
        price
    );

    sort_products(&mut filtered, sort_key);
    filtered
}

/// Run a [`CatalogQuery`] against a product list
pub fn run_query(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let category = CategoryFilter::from(query.category.as_str());
    let price = PriceRange::from_raw(query.price_min.as_deref(), query.price_max.as_deref());
    filter_and_sort(products, &query.search, &category, &price, query.sort)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_product(id: u32, name: &str, category: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            image: String::new(),
            category: category.to_string(),
            rating: 4.5,
            slug: format!("product-{}", id),
        }
    }

    fn products() -> Vec<Product> {
        vec![
            create_product(1, "GROHE Eurosmart Kitchen Faucet", "Faucets", 15999.0),
            create_product(2, "Blanco Stainless Kitchen Sink", "Sinks", 24999.0),
            create_product(3, "Granite Kitchen Sink", "Sinks", 14999.0),
            create_product(4, "Filtered Kitchen Faucet", "Faucets", 45999.0),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_no_filters_is_identity() {
        let all = products();
        let result = filter_and_sort(&all, "", &CategoryFilter::All, &PriceRange::default(), SortKey::Popular);
        assert_eq!(result, all);
    }

    #[test]
    fn test_filters_compose() {
        let all = products();
        let price = PriceRange { min: None, max: Some(20000.0) };
        let result = filter_and_sort(&all, "kitchen", &CategoryFilter::from("Sinks"), &price, SortKey::Popular);
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_sort_applied_after_filter() {
        let all = products();
        let result = filter_and_sort(&all, "FAUCET", &CategoryFilter::All, &PriceRange::default(), SortKey::PriceDesc);
        assert_eq!(ids(&result), vec![4, 1]);
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let all = products();
        let search = |query: &str| ids(&filter_and_sort(&all, query, &CategoryFilter::All, &PriceRange::default(), SortKey::Popular));

        assert_eq!(search("sink"), vec![2, 3]);
        assert!(search("sink ").is_empty());
        assert_eq!(search(" sink"), vec![2, 3]);
    }

    #[test]
    fn test_run_query_ignores_bad_bounds() {
        let query = CatalogQuery {
            price_min: Some("lots".to_string()),
            price_max: Some("20000".to_string()),
            sort: SortKey::PriceAsc,
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&run_query(&products(), &query)), vec![3, 1]);
    }
}
