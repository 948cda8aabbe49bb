// Core algorithm exports
pub mod catalog;
pub mod filters;
pub mod recommender;
pub mod scoring;
pub mod sorting;
pub mod wizard;

pub use catalog::{filter_and_sort, run_query};
pub use filters::{matches_category, matches_search, parse_price_bound, within_price_range, CategoryFilter, PriceRange};
pub use recommender::{score, RecommendationResult, Recommender, DEFAULT_RECOMMENDATION_LIMIT};
pub use scoring::{budget_band_for, calculate_product_score, ShopperPreferences};
pub use sorting::{compare_names, sort_products, ParseSortKeyError, SortKey};
pub use wizard::{Consultation, WizardError, WizardState};
