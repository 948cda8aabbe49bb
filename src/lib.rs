//! Kitchen Store - catalog browsing and consultation recommendations
//!
//! This library holds the storefront's decision logic: filtering and sorting
//! the product catalog, and scoring products against the answers given in
//! the consultation questionnaire.

pub mod config;
pub mod core;
pub mod data;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_and_sort, score, CategoryFilter, Consultation, PriceRange, Recommender, SortKey, WizardState};
pub use models::{AnswerSet, CatalogQuery, Product, ProductScore, Question};
pub use services::{Cart, Catalog, CatalogError, Favorites};
