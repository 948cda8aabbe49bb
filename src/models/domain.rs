use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Sentinel category name that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Catalog product
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    pub id: u32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    pub price: f64,
    pub image: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 0.0, max = 5.0), custom(function = "validate_finite"))]
    pub rating: f64,
    #[validate(length(min = 1))]
    pub slug: String,
}

/// Range checks compare false against NaN, so they let it through
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

/// Product category with its URL slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Category {
    pub id: u32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub slug: String,
}

/// Line in the shopping cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "productId")]
    pub product_id: u32,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "productPrice")]
    pub product_price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            product_price: product.price,
            quantity: 1,
        }
    }

    /// Price of the line (unit price times quantity)
    pub fn line_total(&self) -> f64 {
        self.product_price * self.quantity as f64
    }
}

/// Points awarded per matched rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub budget: u32,
    pub category: u32,
    pub quality: u32,
    pub affordable: u32,
    pub professional_usage: u32,
    pub light_usage: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            budget: 30,
            category: 40,
            quality: 20,
            affordable: 15,
            professional_usage: 25,
            light_usage: 15,
        }
    }
}

/// Price and rating cut-offs used by the scoring rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringThresholds {
    /// Upper bound (inclusive) of the low budget band
    pub low_budget_max: f64,
    /// Upper bound (inclusive) of the medium budget band
    pub medium_budget_max: f64,
    pub quality_min_rating: f64,
    pub affordable_max_price: f64,
    /// Professional usage needs a price strictly above this
    pub professional_min_price: f64,
    pub light_usage_max_price: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            low_budget_max: 20000.0,
            medium_budget_max: 50000.0,
            quality_min_rating: 4.5,
            affordable_max_price: 25000.0,
            professional_min_price: 40000.0,
            light_usage_max_price: 30000.0,
        }
    }
}
