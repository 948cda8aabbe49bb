use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::core::sorting::SortKey;
use crate::models::domain::ALL_CATEGORIES;
use crate::models::quiz::AnswerSet;

/// Catalog browsing request
///
/// Price bounds stay as raw text; anything that does not parse as a number
/// imposes no constraint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CatalogQuery {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub search: String,
    #[validate(length(min = 1))]
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, rename = "priceMin")]
    pub price_min: Option<String>,
    #[serde(default, rename = "priceMax")]
    pub price_max: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: default_category(),
            price_min: None,
            price_max: None,
            sort: SortKey::default(),
        }
    }
}

/// Consultation answers submitted for scoring
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(max = 32))]
    #[serde(default)]
    pub answers: BTreeMap<String, Vec<String>>,
}

impl RecommendRequest {
    pub fn answer_set(&self) -> AnswerSet {
        AnswerSet::from(self.answers.clone())
    }
}
