// Model exports
pub mod domain;
pub mod quiz;
pub mod requests;
pub mod responses;

pub use domain::{Product, Category, CartItem, ScoringWeights, ScoringThresholds, ALL_CATEGORIES};
pub use quiz::{
    AnswerCardinality, AnswerOption, AnswerSet, BudgetBand, MatchReason, OptionWeight,
    PriorityTag, ProductScore, Question, StyleTag, UsageLevel,
};
pub use requests::{CatalogQuery, RecommendRequest};
pub use responses::{CatalogResponse, RecommendationResponse};
