use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::domain::Product;

/// How many options a question accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerCardinality {
    Single,
    Multiple,
}

/// Price band a shopper is willing to spend in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBand {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Modern,
    Classic,
    Loft,
    Scandinavian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTag {
    Quality,
    Price,
    Design,
    Functionality,
}

/// How intensively the kitchen is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Light,
    Medium,
    Heavy,
    Professional,
}

/// Scoring dimension an answer option contributes toward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dimension", content = "value", rename_all = "lowercase")]
pub enum OptionWeight {
    Budget(BudgetBand),
    /// Exact category name the product must carry
    Category(String),
    Style(StyleTag),
    Priority(PriorityTag),
    Usage(UsageLevel),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub weight: OptionWeight,
}

/// Consultation question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub cardinality: AnswerCardinality,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn is_multiple(&self) -> bool {
        self.cardinality == AnswerCardinality::Multiple
    }
}

/// Selected option ids keyed by question id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    selections: BTreeMap<String, Vec<String>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection for `question`.
    ///
    /// Single-choice questions replace the previous choice; multiple-choice
    /// questions toggle the option in or out of the selection.
    pub fn select(&mut self, question: &Question, option_id: &str) {
        if question.is_multiple() {
            let selected = self.selections.entry(question.id.clone()).or_default();
            if let Some(pos) = selected.iter().position(|id| id == option_id) {
                selected.remove(pos);
            } else {
                selected.push(option_id.to_string());
            }
        } else {
            self.selections
                .insert(question.id.clone(), vec![option_id.to_string()]);
        }
    }

    /// Replace the whole selection for a question id
    pub fn set(&mut self, question_id: impl Into<String>, option_ids: Vec<String>) {
        self.selections.insert(question_id.into(), option_ids);
    }

    pub fn selected(&self, question_id: &str) -> &[String] {
        self.selections
            .get(question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        !self.selected(question_id).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.values().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.selections
            .iter()
            .map(|(question, options)| (question.as_str(), options.as_slice()))
    }
}

impl From<BTreeMap<String, Vec<String>>> for AnswerSet {
    fn from(selections: BTreeMap<String, Vec<String>>) -> Self {
        Self { selections }
    }
}

/// Why a product's score went up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    FitsBudget,
    PremiumQuality,
    MatchesCategory,
    HighlyRated,
    AffordablePrice,
    ProfessionalGrade,
    SuitsLightUse,
}

impl MatchReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchReason::FitsBudget => "Fits your budget",
            MatchReason::PremiumQuality => "Premium quality",
            MatchReason::MatchesCategory => "Matches the selected category",
            MatchReason::HighlyRated => "Highly rated for quality",
            MatchReason::AffordablePrice => "Affordable price",
            MatchReason::ProfessionalGrade => "Professional grade",
            MatchReason::SuitsLightUse => "Well suited for occasional cooking",
        }
    }
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored recommendation, recomputed on every scoring pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductScore {
    pub product: Product,
    pub score: u32,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}
