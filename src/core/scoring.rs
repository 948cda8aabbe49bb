use crate::models::{
    AnswerSet, BudgetBand, MatchReason, OptionWeight, PriorityTag, Product, Question,
    ScoringThresholds, ScoringWeights, StyleTag, UsageLevel,
};

/// Shopper intent resolved from the selected answer options
///
/// Style and the design/functionality priorities are carried along but do
/// not feed any scoring rule yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopperPreferences {
    pub budget: Option<BudgetBand>,
    pub category: Option<String>,
    pub style: Option<StyleTag>,
    pub priorities: Vec<PriorityTag>,
    pub usage: Option<UsageLevel>,
}

impl ShopperPreferences {
    /// Resolve selected option ids to typed weights.
    ///
    /// Unknown question or option ids are skipped. For single-valued
    /// dimensions the first selection wins.
    pub fn resolve(questions: &[Question], answers: &AnswerSet) -> Self {
        let mut prefs = Self::default();

        for (question_id, option_ids) in answers.iter() {
            let Some(question) = questions.iter().find(|q| q.id == question_id) else {
                tracing::debug!("Ignoring answers for unknown question: {}", question_id);
                continue;
            };

            for option_id in option_ids {
                let Some(option) = question.option(option_id) else {
                    tracing::debug!("Ignoring unknown option {} for question {}", option_id, question_id);
                    continue;
                };

                match &option.weight {
                    OptionWeight::Budget(band) => {
                        prefs.budget.get_or_insert(*band);
                    }
                    OptionWeight::Category(name) => {
                        prefs.category.get_or_insert_with(|| name.clone());
                    }
                    OptionWeight::Style(style) => {
                        prefs.style.get_or_insert(*style);
                    }
                    OptionWeight::Priority(tag) => {
                        if !prefs.priorities.contains(tag) {
                            prefs.priorities.push(*tag);
                        }
                    }
                    OptionWeight::Usage(level) => {
                        prefs.usage.get_or_insert(*level);
                    }
                }
            }
        }

        prefs
    }

    pub fn has_priority(&self, tag: PriorityTag) -> bool {
        self.priorities.contains(&tag)
    }
}

/// Budget band a price falls into
#[inline]
pub fn budget_band_for(price: f64, thresholds: &ScoringThresholds) -> BudgetBand {
    if price <= thresholds.low_budget_max {
        BudgetBand::Low
    } else if price <= thresholds.medium_budget_max {
        BudgetBand::Medium
    } else {
        BudgetBand::High
    }
}

/// Calculate a product's recommendation score
///
/// Scoring rules (points from `weights`):
/// - budget band matches the shopper's band: +budget
/// - category equals the chosen category: +category
/// - "quality" priority and rating at or above the quality cut-off: +quality
/// - "price" priority and price at or below the affordable cut-off: +affordable
/// - professional usage and price above the professional cut-off, or
///   light usage and price at or below the light cut-off: +usage
///
/// Returns the score and the match reasons in rule order.
pub fn calculate_product_score(
    product: &Product,
    prefs: &ShopperPreferences,
    weights: &ScoringWeights,
    thresholds: &ScoringThresholds,
) -> (u32, Vec<MatchReason>) {
    let mut score = 0;
    let mut reasons = Vec::new();

    if let Some(band) = prefs.budget {
        if budget_band_for(product.price, thresholds) == band {
            score += weights.budget;
            reasons.push(match band {
                BudgetBand::High => MatchReason::PremiumQuality,
                BudgetBand::Low | BudgetBand::Medium => MatchReason::FitsBudget,
            });
        }
    }

    if let Some(category) = &prefs.category {
        if product.category == *category {
            score += weights.category;
            reasons.push(MatchReason::MatchesCategory);
        }
    }

    if prefs.has_priority(PriorityTag::Quality) && product.rating >= thresholds.quality_min_rating {
        score += weights.quality;
        reasons.push(MatchReason::HighlyRated);
    }

    if prefs.has_priority(PriorityTag::Price) && product.price <= thresholds.affordable_max_price {
        score += weights.affordable;
        reasons.push(MatchReason::AffordablePrice);
    }

    match prefs.usage {
        Some(UsageLevel::Professional) if product.price > thresholds.professional_min_price => {
            score += weights.professional_usage;
            reasons.push(MatchReason::ProfessionalGrade);
        }
        Some(UsageLevel::Light) if product.price <= thresholds.light_usage_max_price => {
            score += weights.light_usage;
            reasons.push(MatchReason::SuitsLightUse);
        }
        _ => {}
    }

    (score, reasons)
}
