use crate::core::scoring::{calculate_product_score, ShopperPreferences};
use crate::models::{AnswerSet, Product, ProductScore, Question, ScoringThresholds, ScoringWeights};

/// Default number of recommendations returned
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Result of a scoring pass
#[derive(Debug)]
pub struct RecommendationResult {
    pub recommendations: Vec<ProductScore>,
    pub total_candidates: usize,
    /// Products that scored above zero before truncation
    pub matched_candidates: usize,
}

/// Consultation recommendation engine
///
/// # Pipeline
/// 1. Resolve selected options to shopper preferences
/// 2. Score every product
/// 3. Drop zero scores
/// 4. Stable sort by score, descending
/// 5. Keep the top `limit`
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    thresholds: ScoringThresholds,
    limit: usize,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, thresholds: ScoringThresholds, limit: usize) -> Self {
        Self {
            weights,
            thresholds,
            limit,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            ScoringWeights::default(),
            ScoringThresholds::default(),
            DEFAULT_RECOMMENDATION_LIMIT,
        )
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Score products against the shopper's answers.
    ///
    /// Missing answers switch the matching rule off; they are never an error.
    /// Ties keep dataset order.
    pub fn recommend(
        &self,
        products: &[Product],
        questions: &[Question],
        answers: &AnswerSet,
    ) -> RecommendationResult {
        let prefs = ShopperPreferences::resolve(questions, answers);

        let mut scored: Vec<ProductScore> = products
            .iter()
            .filter_map(|product| {
                let (score, reasons) =
                    calculate_product_score(product, &prefs, &self.weights, &self.thresholds);

                if score > 0 {
                    Some(ProductScore {
                        product: product.clone(),
                        score,
                        match_reasons: reasons.iter().map(|r| r.to_string()).collect(),
                    })
                } else {
                    None
                }
            })
            .collect();

        let matched_candidates = scored.len();

        // sort_by is stable, so equal scores keep their input order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.limit);

        tracing::debug!(
            "Scored {} products, {} matched, returning {}",
            products.len(),
            matched_candidates,
            scored.len()
        );

        RecommendationResult {
            recommendations: scored,
            total_candidates: products.len(),
            matched_candidates,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Score with the default table and return the top three
pub fn score(products: &[Product], questions: &[Question], answers: &AnswerSet) -> Vec<ProductScore> {
    Recommender::with_defaults()
        .recommend(products, questions, answers)
        .recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_products, default_questions};

    fn create_product(id: u32, price: f64, category: &str, rating: f64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price,
            image: String::new(),
            category: category.to_string(),
            rating,
            slug: format!("product-{}", id),
        }
    }

    fn answers(pairs: &[(&str, &[&str])]) -> AnswerSet {
        let mut set = AnswerSet::new();
        for (question, options) in pairs {
            set.set(*question, options.iter().map(|o| o.to_string()).collect());
        }
        set
    }

    #[test]
    fn test_no_answers_no_results() {
        let result = Recommender::with_defaults().recommend(&default_products(), &default_questions(), &AnswerSet::new());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.total_candidates, 12);
        assert_eq!(result.matched_candidates, 0);
    }

    #[test]
    fn test_zero_scores_excluded() {
        let products = vec![
            create_product(1, 15999.0, "Faucets", 4.8),
            create_product(2, 35999.0, "Kitchen Sets", 4.9),
        ];
        let result = score(
            &products,
            &default_questions(),
            &answers(&[("budget", &["medium"]), ("category", &["kitchen-sets"])]),
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].product.id, 2);
        assert_eq!(result[0].score, 70);
    }

    #[test]
    fn test_truncates_to_limit() {
        let products: Vec<Product> = (1..=6)
            .map(|i| create_product(i, 10000.0 + i as f64, "Sinks", 4.6))
            .collect();
        let result = score(&products, &default_questions(), &answers(&[("budget", &["low"])]));

        assert_eq!(result.len(), 3);
        assert_eq!(
            result.iter().map(|s| s.product.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let products = vec![
            create_product(1, 9000.0, "Faucets", 4.0),
            create_product(2, 9000.0, "Sinks", 4.0),
            create_product(3, 9500.0, "Faucets", 4.0),
        ];
        let result = score(
            &products,
            &default_questions(),
            &answers(&[("budget", &["low"]), ("category", &["sinks"])]),
        );

        assert_eq!(
            result.iter().map(|s| (s.product.id, s.score)).collect::<Vec<_>>(),
            vec![(2, 70), (1, 30), (3, 30)]
        );
    }

    #[test]
    fn test_custom_limit() {
        let recommender = Recommender::new(ScoringWeights::default(), ScoringThresholds::default(), 5);
        let result = recommender.recommend(
            &default_products(),
            &default_questions(),
            &answers(&[("budget", &["low"])]),
        );
        assert_eq!(result.recommendations.len(), 5);
        assert!(result.matched_candidates >= 5);
    }
}
