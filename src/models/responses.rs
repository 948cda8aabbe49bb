use serde::{Deserialize, Serialize};

use crate::models::domain::Product;
use crate::models::quiz::ProductScore;

/// Response for a catalog query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    pub total_results: usize,
}

/// Response for a consultation scoring pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub recommendations: Vec<ProductScore>,
    pub total_candidates: usize,
    pub matched_candidates: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_response_wire_names() {
        let response = CatalogResponse {
            products: Vec::new(),
            total_results: 0,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalResults"], 0);
        assert!(json.get("total_results").is_none());
    }

    #[test]
    fn test_recommendation_response_wire_names() {
        let response = RecommendationResponse {
            recommendations: Vec::new(),
            total_candidates: 12,
            matched_candidates: 4,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalCandidates"], 12);
        assert_eq!(json["matchedCandidates"], 4);
        assert!(json.get("matched_candidates").is_none());
    }
}
