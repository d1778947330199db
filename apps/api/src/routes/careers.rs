//! Axum route handler for career recommendations.
//!
//! Curated matches only — this endpoint predates the generation provider
//! and stays static by design.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    // Accepted for forward compatibility; recommendations are not yet
    // personalized on these.
    #[allow(dead_code)]
    #[serde(default)]
    pub skills: Vec<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub interests: Vec<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub experience: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerRecommendation {
    pub title: String,
    #[serde(rename = "match")]
    pub match_score: u8,
    pub description: String,
    pub skills: Vec<String>,
    pub salary: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<CareerRecommendation>,
}

fn curated_recommendations() -> Vec<CareerRecommendation> {
    vec![
        CareerRecommendation {
            title: "Full Stack Developer".to_string(),
            match_score: 95,
            description: "Build end-to-end web applications".to_string(),
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            salary: "$70k - $120k".to_string(),
        },
        CareerRecommendation {
            title: "Data Scientist".to_string(),
            match_score: 88,
            description: "Analyze data to drive business decisions".to_string(),
            skills: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "SQL".to_string(),
            ],
            salary: "$80k - $140k".to_string(),
        },
    ]
}

/// POST /api/careers/recommend
pub async fn handle_recommend(
    State(_state): State<AppState>,
    _auth: AuthUser,
    Json(_request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    Ok(Json(RecommendResponse {
        recommendations: curated_recommendations(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_are_sorted_by_match() {
        let recs = curated_recommendations();
        assert!(!recs.is_empty());
        assert!(recs.windows(2).all(|w| w[0].match_score >= w[1].match_score));
    }

    #[test]
    fn test_recommendation_wire_format_uses_match_key() {
        let value = serde_json::to_value(&curated_recommendations()[0]).unwrap();
        assert!(value.get("match").is_some());
        assert!(value.get("match_score").is_none());
    }
}
