//! Axum route handler for industry insights — the second fallback-guarded
//! generation call site. Always answers 200 with a complete payload; the
//! only rejection is a blank industry, refused before any generation.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::ai::fallback::Topic;
use crate::ai::prompts::{INSIGHTS_RULES, INSIGHTS_SCHEMA};
use crate::ai::schema::IndustryInsights;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/insights/:industry
pub async fn handle_get_insights(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(industry): Path<String>,
) -> Result<Json<IndustryInsights>, AppError> {
    let topic = Topic::parse(&industry).map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = state
        .ai
        .generate_with_fallback::<IndustryInsights>(
            &topic,
            &INSIGHTS_SCHEMA,
            INSIGHTS_RULES,
            &state.fallbacks.insights,
        )
        .await;

    info!(topic = %topic, source = ?outcome.source, "serving industry insights");

    Ok(Json(outcome.payload))
}
