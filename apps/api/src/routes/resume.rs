//! Axum route handlers for resume storage.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumeRequest {
    #[serde(default)]
    pub personal_info: Value,
    #[serde(default)]
    pub experience: Value,
    #[serde(default)]
    pub education: Value,
    #[serde(default)]
    pub skills: Value,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct ResumesResponse {
    pub resumes: Vec<Resume>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/resume
pub async fn handle_create_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeResponse>), AppError> {
    let resume: Resume = sqlx::query_as(
        r#"
        INSERT INTO resumes (id, user_id, personal_info, experience, education, skills)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth.user_id)
    .bind(&request.personal_info)
    .bind(&request.experience)
    .bind(&request.education)
    .bind(&request.skills)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(ResumeResponse { resume })))
}

/// GET /api/resume
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ResumesResponse>, AppError> {
    let resumes: Vec<Resume> =
        sqlx::query_as("SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(auth.user_id)
            .fetch_all(&state.db)
            .await?;

    Ok(Json(ResumesResponse { resumes }))
}

/// DELETE /api/resume/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted: Option<(Uuid,)> =
        sqlx::query_as("DELETE FROM resumes WHERE id = $1 AND user_id = $2 RETURNING id")
            .bind(id)
            .bind(auth.user_id)
            .fetch_optional(&state.db)
            .await?;

    if deleted.is_none() {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Resume deleted successfully".to_string(),
    }))
}
