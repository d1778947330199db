//! Axum route handlers for user profiles.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub experience: i32,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: User,
}

async fn fetch_user(state: &AppState, id: Uuid) -> Result<User, AppError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// GET /api/profile
pub async fn handle_get_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = fetch_user(&state, auth.user_id).await?;
    Ok(Json(ProfileResponse { user }))
}

/// GET /api/profile/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = fetch_user(&state, id).await?;
    Ok(Json(ProfileResponse { user }))
}

/// PUT /api/profile/update
pub async fn handle_update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, AppError> {
    let user: Option<User> = sqlx::query_as(
        r#"
        UPDATE users
        SET industry = $1, experience = $2, skills = $3, bio = $4, updated_at = now()
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(request.industry.trim())
    .bind(request.experience.max(0))
    .bind(request.skills.trim())
    .bind(request.bio.trim())
    .bind(auth.user_id)
    .fetch_optional(&state.db)
    .await?;

    let user = user.ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_string(),
        user,
    }))
}
