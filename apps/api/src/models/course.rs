use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog course. `instructor_id` is NULL for provider-generated rows,
/// which carry "Rex AI" as the display name instead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub price: f64,
    pub instructor_id: Option<Uuid>,
    pub instructor_name: String,
    pub rating: f64,
    pub total_ratings: i32,
    pub is_published: bool,
    pub generated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
