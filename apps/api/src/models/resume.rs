use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored resume. The section payloads are schemaless JSON — their shape
/// belongs to the frontend resume builder, not this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub personal_info: Value,
    pub experience: Value,
    pub education: Value,
    pub skills: Value,
    pub created_at: DateTime<Utc>,
}
