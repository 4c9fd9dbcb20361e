use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub has_time_limit: bool,
    pub time_limit_minutes: Option<i32>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Listing row: a quiz with its author and question count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizSummary {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub has_time_limit: bool,
    pub time_limit_minutes: Option<i32>,
    pub author: String,
    pub question_count: i64,
    pub created_at: DateTime<Utc>,
}
