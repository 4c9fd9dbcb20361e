use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizAttempt {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub user_id: Uuid,
    pub score: i32,
    pub total: i32,
    pub completed_at: DateTime<Utc>,
}

pub fn percentage(score: i32, total: i32) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    (score as f64 / total as f64 * 1000.0).round() / 10.0
}

/// An attempt joined with the quiz and user it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttemptDetail {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub quiz_title: String,
    pub difficulty: String,
    pub user_id: Uuid,
    pub username: String,
    pub score: i32,
    pub total: i32,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizLeaderboardRow {
    pub user_id: Uuid,
    pub username: String,
    pub score: i32,
    pub total: i32,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GlobalLeaderboardRow {
    pub user_id: Uuid,
    pub username: String,
    pub total_score: i64,
    pub quizzes_taken: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(5, 5), 100.0);
        assert_eq!(percentage(0, 0), 0.0);
    }
}
