use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::quiz_attempt::{AttemptDetail, GlobalLeaderboardRow, QuizLeaderboardRow};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitAnswer {
    pub question_id: Uuid,
    /// 1-based option number; absent means unanswered.
    pub selected: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAttemptPayload {
    #[validate(length(max = 100, message = "Too many answers"))]
    pub answers: Vec<SubmitAnswer>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GradedQuestion {
    pub question_id: Uuid,
    pub question_text: String,
    pub selected: Option<i32>,
    pub selected_text: Option<String>,
    pub correct_option: i32,
    pub correct_text: Option<String>,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptResultResponse {
    pub quiz_id: Uuid,
    /// Only present when the taker was signed in.
    pub attempt_id: Option<Uuid>,
    pub score: i32,
    pub total: i32,
    pub percentage: f64,
    pub passed: bool,
    pub results: Vec<GradedQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizLeaderboardResponse {
    pub quiz_id: Uuid,
    pub title: String,
    pub entries: Vec<QuizLeaderboardRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GlobalLeaderboardResponse {
    pub entries: Vec<GlobalLeaderboardRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub username: String,
    pub quizzes_created: i64,
    pub attempts_taken: i64,
    pub average_percentage: f64,
    pub best_percentage: f64,
    pub recent_attempts: Vec<AttemptDetail>,
}
