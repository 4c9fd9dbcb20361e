use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{trim_optional_string, trim_string, validate_difficulty};
use crate::models::question::{PublicQuestion, Question};
use crate::models::quiz::Quiz;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizPayload {
    #[serde(deserialize_with = "trim_string")]
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: Option<String>,

    #[serde(default)]
    pub has_time_limit: bool,

    #[validate(range(min = 1, max = 600, message = "Time limit must be 1-600 minutes"))]
    pub time_limit: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionPayload {
    #[serde(deserialize_with = "trim_string")]
    #[validate(length(min = 1, message = "Question text cannot be empty"))]
    pub question_text: String,
    #[serde(deserialize_with = "trim_string")]
    #[validate(length(min = 1, message = "Option 1 cannot be empty"))]
    pub option1: String,
    #[serde(deserialize_with = "trim_string")]
    #[validate(length(min = 1, message = "Option 2 cannot be empty"))]
    pub option2: String,
    #[serde(deserialize_with = "trim_string")]
    #[validate(length(min = 1, message = "Option 3 cannot be empty"))]
    pub option3: String,
    #[serde(deserialize_with = "trim_string")]
    #[validate(length(min = 1, message = "Option 4 cannot be empty"))]
    pub option4: String,
    #[validate(range(min = 1, max = 4, message = "Correct option must be between 1 and 4"))]
    pub correct_option: i32,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub explanation: Option<String>,
}

/// Quiz detail for takers: questions without answers.
#[derive(Debug, Serialize)]
pub struct QuizDetailResponse {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<PublicQuestion>,
}

/// Owner view: questions including answers and explanations.
#[derive(Debug, Serialize)]
pub struct QuizQuestionsResponse {
    pub quiz_id: Uuid,
    pub title: String,
    pub questions: Vec<Question>,
}
