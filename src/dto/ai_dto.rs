use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::{trim_string, validate_difficulty};
use crate::error::{Error, Result};
use crate::models::draft::{Difficulty, QuizDraft};
use crate::services::quiz_generator::{DraftSource, GenerationOutcome, GenerationRequest};

fn default_difficulty() -> String {
    Difficulty::Medium.to_string()
}

fn default_num_questions() -> i64 {
    5
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct GenerateQuizPayload {
    #[serde(deserialize_with = "trim_string")]
    #[validate(length(min = 1, max = 200, message = "Topic must be 1-200 characters"))]
    pub topic: String,

    #[serde(default = "default_difficulty")]
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: String,

    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 20, message = "Number of questions must be between 1 and 20"))]
    pub num_questions: i64,
}

impl GenerateQuizPayload {
    /// Validates the payload and turns it into a generation request.
    pub fn into_request(self) -> Result<GenerationRequest> {
        self.validate()?;
        let difficulty = self.difficulty.parse::<Difficulty>().map_err(Error::BadRequest)?;
        let num_questions = usize::try_from(self.num_questions)
            .map_err(|_| Error::BadRequest("Invalid number of questions".to_string()))?;
        Ok(GenerationRequest {
            topic: self.topic,
            difficulty,
            num_questions,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateQuizResponse {
    pub success: bool,
    pub quiz: QuizDraft,
    /// `ai` or `fallback`.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl From<GenerationOutcome> for GenerateQuizResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        let fallback_reason = match &outcome.source {
            DraftSource::Generated => None,
            DraftSource::Fallback { reason } => Some(reason.to_string()),
        };
        Self {
            success: true,
            source: outcome.source.label().to_string(),
            quiz: outcome.draft,
            fallback_reason,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SaveQuizPayload {
    pub quiz: QuizDraft,

    #[serde(deserialize_with = "trim_string")]
    #[validate(length(min = 1, max = 200, message = "Topic must be 1-200 characters"))]
    pub topic: String,

    #[serde(default = "default_difficulty")]
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveQuizResponse {
    pub success: bool,
    pub quiz_id: Uuid,
}
