use serde::Deserialize;

use crate::models::draft::{default_title, Difficulty, QuestionDraft, QuizDraft};
use crate::services::ai_service::GenerationFailure;

#[derive(Debug, Deserialize)]
struct RawQuiz {
    #[serde(default)]
    quiz_title: Option<String>,
    questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    question_text: String,
    options: Vec<String>,
    correct_answer: i32,
    #[serde(default)]
    explanation: Option<String>,
}

pub struct ParseService;

impl ParseService {
    /// Pulls the quiz object out of raw generated text.
    ///
    /// The reply may wrap the object in prose or code fences, so decoding
    /// starts at the first `{` and ends at the last `}`. The result is
    /// decoded but not validated.
    pub fn parse(
        raw: &str,
        topic: &str,
        difficulty: Difficulty,
    ) -> Result<QuizDraft, GenerationFailure> {
        let json = extract_object(raw)
            .ok_or_else(|| GenerationFailure::Parse("no JSON object in response".to_string()))?;

        let parsed: RawQuiz = serde_json::from_str(json)
            .map_err(|e| GenerationFailure::Parse(e.to_string()))?;

        let title = parsed
            .quiz_title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| default_title(topic, difficulty));

        let questions = parsed
            .questions
            .into_iter()
            .map(|q| QuestionDraft {
                text: q.question_text,
                options: q.options,
                correct_answer: q.correct_answer,
                explanation: q.explanation,
            })
            .collect();

        Ok(QuizDraft { title, questions })
    }
}

fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
