use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Largest number of questions a single quiz request may ask for.
pub const MAX_QUESTIONS: usize = 20;
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Answers are 1-based on the wire and in storage.
pub const MIN_ANSWER: i32 = 1;
pub const MAX_ANSWER: i32 = OPTIONS_PER_QUESTION as i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// An in-memory quiz produced by generation or fallback, not yet persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizDraft {
    #[serde(rename = "quiz_title")]
    pub title: String,
    pub questions: Vec<QuestionDraft>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDraft {
    #[serde(rename = "question_text")]
    pub text: String,
    pub options: Vec<String>,
    /// 1-based index into `options`.
    pub correct_answer: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuestionDraft {
    pub fn correct_option_text(&self) -> Option<&str> {
        option_at(&self.options, self.correct_answer)
    }
}

/// Looks up a 1-based answer in a 0-based option list.
pub fn option_at(options: &[String], answer: i32) -> Option<&str> {
    let idx = usize::try_from(answer.checked_sub(1)?).ok()?;
    options.get(idx).map(String::as_str)
}

/// Why a draft was refused. Checks run in declaration order and stop at
/// the first failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftRejection {
    #[error("expected {expected} questions, got {actual}")]
    WrongQuestionCount { expected: usize, actual: usize },

    #[error("question {question} has {actual} options instead of 4")]
    WrongOptionCount { question: usize, actual: usize },

    #[error("question {question} has invalid correct answer {value}")]
    AnswerOutOfRange { question: usize, value: i32 },
}

impl QuizDraft {
    /// Structural check only; the draft is never modified.
    pub fn validate(&self, expected: usize) -> Result<(), DraftRejection> {
        if self.questions.len() != expected {
            return Err(DraftRejection::WrongQuestionCount {
                expected,
                actual: self.questions.len(),
            });
        }

        for (idx, question) in self.questions.iter().enumerate() {
            if question.options.len() != OPTIONS_PER_QUESTION {
                return Err(DraftRejection::WrongOptionCount {
                    question: idx + 1,
                    actual: question.options.len(),
                });
            }
        }

        for (idx, question) in self.questions.iter().enumerate() {
            if !(MIN_ANSWER..=MAX_ANSWER).contains(&question.correct_answer) {
                return Err(DraftRejection::AnswerOutOfRange {
                    question: idx + 1,
                    value: question.correct_answer,
                });
            }
        }

        Ok(())
    }
}

/// "photosynthesis" -> "Photosynthesis", word by word.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn default_title(topic: &str, difficulty: Difficulty) -> String {
    format!("{} - {}", title_case(topic), title_case(difficulty.as_str()))
}
