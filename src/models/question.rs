use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::draft::{option_at, QuestionDraft};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub position: i32,
    pub question_text: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    /// 1-based, same convention as `QuestionDraft::correct_answer`.
    pub correct_option: i32,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn options(&self) -> Vec<String> {
        vec![
            self.option1.clone(),
            self.option2.clone(),
            self.option3.clone(),
            self.option4.clone(),
        ]
    }

    pub fn option_text(&self, answer: i32) -> Option<String> {
        option_at(&self.options(), answer).map(str::to_string)
    }

    pub fn to_public(&self) -> PublicQuestion {
        PublicQuestion {
            id: self.id,
            position: self.position,
            question_text: self.question_text.clone(),
            options: self.options(),
        }
    }
}

/// What a quiz taker sees: no correct answer, no explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub id: Uuid,
    pub position: i32,
    pub question_text: String,
    pub options: Vec<String>,
}

/// Column values for one `questions` row, built positionally from a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub position: i32,
    pub question_text: String,
    pub options: [String; 4],
    pub correct_option: i32,
    pub explanation: Option<String>,
}

impl NewQuestion {
    /// Returns `None` unless the draft carries exactly four options.
    pub fn from_draft(position: i32, draft: &QuestionDraft) -> Option<Self> {
        let options: [String; 4] = draft.options.clone().try_into().ok()?;
        Some(Self {
            position,
            question_text: draft.text.trim().to_string(),
            options,
            correct_option: draft.correct_answer,
            explanation: draft
                .explanation
                .as_ref()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_question_copies_options_in_order() {
        let draft = QuestionDraft {
            text: "  Which gas do plants absorb?  ".to_string(),
            options: vec![
                "Oxygen".to_string(),
                "Carbon dioxide".to_string(),
                "Nitrogen".to_string(),
                "Helium".to_string(),
            ],
            correct_answer: 2,
            explanation: Some("   ".to_string()),
        };

        let row = NewQuestion::from_draft(3, &draft).unwrap();
        assert_eq!(row.position, 3);
        assert_eq!(row.question_text, "Which gas do plants absorb?");
        assert_eq!(row.options[1], "Carbon dioxide");
        assert_eq!(row.options[3], "Helium");
        assert_eq!(row.correct_option, 2);
        assert_eq!(row.explanation, None);
    }

    #[test]
    fn new_question_requires_four_options() {
        let draft = QuestionDraft {
            text: "Q".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_answer: 1,
            explanation: None,
        };
        assert!(NewQuestion::from_draft(1, &draft).is_none());
    }
}
