use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::attempt_dto::{GradedQuestion, SubmitAnswer};
use crate::models::question::Question;
use crate::models::quiz_attempt::percentage;

/// Minimum percentage that counts as a pass.
pub const PASS_PERCENTAGE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub score: i32,
    pub total: i32,
    pub percentage: f64,
    pub passed: bool,
    pub results: Vec<GradedQuestion>,
}

pub struct GradingService;

impl GradingService {
    /// Scores a submission against the stored questions.
    ///
    /// Every question counts toward the total whether or not it was
    /// answered. Answers for unknown question ids are ignored, and when a
    /// question is answered more than once the last answer wins.
    pub fn grade(questions: &[Question], answers: &[SubmitAnswer]) -> GradeReport {
        let selected: HashMap<Uuid, Option<i32>> = answers
            .iter()
            .map(|a| (a.question_id, a.selected))
            .collect();

        let mut score = 0;
        let mut results = Vec::with_capacity(questions.len());

        for q in questions {
            let choice = selected.get(&q.id).copied().flatten();
            let is_correct = choice == Some(q.correct_option);
            if is_correct {
                score += 1;
            }

            results.push(GradedQuestion {
                question_id: q.id,
                question_text: q.question_text.clone(),
                selected: choice,
                selected_text: choice.and_then(|c| q.option_text(c)),
                correct_option: q.correct_option,
                correct_text: q.option_text(q.correct_option),
                is_correct,
                explanation: q.explanation.clone(),
            });
        }

        let total = questions.len() as i32;
        let percentage = percentage(score, total);
        GradeReport {
            score,
            total,
            percentage,
            passed: total > 0 && percentage >= PASS_PERCENTAGE,
            results,
        }
    }
}
