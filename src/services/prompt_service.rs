use crate::models::draft::Difficulty;

pub const SYSTEM_PROMPT: &str = "You are a quiz generator. Always provide exactly the requested \
number of questions with 4 options each, and respond with a single JSON object only.";

pub struct PromptService;

impl PromptService {
    /// Builds the user prompt for a generation request.
    ///
    /// Generation services tend to under-count, so the exact question count
    /// and the output format are stated at the start and again at the end.
    pub fn build(topic: &str, difficulty: Difficulty, num_questions: usize) -> String {
        let topic = topic.trim();

        let example = serde_json::json!({
            "quiz_title": format!("Quiz about {}", topic),
            "questions": [
                {
                    "question_text": "What is...?",
                    "options": ["Option A", "Option B", "Option C", "Option D"],
                    "correct_answer": 1,
                    "explanation": "Because..."
                }
            ]
        });
        let example = serde_json::to_string_pretty(&example).unwrap_or_default();

        format!(
            r#"Generate a {difficulty} level quiz with EXACTLY {n} questions about {topic}.
Respond with exactly one JSON object and nothing else.

Requirements:
1. Generate EXACTLY {n} questions.
2. Each question must have 4 distinct options.
3. Provide exactly one correct answer as an integer from 1 to 4 (1 = first option).
4. Include a brief explanation for each answer.
5. Format as JSON with:
   - quiz_title: string
   - questions: array of {n} objects with:
     - question_text: string
     - options: array of 4 strings
     - correct_answer: integer (1-4)
     - explanation: string

Example format:
{example}

Make sure there are exactly {n} questions, each with exactly 4 options, in one JSON object."#,
            difficulty = difficulty,
            n = num_questions,
            topic = topic,
            example = example,
        )
    }
}
