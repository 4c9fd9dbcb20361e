use crate::models::draft::{default_title, Difficulty, QuestionDraft, QuizDraft, MAX_ANSWER};

const ALL_OF_THE_ABOVE: &str = "All of the above";

struct Template {
    question: &'static str,
    options: [&'static str; 3],
}

const TEMPLATES: &[Template] = &[
    Template {
        question: "Which of the following describes {topic}?",
        options: [
            "A subject with its own core concepts",
            "A field with specialised terminology",
            "An area with practical applications",
        ],
    },
    Template {
        question: "Why is it worth studying {topic}?",
        options: [
            "It builds foundational knowledge",
            "It connects to related subjects",
            "It helps solve real-world problems",
        ],
    },
    Template {
        question: "Which is a good way to learn more about {topic}?",
        options: [
            "Reading introductory material on {topic}",
            "Working through practice questions",
            "Discussing {topic} with others",
        ],
    },
    Template {
        question: "What does a solid understanding of {topic} involve?",
        options: [
            "Knowing its key definitions",
            "Recognising common examples",
            "Explaining how its ideas fit together",
        ],
    },
    Template {
        question: "Which of these statements about {topic} is accurate?",
        options: [
            "{topic} can be studied at different levels of depth",
            "{topic} has a history of development",
            "{topic} is discussed by experts and learners alike",
        ],
    },
];

pub struct FallbackService;

impl FallbackService {
    /// Builds a structurally valid quiz without any network access.
    ///
    /// Templates are cycled by index so any count can be served, and the
    /// fourth option ("All of the above") is always the correct one.
    pub fn generate(topic: &str, difficulty: Difficulty, num_questions: usize) -> QuizDraft {
        let topic = topic.trim();

        let questions = (0..num_questions)
            .map(|idx| {
                let template = &TEMPLATES[idx % TEMPLATES.len()];
                let round = idx / TEMPLATES.len();

                let mut text = format!("{}. {}", idx + 1, fill(template.question, topic));
                if round > 0 {
                    text.push_str(&format!(" (review {})", round + 1));
                }

                let mut options: Vec<String> =
                    template.options.iter().map(|o| fill(o, topic)).collect();
                options.push(ALL_OF_THE_ABOVE.to_string());

                QuestionDraft {
                    text,
                    options,
                    correct_answer: MAX_ANSWER,
                    explanation: Some(format!(
                        "Each listed statement applies to {}, so \"{}\" is correct.",
                        topic, ALL_OF_THE_ABOVE
                    )),
                }
            })
            .collect();

        QuizDraft {
            title: default_title(topic, difficulty),
            questions,
        }
    }
}

fn fill(template: &str, topic: &str) -> String {
    template.replace("{topic}", topic)
}
