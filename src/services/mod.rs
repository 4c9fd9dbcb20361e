pub mod ai_service;
pub mod attempt_service;
pub mod export_service;
pub mod fallback_service;
pub mod grading_service;
pub mod parse_service;
pub mod prompt_service;
pub mod quiz_generator;
pub mod quiz_service;
pub mod user_service;
