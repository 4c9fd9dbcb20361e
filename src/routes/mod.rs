pub mod ai_quiz;
pub mod attempt;
pub mod auth;
pub mod docs;
pub mod health;
pub mod quiz;
