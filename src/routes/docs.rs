use axum::response::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::dto::ai_dto::{GenerateQuizPayload, GenerateQuizResponse, SaveQuizPayload, SaveQuizResponse};
use crate::models::draft::{Difficulty, QuestionDraft, QuizDraft};

#[derive(OpenApi)]
#[openapi(
    paths(super::ai_quiz::generate_quiz, super::ai_quiz::save_quiz),
    components(schemas(
        GenerateQuizPayload,
        GenerateQuizResponse,
        SaveQuizPayload,
        SaveQuizResponse,
        QuizDraft,
        QuestionDraft,
        Difficulty
    )),
    modifiers(&BearerAuth),
    tags((name = "ai", description = "AI quiz generation"))
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
