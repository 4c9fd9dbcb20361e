use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::ai_dto::{GenerateQuizPayload, GenerateQuizResponse, SaveQuizPayload, SaveQuizResponse},
    error::{Error, PersistenceError, Result},
    middleware::auth::Claims,
    models::draft::Difficulty,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/ai/quizzes/generate",
    request_body = GenerateQuizPayload,
    responses(
        (status = 200, description = "Draft quiz, generated or fallback", body = GenerateQuizResponse),
        (status = 400, description = "Invalid topic, difficulty or question count"),
        (status = 429, description = "Too many generation requests")
    )
)]
pub async fn generate_quiz(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateQuizPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let request = payload.into_request()?;
    let outcome = state.quiz_generator.generate(&request).await;
    Ok(Json(GenerateQuizResponse::from(outcome)))
}

#[utoipa::path(
    post,
    path = "/api/ai/quizzes/save",
    request_body = SaveQuizPayload,
    responses(
        (status = 201, description = "Quiz and questions stored", body = SaveQuizResponse),
        (status = 400, description = "Draft failed validation"),
        (status = 401, description = "Not signed in")
    ),
    security(("bearer" = []))
)]
pub async fn save_quiz(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
    payload: std::result::Result<Json<SaveQuizPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let owner = match claims {
        Some(Extension(claims)) => claims.user_id()?,
        None => return Err(PersistenceError::AuthenticationRequired.into()),
    };

    let Json(payload) = payload?;
    payload.validate()?;
    let difficulty = payload
        .difficulty
        .parse::<Difficulty>()
        .map_err(Error::BadRequest)?;

    let quiz = state
        .quiz_service
        .save_draft(Some(owner), &payload.quiz, &payload.topic, difficulty)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SaveQuizResponse {
            success: true,
            quiz_id: quiz.id,
        }),
    ))
}
