use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::quiz_dto::{
        CreateQuestionPayload, CreateQuizPayload, QuizDetailResponse, QuizQuestionsResponse,
    },
    error::Result,
    middleware::auth::Claims,
    AppState,
};

pub async fn list_quizzes(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let quizzes = state.quiz_service.list_quizzes(None).await?;
    Ok(Json(quizzes))
}

/// Quiz for taking: options are shown, answers are not.
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let quiz = state.quiz_service.get_quiz(id).await?;
    let questions = state.quiz_service.list_questions(id).await?;
    Ok(Json(QuizDetailResponse {
        quiz,
        questions: questions.iter().map(|q| q.to_public()).collect(),
    }))
}

pub async fn list_my_quizzes(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let quizzes = state.quiz_service.list_quizzes(Some(claims.user_id()?)).await?;
    Ok(Json(quizzes))
}

pub async fn create_quiz(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: std::result::Result<Json<CreateQuizPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let quiz = state.quiz_service.create_quiz(payload, claims.user_id()?).await?;
    Ok((StatusCode::CREATED, Json(quiz)))
}

pub async fn delete_quiz(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.quiz_service.delete_quiz(id, claims.user_id()?).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_questions(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let quiz = state.quiz_service.get_owned_quiz(id, claims.user_id()?).await?;
    let questions = state.quiz_service.list_questions(id).await?;
    Ok(Json(QuizQuestionsResponse {
        quiz_id: quiz.id,
        title: quiz.title,
        questions,
    }))
}

pub async fn add_question(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    payload: std::result::Result<Json<CreateQuestionPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let question = state
        .quiz_service
        .add_question(id, claims.user_id()?, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(question)))
}

pub async fn delete_question(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.quiz_service.delete_question(id, claims.user_id()?).await?;
    Ok(StatusCode::NO_CONTENT)
}
