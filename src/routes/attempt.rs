use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::header,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::attempt_dto::{
        AttemptResultResponse, GlobalLeaderboardResponse, ProfileResponse, QuizLeaderboardResponse,
        SubmitAttemptPayload,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    services::{export_service::ExportService, grading_service::GradingService},
    AppState,
};

/// Grades a submission. Signed-in takers also get the attempt recorded.
pub async fn submit_attempt(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
    Path(quiz_id): Path<Uuid>,
    payload: std::result::Result<Json<SubmitAttemptPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;

    state.quiz_service.get_quiz(quiz_id).await?;
    let questions = state.quiz_service.list_questions(quiz_id).await?;
    if questions.is_empty() {
        return Err(Error::BadRequest("Quiz has no questions".to_string()));
    }

    let report = GradingService::grade(&questions, &payload.answers);

    let attempt_id = match claims {
        Some(Extension(claims)) => {
            let attempt = state
                .attempt_service
                .record_attempt(quiz_id, claims.user_id()?, report.score, report.total)
                .await?;
            Some(attempt.id)
        }
        None => None,
    };

    Ok(Json(AttemptResultResponse {
        quiz_id,
        attempt_id,
        score: report.score,
        total: report.total,
        percentage: report.percentage,
        passed: report.passed,
        results: report.results,
    }))
}

pub async fn global_leaderboard(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let entries = state.attempt_service.global_leaderboard().await?;
    Ok(Json(GlobalLeaderboardResponse { entries }))
}

pub async fn quiz_leaderboard(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let quiz = state.quiz_service.get_quiz(quiz_id).await?;
    let entries = state.attempt_service.quiz_leaderboard(quiz_id).await?;
    Ok(Json(QuizLeaderboardResponse {
        quiz_id,
        title: quiz.title,
        entries,
    }))
}

pub async fn profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get_user(claims.user_id()?).await?;
    let stats = state.attempt_service.profile_stats(user.id).await?;
    Ok(Json(ProfileResponse {
        user_id: user.id,
        username: user.username,
        quizzes_created: stats.quizzes_created,
        attempts_taken: stats.attempts_taken,
        average_percentage: stats.average_percentage,
        best_percentage: stats.best_percentage,
        recent_attempts: stats.recent_attempts,
    }))
}

pub async fn download_certificate(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(attempt_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let detail = state.attempt_service.get_attempt_detail(attempt_id).await?;
    if detail.user_id != claims.user_id()? {
        return Err(Error::Forbidden("This attempt belongs to another user".to_string()));
    }

    let buffer = ExportService::generate_certificate_xlsx(&detail)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        ExportService::certificate_filename(&detail)
    );

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    ))
}
