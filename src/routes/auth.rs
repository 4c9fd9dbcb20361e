use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::auth_dto::{AuthResponse, LoginPayload, RegisterPayload},
    error::Result,
    models::user::User,
    utils::token::issue_token,
    AppState,
};

fn auth_response(state: &AppState, user: User) -> Result<AuthResponse> {
    let (access_token, expires_at) = issue_token(
        user.id,
        &user.username,
        &state.config.jwt_secret,
        state.config.token_ttl_hours,
    )?;
    Ok(AuthResponse {
        user_id: user.id,
        username: user.username,
        access_token,
        token_type: "Bearer".to_string(),
        expires_at,
    })
}

pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let user = state.user_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(auth_response(&state, user)?)))
}

pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let user = state.user_service.authenticate(&payload).await?;
    Ok(Json(auth_response(&state, user)?))
}
