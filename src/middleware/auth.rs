use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

pub use crate::utils::token::Claims;
use crate::utils::token::decode_token;
use crate::AppState;

fn unauthorized(code: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": code }))).into_response()
}

fn bearer_token(req: &Request) -> Result<Option<&str>, &'static str> {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };
    let auth_str = auth_header.to_str().map_err(|_| "bad_authorization")?;
    auth_str
        .strip_prefix("Bearer ")
        .map(Some)
        .ok_or("unsupported_scheme")
}

pub async fn require_bearer_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = match bearer_token(&req) {
        Ok(Some(token)) => token,
        Ok(None) => return unauthorized("missing_authorization"),
        Err(code) => return unauthorized(code),
    };

    match decode_token(token, &state.config.jwt_secret) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(_) => unauthorized("invalid_token"),
    }
}

/// Inserts `Claims` when a valid bearer token is present. Anonymous or
/// badly authenticated requests pass through without an identity.
pub async fn attach_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let claims = match bearer_token(&req) {
        Ok(Some(token)) => decode_token(token, &state.config.jwt_secret).ok(),
        _ => None,
    };
    if let Some(claims) = claims {
        req.extensions_mut().insert(claims);
    }
    next.run(req).await
}
