pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use reqwest::Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::middleware::auth::{attach_identity, require_bearer_auth};
use crate::middleware::rate_limit::{rps_middleware, RateLimiter};
use crate::services::{
    attempt_service::AttemptService, quiz_generator::QuizGenerator, quiz_service::QuizService,
    user_service::UserService,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub quiz_service: QuizService,
    pub attempt_service: AttemptService,
    pub user_service: UserService,
    pub quiz_generator: QuizGenerator,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.generation.timeout + Duration::from_secs(5))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        let quiz_generator = QuizGenerator::from_config(&config.generation, http_client);
        Ok(Self::with_generator(pool, config, quiz_generator))
    }

    /// Same as `new` but with a caller-supplied generator.
    pub fn with_generator(pool: PgPool, config: Config, quiz_generator: QuizGenerator) -> Self {
        Self {
            quiz_service: QuizService::new(pool.clone()),
            attempt_service: AttemptService::new(pool.clone()),
            user_service: UserService::new(pool.clone()),
            config: Arc::new(config),
            quiz_generator,
            pool,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    use crate::routes::{ai_quiz, attempt, auth, docs, health, quiz};

    let generation = Router::new()
        .route("/api/ai/quizzes/generate", post(ai_quiz::generate_quiz))
        .layer(from_fn_with_state(
            RateLimiter::new(state.config.generation_rps),
            rps_middleware,
        ));

    let optional_identity = Router::new()
        .route("/api/ai/quizzes/save", post(ai_quiz::save_quiz))
        .route("/api/quizzes/:id/attempts", post(attempt::submit_attempt))
        .layer(from_fn_with_state(state.clone(), attach_identity));

    let me = Router::new()
        .route(
            "/api/me/quizzes",
            get(quiz::list_my_quizzes).post(quiz::create_quiz),
        )
        .route("/api/me/quizzes/:id", delete(quiz::delete_quiz))
        .route(
            "/api/me/quizzes/:id/questions",
            get(quiz::list_questions).post(quiz::add_question),
        )
        .route("/api/me/questions/:id", delete(quiz::delete_question))
        .route("/api/me/profile", get(attempt::profile))
        .route(
            "/api/me/attempts/:id/certificate",
            get(attempt::download_certificate),
        )
        .layer(from_fn_with_state(state.clone(), require_bearer_auth));

    let public = Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(docs::openapi_json))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/quizzes", get(quiz::list_quizzes))
        .route("/api/quizzes/:id", get(quiz::get_quiz))
        .route("/api/leaderboard", get(attempt::global_leaderboard))
        .route("/api/leaderboard/:quiz_id", get(attempt::quiz_leaderboard));

    public
        .merge(generation)
        .merge(optional_identity)
        .merge(me)
        .with_state(state)
}
