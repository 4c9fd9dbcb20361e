use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::config::GenerationConfig;
use crate::models::draft::{Difficulty, QuizDraft};
use crate::services::ai_service::{GenerationClient, GenerationFailure, OpenAiClient};
use crate::services::fallback_service::FallbackService;
use crate::services::parse_service::ParseService;
use crate::services::prompt_service::PromptService;

/// A request that has already passed input validation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub num_questions: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DraftSource {
    Generated,
    Fallback { reason: GenerationFailure },
}

impl DraftSource {
    pub fn label(&self) -> &'static str {
        match self {
            DraftSource::Generated => "ai",
            DraftSource::Fallback { .. } => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub draft: QuizDraft,
    pub source: DraftSource,
}

/// Generates quiz drafts, falling back to canned content on any failure.
///
/// Built once at start-up and shared through `AppState`; holds only
/// immutable configuration.
#[derive(Clone)]
pub struct QuizGenerator {
    client: Option<Arc<dyn GenerationClient>>,
    timeout: Duration,
}

impl QuizGenerator {
    pub fn new(client: Option<Arc<dyn GenerationClient>>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn from_config(config: &GenerationConfig, http_client: Client) -> Self {
        let client = OpenAiClient::from_config(config, http_client)
            .map(|c| Arc::new(c) as Arc<dyn GenerationClient>);
        Self::new(client, config.timeout)
    }

    pub fn is_ai_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Always returns a draft that validates for `request.num_questions`.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        tracing::info!(
            topic = %request.topic,
            difficulty = %request.difficulty,
            count = request.num_questions,
            "quiz generation requested"
        );

        match self.try_generate(request).await {
            Ok(draft) => {
                tracing::info!(count = draft.questions.len(), "generated quiz validated");
                GenerationOutcome {
                    draft,
                    source: DraftSource::Generated,
                }
            }
            Err(reason) => {
                match &reason {
                    GenerationFailure::ConfigurationMissing => {
                        tracing::debug!("no generation credential, using fallback quiz")
                    }
                    other => tracing::warn!(reason = %other, "quiz generation failed, using fallback quiz"),
                }
                let draft = FallbackService::generate(
                    &request.topic,
                    request.difficulty,
                    request.num_questions,
                );
                GenerationOutcome {
                    draft,
                    source: DraftSource::Fallback { reason },
                }
            }
        }
    }

    async fn try_generate(&self, request: &GenerationRequest) -> Result<QuizDraft, GenerationFailure> {
        let client = self
            .client
            .as_ref()
            .ok_or(GenerationFailure::ConfigurationMissing)?;

        let prompt = PromptService::build(&request.topic, request.difficulty, request.num_questions);

        tracing::debug!(timeout = ?self.timeout, "sending generation request");
        let raw = tokio::time::timeout(self.timeout, client.complete(&prompt))
            .await
            .map_err(|_| GenerationFailure::Timeout(self.timeout))??;

        let draft = ParseService::parse(&raw, &request.topic, request.difficulty)?;
        tracing::debug!(count = draft.questions.len(), "generated quiz parsed");

        draft.validate(request.num_questions)?;
        Ok(draft)
    }
}
