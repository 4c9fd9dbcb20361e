use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GenerationConfig;
use crate::models::draft::DraftRejection;
use crate::services::prompt_service::SYSTEM_PROMPT;

/// Every way the generation flow can fail before a draft is accepted.
/// All of these route to the fallback generator; none reach the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationFailure {
    #[error("no generation credential configured")]
    ConfigurationMissing,

    #[error("generation request failed: {0}")]
    Generation(String),

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("could not parse generated quiz: {0}")]
    Parse(String),

    #[error("generated quiz rejected: {0}")]
    Validation(#[from] DraftRejection),
}

/// Sends a prompt to a text-generation service and returns the raw reply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationFailure>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// OpenAI-compatible chat completions client.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(api_key: String, config: &GenerationConfig, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: config.timeout,
        }
    }

    /// Builds a client only when a credential is configured.
    pub fn from_config(config: &GenerationConfig, client: Client) -> Option<Self> {
        config
            .api_key
            .clone()
            .map(|key| Self::new(key, config, client))
    }
}

#[async_trait]
impl GenerationClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationFailure> {
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationFailure::Timeout(self.timeout)
                } else {
                    GenerationFailure::Generation(e.to_string())
                }
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            tracing::warn!(%status, "generation service returned an error");
            return Err(GenerationFailure::Generation(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body: ChatResponse = res
            .json()
            .await
            .map_err(|e| GenerationFailure::Generation(format!("invalid response body: {}", e)))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| GenerationFailure::Generation("response has no content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_client_without_credential() {
        let config = GenerationConfig::default();
        assert!(OpenAiClient::from_config(&config, Client::new()).is_none());
    }

    #[test]
    fn base_url_is_normalized() {
        let config = GenerationConfig {
            api_key: Some("sk-test".to_string()),
            base_url: "http://localhost:8080/v1/".to_string(),
            ..GenerationConfig::default()
        };
        let client = OpenAiClient::from_config(&config, Client::new()).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080/v1");
        assert_eq!(client.model, "gpt-3.5-turbo");
    }

    #[test]
    fn chat_response_content_is_extracted() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"{\"questions\":[]}"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.choices[0].message.content.as_deref(),
            Some("{\"questions\":[]}")
        );
    }
}
