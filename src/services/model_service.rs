use std::{sync::Arc, time::Duration};

use async_openai::{config::OpenAIConfig, error::OpenAIError, Client as OpenAiClient};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    config::{Config, ModelProvider},
    errors::{AppError, AppResult},
};

/// Single-prompt, single-reply text generation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

pub fn build_generator(config: &Config) -> AppResult<Arc<dyn TextGenerator>> {
    let generator: Arc<dyn TextGenerator> = match config.model_provider {
        ModelProvider::Gemini => Arc::new(GeminiGenerator::new(config)?),
        ModelProvider::OpenAi => Arc::new(OpenAiGenerator::new(config)),
    };

    log::info!(
        "Using {:?} model '{}' for text generation",
        config.model_provider,
        config.model_name
    );
    Ok(generator)
}

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

impl GeminiResponse {
    /// All text parts of the first candidate, joined.
    fn into_text(self) -> AppResult<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::ModelInvocation(
                "model returned no text".to_string(),
            ));
        }
        Ok(text)
    }
}

/// Google Generative Language API (`models/{model}:generateContent`).
pub struct GeminiGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl GeminiGenerator {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.model_timeout_seconds))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.gemini_api_base.trim_end_matches('/'),
                config.model_name
            ),
            api_key: config.gemini_api_key.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ModelInvocation(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await?;
        gemini_response.into_text()
    }
}

/// OpenAI-compatible chat completions endpoint.
pub struct OpenAiGenerator {
    client: OpenAiClient<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiGenerator {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(&config.openai_api_base);

        Self {
            client: OpenAiClient::with_config(openai_config),
            model: config.model_name.clone(),
            timeout: Duration::from_secs(config.model_timeout_seconds),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let outcome: Result<Value, OpenAIError> =
            tokio::time::timeout(self.timeout, self.client.chat().create_byot(request))
                .await
                .map_err(|_| {
                    AppError::ModelInvocation(format!(
                        "request timed out after {}s",
                        self.timeout.as_secs()
                    ))
                })?;

        chat_completion_text(&outcome?)
    }
}

fn chat_completion_text(response: &Value) -> AppResult<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::ModelInvocation("model returned no text".to_string()))
}
