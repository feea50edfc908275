//! Gemini API client for schedule generation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use routine_core::TextGenerator;
use routine_domain::{GeminiConfig, Result as DomainResult, RoutineError};
use tracing::{debug, info};

use crate::http::HttpClient;

use super::types::{
    ApiErrorEnvelope, Content, GeminiError, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part,
};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
const API_VERSION: &str = "v1beta";
const JSON_MIME_TYPE: &str = "application/json";

/// Gemini API client; one `generate_content` call is one attempt
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Arguments
    /// * `api_key` - Generative Language API key (required)
    /// * `http_client` - HTTP client used for every call
    pub fn new(api_key: String, http_client: HttpClient) -> Self {
        Self { http_client, api_key, base_url: GEMINI_API_URL.to_string() }
    }

    /// Build a client from configuration, honouring its base URL and timeout
    ///
    /// # Errors
    /// Returns `RoutineError::Config` if the API key is blank, or the HTTP
    /// client cannot be constructed.
    pub fn from_config(config: &GeminiConfig) -> DomainResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(RoutineError::Config("Gemini API key is empty".into()));
        }

        let http_client =
            HttpClient::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;

        Ok(Self::new(config.api_key.clone(), http_client).with_base_url(&config.base_url))
    }

    /// Override the API base URL (self-hosted proxies, tests)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Endpoint for `model`, accepted with or without the `models/` prefix
    fn endpoint(&self, model: &str) -> String {
        let name = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/{}/models/{}:generateContent", self.base_url, API_VERSION, name)
    }

    /// Generate a JSON-typed reply for `prompt` with `model`
    ///
    /// # Returns
    /// The reply text, unmodified
    ///
    /// # Errors
    /// Returns `GeminiError` for network failures, API errors, or replies
    /// without text
    pub async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, GeminiError> {
        if model.trim().is_empty() {
            return Err(GeminiError::ModelNotFound {
                model: model.to_string(),
                message: "empty model identifier".into(),
            });
        }

        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt.to_string()) }],
            }],
            generation_config: GenerationConfig { response_mime_type: JSON_MIME_TYPE.to_string() },
        };

        let request_builder = self
            .http_client
            .request(Method::POST, self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", JSON_MIME_TYPE)
            .json(&payload);

        let response =
            self.http_client.send(request_builder).await.map_err(|err| match err {
                RoutineError::Network(msg) => GeminiError::Network(msg),
                other => GeminiError::Network(other.to_string()),
            })?;

        let status = response.status();
        debug!(model, status = status.as_u16(), "received Gemini API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(classify_error(model, status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        if let Some(usage) = &parsed.usage_metadata {
            info!(
                model,
                prompt_tokens = usage.prompt_token_count,
                completion_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Gemini generation complete"
            );
        }

        parsed.text().ok_or_else(|| missing_text_error(&parsed))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> DomainResult<String> {
        self.generate_content(model, prompt).await.map_err(RoutineError::from)
    }
}

/// Map an error status and body to a `GeminiError`
fn classify_error(model: &str, status: u16, body: &str) -> GeminiError {
    let (message, api_status) = match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.message, envelope.error.status),
        Err(_) => (body.to_string(), None),
    };

    match (status, api_status.as_deref()) {
        (429, _) | (_, Some("RESOURCE_EXHAUSTED")) => GeminiError::QuotaExhausted(message),
        (401 | 403, _) | (_, Some("UNAUTHENTICATED" | "PERMISSION_DENIED")) => {
            GeminiError::Authentication(format!("{message} ({status})"))
        }
        (400, _) if message.contains("API key") => {
            GeminiError::Authentication(format!("{message} ({status})"))
        }
        (404, _) => GeminiError::ModelNotFound { model: model.to_string(), message },
        _ => GeminiError::Api { status, message },
    }
}

fn missing_text_error(response: &GenerateContentResponse) -> GeminiError {
    if let Some(reason) =
        response.prompt_feedback.as_ref().and_then(|feedback| feedback.block_reason.as_deref())
    {
        return GeminiError::InvalidResponse(format!("prompt blocked: {reason}"));
    }

    match response.candidates.first() {
        None => GeminiError::InvalidResponse("Response contained no candidates".to_string()),
        Some(candidate) => GeminiError::InvalidResponse(format!(
            "Candidate contained no text (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )),
    }
}
