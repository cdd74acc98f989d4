//! OpenAI-compatible chat-completions backend.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::backend::{CompletionBackend, CompletionRequest, ModelOutput};
use crate::error::BackendError;

/// Default API base for the hosted OpenAI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Backend that calls an OpenAI-compatible `POST /chat/completions` endpoint.
///
/// The instruction travels as the system message and the description as the
/// user message. Structured output is requested via `response_format` with
/// the AppSpec schema, so conforming upstreams constrain generation to it.
/// The credential and model identifier are supplied at construction and
/// shared across requests.
pub struct OpenAiBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    /// Creates a backend for the given endpoint, credential, and model.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn request_body(&self, request: &CompletionRequest) -> Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": request.instructions},
                {"role": "user", "content": request.input},
            ],
            "max_tokens": request.max_output_tokens,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": request.schema_name,
                    "schema": request.schema,
                },
            },
        })
    }

    /// Pulls the assistant text out of a chat-completions response body.
    fn message_content(body: &Value) -> Option<&str> {
        body.get("choices")?
            .get(0)?
            .get("message")?
            .get("content")?
            .as_str()
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<ModelOutput, BackendError> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(
            model = %self.model,
            input_chars = request.input.chars().count(),
            "issuing completion request"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| BackendError {
                message: format!("request failed: {e}"),
                raw_response: None,
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| BackendError {
            message: format!("unreadable response body: {e}"),
            raw_response: None,
        })?;

        // Keep whatever the upstream sent, JSON or not, for diagnosis.
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(_) => Value::String(text),
        };

        if !status.is_success() {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("upstream returned an error status")
                .to_string();
            return Err(BackendError {
                message: format!("{status}: {message}"),
                raw_response: Some(body),
            });
        }

        let Some(content) = Self::message_content(&body) else {
            return Err(BackendError {
                message: "response carried no message content".to_string(),
                raw_response: Some(body),
            });
        };

        // Structured-output mode still delivers text. A clean parse is the
        // pre-parsed payload; anything else goes to recovery as-is.
        match serde_json::from_str::<Value>(content) {
            Ok(value) => Ok(ModelOutput::Parsed(value)),
            Err(_) => Ok(ModelOutput::Raw(content.to_string())),
        }
    }
}
