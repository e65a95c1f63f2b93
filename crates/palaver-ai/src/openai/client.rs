//! OpenAI API client struct, request building, and response parsing.

use crate::{AiError, Completion, Message, TokenUsage};

use super::config::OpenAiConfig;

/// Longest slice of an error body carried into `AiError::ApiError`.
const ERROR_EXCERPT_CHARS: usize = 200;

/// OpenAI chat-completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the JSON request body for the chat-completions endpoint.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
        });

        if let Some(temperature) = self.config.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }
        if let Some(max_tokens) = self.config.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        body
    }

    /// Parse a successful response, selecting the first choice.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<Completion, AiError> {
        let first = json["choices"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no choices in response".to_string()))?
            .first()
            .ok_or_else(|| AiError::ParseError("empty choices".to_string()))?;

        let content = first["message"]["content"]
            .as_str()
            .ok_or_else(|| AiError::ParseError("first choice has no text content".to_string()))?
            .to_string();

        let usage = TokenUsage {
            prompt_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            completion_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(Completion { content, usage })
    }
}

/// Short description of a non-2xx response body.
///
/// Uses `error.message` from the standard OpenAI error envelope when
/// present, otherwise the raw body.
pub(crate) fn error_excerpt(body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string());
    message.chars().take(ERROR_EXCERPT_CHARS).collect()
}
