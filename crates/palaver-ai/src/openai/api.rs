//! CompletionProvider implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, Completion, CompletionProvider, Message};

use super::client::{error_excerpt, OpenAiClient};

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<Completion, AiError> {
        let body = self.build_request_body(messages);

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "OpenAI API request"
        );

        let response = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!(
                "HTTP {status}: {}",
                error_excerpt(&text)
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let completion = self.parse_response(json)?;
        debug!(
            prompt_tokens = completion.usage.prompt_tokens,
            completion_tokens = completion.usage.completion_tokens,
            "OpenAI API response"
        );
        Ok(completion)
    }
}
