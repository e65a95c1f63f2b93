//! Chat engine for Palaver.
//!
//! Provides:
//! - the `CompletionProvider` seam and its OpenAI chat-completions client
//! - credential resolution for the OpenAI API key
//! - `Session`, which owns the conversation transcript

pub mod credential;
pub mod openai;
pub mod session;

use async_trait::async_trait;

pub use credential::{resolve_api_key, OPENAI_API_KEY_VAR};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{Reply, Session, DEFAULT_SYSTEM_PROMPT, RESET_CONFIRMATION};

/// Something that turns a transcript into the next assistant message.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Request one completion for the full `messages` transcript.
    async fn complete(&self, messages: &[Message]) -> Result<Completion, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single selected completion.
#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.prompt_tokens.saturating_add(self.completion_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error(
        "OpenAI API key not provided. Set the {} environment variable or pass a key explicitly.",
        credential::OPENAI_API_KEY_VAR
    )]
    MissingCredential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(Message::assistant("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "hi"}));
        assert_eq!(serde_json::to_value(Role::System).unwrap(), "system");
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed: Result<Message, _> =
            serde_json::from_str(r#"{"role": "tool", "content": "x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn total_tokens_saturates() {
        let usage = TokenUsage {
            prompt_tokens: u64::MAX,
            completion_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn missing_credential_message_names_the_variable() {
        assert!(AiError::MissingCredential
            .to_string()
            .contains("OPENAI_API_KEY"));
    }
}
