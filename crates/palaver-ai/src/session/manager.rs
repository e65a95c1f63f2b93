//! Session struct and transcript bookkeeping.

use tracing::info;

use crate::credential::resolve_api_key;
use crate::openai::{OpenAiClient, OpenAiConfig};
use crate::{AiError, CompletionProvider, Message};

pub use palaver_common::DEFAULT_SYSTEM_PROMPT;

/// Returned by [`Session::reset`].
pub const RESET_CONFIRMATION: &str = "Conversation has been reset.";

/// A conversation with one completion provider.
pub struct Session<P> {
    /// Provider that answers each turn. Holds the credential.
    pub(super) provider: P,
    /// Prompt restored by `reset`.
    pub(super) system_prompt: String,
    /// Transcript, never empty.
    pub(super) messages: Vec<Message>,
}

impl<P: CompletionProvider> Session<P> {
    /// Start a session with the default system prompt.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            messages: vec![Message::system(DEFAULT_SYSTEM_PROMPT)],
        }
    }

    /// Replace the system prompt. Resets the transcript.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self.messages = vec![Message::system(self.system_prompt.clone())];
        self
    }

    /// Discard all history, keeping only the configured system prompt.
    pub fn reset(&mut self) -> &'static str {
        self.messages = vec![Message::system(self.system_prompt.clone())];
        info!("conversation reset");
        RESET_CONFIRMATION
    }

    /// Get the full transcript, system prompt first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl Session<OpenAiClient> {
    /// Resolve a credential and start an OpenAI-backed session.
    ///
    /// `credential` takes precedence over `OPENAI_API_KEY` read through
    /// `env`. Fails with [`AiError::MissingCredential`] before any client
    /// is built when neither yields a key.
    pub fn initialize(
        credential: Option<String>,
        system_prompt: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AiError> {
        let key = resolve_api_key(credential, env)?;
        let session = Session::new(OpenAiClient::new(OpenAiConfig::new(key))?);
        Ok(match system_prompt {
            Some(prompt) => session.with_system_prompt(prompt),
            None => session,
        })
    }
}
