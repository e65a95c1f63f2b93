//! Chat session and completion API settings.

use serde::{Deserialize, Serialize};

pub use palaver_common::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT};

/// Chat configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Model identifier sent with every request.
    pub model: String,
    /// First message of every transcript, restored on reset.
    pub system_prompt: String,
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
    /// Sampling temperature (valid range: 0.0-2.0). Provider default if unset.
    pub temperature: Option<f64>,
    /// Completion length cap. Provider default if unset.
    pub max_tokens: Option<u32>,
    /// Whole-request timeout in seconds (valid range: 1-3600). No timeout if unset.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: None,
            max_tokens: None,
            request_timeout_secs: None,
        }
    }
}
