//! OpenAI API key resolution.

use tracing::debug;

use crate::AiError;

/// Environment variable consulted when no key is passed explicitly.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Resolve the API key to use.
///
/// Resolution order:
/// 1. `explicit`
/// 2. `OPENAI_API_KEY`, read through `env`
///
/// Values are trimmed and blank values count as absent. The interactive
/// prompt fallback lives in the binary, which calls this again with the
/// typed value as `explicit`.
pub fn resolve_api_key(
    explicit: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<String, AiError> {
    let usable = |value: String| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    if let Some(key) = explicit.and_then(usable) {
        debug!("using explicitly supplied API key");
        return Ok(key);
    }

    if let Some(key) = env(OPENAI_API_KEY_VAR).and_then(usable) {
        debug!("using API key from {OPENAI_API_KEY_VAR}");
        return Ok(key);
    }

    Err(AiError::MissingCredential)
}
