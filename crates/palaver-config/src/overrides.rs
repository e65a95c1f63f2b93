//! Environment variable overrides applied on top of the loaded file.

use tracing::info;

use crate::schema::PalaverConfig;

/// Overrides `chat.base_url`.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
/// Overrides `chat.model`.
pub const MODEL_VAR: &str = "OPENAI_MODEL";

/// Apply environment overrides using `lookup` to read variables.
///
/// Empty values are ignored.
pub fn apply_env_overrides(config: &mut PalaverConfig, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(BASE_URL_VAR) {
        info!("{BASE_URL_VAR} overrides chat.base_url");
        config.chat.base_url = url.trim().to_string();
    }
    if let Some(model) = non_empty(MODEL_VAR) {
        info!("{MODEL_VAR} overrides chat.model");
        config.chat.model = model.trim().to_string();
    }
}
