//! Full configuration validation.
//!
//! Checks every field with a constrained range or format and collects
//! all problems into a single `ConfigError`.

mod helpers;


use palaver_common::ConfigError;

use crate::schema::PalaverConfig;

use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PalaverConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_chat(errors: &mut Vec<String>, config: &PalaverConfig) {
    let chat = &config.chat;

    if chat.model.trim().is_empty() {
        errors.push("chat.model must not be empty".into());
    }
    if !(chat.base_url.starts_with("http://") || chat.base_url.starts_with("https://")) {
        errors.push(format!(
            "chat.base_url = {:?} must start with http:// or https://",
            chat.base_url
        ));
    }
    if let Some(temperature) = chat.temperature {
        validate_range_f64(errors, "chat.temperature", temperature, 0.0, 2.0);
    }
    if chat.max_tokens == Some(0) {
        errors.push("chat.max_tokens must be at least 1".into());
    }
    if let Some(timeout) = chat.request_timeout_secs {
        validate_range(errors, "chat.request_timeout_secs", timeout, 1, 3600);
    }
}
