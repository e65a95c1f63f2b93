//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Palaver Configuration
# Only override what you want to change -- missing fields use defaults.
# OPENAI_API_KEY is read from the environment, never from this file.

[chat]
# model = "gpt-4"
# system_prompt = "You are a helpful AI assistant."
# base_url = "https://api.openai.com/v1"
# temperature = 0.7            # 0.0-2.0
# max_tokens = 1024
# request_timeout_secs = 120   # 1-3600, unset = wait indefinitely

[logging]
# level = "warn"               # debug, info, warn, error
"##
}
