//! Startup helpers: config loading, logging, and API key acquisition.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use palaver_ai::{resolve_api_key, AiError, OpenAiConfig};
use palaver_common::{ConfigError, PalaverError};
use palaver_config::{ChatConfig, PalaverConfig};
use tokio::io::{AsyncBufRead, Lines};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// Load the config from `path`, or from the platform default location.
pub(crate) fn load_config(path: Option<&Path>) -> Result<PalaverConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = palaver_config::toml_loader::load_from_path(path)?;
            palaver_config::validation::validate(&config)?;
            Ok(config)
        }
        None => palaver_config::load_config(),
    }
}

/// Install the stderr subscriber. `RUST_LOG` directives are kept and
/// `directive` is added on top.
pub(crate) fn init_logging(directive: &str) {
    let directive = directive.parse::<Directive>().unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log level {directive:?}: {e}");
        LevelFilter::WARN.into()
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(io::stderr)
        .init();
}

/// Build the provider config from the `[chat]` section and a resolved key.
pub(crate) fn openai_config(chat: &ChatConfig, api_key: String) -> OpenAiConfig {
    let mut config = OpenAiConfig::new(api_key)
        .with_base_url(chat.base_url.clone())
        .with_model(chat.model.clone());
    if let Some(temperature) = chat.temperature {
        config = config.with_temperature(temperature);
    }
    if let Some(max_tokens) = chat.max_tokens {
        config = config.with_max_tokens(max_tokens);
    }
    if let Some(secs) = chat.request_timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }
    config
}

/// Find the API key in the environment, or ask for it on `input`.
pub(crate) async fn obtain_api_key<R, W>(
    env: impl Fn(&str) -> Option<String>,
    input: &mut Lines<R>,
    out: &mut W,
) -> Result<String, PalaverError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match resolve_api_key(None, env) {
        Ok(key) => return Ok(key),
        Err(AiError::MissingCredential) => {}
        Err(e) => return Err(PalaverError::Ai(e.to_string())),
    }

    writeln!(out, "OpenAI API key not found in environment variables.")?;
    write!(out, "Please enter your OpenAI API key: ")?;
    out.flush()?;

    let typed = input.next_line().await?;
    resolve_api_key(typed, |_| None).map_err(|e| PalaverError::MissingCredential(e.to_string()))
}

#[cfg(test)]
mod tests {
    use tokio::io::AsyncBufReadExt;

    use super::*;

    #[tokio::test]
    async fn environment_key_skips_the_prompt() {
        let mut input = "unused\n".as_bytes().lines();
        let mut out = Vec::new();

        let key = obtain_api_key(|_| Some("sk-env".into()), &mut input, &mut out)
            .await
            .unwrap();

        assert_eq!(key, "sk-env");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn prompts_when_environment_is_empty() {
        let mut input = "  sk-typed  \n".as_bytes().lines();
        let mut out = Vec::new();

        let key = obtain_api_key(|_| None, &mut input, &mut out).await.unwrap();

        assert_eq!(key, "sk-typed");
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("OpenAI API key not found in environment variables."));
        assert!(out.ends_with("Please enter your OpenAI API key: "));
    }

    #[tokio::test]
    async fn blank_answer_is_a_missing_credential() {
        let mut input = "\n".as_bytes().lines();
        let mut out = Vec::new();

        let err = obtain_api_key(|_| None, &mut input, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, PalaverError::MissingCredential(_)));
    }

    #[tokio::test]
    async fn closed_input_is_a_missing_credential() {
        let mut input = "".as_bytes().lines();
        let mut out = Vec::new();

        let err = obtain_api_key(|_| None, &mut input, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, PalaverError::MissingCredential(_)));
    }

    #[test]
    fn openai_config_follows_chat_section() {
        let chat = ChatConfig {
            model: "gpt-4o-mini".into(),
            base_url: "http://localhost:11434/v1".into(),
            temperature: Some(0.3),
            max_tokens: Some(100),
            request_timeout_secs: Some(30),
            ..ChatConfig::default()
        };

        let config = openai_config(&chat, "sk-x".into());
        assert_eq!(config.api_key, "sk-x");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.temperature, Some(0.3));
        assert_eq!(config.max_tokens, Some(100));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn default_chat_section_sets_no_timeout() {
        let config = openai_config(&ChatConfig::default(), "k".into());
        assert_eq!(config.model, "gpt-4");
        assert!(config.request_timeout.is_none());
        assert!(config.temperature.is_none());
    }

    #[test]
    fn explicit_config_path_is_loaded_and_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palaver.toml");

        std::fs::write(&path, "[chat]\nmodel = \"gpt-4o\"\n").unwrap();
        assert_eq!(load_config(Some(path.as_path())).unwrap().chat.model, "gpt-4o");

        std::fs::write(&path, "[chat]\ntemperature = 5.0\n").unwrap();
        assert!(matches!(
            load_config(Some(path.as_path())),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
