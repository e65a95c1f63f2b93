use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PalaverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("missing credential: {0}")]
    MissingCredential(String),

    #[error("ai error: {0}")]
    Ai(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("chat.model must not be empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: chat.model must not be empty"
        );
    }

    #[test]
    fn palaver_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: PalaverError = config_err.into();
        assert!(matches!(err, PalaverError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn palaver_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: PalaverError = io_err.into();
        assert!(matches!(err, PalaverError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn palaver_error_message_variants() {
        let err = PalaverError::MissingCredential("OPENAI_API_KEY is not set".into());
        assert_eq!(err.to_string(), "missing credential: OPENAI_API_KEY is not set");

        let err = PalaverError::Ai("model unavailable".into());
        assert_eq!(err.to_string(), "ai error: model unavailable");
    }
}
