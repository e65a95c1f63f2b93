pub mod errors;

/// System prompt used when none is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

/// Chat-completion model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// OpenAI API base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub use errors::{ConfigError, PalaverError};

pub type Result<T> = std::result::Result<T, PalaverError>;
