//! Palaver configuration system.
//!
//! Provides TOML-based configuration for the chat client. All config
//! sections use defaults so partial configs work out of the box, and a
//! few environment variables can override the file at startup.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use palaver_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.chat.model);
//! ```

pub mod overrides;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use overrides::apply_env_overrides;
pub use schema::{ChatConfig, LogLevel, LoggingConfig, PalaverConfig, DEFAULT_SYSTEM_PROMPT};

use palaver_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists yet.
pub fn load_config() -> Result<PalaverConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
