//! Configuration schema types for Palaver.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod logging;

pub use chat::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Palaver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PalaverConfig {
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
