//! Conversation session management.
//!
//! A `Session` owns the transcript sent to the completion provider on
//! every turn. The transcript always starts with the system prompt, only
//! grows by appending, and `reset` brings it back to that single message.

mod chat;
mod manager;
mod types;


pub use manager::{Session, DEFAULT_SYSTEM_PROMPT, RESET_CONFIRMATION};
pub use types::Reply;
