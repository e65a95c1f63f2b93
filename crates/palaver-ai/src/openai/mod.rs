//! OpenAI chat-completions client.
//!
//! Implements the `CompletionProvider` trait against the
//! `POST {base_url}/chat/completions` endpoint. Any OpenAI-compatible
//! server works by pointing `base_url` at it.

mod api;
mod client;
mod config;


pub use client::OpenAiClient;
pub use config::{OpenAiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
