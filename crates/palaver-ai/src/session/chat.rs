//! Async turn submission for Session.

use tracing::{debug, warn};

use crate::{CompletionProvider, Message};

use super::manager::Session;
use super::types::Reply;

impl<P: CompletionProvider> Session<P> {
    /// Add a user message and ask the provider for the next reply.
    ///
    /// The user message stays in the transcript even if the provider
    /// fails. A success appends the assistant reply as well.
    pub async fn submit(&mut self, user_text: impl Into<String>) -> Reply {
        self.messages.push(Message::user(user_text));

        match self.provider.complete(&self.messages).await {
            Ok(completion) => {
                debug!(
                    total_tokens = completion.usage.total_tokens(),
                    transcript_len = self.messages.len() + 1,
                    "completion received"
                );
                self.messages
                    .push(Message::assistant(completion.content.clone()));
                Reply::Answer(completion.content)
            }
            Err(e) => {
                warn!(error = %e, "completion request failed");
                Reply::Failed(e.to_string())
            }
        }
    }
}
