//! Result of a submitted turn.

use std::fmt;

/// Outcome of [`Session::submit`](super::Session::submit).
///
/// Provider failures never escape `submit`; they come back as `Failed`
/// so callers can tell them apart from a genuine answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The assistant's reply, also appended to the transcript.
    Answer(String),
    /// Description of the provider failure.
    Failed(String),
}

impl Reply {
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Failed(_))
    }

    /// The answer text or the failure description, without any prefix.
    pub fn text(&self) -> &str {
        match self {
            Reply::Answer(text) | Reply::Failed(text) => text,
        }
    }

    pub fn into_result(self) -> Result<String, String> {
        match self {
            Reply::Answer(text) => Ok(text),
            Reply::Failed(description) => Err(description),
        }
    }
}

/// Answers print as-is; failures print as `Error: <description>`.
impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Answer(text) => f.write_str(text),
            Reply::Failed(description) => write!(f, "Error: {description}"),
        }
    }
}
