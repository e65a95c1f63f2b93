use std::path::PathBuf;

use clap::Parser;

/// Chat with an OpenAI model from the terminal.
///
/// Type `reset` to clear the conversation, `exit` or `quit` to leave.
/// The API key is read from OPENAI_API_KEY (or a `.env` file) and
/// prompted for when missing.
#[derive(Parser, Debug)]
#[command(name = "palaver", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error or a filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model override.
    #[arg(long)]
    pub model: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_valid() {
        let args = Args::try_parse_from(["palaver"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.model.is_none());
    }

    #[test]
    fn parses_all_overrides() {
        let args = Args::try_parse_from([
            "palaver",
            "--config",
            "/tmp/palaver.toml",
            "--log-level",
            "debug",
            "--model",
            "gpt-4o",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/palaver.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["palaver", "--stream"]).is_err());
    }
}
