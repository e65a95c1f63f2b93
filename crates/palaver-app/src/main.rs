mod cli;
mod repl;
mod startup;

use std::io::{self, Write};
use std::process::ExitCode;

use palaver_ai::{OpenAiClient, Session, OPENAI_API_KEY_VAR};
use palaver_common::PalaverError;
use palaver_config::{apply_env_overrides, PalaverConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> ExitCode {
    // A .env file never overrides variables that are already set
    let dotenv = dotenvy::dotenv();

    let args = cli::parse();

    let loaded = startup::load_config(args.config.as_deref());
    let level = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => config.logging.level.to_string(),
        Err(_) => PalaverConfig::default().logging.level.to_string(),
    });
    startup::init_logging(&level);

    tracing::info!("Palaver v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = &dotenv {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PalaverConfig::default()
    });
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    if let Some(model) = args.model {
        config.chat.model = model;
    }
    tracing::info!("Config loaded (model: {})", config.chat.model);

    let result = run(config).await;
    ExitCode::from(exit_status(&result, &mut io::stderr()))
}

/// Report a failed run on `err` and map it to the process exit status.
fn exit_status(result: &palaver_common::Result<()>, err: &mut impl Write) -> u8 {
    let Err(e) = result else {
        return 0;
    };
    // Nothing useful can be done if stderr itself is gone
    let _ = match e {
        PalaverError::MissingCredential(_) => writeln!(
            err,
            "Error: OpenAI API key not provided.\n\
             Please set your {OPENAI_API_KEY_VAR} environment variable or provide it when prompted."
        ),
        e => writeln!(err, "Error: {e}"),
    };
    1
}

async fn run(config: PalaverConfig) -> palaver_common::Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut out = io::stdout();

    let api_key =
        startup::obtain_api_key(|name| std::env::var(name).ok(), &mut input, &mut out).await?;

    let client = OpenAiClient::new(startup::openai_config(&config.chat, api_key))
        .map_err(|e| PalaverError::Ai(e.to_string()))?;
    let mut session = Session::new(client).with_system_prompt(config.chat.system_prompt);

    repl::run(&mut session, &mut input, &mut out).await?;
    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_and_stderr(result: palaver_common::Result<()>) -> (u8, String) {
        let mut err = Vec::new();
        let status = exit_status(&result, &mut err);
        (status, String::from_utf8(err).unwrap())
    }

    #[test]
    fn clean_run_exits_zero_silently() {
        assert_eq!(status_and_stderr(Ok(())), (0, String::new()));
    }

    #[test]
    fn missing_credential_exits_one_with_guidance() {
        let (status, stderr) =
            status_and_stderr(Err(PalaverError::MissingCredential("OPENAI_API_KEY".into())));
        assert_eq!(status, 1);
        assert!(stderr.starts_with("Error: OpenAI API key not provided.\n"));
        assert!(stderr.contains("Please set your OPENAI_API_KEY environment variable"));
    }

    #[test]
    fn other_failures_exit_one_with_the_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed");
        let (status, stderr) = status_and_stderr(Err(io_err.into()));
        assert_eq!(status, 1);
        assert_eq!(stderr, "Error: stdout closed\n");

        let (status, stderr) = status_and_stderr(Err(PalaverError::Ai("client build failed".into())));
        assert_eq!(status, 1);
        assert_eq!(stderr, "Error: ai error: client build failed\n");
    }
}
