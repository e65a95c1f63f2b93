//! Interactive prompt loop.

use std::io::{self, Write};

use palaver_ai::{CompletionProvider, Session};
use tokio::io::{AsyncBufRead, Lines};

pub(crate) const BANNER: &str =
    "AI Agent initialized. Type 'exit' to quit or 'reset' to clear conversation history.";
pub(crate) const FAREWELL: &str = "Goodbye!";
pub(crate) const INVALID_INPUT: &str = "Error: input was not valid UTF-8, line skipped.";

/// One line of user input, interpreted.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Exit,
    Reset,
    /// Whitespace-only input, skipped.
    Blank,
    Ask(&'a str),
}

impl<'a> Command<'a> {
    /// Commands match case-insensitively; anything else is sent verbatim.
    pub(crate) fn parse(line: &'a str) -> Self {
        let word = line.trim();
        if word.is_empty() {
            Command::Blank
        } else if word.eq_ignore_ascii_case("exit") || word.eq_ignore_ascii_case("quit") {
            Command::Exit
        } else if word.eq_ignore_ascii_case("reset") {
            Command::Reset
        } else {
            Command::Ask(line)
        }
    }
}

/// Read lines from `input` until `exit`, `quit` or end of input.
///
/// Each turn is awaited before the next line is read, so at most one
/// request is in flight.
pub(crate) async fn run<P, R, W>(
    session: &mut Session<P>,
    input: &mut Lines<R>,
    out: &mut W,
) -> io::Result<()>
where
    P: CompletionProvider,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{BANNER}")?;

    loop {
        write!(out, "\nYou: ")?;
        out.flush()?;

        let line = match input.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                writeln!(out, "\n{FAREWELL}")?;
                break;
            }
            // The undecodable line is consumed, so the next read starts fresh
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!("Skipping input line: {e}");
                writeln!(out, "{INVALID_INPUT}")?;
                continue;
            }
            Err(e) => return Err(e),
        };

        match Command::parse(&line) {
            Command::Exit => {
                writeln!(out, "{FAREWELL}")?;
                break;
            }
            Command::Reset => writeln!(out, "{}", session.reset())?,
            Command::Blank => {}
            Command::Ask(text) => {
                let reply = session.submit(text).await;
                writeln!(out, "\nAI: {reply}")?;
            }
        }
    }

    tracing::info!(messages = session.message_count(), "chat loop finished");
    Ok(())
}
