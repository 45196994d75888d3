//! Answer writer: matches published tokens against a job's prompts and writes
//! the scripted answers to the subprocess.

use crate::error::{Error, Result};
use crate::handoff::Subscriber;
use crate::job::Expectations;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Answer tokens until the publisher closes the handoff.
///
/// Tokens that match no prompt are skipped. Each token is held until its
/// answer has been written and flushed, which keeps the reader from reading
/// ahead.
///
/// # Errors
///
/// Returns [`Error::Write`] on the first failed write; `command` is only used
/// to label it.
pub async fn answer_prompts<W>(
    input: &mut W,
    tokens: &mut Subscriber,
    expectations: &Expectations,
    command: &str,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(token) = tokens.recv().await {
        let text: &str = &token;
        let Some(answer) = expectations.response_to(text) else {
            tracing::debug!(token = %text, "no matching prompt");
            continue;
        };
        tracing::debug!(token = %text, answer = %answer.trim_end(), "answering prompt");
        let written = write_answer(input, &answer).await;
        if let Err(source) = written {
            return Err(Error::Write {
                command: command.to_string(),
                answer,
                source,
            });
        }
    }
    Ok(())
}

async fn write_answer<W>(input: &mut W, answer: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    input.write_all(answer.as_bytes()).await?;
    input.flush().await
}
