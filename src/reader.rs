use crate::handoff::Publisher;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Upper bound on the bytes taken from the subprocess per read.
pub const READ_CHUNK_SIZE: usize = 1024;

/// Read subprocess output and publish one token per read.
///
/// Each chunk is assumed to end in a line terminator: its final byte is
/// dropped unconditionally and the rest is decoded lossily as UTF-8. Returns
/// at end of stream or once the subscriber is gone; other read errors are
/// logged and reading resumes.
pub async fn read_tokens<R>(mut output: R, publisher: Publisher)
where
    R: AsyncRead + Unpin,
{
    let mut chunk = [0u8; READ_CHUNK_SIZE];
    loop {
        match output.read(&mut chunk).await {
            Ok(0) => break, // EOF
            Ok(n) => {
                let token = String::from_utf8_lossy(&chunk[..n - 1]).into_owned();
                tracing::debug!(%token, "read token");
                if publisher.publish(token).await.is_err() {
                    break; // Subscriber dropped
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read subprocess output");
            }
        }
    }
}
