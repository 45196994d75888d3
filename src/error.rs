//! Error type shared by the parser, the process orchestrator and the runner.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run.
///
/// Parse anomalies are never reported here; only I/O on the script source
/// and failures while driving a subprocess are.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open script {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read script: {0}")]
    Read(#[source] io::Error),

    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("no {stream} pipe for `{command}`")]
    Pipe {
        command: String,
        stream: &'static str,
    },

    #[error("failed to write {answer:?} to `{command}`: {source}")]
    Write {
        command: String,
        answer: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
