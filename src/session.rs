use crate::error::{Error, Result};
use crate::handoff::handoff;
use crate::job::{Expectations, Job};
use crate::matcher::answer_prompts;
use crate::reader::read_tokens;
use crate::runner::JobHandler;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

/// A running job: the child process and both ends of its piped stdio.
///
/// stderr is inherited from this process and never inspected.
pub struct Session {
    label: String,
    child: Child,
    stdin: ChildStdin,
    stdout: ChildStdout,
}

impl Session {
    /// Spawn the job's command with stdin and stdout piped.
    ///
    /// The child is killed if the session is dropped before it has been
    /// waited on.
    pub fn spawn(job: &Job) -> Result<Self> {
        let label = job.to_string();
        let mut child = Command::new(&job.command)
            .args(&job.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Spawn {
                command: label.clone(),
                source,
            })?;

        let stdin = child.stdin.take().ok_or_else(|| Error::Pipe {
            command: label.clone(),
            stream: "stdin",
        })?;
        let stdout = child.stdout.take().ok_or_else(|| Error::Pipe {
            command: label.clone(),
            stream: "stdout",
        })?;

        tracing::debug!(pid = ?child.id(), command = %label, "spawned");
        Ok(Self {
            label,
            child,
            stdin,
            stdout,
        })
    }

    /// Drive the session to completion.
    ///
    /// Output is read on a separate task while answers are written from the
    /// calling task. Once answering stops, stdin is closed and the child is
    /// waited on whatever the outcome; its exit status is only logged.
    pub async fn run(self, expectations: &Expectations) -> Result<()> {
        let Session {
            label,
            mut child,
            mut stdin,
            stdout,
        } = self;

        let (publisher, mut subscriber) = handoff();
        let reader = tokio::spawn(read_tokens(stdout, publisher));

        let result = answer_prompts(&mut stdin, &mut subscriber, expectations, &label).await;
        drop(subscriber);
        drop(stdin);

        match child.wait().await {
            Ok(status) => tracing::info!(command = %label, %status, "process exited"),
            Err(e) => tracing::warn!(command = %label, error = %e, "failed to wait for process"),
        }

        if result.is_ok() {
            if let Err(e) = reader.await {
                tracing::warn!(command = %label, error = %e, "output reader failed");
            }
        } else {
            reader.abort();
        }

        result
    }
}

/// Runs each job as a real subprocess.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orchestrator;

#[async_trait(?Send)]
impl JobHandler for Orchestrator {
    async fn handle(&self, job: &Job) -> Result<()> {
        Session::spawn(job)?.run(&job.expectations).await
    }
}
