use crate::error::Result;
use crate::job::Job;
use crate::session::Orchestrator;
use async_trait::async_trait;

/// Executes a single job.
///
/// [`Orchestrator`] is the implementation that spawns real processes; the
/// trait exists so the [`Runner`] can be driven by anything that can run a
/// job.
#[async_trait(?Send)]
pub trait JobHandler {
    async fn handle(&self, job: &Job) -> Result<()>;
}

/// Runs jobs one after another, stopping at the first failure.
#[derive(Debug, Clone, Default)]
pub struct Runner<H = Orchestrator> {
    handler: H,
}

impl Runner {
    /// A runner that spawns each job as a subprocess.
    pub fn new() -> Self {
        Self::with_handler(Orchestrator)
    }
}

impl<H: JobHandler> Runner<H> {
    pub fn with_handler(handler: H) -> Self {
        Self { handler }
    }

    /// Execute `jobs` in order.
    ///
    /// # Errors
    ///
    /// Returns the first job's error; the jobs after it are not started.
    pub async fn execute(&self, jobs: impl IntoIterator<Item = Job>) -> Result<()> {
        for (index, job) in jobs.into_iter().enumerate() {
            tracing::info!(index, job = %job, "starting job");
            if let Err(e) = self.handler.handle(&job).await {
                tracing::error!(index, job = %job, error = %e, "job failed");
                return Err(e);
            }
            tracing::info!(index, "job finished");
        }
        Ok(())
    }
}
