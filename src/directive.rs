//! The [`Directive`] trait and the [`ParseState`] directives operate on.

use crate::job::Job;

/// Accumulator threaded through the parser.
///
/// Holds the job under construction, the prompt the next `send` answers, and
/// the jobs sealed so far.
#[derive(Debug, Default)]
pub struct ParseState {
    job: Job,
    prompt: Option<String>,
    sealed: Vec<Job>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The job currently being built.
    pub fn job_mut(&mut self) -> &mut Job {
        &mut self.job
    }

    /// The prompt opened by the most recent `expect` in this job.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = Some(prompt.into());
    }

    /// Append the current job to the output and start a fresh one.
    pub fn seal(&mut self) {
        let job = std::mem::take(&mut self.job);
        self.prompt = None;
        self.sealed.push(job);
    }

    /// Consume the state, returning every sealed job in script order.
    ///
    /// A job that was never sealed is dropped.
    pub fn finish(self) -> Vec<Job> {
        if self.job != Job::default() {
            tracing::debug!(job = %self.job, "dropping job without `expect eof`");
        }
        self.sealed
    }
}

/// A script keyword and the effect its line has on the [`ParseState`].
///
/// To add a directive:
///
/// 1. Define a unit struct implementing this trait, with `NAME` set to the
///    script keyword.
/// 2. Re-export it from `src/directives/mod.rs`.
/// 3. Add `(MyDirective::NAME, MyDirective::apply)` to the registry in
///    [`crate::parser`].
pub trait Directive {
    /// The first token of the lines this directive handles.
    const NAME: &'static str;

    /// Apply one script line. `args` holds every token after the keyword and
    /// is never empty.
    fn apply(args: &[&str], state: &mut ParseState);
}
