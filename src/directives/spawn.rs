//! [`Spawn`] directive — sets the command a job runs.
//!
//! Script syntax: `spawn <command> [arg]...`

use crate::directive::{Directive, ParseState};

/// Sets the job's command to the first token and its arguments to the rest,
/// replacing whatever an earlier `spawn` in the same job set.
pub struct Spawn;

impl Directive for Spawn {
    const NAME: &'static str = "spawn";

    fn apply(args: &[&str], state: &mut ParseState) {
        let Some((command, rest)) = args.split_first() else {
            return;
        };
        let job = state.job_mut();
        job.command = (*command).to_string();
        job.args = rest.iter().map(|s| (*s).to_string()).collect();
    }
}
