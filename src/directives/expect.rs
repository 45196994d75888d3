//! [`ExpectPrompt`] directive — registers a prompt, or seals the job.
//!
//! Script syntax:
//! - `expect "Password:"` — opens a prompt for the following `send`
//! - `expect eof` — ends the job description

use crate::directive::{Directive, ParseState};

/// Token that closes a job instead of naming a prompt.
pub const EOF_MARKER: &str = "eof";

/// Inserts the space-joined tokens as a prompt with an empty answer and makes
/// it the target of the next `send`. Re-registering a prompt discards the
/// answer it had.
///
/// A line whose first token is `eof` seals the job instead; any tokens after
/// it are ignored.
pub struct ExpectPrompt;

impl Directive for ExpectPrompt {
    const NAME: &'static str = "expect";

    fn apply(args: &[&str], state: &mut ParseState) {
        if args.first() == Some(&EOF_MARKER) {
            state.seal();
            return;
        }
        let prompt = args.join(" ");
        state.job_mut().expectations.insert(prompt.clone());
        state.set_prompt(prompt);
    }
}
