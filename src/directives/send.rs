//! [`SendAnswer`] directive — assigns the answer for the open prompt.
//!
//! Script syntax: `send "text here"`

use crate::directive::{Directive, ParseState};

/// Sets the space-joined tokens as the answer to the prompt opened by the
/// preceding `expect`. Without an open prompt the line is ignored.
pub struct SendAnswer;

impl Directive for SendAnswer {
    const NAME: &'static str = "send";

    fn apply(args: &[&str], state: &mut ParseState) {
        let answer = args.join(" ");
        let Some(prompt) = state.prompt().map(str::to_owned) else {
            tracing::debug!(%answer, "ignoring `send` with no open prompt");
            return;
        };
        state.job_mut().expectations.answer(&prompt, answer);
    }
}
