//! [`Job`] and its [`Expectations`] table — one scripted subprocess session.

use std::fmt;

/// Character stripped from prompts, tokens and answers before use.
pub const QUOTE: char = '"';

/// Terminator appended to every answer written to a subprocess.
pub const LINE_TERMINATOR: &str = "\n";

/// A single prompt/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub prompt: String,
    pub answer: String,
}

/// Ordered prompt → answer table.
///
/// Keys are unique: inserting a prompt that is already present replaces the
/// existing entry in place and resets its answer, so the last `expect`/`send`
/// pair for a given prompt text wins. Lookup walks the table in order of first
/// insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectations {
    entries: Vec<Expectation>,
}

impl Expectations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `prompt` with an empty answer, overwriting any previous entry.
    pub fn insert(&mut self, prompt: impl Into<String>) {
        let prompt = prompt.into();
        match self.entries.iter_mut().find(|e| e.prompt == prompt) {
            Some(entry) => entry.answer.clear(),
            None => self.entries.push(Expectation {
                prompt,
                answer: String::new(),
            }),
        }
    }

    /// Assign `answer` to an existing `prompt`. Returns `false` if the prompt
    /// is not in the table.
    pub fn answer(&mut self, prompt: &str, answer: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.prompt == prompt) {
            Some(entry) => {
                entry.answer = answer.into();
                true
            }
            None => false,
        }
    }

    /// Raw answer text for `prompt`, exactly as written in the script.
    pub fn get(&self, prompt: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.prompt == prompt)
            .map(|e| e.answer.as_str())
    }

    /// The line to write in response to `token`, if any prompt matches it.
    ///
    /// Quotes are removed from both the token and each prompt before an exact
    /// comparison. The returned answer has its quotes removed and a line
    /// terminator appended.
    pub fn response_to(&self, token: &str) -> Option<String> {
        let token = strip_quotes(token);
        self.entries
            .iter()
            .find(|e| strip_quotes(&e.prompt) == token)
            .map(|e| {
                let mut line = strip_quotes(&e.answer);
                line.push_str(LINE_TERMINATOR);
                line
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn strip_quotes(s: &str) -> String {
    s.replace(QUOTE, "")
}

/// A command to spawn plus the prompts to answer while it runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Job {
    pub command: String,
    pub args: Vec<String>,
    pub expectations: Expectations,
}

impl Job {
    /// Create a job for `command` with no arguments and an empty table.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add a prompt/answer pair, with the same overwrite rules as the script.
    pub fn expect(mut self, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        let prompt = prompt.into();
        self.expectations.insert(prompt.clone());
        self.expectations.answer(&prompt, answer);
        self
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
