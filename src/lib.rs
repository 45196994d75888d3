//! # Expectrun
//!
//! A minimal expect-style engine for automating interactive programs.
//!
//! A script describes one or more jobs. Each job names a command to spawn and
//! a table of prompts to watch for on its stdout, with the answer to write to
//! its stdin when a prompt shows up. Jobs run one at a time, in script order,
//! and the first failure stops the run.
//!
//! ## Quick start
//!
//! ```no_run
//! use expectrun::{Runner, parse_str};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let script = r#"
//! spawn ftp example.org
//! expect "Name:"
//! send "anonymous"
//! expect "Password:"
//! send "guest"
//! expect eof
//! "#;
//!
//!     let jobs = parse_str(script);
//!     Runner::new().execute(jobs).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Script syntax
//!
//! Lines are split on whitespace. Lines with fewer than two tokens, and lines
//! starting with any other keyword, are ignored.
//!
//! | Line | Effect |
//! |------|--------|
//! | `spawn cmd arg...` | Set the command and arguments of the current job |
//! | `expect text...` | Add a prompt; the next `send` answers it |
//! | `send text...` | Set the answer for the most recent prompt |
//! | `expect eof` | Close the current job and start a new one |
//!
//! A job still open when the script ends is discarded.
//!
//! ## Matching
//!
//! The output reader takes up to [`READ_CHUNK_SIZE`] bytes per read and drops
//! the last byte of each chunk, expecting it to be a newline. What is left is
//! compared for exact equality with every prompt of the job, after all `"`
//! characters are removed from both. On a match the answer, with its quotes
//! removed and a newline appended, is written to the program. Anything else
//! is ignored. A job ends when the program closes its stdout.
//!
//! ## Running jobs without a subprocess
//!
//! Implement [`JobHandler`] to plug a different executor into the [`Runner`]:
//!
//! ```no_run
//! use async_trait::async_trait;
//! use expectrun::{Job, JobHandler, Result, Runner, parse_str};
//!
//! struct DryRun;
//!
//! #[async_trait(?Send)]
//! impl JobHandler for DryRun {
//!     async fn handle(&self, job: &Job) -> Result<()> {
//!         println!("would run: {job}");
//!         Ok(())
//!     }
//! }
//!
//! # async fn demo() -> Result<()> {
//! Runner::with_handler(DryRun)
//!     .execute(parse_str("spawn ls -l\nexpect eof\n"))
//!     .await
//! # }
//! ```

pub mod directive;
pub mod directives;
pub mod error;
pub mod handoff;
pub mod job;
pub mod matcher;
pub mod parser;
pub mod reader;
pub mod runner;
pub mod session;

pub use error::{Error, Result};
pub use job::{Expectation, Expectations, Job};
pub use parser::{parse_file, parse_reader, parse_str};
pub use reader::READ_CHUNK_SIZE;
pub use runner::{JobHandler, Runner};
pub use session::{Orchestrator, Session};
