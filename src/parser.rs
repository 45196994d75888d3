//! Script parser for the expectrun scripting language.
//!
//! The entry points are [`parse_str`], [`parse_reader`] and [`parse_file`].
//! Parsing is permissive: lines with fewer than two tokens and lines with an
//! unknown keyword are skipped without a diagnostic, and a job that is not
//! closed by `expect eof` before the script ends is dropped.

use crate::directive::{Directive, ParseState};
use crate::directives::{ExpectPrompt, SendAnswer, Spawn};
use crate::error::{Error, Result};
use crate::job::Job;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a script held in memory.
///
/// # Example
///
/// ```
/// use expectrun::parse_str;
///
/// let jobs = parse_str("spawn passwd\nexpect \"New password:\"\nsend \"hunter2\"\nexpect eof\n");
/// assert_eq!(jobs.len(), 1);
/// assert_eq!(jobs[0].command, "passwd");
/// ```
pub fn parse_str(content: &str) -> Vec<Job> {
    let mut state = ParseState::new();
    for line in content.lines() {
        parse_line(line, &mut state);
    }
    state.finish()
}

/// Parse a script line by line from any buffered source.
///
/// Lines are decoded lossily, so bytes that are not valid UTF-8 become
/// `U+FFFD` instead of failing the parse.
///
/// # Errors
///
/// Returns [`Error::Read`] if reading from the source fails.
pub fn parse_reader(mut reader: impl BufRead) -> Result<Vec<Job>> {
    let mut state = ParseState::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(Error::Read)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        parse_line(line, &mut state);
    }
    Ok(state.finish())
}

/// Open a script file and parse it.
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be opened, or [`Error::Read`]
/// if reading it fails.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Job>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file))
}

type ApplyFn = fn(&[&str], &mut ParseState);

static REGISTRY: &[(&str, ApplyFn)] = &[
    (Spawn::NAME, Spawn::apply),
    (ExpectPrompt::NAME, ExpectPrompt::apply),
    (SendAnswer::NAME, SendAnswer::apply),
];

/// Dispatch one line to the directive named by its first token.
fn parse_line(line: &str, state: &mut ParseState) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [name, args @ ..] = tokens.as_slice() else {
        return;
    };
    if args.is_empty() {
        return;
    }
    match REGISTRY.iter().find(|(keyword, _)| keyword == name) {
        Some((_, apply)) => apply(args, state),
        None => tracing::debug!(line, "ignoring unknown directive"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LOGIN: &str = "spawn prog\n\
                         expect \"Login:\"\n\
                         send \"bob\"\n\
                         expect \"Password:\"\n\
                         send \"secret\"\n\
                         expect eof\n";

    #[test]
    fn test_parse_login_dialog() {
        let jobs = parse_str(LOGIN);
        assert_eq!(jobs.len(), 1);
        let job = &jobs[0];
        assert_eq!(job.command, "prog");
        assert!(job.args.is_empty());
        assert_eq!(job.expectations.get("\"Login:\""), Some("\"bob\""));
        assert_eq!(job.expectations.get("\"Password:\""), Some("\"secret\""));
    }

    #[test]
    fn test_one_job_per_eof() {
        let script = "spawn a\nexpect eof\nspawn b x y\nexpect eof\nexpect eof\n";
        let jobs = parse_str(script);
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].command, "a");
        assert_eq!(jobs[1].command, "b");
        assert_eq!(jobs[1].args, vec!["x", "y"]);
        assert_eq!(jobs[2], Job::default());
    }

    #[test]
    fn test_trailing_job_dropped() {
        let with_tail = format!("{LOGIN}spawn x\n");
        assert_eq!(parse_str(&with_tail), parse_str(LOGIN));

        let with_prompt = format!("{LOGIN}spawn x\nexpect ok\nsend y\n");
        assert_eq!(parse_str(&with_prompt), parse_str(LOGIN));
    }

    #[test]
    fn test_eof_with_trailing_words_seals() {
        let jobs = parse_str("spawn a\nexpect eof now\nspawn b\nexpect eof\n");
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].command, "a");
        assert_eq!(jobs[1].command, "b");
    }

    #[test]
    fn test_state_resets_between_jobs() {
        let script = "spawn first\nexpect a\nexpect eof\nsend stray\nspawn second\nexpect eof\n";
        let jobs = parse_str(script);
        assert_eq!(jobs.len(), 2);
        assert!(jobs[1].expectations.is_empty());
        assert_eq!(jobs[0].expectations.get("a"), Some(""));
    }

    #[test]
    fn test_duplicate_prompt_last_pair_wins() {
        let script = "spawn p\nexpect Go?\nsend one\nexpect other\nsend two\nexpect Go?\nsend three\nexpect eof\n";
        let jobs = parse_str(script);
        let table = &jobs[0].expectations;
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Go?"), Some("three"));
        assert_eq!(table.get("other"), Some("two"));
    }

    #[test]
    fn test_duplicate_prompt_without_send_clears_answer() {
        let script = "spawn p\nexpect Go?\nsend one\nexpect Go?\nexpect eof\n";
        let jobs = parse_str(script);
        assert_eq!(jobs[0].expectations.get("Go?"), Some(""));
    }

    #[test]
    fn test_short_and_unknown_lines_ignored() {
        let script = "\nspawn\nexpect\nsend\n# comment here\nwait 1s\nspawn cat\n   \nexpect eof\n";
        let jobs = parse_str(script);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].command, "cat");
        assert!(jobs[0].expectations.is_empty());
    }

    #[test]
    fn test_bare_spawn_then_eof_gives_empty_command() {
        let jobs = parse_str("spawn\nexpect eof\n");
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].command, "");
    }

    #[test]
    fn test_send_before_expect_is_ignored() {
        let jobs = parse_str("spawn p\nsend early\nexpect eof\n");
        assert!(jobs[0].expectations.is_empty());
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let jobs = parse_str("spawn   ls\t-l\nexpect   Are  you   sure?\nsend  yes  please\nexpect eof\n");
        assert_eq!(jobs[0].command, "ls");
        assert_eq!(jobs[0].args, vec!["-l"]);
        assert_eq!(
            jobs[0].expectations.get("Are you sure?"),
            Some("yes please")
        );
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let jobs = parse_reader(Cursor::new(LOGIN)).unwrap();
        assert_eq!(jobs, parse_str(LOGIN));
    }

    #[test]
    fn test_parse_reader_skips_invalid_utf8_line() {
        let bytes: &[u8] = b"spawn echo\nnote caf\xe9\nexpect eof\n";
        let jobs = parse_reader(bytes).unwrap();
        assert_eq!(jobs, parse_str("spawn echo\nexpect eof\n"));
    }

    #[test]
    fn test_parse_reader_crlf_and_missing_final_newline() {
        let bytes: &[u8] = b"spawn cat\r\nexpect Name?\r\nsend bob\r\nexpect eof";
        let jobs = parse_reader(bytes).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].command, "cat");
        assert_eq!(jobs[0].expectations.get("Name?"), Some("bob"));
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file("/nonexistent/dir/script.exp").unwrap_err();
        assert!(matches!(err, Error::Open { .. }), "got: {err}");
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login.exp");
        std::fs::write(&path, LOGIN).unwrap();
        assert_eq!(parse_file(&path).unwrap(), parse_str(LOGIN));
    }
}
