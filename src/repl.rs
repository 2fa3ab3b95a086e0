//! Interactive read-eval-print loop over a name store.
//!
//! The loop prompts, reads a line, parses and dispatches it, and prints
//! the result or the error. Every error is surfaced as a message and the
//! loop keeps accepting input; only the end of the input stream (or an IO
//! failure on the streams themselves) stops it.
//!
//! The loop is generic over its input and output streams so a whole
//! session can be driven from a test.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::command::{dispatch, Command, Reply};
use crate::error::{NamebookResult, NamebookError};
use crate::store::NameStore;

/// Prompt printed before every command.
const PROMPT: &str = "Enter action: ";

/// Runs the interactive loop until the input stream is exhausted.
pub fn run<S, R, W>(store: &mut S, input: R, mut output: W) -> NamebookResult<()>
where
    S: NameStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match eval(store, &line) {
            // A successful add is silent; the count is the only result
            // a session prints.
            Ok(Reply::Added { name }) => debug!(%name, "session add"),
            Ok(Reply::Count(count)) => writeln!(output, "{count}")?,
            Err(err) => writeln!(output, "Error: {err}")?,
        }
        writeln!(output)?;
    }
    Ok(())
}

/// Parses and dispatches a single line against the store.
fn eval<S>(store: &mut S, line: &str) -> NamebookResult<Reply>
where
    S: NameStore + ?Sized,
{
    let command = Command::parse(line)?;
    let reply = dispatch(&command, store)?;
    Ok(reply)
}

/// Loads names into the store from a reader, one name per line.
///
/// Lines are trimmed and lowercased; blank lines are skipped. A duplicate
/// in the preload data is an error and propagates: a seed list with
/// duplicates is a configuration mistake, not something to paper over.
///
/// Returns how many names were added.
pub fn preload<S, R>(store: &mut S, reader: R) -> NamebookResult<usize>
where
    S: NameStore + ?Sized,
    R: BufRead,
{
    let mut added = 0;
    for line in reader.lines() {
        let line = line?;
        let name = line.trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        store
            .insert(&name)
            .map_err(NamebookError::Duplicate)?;
        added += 1;
    }
    debug!(added, "preloaded names");
    Ok(added)
}

/// Loads names from a file, one name per line. See [`preload`].
pub fn preload_path<S>(store: &mut S, path: &Path) -> NamebookResult<usize>
where
    S: NameStore + ?Sized,
{
    let file = std::fs::File::open(path)?;
    preload(store, std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NameTrie;
    use std::io::Cursor;
    use std::io::Write as _;

    fn session(script: &str) -> String {
        let mut store = NameTrie::new();
        let mut output = Vec::new();
        run(&mut store, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_find_prints_count_add_is_silent() {
        let output = session("add harry\nfind h\nfind z\n");
        assert_eq!(
            output,
            "Enter action: \
             \nEnter action: 1\n\
             \nEnter action: 0\n\
             \nEnter action: "
        );
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let output = session("add anna\nadd anna\nremove anna\nadd\n\nfind anna\n");
        assert!(output.contains("Error: name 'anna' already exists in the notebook"));
        assert!(output.contains("Error: unknown action 'remove', expected 'add' or 'find'"));
        assert!(output.contains("Error: expected exactly two arguments, got 1"));
        assert!(output.contains("Error: input cannot be empty"));
        // The loop survived every error and still answered the final find.
        assert!(output.ends_with("Enter action: 1\n\nEnter action: "));
    }

    #[test]
    fn test_session_normalizes_case() {
        let output = session("ADD Anna\nFIND AN\n");
        assert!(output.ends_with("Enter action: 1\n\nEnter action: "));
    }

    #[test]
    fn test_preload_from_reader() {
        let mut store = NameTrie::new();
        let added = preload(&mut store, Cursor::new("James\n\n  Harry \nanna\n")).unwrap();

        assert_eq!(added, 3);
        assert_eq!(store.count_with_prefix(""), 3);
        assert_eq!(store.count_with_prefix("j"), 1);
        assert_eq!(store.count_with_prefix("h"), 1);
    }

    #[test]
    fn test_preload_rejects_duplicates() {
        let mut store = NameTrie::new();
        let err = preload(&mut store, Cursor::new("anna\nanna\n")).unwrap_err();
        assert!(matches!(err, NamebookError::Duplicate(_)));
    }

    #[test]
    fn test_preload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "james\nharry\nanna").unwrap();

        let mut store = NameTrie::new();
        let added = preload_path(&mut store, file.path()).unwrap();

        assert_eq!(added, 3);
        assert_eq!(store.count_with_prefix("ja"), 1);
    }

    #[test]
    fn test_preload_missing_file_is_io_error() {
        let mut store = NameTrie::new();
        let err = preload_path(&mut store, Path::new("/nonexistent/names.txt")).unwrap_err();
        assert!(matches!(err, NamebookError::Io(_)));
    }
}
