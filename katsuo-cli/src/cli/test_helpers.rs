//! Small helpers shared across CLI tests.
//!
//! The CLI tests write temporary input files and assert error handling. These
//! helpers keep the individual cases short.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

/// Builds a corpus where `w{rank}` occurs `60 - rank` times.
pub(super) fn graded_corpus(words: usize) -> String {
    let mut lines = Vec::new();
    for rank in 1..=words {
        let line = vec![format!("W{rank}!"); 60 - rank].join(" ");
        lines.push(line);
    }
    lines.join("\n")
}

/// Builds a word list of `count` distinct words, one per line.
pub(super) fn word_list(count: usize) -> String {
    (0..count)
        .map(|index| format!("word{index}"))
        .collect::<Vec<_>>()
        .join("\n")
}
