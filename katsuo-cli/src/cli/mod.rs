//! Command-line interface orchestration for katsuo.
//!
//! Three commands share one binary: `secret` ranks the words of a prose file,
//! `probe` benchmarks the linear-probing table against a word list, and
//! `connect` solves a region connection problem read from a file or stdin.

mod commands;

pub use commands::{
    Cli, CliError, Command, ConnectCommand, Outcome, ProbeCommand, SecretCommand,
    render_outcome, run_cli,
};

#[cfg(test)]
mod test_helpers;
