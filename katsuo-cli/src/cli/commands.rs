//! Command implementations and argument parsing for the katsuo CLI.

use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use katsuo_core::{
    BenchmarkError, FrequencyError, InputError, RegionError,
    benchmark::{
        DEFAULT_BATCH_SIZE, DEFAULT_CAPACITY, DEFAULT_DELETE_RANGE, DEFAULT_WORD_COUNT,
        ProbeBenchConfig, ProbeBenchReport, read_word_list, run_probe_benchmark,
    },
    frequency::{SECRET_RANKS, WordFrequencies, extract_secret},
    regions::{ConnectionPlan, parse_connection_problem},
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "katsuo",
    about = "Linear-probing and union-find exercises."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Extract the secret word from a prose corpus.
    Secret(SecretCommand),
    /// Time batched inserts and measure deletion probe lengths.
    Probe(ProbeCommand),
    /// Plan the cheapest way to serve every region.
    Connect(ConnectCommand),
}

/// Options accepted by the `secret` command.
#[derive(Debug, Args, Clone)]
pub struct SecretCommand {
    /// Path to a UTF-8 prose file.
    pub path: PathBuf,
}

/// Options accepted by the `probe` command.
#[derive(Debug, Args, Clone)]
pub struct ProbeCommand {
    /// Path to a word list, one word per line.
    pub path: PathBuf,

    /// Number of slots in the table.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: NonZeroUsize,

    /// Number of leading words to insert.
    #[arg(long = "word-count", default_value_t = DEFAULT_WORD_COUNT)]
    pub word_count: usize,

    /// Keys inserted per timed batch.
    #[arg(long = "batch-size", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// First word index to delete.
    #[arg(long = "delete-start", default_value_t = *DEFAULT_DELETE_RANGE.start())]
    pub delete_start: usize,

    /// Last word index to delete (inclusive).
    #[arg(long = "delete-end", default_value_t = *DEFAULT_DELETE_RANGE.end())]
    pub delete_end: usize,
}

impl ProbeCommand {
    fn config(&self) -> ProbeBenchConfig {
        ProbeBenchConfig {
            capacity: self.capacity,
            word_count: self.word_count,
            batch_size: self.batch_size,
            delete_range: self.delete_start..=self.delete_end,
        }
    }
}

/// Options accepted by the `connect` command.
#[derive(Debug, Args, Clone)]
pub struct ConnectCommand {
    /// Problem file; standard input is read when omitted.
    pub path: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Secret extraction failed.
    #[error(transparent)]
    Frequency(#[from] FrequencyError),
    /// The probe benchmark rejected its configuration.
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),
    /// The connection problem was malformed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Connection planning failed.
    #[error(transparent)]
    Region(#[from] RegionError),
}

impl CliError {
    /// Returns the stable library error code, when the error came from the
    /// core library.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Frequency(err) => Some(err.code().as_str()),
            Self::Benchmark(err) => Some(err.code().as_str()),
            Self::Input(err) => Some(err.code().as_str()),
            Self::Region(err) => Some(err.code().as_str()),
        }
    }
}

/// Result of executing a CLI command.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Concatenated secret word.
    Secret(String),
    /// Probe benchmark timings and statistics.
    Probe(ProbeBenchReport),
    /// Connection plan.
    Connect(ConnectionPlan),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading an input or executing the command fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use katsuo_cli::cli::{Cli, Command, ConnectCommand, Outcome, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "4 0 7\n")?;
/// let cli = Cli {
///     command: Command::Connect(ConnectCommand {
///         path: Some(file.path().to_path_buf()),
///     }),
/// };
/// let Outcome::Connect(plan) = run_cli(cli)? else {
///     return Err("expected a connection plan".into());
/// };
/// assert_eq!(plan.total_cost(), 28);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<Outcome, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Secret(command) => {
            span.record("command", field::display("secret"));
            run_secret(&command)
        }
        Command::Probe(command) => {
            span.record("command", field::display("probe"));
            run_probe(&command)
        }
        Command::Connect(command) => {
            span.record("command", field::display("connect"));
            run_connect(&command)
        }
    }
}

#[instrument(
    name = "cli.secret",
    err,
    skip(command),
    fields(path = field::Empty),
)]
pub(super) fn run_secret(command: &SecretCommand) -> Result<Outcome, CliError> {
    Span::current().record("path", field::display(command.path.display()));
    let text = fs::read_to_string(&command.path).map_err(|source| io_error(&command.path, source))?;
    let frequencies = WordFrequencies::from_text(&text);
    let secret = extract_secret(&frequencies, &SECRET_RANKS)?;
    info!(
        distinct = frequencies.distinct(),
        tokens = frequencies.total(),
        "secret extracted"
    );
    Ok(Outcome::Secret(secret))
}

#[instrument(
    name = "cli.probe",
    err,
    skip(command),
    fields(path = field::Empty, capacity = command.capacity.get()),
)]
pub(super) fn run_probe(command: &ProbeCommand) -> Result<Outcome, CliError> {
    Span::current().record("path", field::display(command.path.display()));
    let reader = open_reader(&command.path)?;
    let words = read_word_list(reader).map_err(|source| io_error(&command.path, source))?;
    let report = run_probe_benchmark(&words, &command.config())?;
    info!(
        words = words.len(),
        batches = report.batches.len(),
        "probe benchmark finished"
    );
    Ok(Outcome::Probe(report))
}

#[instrument(
    name = "cli.connect",
    err,
    skip(command),
    fields(source = field::Empty),
)]
pub(super) fn run_connect(command: &ConnectCommand) -> Result<Outcome, CliError> {
    let span = Span::current();
    let plan = match &command.path {
        Some(path) => {
            span.record("source", field::display(path.display()));
            connect_from_reader(open_reader(path)?)?
        }
        None => {
            span.record("source", field::display("<stdin>"));
            connect_from_reader(io::stdin().lock())?
        }
    };
    Ok(Outcome::Connect(plan))
}

pub(super) fn connect_from_reader(reader: impl Read) -> Result<ConnectionPlan, CliError> {
    let problem = parse_connection_problem(reader)?;
    let plan = problem.solve()?;
    info!(
        regions = problem.region_count,
        roads = problem.roads.len(),
        total_cost = plan.total_cost(),
        "connection plan computed"
    );
    Ok(plan)
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    Ok(BufReader::new(file))
}

fn io_error(path: &Path, source: io::Error) -> CliError {
    CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Renders `outcome` to `writer` in the plain-text format of each command.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use katsuo_cli::cli::{Outcome, render_outcome};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut buffer = Vec::new();
/// render_outcome(&Outcome::Secret("tunabonito".into()), &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "tunabonito\n");
/// # Ok(())
/// # }
/// ```
pub fn render_outcome(outcome: &Outcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Secret(secret) => writeln!(writer, "{secret}"),
        Outcome::Probe(report) => {
            for batch in &report.batches {
                writeln!(
                    writer,
                    "average time for batch {} is {} us",
                    batch.batch,
                    batch.per_key().as_micros()
                )?;
            }
            match &report.probe_stats {
                Some(stats) => writeln!(
                    writer,
                    "min: {} max: {} average: {:.2}",
                    stats.min, stats.max, stats.mean
                ),
                None => writeln!(writer, "no successful deletions"),
            }
        }
        Outcome::Connect(plan) => {
            writeln!(writer, "{} {}", plan.total_cost(), plan.remaining_components())
        }
    }
}
