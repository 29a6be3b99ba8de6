//! Command implementations and argument parsing for the graphtour CLI.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphtour_core::{
    Cycle, DEFAULT_NON_HAMILTONIAN_SATURATION, GeneratedGraph, GenerationStats, GeneratorError,
    GeneratorParams, Graph, GraphGenerator, GraphOperations, GraphReport,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::benchmark::{
    BenchmarkSummary, DEFAULT_MAX_HAMILTONIAN_NODES, DEFAULT_MAX_NON_HAMILTONIAN_NODES,
    run_benchmark,
};
use super::chart::ChartError;
use super::interactive::{Session, SessionSummary};
use super::tikz::{DEFAULT_RADIUS, ExportError, write_tikz};

/// Saturation percentages accepted on the command line.
pub const SUPPORTED_SATURATIONS: [u8; 2] = [30, 70];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphtour",
    about = "Generate random graphs and search them for Euler and Hamilton cycles."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one graph and run the requested actions on it.
    Run(RunCommand),
    /// Prompt for graph parameters, then loop over an action menu.
    Interactive(InteractiveCommand),
    /// Time both searches over a sweep of graph sizes and write CSV files and
    /// charts.
    Benchmark(BenchmarkCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Kind of graph to generate.
    #[command(subcommand)]
    pub mode: RunMode,
}

/// Graph kinds the `run` command can generate.
#[derive(Debug, Subcommand, Clone)]
pub enum RunMode {
    /// Generate a Hamiltonian graph with all-even degrees.
    Hamiltonian(HamiltonianArgs),
    /// Generate a graph with one isolated vertex.
    NonHamiltonian(NonHamiltonianArgs),
}

/// Arguments for Hamiltonian generation.
#[derive(Debug, Args, Clone)]
pub struct HamiltonianArgs {
    /// Number of vertices; must exceed 10.
    #[arg(long)]
    pub nodes: usize,

    /// Target edge saturation in percent (30 or 70).
    #[arg(long, value_parser = parse_saturation)]
    pub saturation: u8,

    /// Seed, actions and export options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for non-Hamiltonian generation.
#[derive(Debug, Args, Clone)]
pub struct NonHamiltonianArgs {
    /// Number of vertices; must be at least 2.
    #[arg(long)]
    pub nodes: usize,

    /// Seed, actions and export options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options shared by every `run` mode.
#[derive(Debug, Args, Clone, Default)]
pub struct OutputArgs {
    /// Seed for reproducible generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Action to perform on the generated graph; repeatable.
    #[arg(long = "action", value_enum)]
    pub actions: Vec<Action>,

    /// Write the graph as a TikZ picture to this path.
    #[arg(long)]
    pub tikz: Option<PathBuf>,
}

/// Options accepted by the `interactive` command.
#[derive(Debug, Args, Clone)]
pub struct InteractiveCommand {
    /// Kind of graph to generate.
    #[arg(value_enum)]
    pub kind: GraphKind,

    /// Seed for reproducible generation.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `benchmark` command.
#[derive(Debug, Args, Clone)]
pub struct BenchmarkCommand {
    /// Directory receiving the CSV and SVG files; created if missing.
    #[arg(long = "out-dir")]
    pub out_dir: PathBuf,

    /// Largest Hamiltonian graph timed; sweeps start at 11 vertices.
    #[arg(long = "max-hamiltonian-nodes", default_value_t = DEFAULT_MAX_HAMILTONIAN_NODES)]
    pub max_hamiltonian_nodes: usize,

    /// Largest non-Hamiltonian graph timed. The search on these graphs is
    /// exhaustive, so its running time grows exponentially with this bound.
    #[arg(
        long = "max-non-hamiltonian-nodes",
        default_value_t = DEFAULT_MAX_NON_HAMILTONIAN_NODES
    )]
    pub max_non_hamiltonian_nodes: usize,

    /// Seed for reproducible generation.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Kind of graph to generate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum GraphKind {
    /// Contains a Hamilton cycle and has all-even degrees.
    Hamiltonian,
    /// Contains an isolated vertex.
    NonHamiltonian,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hamiltonian => f.write_str("hamiltonian"),
            Self::NonHamiltonian => f.write_str("non-hamiltonian"),
        }
    }
}

/// Analyses that can be run on a generated graph.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum Action {
    /// Print the adjacency report.
    Print,
    /// Search for an Euler circuit.
    Euler,
    /// Search for a Hamilton cycle.
    Hamilton,
}

impl Action {
    /// Runs the action against `operations`.
    #[must_use]
    pub fn perform(self, operations: &GraphOperations) -> ActionOutcome {
        match self {
            Self::Print => ActionOutcome::Report(operations.report()),
            Self::Euler => ActionOutcome::Euler(operations.find_euler_cycle()),
            Self::Hamilton => ActionOutcome::Hamilton(operations.find_hamilton_cycle()),
        }
    }
}

/// Result of one [`Action`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ActionOutcome {
    /// Adjacency report.
    Report(GraphReport),
    /// Euler circuit, if one exists.
    Euler(Option<Cycle>),
    /// Hamilton cycle, if one exists.
    Hamilton(Option<Cycle>),
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report(report) => write!(f, "{report}"),
            Self::Euler(Some(cycle)) => write!(f, "Euler cycle: {cycle}"),
            Self::Euler(None) => f.write_str("No Euler cycle found"),
            Self::Hamilton(Some(cycle)) => write!(f, "Hamilton cycle: {cycle}"),
            Self::Hamilton(None) => f.write_str("No Hamilton cycle found"),
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file or directory could not be created or written.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading from or writing to the interactive terminal failed.
    #[error("interactive session I/O failed: {source}")]
    Session {
        /// Underlying stream error.
        #[source]
        source: io::Error,
    },
    /// Saturation outside the supported set.
    #[error("saturation must be 30 or 70 (got `{provided}`)")]
    InvalidSaturation {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// A benchmark size bound is below the smallest sweep size.
    #[error("{flag} must be at least {minimum} (got {provided})")]
    InvalidBenchmarkSize {
        /// Flag carrying the bound.
        flag: &'static str,
        /// Value supplied by the user.
        provided: usize,
        /// Smallest accepted bound.
        minimum: usize,
    },
    /// A benchmark chart could not be rendered.
    #[error("failed to render chart `{path}`: {source}")]
    Chart {
        /// Chart path.
        path: PathBuf,
        /// Underlying rendering failure.
        #[source]
        source: ChartError,
    },
    /// TikZ export failed.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// Graph generation rejected the request.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Kind of graph generated.
    pub kind: GraphKind,
    /// Vertex count.
    pub vertices: usize,
    /// Edge count after generation.
    pub edges: usize,
    /// Realised edge density in percent.
    pub saturation_percent: f64,
    /// Generator bookkeeping.
    pub stats: GenerationStats,
    /// One outcome per requested action, in request order.
    pub outcomes: Vec<ActionOutcome>,
    /// Where the TikZ picture was written, if requested.
    pub tikz: Option<PathBuf>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of `run`.
    Run(RunSummary),
    /// Result of `interactive`.
    Interactive(SessionSummary),
    /// Result of `benchmark`.
    Benchmark(BenchmarkSummary),
}

/// Parses a saturation argument, accepting only 30 or 70.
///
/// # Errors
/// Returns [`CliError::InvalidSaturation`] for anything else.
///
/// # Examples
/// ```
/// use graphtour_cli::cli::parse_saturation;
///
/// assert_eq!(parse_saturation(" 70 ").ok(), Some(70));
/// assert!(parse_saturation("50").is_err());
/// ```
pub fn parse_saturation(raw: &str) -> Result<u8, CliError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|value| SUPPORTED_SATURATIONS.contains(value))
        .ok_or_else(|| CliError::InvalidSaturation {
            provided: raw.trim().to_owned(),
        })
}

/// Builds a generator, seeded when `seed` is set.
#[must_use]
pub fn generator_for(seed: Option<u64>) -> GraphGenerator {
    let params = GeneratorParams::default();
    GraphGenerator::new(match seed {
        Some(seed) => params.with_rng_seed(seed),
        None => params,
    })
}

/// Executes the CLI command represented by `cli`.
///
/// `input` and `output` back the interactive session; other commands ignore
/// them and report through the returned summary.
///
/// # Errors
/// Returns [`CliError`] when generation, export or terminal I/O fails.
///
/// # Examples
/// ```
/// use std::io;
///
/// use graphtour_cli::cli::{Cli, ExecutionSummary, run_cli};
/// use clap::Parser;
///
/// let cli = Cli::try_parse_from([
///     "graphtour", "run", "hamiltonian", "--nodes", "12", "--saturation", "30",
///     "--seed", "7", "--action", "hamilton",
/// ])?;
/// let ExecutionSummary::Run(summary) = run_cli(cli, io::empty(), io::sink())? else {
///     unreachable!("run produces a run summary");
/// };
/// assert_eq!(summary.vertices, 12);
/// assert_eq!(summary.outcomes.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, input, output),
    fields(command = field::Empty),
)]
pub fn run_cli<R: BufRead, W: Write>(
    cli: Cli,
    input: R,
    output: W,
) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run).map(ExecutionSummary::Run)
        }
        Command::Interactive(interactive) => {
            span.record("command", field::display("interactive"));
            let mut generator = generator_for(interactive.seed);
            Session::new(input, output)
                .run(interactive.kind, &mut generator)
                .map(ExecutionSummary::Interactive)
        }
        Command::Benchmark(benchmark) => {
            span.record("command", field::display("benchmark"));
            run_benchmark(&benchmark).map(ExecutionSummary::Benchmark)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(mode = field::Empty, nodes = field::Empty, seed = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let span = Span::current();
    let (kind, nodes, saturation, output) = match command.mode {
        RunMode::Hamiltonian(args) => (
            GraphKind::Hamiltonian,
            args.nodes,
            args.saturation,
            args.output,
        ),
        RunMode::NonHamiltonian(args) => (
            GraphKind::NonHamiltonian,
            args.nodes,
            DEFAULT_NON_HAMILTONIAN_SATURATION,
            args.output,
        ),
    };
    span.record("mode", field::display(kind));
    span.record("nodes", nodes);
    if let Some(seed) = output.seed {
        span.record("seed", seed);
    }

    let mut generator = generator_for(output.seed);
    let generated = generate(&mut generator, kind, nodes, saturation)?;
    let stats = generated.stats();
    let operations = GraphOperations::new(generated.into_graph());
    let outcomes = output
        .actions
        .iter()
        .map(|action| action.perform(&operations))
        .collect();
    if let Some(path) = &output.tikz {
        export_tikz(operations.graph(), path)?;
    }

    let graph = operations.graph();
    info!(
        mode = %kind,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "command completed"
    );
    Ok(RunSummary {
        kind,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        saturation_percent: graph.saturation_percent(),
        stats,
        outcomes,
        tikz: output.tikz,
    })
}

/// Generates a graph of `kind`. `saturation` only applies to Hamiltonian
/// graphs; non-Hamiltonian density comes from the generator parameters.
pub(super) fn generate(
    generator: &mut GraphGenerator,
    kind: GraphKind,
    nodes: usize,
    saturation: u8,
) -> Result<GeneratedGraph, CliError> {
    let generated = match kind {
        GraphKind::Hamiltonian => generator.generate_hamiltonian(nodes, saturation)?,
        GraphKind::NonHamiltonian => generator.generate_non_hamiltonian(nodes)?,
    };
    Ok(generated)
}

#[instrument(name = "cli.export_tikz", err, skip_all, fields(path = %path.display()))]
pub(super) fn export_tikz(graph: &Graph, path: &Path) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_tikz(graph, DEFAULT_RADIUS, &mut writer)?;
    writer.flush().map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(vertices = graph.vertex_count(), "tikz picture written");
    Ok(())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Run(run) => render_run(run, &mut writer),
        ExecutionSummary::Interactive(session) => {
            writeln!(writer, "session ended after {} commands", session.commands)
        }
        ExecutionSummary::Benchmark(benchmark) => benchmark.render(&mut writer),
    }
}

fn render_run(run: &RunSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "mode: {}", run.kind)?;
    writeln!(writer, "vertices: {}", run.vertices)?;
    writeln!(writer, "edges: {}", run.edges)?;
    writeln!(writer, "saturation: {:.2}%", run.saturation_percent)?;
    if run.stats.budget_exhausted {
        writeln!(
            writer,
            "note: sampling stopped at {} of {} target edges",
            run.stats.sampled_edges, run.stats.target_edges
        )?;
    }
    for outcome in &run.outcomes {
        writeln!(writer, "{outcome}")?;
    }
    if let Some(path) = &run.tikz {
        writeln!(writer, "tikz: {}", path.display())?;
    }
    Ok(())
}
