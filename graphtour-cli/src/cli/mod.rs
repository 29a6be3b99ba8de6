//! Command-line interface orchestration for graphtour.
//!
//! `run` generates one graph and applies the requested actions, `interactive`
//! drives a prompt-and-menu session over any reader and writer, and
//! `benchmark` times both searches across a sweep of sizes and writes CSV
//! files with one SVG chart per series.

mod benchmark;
mod chart;
mod commands;
mod interactive;
mod tikz;

pub use benchmark::{
    BenchmarkSummary, DEFAULT_MAX_HAMILTONIAN_NODES, DEFAULT_MAX_NON_HAMILTONIAN_NODES,
    FIRST_BENCHMARK_SIZE, Sample, SeriesPlan, SeriesResult, default_series,
};
pub use chart::{ChartError, ChartLine, write_chart};
pub use commands::{
    Action, ActionOutcome, BenchmarkCommand, Cli, CliError, Command, ExecutionSummary, GraphKind,
    HamiltonianArgs, InteractiveCommand, NonHamiltonianArgs, OutputArgs, RunCommand, RunMode,
    RunSummary, SUPPORTED_SATURATIONS, generator_for, parse_saturation, render_summary, run_cli,
};
pub use interactive::{Session, SessionSummary};
pub use tikz::{DEFAULT_RADIUS, ExportError, write_tikz};
