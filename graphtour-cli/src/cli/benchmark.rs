//! Wall-clock timing sweep over generated graphs, written as CSV and charts.
//!
//! Each series generates one graph per size and times the searches on it.
//! Hamiltonian series time both searches; the non-Hamiltonian series only
//! times the Hamilton search, which has to exhaust every path before it can
//! report that no cycle exists.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use graphtour_core::{
    DEFAULT_NON_HAMILTONIAN_SATURATION, GraphGenerator, GraphOperations, MIN_HAMILTONIAN_VERTICES,
};
use tracing::{info, instrument};

use super::chart::{ChartLine, write_chart};
use super::commands::{BenchmarkCommand, CliError, GraphKind, generate, generator_for};

/// Largest Hamiltonian graph timed by default.
pub const DEFAULT_MAX_HAMILTONIAN_NODES: usize = 15;
/// Largest non-Hamiltonian graph timed by default.
pub const DEFAULT_MAX_NON_HAMILTONIAN_NODES: usize = 20;
/// Every series starts at the smallest Hamiltonian request.
pub const FIRST_BENCHMARK_SIZE: usize = MIN_HAMILTONIAN_VERTICES;
const CSV_HEADER: &str = "n,euler_seconds,hamilton_seconds";

/// Graph family timed by one series.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SeriesPlan {
    /// File stem of the CSV and chart outputs.
    pub name: &'static str,
    /// Chart caption.
    pub title: &'static str,
    /// Kind of graph generated.
    pub kind: GraphKind,
    /// Saturation passed to Hamiltonian generation.
    pub saturation: u8,
    /// Vertex counts swept.
    pub sizes: RangeInclusive<usize>,
}

/// The three series produced by `graphtour benchmark`, sweeping from
/// [`FIRST_BENCHMARK_SIZE`] up to the given maxima.
#[must_use]
pub fn default_series(max_hamiltonian: usize, max_non_hamiltonian: usize) -> [SeriesPlan; 3] {
    [
        SeriesPlan {
            name: "hamiltonian_30",
            title: "Hamiltonian graphs, 30% saturation",
            kind: GraphKind::Hamiltonian,
            saturation: 30,
            sizes: FIRST_BENCHMARK_SIZE..=max_hamiltonian,
        },
        SeriesPlan {
            name: "hamiltonian_70",
            title: "Hamiltonian graphs, 70% saturation",
            kind: GraphKind::Hamiltonian,
            saturation: 70,
            sizes: FIRST_BENCHMARK_SIZE..=max_hamiltonian,
        },
        SeriesPlan {
            name: "non_hamiltonian",
            title: "Non-Hamiltonian graphs",
            kind: GraphKind::NonHamiltonian,
            saturation: DEFAULT_NON_HAMILTONIAN_SATURATION,
            sizes: FIRST_BENCHMARK_SIZE..=max_non_hamiltonian,
        },
    ]
}

/// Timings for one graph size.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Sample {
    /// Vertex count.
    pub n: usize,
    /// Euler search time; absent for non-Hamiltonian series.
    pub euler: Option<Duration>,
    /// Hamilton search time.
    pub hamilton: Duration,
}

/// Timings for one series and the files they were written to.
#[derive(Debug, Clone)]
pub struct SeriesResult {
    /// Series definition.
    pub plan: SeriesPlan,
    /// CSV path.
    pub path: PathBuf,
    /// SVG chart path.
    pub chart: PathBuf,
    /// One sample per size, ascending.
    pub samples: Vec<Sample>,
}

/// Outcome of a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkSummary {
    /// Directory holding the CSV and chart files.
    pub out_dir: PathBuf,
    /// Results in execution order.
    pub series: Vec<SeriesResult>,
}

impl BenchmarkSummary {
    pub(super) fn render(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "benchmark results in {}", self.out_dir.display())?;
        writeln!(
            writer,
            "{:<16} {:>3} {:>14} {:>14}",
            "series", "n", "euler_s", "hamilton_s"
        )?;
        for series in &self.series {
            for sample in &series.samples {
                let euler = sample
                    .euler
                    .map_or_else(|| "-".to_owned(), |elapsed| format!("{:.6}", elapsed.as_secs_f64()));
                writeln!(
                    writer,
                    "{:<16} {:>3} {:>14} {:>14.6}",
                    series.plan.name,
                    sample.n,
                    euler,
                    sample.hamilton.as_secs_f64()
                )?;
            }
        }
        Ok(())
    }
}

#[instrument(name = "cli.benchmark", err, skip_all, fields(out_dir = %command.out_dir.display()))]
pub(super) fn run_benchmark(command: &BenchmarkCommand) -> Result<BenchmarkSummary, CliError> {
    for (flag, provided) in [
        ("--max-hamiltonian-nodes", command.max_hamiltonian_nodes),
        ("--max-non-hamiltonian-nodes", command.max_non_hamiltonian_nodes),
    ] {
        if provided < FIRST_BENCHMARK_SIZE {
            return Err(CliError::InvalidBenchmarkSize {
                flag,
                provided,
                minimum: FIRST_BENCHMARK_SIZE,
            });
        }
    }
    fs::create_dir_all(&command.out_dir).map_err(|source| CliError::Io {
        path: command.out_dir.clone(),
        source,
    })?;
    let mut generator = generator_for(command.seed);
    let series = default_series(
        command.max_hamiltonian_nodes,
        command.max_non_hamiltonian_nodes,
    )
    .into_iter()
    .map(|plan| run_series(&mut generator, plan, &command.out_dir))
    .collect::<Result<Vec<_>, _>>()?;
    Ok(BenchmarkSummary {
        out_dir: command.out_dir.clone(),
        series,
    })
}

#[instrument(name = "cli.benchmark_series", err, skip_all, fields(series = plan.name))]
pub(super) fn run_series(
    generator: &mut GraphGenerator,
    plan: SeriesPlan,
    out_dir: &Path,
) -> Result<SeriesResult, CliError> {
    let mut samples = Vec::new();
    for n in plan.sizes.clone() {
        let generated = generate(generator, plan.kind, n, plan.saturation)?;
        let operations = GraphOperations::new(generated.into_graph());
        let euler = match plan.kind {
            GraphKind::Hamiltonian => Some(time(|| operations.find_euler_cycle())),
            GraphKind::NonHamiltonian => None,
        };
        let hamilton = time(|| operations.find_hamilton_cycle());
        info!(
            n,
            euler_seconds = euler.map(|elapsed| elapsed.as_secs_f64()),
            hamilton_seconds = hamilton.as_secs_f64(),
            "benchmark sample"
        );
        samples.push(Sample { n, euler, hamilton });
    }

    let path = out_dir.join(format!("{}_benchmark.csv", plan.name));
    write_csv(&path, &samples)?;
    let chart = out_dir.join(format!("{}_benchmark.svg", plan.name));
    write_chart(&chart, plan.title, &chart_lines(&samples)).map_err(|source| {
        CliError::Chart {
            path: chart.clone(),
            source,
        }
    })?;
    info!(csv = %path.display(), chart = %chart.display(), "benchmark series written");
    Ok(SeriesResult {
        plan,
        path,
        chart,
        samples,
    })
}

fn time<T>(operation: impl FnOnce() -> T) -> Duration {
    let started = Instant::now();
    let result = operation();
    let elapsed = started.elapsed();
    drop(result);
    elapsed
}

fn chart_lines(samples: &[Sample]) -> [ChartLine; 2] {
    [
        ChartLine {
            label: "Euler cycle",
            points: samples
                .iter()
                .filter_map(|sample| sample.euler.map(|elapsed| (sample.n, elapsed.as_secs_f64())))
                .collect(),
        },
        ChartLine {
            label: "Hamilton cycle",
            points: samples
                .iter()
                .map(|sample| (sample.n, sample.hamilton.as_secs_f64()))
                .collect(),
        },
    ]
}

fn write_csv(path: &Path, samples: &[Sample]) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    write_rows(&mut writer, samples)
        .and_then(|()| writer.flush())
        .map_err(io_error)
}

fn write_rows(writer: &mut impl Write, samples: &[Sample]) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for sample in samples {
        let euler = sample
            .euler
            .map(|elapsed| format!("{:.9}", elapsed.as_secs_f64()))
            .unwrap_or_default();
        writeln!(
            writer,
            "{},{euler},{:.9}",
            sample.n,
            sample.hamilton.as_secs_f64()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_leave_euler_blank_when_not_measured() {
        let samples = [
            Sample {
                n: 11,
                euler: Some(Duration::from_millis(2)),
                hamilton: Duration::from_micros(1_500),
            },
            Sample {
                n: 12,
                euler: None,
                hamilton: Duration::from_secs(1),
            },
        ];
        let mut out = Vec::new();
        write_rows(&mut out, &samples).expect("write to vec");
        assert_eq!(
            String::from_utf8(out).expect("utf-8"),
            "n,euler_seconds,hamilton_seconds\n\
             11,0.002000000,0.001500000\n\
             12,,1.000000000\n"
        );
    }

    #[test]
    fn default_series_match_documented_sweeps() {
        let series = default_series(
            DEFAULT_MAX_HAMILTONIAN_NODES,
            DEFAULT_MAX_NON_HAMILTONIAN_NODES,
        );
        let names: Vec<&str> = series.iter().map(|plan| plan.name).collect();
        assert_eq!(names, ["hamiltonian_30", "hamiltonian_70", "non_hamiltonian"]);
        assert_eq!(series[0].sizes, 11..=15);
        assert_eq!(series[1].sizes, 11..=15);
        assert_eq!(series[2].sizes, 11..=20);
    }

    #[test]
    fn chart_lines_skip_unmeasured_euler_times() {
        let samples = [
            Sample {
                n: 11,
                euler: None,
                hamilton: Duration::from_millis(4),
            },
            Sample {
                n: 12,
                euler: None,
                hamilton: Duration::from_millis(9),
            },
        ];
        let [euler, hamilton] = chart_lines(&samples);
        assert!(euler.points.is_empty());
        assert_eq!(hamilton.points, [(11, 0.004), (12, 0.009)]);
    }
}
