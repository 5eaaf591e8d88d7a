//! Command line front end: reads an adjacency list and reports whether it describes a cactus.
//!
//! Exit codes: `0` once a verdict is printed (cactus or not), `1` if the graph is rejected
//! (not simple, directed, empty or disconnected), `2` if the input cannot be read or on usage errors.
#![forbid(unsafe_code)]

use std::{
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use cactus::{
    algo::{CactusAnalysis, CactusReport, StartVertex},
    error::GraphError,
    graph::Graph,
    io::{AdjacencyListReader, DotWriter, GraphReader, GraphWriter, ReportWriter},
    node::VertexId,
};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cactus",
    version,
    about = "Decide whether an undirected graph is a cactus"
)]
struct Cli {
    /// Adjacency list with one `<vertex> = <neighbor1> <neighbor2> ...` record per line; `-` reads stdin
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// List every block with its vertices after the verdict
    #[arg(short, long)]
    verbose: bool,

    /// Vertex id the traversals start from (default: smallest id)
    #[arg(long, value_name = "ID")]
    start: Option<VertexId>,

    /// Also write the blocks in GraphViz DOT format to this file
    #[arg(long, value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `cactus=trace` (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn init_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

fn read_graph(input: &Path) -> Result<Graph, GraphError> {
    let reader = AdjacencyListReader::new();
    if input.as_os_str() == "-" {
        reader.try_read_graph(BufReader::new(io::stdin().lock()))
    } else {
        reader.try_read_graph_file(input)
    }
}

fn analyze(cli: &Cli) -> Result<CactusReport, GraphError> {
    let graph = read_graph(&cli.input)?;
    info!(
        vertices = graph.vertex_ids().count(),
        path = %cli.input.display(),
        "graph loaded"
    );

    let start = cli.start.map_or(StartVertex::Smallest, StartVertex::Id);
    CactusAnalysis::new().start_vertex(start).analyze(&graph)
}

fn write_outputs(cli: &Cli, report: &CactusReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ReportWriter::new()
        .verbose(cli.verbose)
        .try_write(report, &mut out)?;
    out.flush()?;

    if let Some(path) = &cli.dot {
        DotWriter::new().try_write_file(report, path)?;
        debug!(path = %path.display(), "wrote dot file");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let report = match analyze(&cli) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return if err.is_io() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            };
        }
    };

    if let Err(err) = write_outputs(&cli, &report) {
        eprintln!("error: {err}");
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}
