//! Command implementations and argument parsing for the graphgen CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphgen_core::{
    ColouringMode, EdgeColour, Graph, GraphError, GraphGeneratorBuilder, GraphSummary,
    TreeStrategy,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::export::write_graph_json;

const DEFAULT_DEPTH: usize = 3;
const DEFAULT_NEW_VERTICES: usize = 3;
const DEFAULT_WORKERS: usize = 4;
const DEFAULT_OUTPUT: &str = "graph.json";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "graphgen", about = "Generate random layered colour graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a graph and write it as JSON.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Maximum depth of the gray tree.
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,

    /// Child attempts made for every vertex.
    #[arg(long = "new-vertices", default_value_t = DEFAULT_NEW_VERTICES)]
    pub new_vertices: usize,

    /// Strategy used to grow the gray tree.
    #[arg(long, value_enum, default_value_t = TreeArg::Recursive)]
    pub tree: TreeArg,

    /// Worker threads used by the pooled tree strategy.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Scheduling of the colour passes.
    #[arg(long, value_enum, default_value_t = ColouringArg::Sequential)]
    pub colouring: ColouringArg,

    /// Base seed for reproducible output; drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Destination of the JSON document.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// Tree strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeArg {
    /// Depth-first growth on the main thread.
    Recursive,
    /// Growth spread over a worker pool.
    Pooled,
}

impl From<TreeArg> for TreeStrategy {
    fn from(arg: TreeArg) -> Self {
        match arg {
            TreeArg::Recursive => Self::Recursive,
            TreeArg::Pooled => Self::Pooled,
        }
    }
}

/// Colouring modes selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColouringArg {
    /// Run the colour passes one after another.
    Sequential,
    /// Run the colour passes in parallel.
    Concurrent,
}

impl From<ColouringArg> for ColouringMode {
    fn from(arg: ColouringArg) -> Self {
        match arg {
            ColouringArg::Sequential => Self::Sequential,
            ColouringArg::Concurrent => Self::Concurrent,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while writing the output document.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph could not be serialised.
    #[error("failed to serialise graph to `{path}`: {source}")]
    Serialise {
        /// Destination of the document.
        path: PathBuf,
        /// Underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },
    /// Graph generation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Where the JSON document was written.
    pub output: PathBuf,
    /// Counts describing the generated graph.
    pub graph: GraphSummary,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation or writing the document fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use graphgen_cli::cli::{Cli, ColouringArg, Command, GenerateCommand, TreeArg, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         depth: 2,
///         new_vertices: 2,
///         tree: TreeArg::Recursive,
///         workers: 1,
///         colouring: ColouringArg::Sequential,
///         seed: Some(3),
///         output: dir.path().join("graph.json"),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(summary.output.exists());
/// assert!(summary.graph.vertex_count() >= 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(depth = command.depth, new_vertices = command.new_vertices, output = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    Span::current().record("output", field::display(command.output.display()));
    let mut builder = GraphGeneratorBuilder::new()
        .with_max_depth(command.depth)
        .with_branching_factor(command.new_vertices)
        .with_tree_strategy(command.tree.into())
        .with_worker_count(command.workers)
        .with_colouring(command.colouring.into());
    if let Some(seed) = command.seed {
        builder = builder.with_rng_seed(seed);
    }
    let graph = builder.build()?.generate()?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph generated"
    );

    write_document(&graph, &command.output)?;
    info!(path = %command.output.display(), "graph written");
    Ok(ExecutionSummary {
        output: command.output,
        graph: graph.summary(),
    })
}

#[instrument(name = "cli.write_document", err, skip(graph), fields(path = %path.display()))]
pub(super) fn write_document(graph: &Graph, path: &Path) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_graph_json(graph, &mut writer).map_err(|source| CliError::Serialise {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use graphgen_cli::cli::{ExecutionSummary, render_summary};
/// # use graphgen_core::{EdgeColour, Graph};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = Graph::new();
/// let root = graph.add_vertex(0);
/// graph.add_edge(root, root, EdgeColour::Green)?;
/// let summary = ExecutionSummary {
///     output: "graph.json".into(),
///     graph: graph.summary(),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("green: 1"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "vertices: {}", summary.graph.vertex_count())?;
    writeln!(writer, "depth: {}", summary.graph.max_depth())?;
    writeln!(writer, "edges: {}", summary.graph.total_edges())?;
    for colour in EdgeColour::all() {
        writeln!(writer, "  {colour}: {}", summary.graph.edge_count(colour))?;
    }
    writeln!(writer, "output: {}", summary.output.display())?;
    Ok(())
}
