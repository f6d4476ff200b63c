//! Command-line interface orchestration for graphgen.
//!
//! The CLI offers a single `generate` command that builds a graph with the
//! requested shape and writes it to disk as a JSON document.

mod commands;
mod export;

pub use commands::{
    Cli, CliError, ColouringArg, Command, ExecutionSummary, GenerateCommand, TreeArg,
    render_summary, run_cli,
};
pub use export::{EdgeRecord, GraphDocument, VertexRecord, write_graph_json};
