//! Graphgen core library.
//!
//! Generates random layered multigraphs: a gray spanning tree grown from a
//! single root, decorated by four probabilistic colour passes that add green
//! self-loops, blue same-depth links, yellow links one level apart and red
//! links two levels apart.
//!
//! # Examples
//! ```
//! use graphgen_core::{EdgeColour, GraphGeneratorBuilder};
//!
//! let generator = GraphGeneratorBuilder::new()
//!     .with_max_depth(3)
//!     .with_branching_factor(3)
//!     .with_rng_seed(1)
//!     .build()?;
//! let graph = generator.generate()?;
//! graph.invariants(3).check_all().expect("generated graphs are valid");
//! assert_eq!(graph.summary().edge_count(EdgeColour::Gray), graph.vertex_count() - 1);
//! # Ok::<(), graphgen_core::GraphError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod colour;
mod colouring;
mod error;
mod generator;
mod graph;
mod invariants;
mod rng;
#[cfg(test)]
mod test_utils;
mod tree;

pub use crate::{
    builder::GraphGeneratorBuilder,
    colour::EdgeColour,
    colouring::ColouringMode,
    error::{GraphError, GraphErrorCode, Result},
    generator::GraphGenerator,
    graph::{Edge, EdgeId, Graph, GraphSummary, Vertex, VertexId},
    invariants::{GraphInvariant, GraphInvariantChecker, GraphInvariantViolation},
    tree::{PooledTreeBuilder, RecursiveTreeBuilder, TreeBuilder, TreeShape, TreeStrategy},
};
