//! Graph generation orchestration.
//!
//! Provides the [`GraphGenerator`] entry point, which sequences the two build
//! phases: growing the gray tree from a fresh root, then running the colour
//! passes over the finished tree.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    Result,
    colouring::{self, ColouringMode},
    graph::Graph,
    tree::{PooledTreeBuilder, RecursiveTreeBuilder, TreeBuilder, TreeShape, TreeStrategy},
};

/// Entry point for generating coloured layered graphs.
///
/// # Examples
/// ```
/// use graphgen_core::{EdgeColour, GraphGeneratorBuilder};
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_max_depth(2)
///     .with_branching_factor(3)
///     .build()?;
/// let graph = generator.generate_with_seed(7)?;
///
/// // The root always receives the full fan-out.
/// assert_eq!(graph.vertices_at_depth(1).len(), 3);
/// assert_eq!(graph.summary().edge_count(EdgeColour::Gray), graph.vertex_count() - 1);
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    shape: TreeShape,
    tree_strategy: TreeStrategy,
    worker_count: NonZeroUsize,
    colouring: ColouringMode,
    rng_seed: Option<u64>,
}

impl GraphGenerator {
    pub(crate) const fn new(
        shape: TreeShape,
        tree_strategy: TreeStrategy,
        worker_count: NonZeroUsize,
        colouring: ColouringMode,
        rng_seed: Option<u64>,
    ) -> Self {
        Self {
            shape,
            tree_strategy,
            worker_count,
            colouring,
            rng_seed,
        }
    }

    /// Returns the depth limit and fan-out used for tree growth.
    #[must_use]
    pub const fn shape(&self) -> TreeShape {
        self.shape
    }

    /// Returns the configured tree strategy.
    #[must_use]
    pub const fn tree_strategy(&self) -> TreeStrategy {
        self.tree_strategy
    }

    /// Returns the worker pool size used by [`TreeStrategy::Pooled`].
    #[must_use]
    pub const fn worker_count(&self) -> NonZeroUsize {
        self.worker_count
    }

    /// Returns the configured colouring mode.
    #[must_use]
    pub const fn colouring(&self) -> ColouringMode {
        self.colouring
    }

    /// Returns the fixed base seed, if one was configured.
    #[must_use]
    pub const fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Generates a graph using the configured seed, or a fresh one drawn from
    /// entropy when none was set.
    ///
    /// # Errors
    /// See [`Self::generate_with_seed`].
    pub fn generate(&self) -> Result<Graph> {
        let seed = self.rng_seed.unwrap_or_else(rand::random);
        self.generate_with_seed(seed)
    }

    /// Generates a graph from `seed`, ignoring any configured seed.
    ///
    /// The build either completes or yields an error; a partially built graph
    /// is never returned.
    ///
    /// # Errors
    /// Returns a [`crate::GraphError`] when an insertion breaks a graph
    /// contract, the worker pool cannot be started, or a worker panics while
    /// holding shared state.
    #[instrument(
        name = "core.generate",
        err,
        skip(self),
        fields(
            max_depth = self.shape.max_depth(),
            branching_factor = self.shape.branching_factor(),
            strategy = ?self.tree_strategy,
            colouring = ?self.colouring,
        ),
    )]
    pub fn generate_with_seed(&self, seed: u64) -> Result<Graph> {
        let mut graph = Graph::new();
        let root = graph.add_vertex(0);
        self.tree_builder(seed).grow(&mut graph, root)?;
        info!(
            vertices = graph.vertex_count(),
            realised_depth = graph.max_depth(),
            "tree grown"
        );

        let (graph, painted) =
            colouring::paint(graph, self.shape.max_depth(), seed, self.colouring)?;
        info!(
            green = painted.green,
            blue = painted.blue,
            yellow = painted.yellow,
            red = painted.red,
            "colour passes complete"
        );

        #[cfg(feature = "metrics")]
        record_edge_metrics(&graph);

        Ok(graph)
    }

    fn tree_builder(&self, seed: u64) -> Box<dyn TreeBuilder> {
        match self.tree_strategy {
            TreeStrategy::Recursive => Box::new(RecursiveTreeBuilder::new(self.shape, seed)),
            TreeStrategy::Pooled => Box::new(PooledTreeBuilder::new(
                self.shape,
                self.worker_count,
                seed,
            )),
        }
    }
}

#[cfg(feature = "metrics")]
fn record_edge_metrics(graph: &Graph) {
    use crate::colour::EdgeColour;

    let summary = graph.summary();
    metrics::counter!("graphgen_vertices_total")
        .increment(u64::try_from(summary.vertex_count()).unwrap_or(u64::MAX));
    for colour in EdgeColour::all() {
        let count = u64::try_from(summary.edge_count(colour)).unwrap_or(u64::MAX);
        metrics::counter!("graphgen_edges_total", "colour" => colour.as_str()).increment(count);
    }
}
