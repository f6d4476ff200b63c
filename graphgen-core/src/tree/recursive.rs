//! Single-threaded depth-first tree growth.

use rand::{Rng, rngs::SmallRng};
use tracing::instrument;

use crate::{
    GraphError, Result,
    colour::EdgeColour,
    graph::{Graph, VertexId},
    rng::{TREE_STREAM, stream_rng},
};

use super::{TreeBuilder, TreeShape};

/// Grows the tree by recursing into every successful child attempt.
///
/// For a fixed seed the resulting tree is fully deterministic, which makes
/// this strategy the reference baseline for tests.
///
/// # Examples
/// ```
/// use graphgen_core::{Graph, RecursiveTreeBuilder, TreeBuilder, TreeShape};
///
/// let builder = RecursiveTreeBuilder::new(TreeShape::new(1, 3), 42);
/// let mut graph = Graph::new();
/// let root = graph.add_vertex(0);
/// builder.grow(&mut graph, root)?;
///
/// // Depth-zero attempts always succeed.
/// assert_eq!(graph.vertices_at_depth(1).len(), 3);
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveTreeBuilder {
    shape: TreeShape,
    seed: u64,
}

impl RecursiveTreeBuilder {
    /// Creates a builder for `shape` drawing from the tree stream of `seed`.
    #[must_use]
    pub const fn new(shape: TreeShape, seed: u64) -> Self {
        Self { shape, seed }
    }

    fn grow_branch(
        &self,
        graph: &mut Graph,
        rng: &mut SmallRng,
        parent: VertexId,
        depth: usize,
    ) -> Result<()> {
        if depth >= self.shape.max_depth() {
            return Ok(());
        }
        let probability = self.shape.child_probability(depth);
        for _ in 0..self.shape.branching_factor() {
            if rng.gen_bool(probability) {
                let child = graph.add_vertex(depth + 1);
                graph.add_edge(parent, child, EdgeColour::Gray)?;
                self.grow_branch(graph, rng, child, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl TreeBuilder for RecursiveTreeBuilder {
    #[instrument(
        name = "tree.recursive",
        err,
        skip(self, graph),
        fields(
            max_depth = self.shape.max_depth(),
            branching_factor = self.shape.branching_factor(),
        ),
    )]
    fn grow(&self, graph: &mut Graph, root: VertexId) -> Result<()> {
        let depth = graph
            .vertex(root)
            .map(|vertex| vertex.depth())
            .ok_or(GraphError::UnknownVertex { vertex: root })?;
        let mut rng = stream_rng(self.seed, TREE_STREAM);
        self.grow_branch(graph, &mut rng, root, depth)
    }
}
