//! Structural invariant checks for generated graphs.
//!
//! The checkers are surfaced via [`Graph::invariants`] so tests and callers
//! can assert graph health after a build without reimplementing traversal
//! logic.

mod links;
mod tree;

use thiserror::Error;

use crate::{
    colour::EdgeColour,
    graph::{EdgeId, Graph, VertexId},
};

use self::{
    links::{check_colour_rules, check_unique_links},
    tree::{check_depth_bounds, check_gray_tree},
};

/// Enumerates the structural invariants of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphInvariant {
    /// Every vertex below depth zero hangs off exactly one gray parent one
    /// level up; depth-zero vertices have no gray parent.
    GrayTree,
    /// No vertex is deeper than the configured maximum.
    DepthBounds,
    /// Every edge satisfies its colour's depth predicate and loop rule.
    ColourRules,
    /// No vertex pair is linked twice and no vertex has two self-loops.
    UniqueLinks,
}

impl GraphInvariant {
    /// Returns all invariants in the order they should be evaluated.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::GrayTree,
            Self::DepthBounds,
            Self::ColourRules,
            Self::UniqueLinks,
        ]
    }
}

/// Reports an invariant violation surfaced by [`GraphInvariantChecker`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GraphInvariantViolation {
    /// An edge references a vertex missing from the store.
    #[error("edge {edge} references a missing vertex")]
    DanglingEdge {
        /// The offending edge.
        edge: EdgeId,
    },
    /// A vertex has the wrong number of gray parents for its depth.
    #[error("vertex {vertex} at depth {depth} has {parents} gray parent(s)")]
    GrayParentCount {
        /// Vertex with the unexpected parent count.
        vertex: VertexId,
        /// Depth of the vertex.
        depth: usize,
        /// Number of gray edges targeting the vertex.
        parents: usize,
    },
    /// A gray parent does not sit exactly one level above its child.
    #[error("vertex {vertex} at depth {depth} has gray parent {parent} at depth {parent_depth}")]
    GrayParentDepth {
        /// Child vertex.
        vertex: VertexId,
        /// Depth of the child.
        depth: usize,
        /// Gray parent of the child.
        parent: VertexId,
        /// Depth of the parent.
        parent_depth: usize,
    },
    /// A vertex is deeper than the configured maximum.
    #[error("vertex {vertex} has depth {depth}, exceeding limit {limit}")]
    DepthExceeded {
        /// Vertex that is too deep.
        vertex: VertexId,
        /// Its depth.
        depth: usize,
        /// Configured maximum depth.
        limit: usize,
    },
    /// An edge breaks its colour's depth predicate or loop rule.
    #[error("{colour} edge {edge} joins depths {from_depth} and {to_depth}")]
    ColourRule {
        /// The offending edge.
        edge: EdgeId,
        /// Its colour.
        colour: EdgeColour,
        /// Depth of the source vertex.
        from_depth: usize,
        /// Depth of the target vertex.
        to_depth: usize,
    },
    /// Two or more non-loop edges join the same unordered vertex pair.
    #[error("vertices {first} and {second} are joined by {edges} edges")]
    DuplicateLink {
        /// Lower identifier of the pair.
        first: VertexId,
        /// Higher identifier of the pair.
        second: VertexId,
        /// Number of edges joining the pair.
        edges: usize,
    },
    /// A vertex carries more than one self-loop.
    #[error("vertex {vertex} carries {loops} self-loops")]
    DuplicateSelfLoop {
        /// Vertex carrying the loops.
        vertex: VertexId,
        /// Number of loops found.
        loops: usize,
    },
}

/// Helper returned by [`Graph::invariants`] to run structural checks.
///
/// # Examples
/// ```
/// use graphgen_core::GraphGeneratorBuilder;
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_max_depth(3)
///     .with_branching_factor(2)
///     .with_rng_seed(5)
///     .build()?;
/// let graph = generator.generate()?;
/// graph.invariants(3).check_all().expect("generated graphs are valid");
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct GraphInvariantChecker<'graph> {
    graph: &'graph Graph,
    max_depth: usize,
}

impl<'graph> GraphInvariantChecker<'graph> {
    pub(crate) fn new(graph: &'graph Graph, max_depth: usize) -> Self {
        Self { graph, max_depth }
    }

    /// Runs all invariants, returning the first violation encountered.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    pub fn check_all(&self) -> Result<(), GraphInvariantViolation> {
        self.check_many(GraphInvariant::all())
    }

    /// Runs a custom subset of invariants in the provided order.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    pub fn check_many(
        &self,
        invariants: impl IntoIterator<Item = GraphInvariant>,
    ) -> Result<(), GraphInvariantViolation> {
        self.run_with_mode(invariants, EvaluationMode::FailFast)
    }

    /// Runs a single invariant.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    pub fn check(&self, invariant: GraphInvariant) -> Result<(), GraphInvariantViolation> {
        self.check_many([invariant])
    }

    /// Executes every invariant and returns the full set of violations.
    #[must_use]
    pub fn collect_all(&self) -> Vec<GraphInvariantViolation> {
        let mut violations = Vec::new();
        let _ = self.run_with_mode(
            GraphInvariant::all(),
            EvaluationMode::Collect(&mut violations),
        );
        violations
    }

    fn run_with_mode(
        &self,
        invariants: impl IntoIterator<Item = GraphInvariant>,
        mut mode: EvaluationMode<'_>,
    ) -> Result<(), GraphInvariantViolation> {
        let ctx = GraphContext {
            graph: self.graph,
            max_depth: self.max_depth,
        };
        for invariant in invariants {
            dispatch(ctx, invariant, &mut mode)?;
        }
        Ok(())
    }
}

fn dispatch(
    ctx: GraphContext<'_>,
    invariant: GraphInvariant,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), GraphInvariantViolation> {
    match invariant {
        GraphInvariant::GrayTree => check_gray_tree(ctx, mode),
        GraphInvariant::DepthBounds => check_depth_bounds(ctx, mode),
        GraphInvariant::ColourRules => check_colour_rules(ctx, mode),
        GraphInvariant::UniqueLinks => check_unique_links(ctx, mode),
    }
}

#[derive(Clone, Copy)]
pub(super) struct GraphContext<'a> {
    graph: &'a Graph,
    max_depth: usize,
}

pub(super) enum EvaluationMode<'a> {
    FailFast,
    Collect(&'a mut Vec<GraphInvariantViolation>),
}

impl EvaluationMode<'_> {
    fn record(&mut self, violation: GraphInvariantViolation) -> Result<(), GraphInvariantViolation> {
        match self {
            Self::FailFast => Err(violation),
            Self::Collect(sink) => {
                sink.push(violation);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests;
