//! Entity store for generated graphs.
//!
//! [`Graph`] owns every vertex and edge, allocates their identifiers, and
//! maintains the connectivity and depth indices alongside them. The store
//! only grows: nothing is ever removed or edited once inserted.

mod connectivity;
mod depth_index;
mod entities;
mod ids;
pub(crate) mod shared;
mod summary;

use std::collections::BTreeSet;

use crate::{
    colour::EdgeColour,
    error::{GraphError, Result},
    invariants::GraphInvariantChecker,
};

use self::{connectivity::ConnectivityIndex, depth_index::DepthIndex};

pub use self::{
    entities::{Edge, Vertex},
    ids::{EdgeId, VertexId},
    summary::GraphSummary,
};

/// A layered multigraph with coloured edges.
///
/// # Examples
/// ```
/// use graphgen_core::{EdgeColour, Graph};
///
/// let mut graph = Graph::new();
/// let root = graph.add_vertex(0);
/// let child = graph.add_vertex(1);
/// graph.add_edge(root, child, EdgeColour::Gray)?;
///
/// assert!(graph.is_connected(root, child));
/// assert_eq!(graph.vertices_at_depth(1), &[child]);
/// assert_eq!(graph.max_depth(), 1);
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    connectivity: ConnectivityIndex,
    depths: DepthIndex,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a vertex at `depth` and registers it in the depth index.
    pub fn add_vertex(&mut self, depth: usize) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(id, depth));
        self.connectivity.push_vertex();
        self.depths.insert(depth, id);
        id
    }

    /// Inserts a coloured edge from `from` to `to`.
    ///
    /// Every precondition is checked before the graph is touched, so an
    /// error leaves the graph exactly as it was.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when an endpoint does not exist,
    /// [`GraphError::LoopRule`] when a non-green edge is a self-loop or a green
    /// edge is not, [`GraphError::DepthRule`] when the endpoint depths break the
    /// colour's predicate, [`GraphError::TargetNotFresh`] when a gray edge
    /// targets a vertex that already has edges, and
    /// [`GraphError::AlreadyConnected`] when the pair is already linked.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, colour: EdgeColour) -> Result<EdgeId> {
        self.validate_edge(from, to, colour)?;
        let id = EdgeId::new(self.edges.len());
        let edge = Edge::new(id, from, to, colour);
        self.connectivity.register(&edge);
        self.edges.push(edge);
        Ok(id)
    }

    /// Stores an edge without validating it, for tests that need to build
    /// graphs breaking the store's contracts.
    #[cfg(test)]
    pub(crate) fn insert_unchecked(
        &mut self,
        from: VertexId,
        to: VertexId,
        colour: EdgeColour,
    ) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        let edge = Edge::new(id, from, to, colour);
        self.connectivity.register(&edge);
        self.edges.push(edge);
        id
    }

    fn validate_edge(&self, from: VertexId, to: VertexId, colour: EdgeColour) -> Result<()> {
        let from_depth = self.require_vertex(from)?.depth();
        let to_depth = self.require_vertex(to)?.depth();

        if (from == to) != colour.is_loop_colour() {
            return Err(GraphError::LoopRule { colour, from, to });
        }
        if !colour.permits(from_depth, to_depth) {
            return Err(GraphError::DepthRule {
                colour,
                from,
                to,
                from_depth,
                to_depth,
            });
        }
        if colour == EdgeColour::Gray {
            let edges = self.incident_count(to);
            if edges > 0 {
                return Err(GraphError::TargetNotFresh { vertex: to, edges });
            }
        }
        if let Some(existing) = self.connectivity.connecting_edge(&self.edges, from, to) {
            return Err(GraphError::AlreadyConnected { from, to, existing });
        }
        Ok(())
    }

    fn require_vertex(&self, id: VertexId) -> Result<&Vertex> {
        self.vertex(id)
            .ok_or(GraphError::UnknownVertex { vertex: id })
    }

    /// Reports whether `a` and `b` already share an edge.
    ///
    /// For `a == b` only a self-loop counts. Unknown vertices are never
    /// connected.
    #[must_use]
    pub fn is_connected(&self, a: VertexId, b: VertexId) -> bool {
        self.connectivity
            .connecting_edge(&self.edges, a, b)
            .is_some()
    }

    /// Returns the vertices created at exactly `depth`, in creation order.
    #[must_use]
    pub fn vertices_at_depth(&self, depth: usize) -> &[VertexId] {
        self.depths.level(depth)
    }

    /// Returns the deepest populated level, or zero for an empty graph.
    ///
    /// This is the realised depth, which may be below the configured target
    /// because branch growth is probabilistic.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.depths.max_depth()
    }

    /// Returns every depth level in order; level `d` holds the vertices at
    /// depth `d`.
    #[must_use]
    pub fn depth_levels(&self) -> &[Vec<VertexId>] {
        self.depths.levels()
    }

    /// Looks up a vertex by identifier.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.get())
    }

    /// Looks up an edge by identifier.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.get())
    }

    /// Iterates over vertices in identifier order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// Iterates over edges in identifier order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Iterates over the edges incident on `vertex` in ascending identifier
    /// order. Unknown vertices yield nothing.
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.connectivity
            .incident(vertex)
            .into_iter()
            .flat_map(BTreeSet::iter)
            .copied()
    }

    fn incident_count(&self, vertex: VertexId) -> usize {
        self.connectivity
            .incident(vertex)
            .map_or(0, BTreeSet::len)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Reports whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Summarises vertex, depth and per-colour edge counts.
    #[must_use]
    pub fn summary(&self) -> GraphSummary {
        GraphSummary::from_graph(self)
    }

    /// Returns a checker for the structural invariants of a generated graph
    /// whose configured maximum depth was `max_depth`.
    #[must_use]
    pub fn invariants(&self, max_depth: usize) -> GraphInvariantChecker<'_> {
        GraphInvariantChecker::new(self, max_depth)
    }
}
