//! Aggregate counts describing a finished graph.

use crate::colour::EdgeColour;

use super::Graph;

/// Vertex, depth and per-colour edge counts for a graph.
///
/// # Examples
/// ```
/// use graphgen_core::{EdgeColour, Graph};
///
/// let mut graph = Graph::new();
/// let root = graph.add_vertex(0);
/// graph.add_edge(root, root, EdgeColour::Green)?;
///
/// let summary = graph.summary();
/// assert_eq!(summary.vertex_count(), 1);
/// assert_eq!(summary.edge_count(EdgeColour::Green), 1);
/// assert_eq!(summary.total_edges(), 1);
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphSummary {
    vertex_count: usize,
    max_depth: usize,
    edge_counts: [usize; 5],
}

impl GraphSummary {
    pub(crate) fn from_graph(graph: &Graph) -> Self {
        let mut edge_counts = [0_usize; 5];
        for edge in graph.edges() {
            if let Some(count) = edge_counts.get_mut(colour_slot(edge.colour())) {
                *count += 1;
            }
        }
        Self {
            vertex_count: graph.vertex_count(),
            max_depth: graph.max_depth(),
            edge_counts,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the realised maximum depth.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the number of edges with the given colour.
    #[must_use]
    pub fn edge_count(&self, colour: EdgeColour) -> usize {
        self.edge_counts
            .get(colour_slot(colour))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the total number of edges across all colours.
    #[must_use]
    pub fn total_edges(&self) -> usize {
        self.edge_counts.iter().sum()
    }

    /// Iterates over `(colour, count)` pairs in painting order.
    pub fn by_colour(&self) -> impl Iterator<Item = (EdgeColour, usize)> + '_ {
        EdgeColour::all()
            .into_iter()
            .map(|colour| (colour, self.edge_count(colour)))
    }
}

const fn colour_slot(colour: EdgeColour) -> usize {
    match colour {
        EdgeColour::Gray => 0,
        EdgeColour::Green => 1,
        EdgeColour::Blue => 2,
        EdgeColour::Yellow => 3,
        EdgeColour::Red => 4,
    }
}
