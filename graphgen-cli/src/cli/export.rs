//! JSON projection of a finished graph.
//!
//! The document lists vertices and edges in identifier order. Each vertex
//! records its depth and incident edge identifiers; each edge records its
//! endpoint pair and lowercase colour name.

use std::io::Write;

use graphgen_core::Graph;
use serde::{Deserialize, Serialize};

/// Serialisable view of a [`Graph`].
///
/// # Examples
/// ```
/// use graphgen_cli::cli::GraphDocument;
/// use graphgen_core::{EdgeColour, Graph};
///
/// let mut graph = Graph::new();
/// let root = graph.add_vertex(0);
/// let child = graph.add_vertex(1);
/// graph.add_edge(root, child, EdgeColour::Gray)?;
///
/// let document = GraphDocument::from_graph(&graph);
/// assert_eq!(document.depth, 1);
/// assert_eq!(document.vertices[0].edge_ids, vec![0]);
/// assert_eq!(document.edges[0].vertex_ids, [0, 1]);
/// assert_eq!(document.edges[0].color, "gray");
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Realised maximum depth of the graph.
    pub depth: usize,
    /// Vertices in identifier order.
    pub vertices: Vec<VertexRecord>,
    /// Edges in identifier order.
    pub edges: Vec<EdgeRecord>,
}

/// One vertex of a [`GraphDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexRecord {
    /// Vertex identifier.
    pub id: usize,
    /// Identifiers of the incident edges in ascending order.
    pub edge_ids: Vec<usize>,
    /// Depth of the vertex.
    pub depth: usize,
}

/// One edge of a [`GraphDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Edge identifier.
    pub id: usize,
    /// Source and target vertex identifiers.
    pub vertex_ids: [usize; 2],
    /// Lowercase colour name.
    pub color: String,
}

impl GraphDocument {
    /// Projects `graph` into its serialisable form.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let vertices = graph
            .vertices()
            .map(|vertex| VertexRecord {
                id: vertex.id().get(),
                edge_ids: graph
                    .incident_edges(vertex.id())
                    .map(|edge| edge.get())
                    .collect(),
                depth: vertex.depth(),
            })
            .collect();
        let edges = graph
            .edges()
            .map(|edge| EdgeRecord {
                id: edge.id().get(),
                vertex_ids: [edge.from().get(), edge.to().get()],
                color: edge.colour().as_str().to_owned(),
            })
            .collect();
        Self {
            depth: graph.max_depth(),
            vertices,
            edges,
        }
    }
}

/// Writes `graph` to `writer` as pretty-printed JSON.
///
/// # Errors
/// Returns [`serde_json::Error`] when serialisation or the underlying write
/// fails.
pub fn write_graph_json(graph: &Graph, writer: impl Write) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, &GraphDocument::from_graph(graph))
}
