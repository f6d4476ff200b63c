//! Vertex and edge records owned by the entity store.

use crate::colour::EdgeColour;

use super::ids::{EdgeId, VertexId};

/// A vertex of the generated graph.
///
/// The depth is fixed when the vertex is created and never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    depth: usize,
}

impl Vertex {
    pub(crate) const fn new(id: VertexId, depth: usize) -> Self {
        Self { id, depth }
    }

    /// Returns the vertex identifier.
    #[must_use]
    pub const fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the tree depth assigned at creation.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}

/// An immutable coloured edge between two vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    from: VertexId,
    to: VertexId,
    colour: EdgeColour,
}

impl Edge {
    pub(crate) const fn new(id: EdgeId, from: VertexId, to: VertexId, colour: EdgeColour) -> Self {
        Self {
            id,
            from,
            to,
            colour,
        }
    }

    /// Returns the edge identifier.
    #[must_use]
    pub const fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the source vertex.
    #[must_use]
    pub const fn from(&self) -> VertexId {
        self.from
    }

    /// Returns the target vertex.
    #[must_use]
    pub const fn to(&self) -> VertexId {
        self.to
    }

    /// Returns the `(from, to)` endpoint pair.
    #[must_use]
    pub const fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }

    /// Returns the edge colour.
    #[must_use]
    pub const fn colour(&self) -> EdgeColour {
        self.colour
    }

    /// Reports whether both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
