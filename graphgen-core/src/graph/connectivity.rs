//! Vertex-to-edge incidence used to answer "are these vertices linked".

use std::collections::BTreeSet;

use super::{
    entities::Edge,
    ids::{EdgeId, VertexId},
};

/// Maps every vertex to the set of edge identifiers touching it.
#[derive(Clone, Debug, Default)]
pub(crate) struct ConnectivityIndex {
    incident: Vec<BTreeSet<EdgeId>>,
}

impl ConnectivityIndex {
    /// Registers an empty incident set for a newly allocated vertex.
    pub(crate) fn push_vertex(&mut self) {
        self.incident.push(BTreeSet::new());
    }

    /// Records `edge` against both endpoints; a self-loop registers once.
    pub(crate) fn register(&mut self, edge: &Edge) {
        let (from, to) = edge.endpoints();
        if let Some(set) = self.incident.get_mut(from.get()) {
            set.insert(edge.id());
        }
        if let Some(set) = self.incident.get_mut(to.get()) {
            set.insert(edge.id());
        }
    }

    pub(crate) fn incident(&self, vertex: VertexId) -> Option<&BTreeSet<EdgeId>> {
        self.incident.get(vertex.get())
    }

    /// Returns the edge linking `a` and `b`, if any.
    ///
    /// For distinct vertices this is the intersection of their incident
    /// sets. For `a == b` only a self-loop counts, so a loop never collides
    /// with a non-loop edge.
    pub(crate) fn connecting_edge(
        &self,
        edges: &[Edge],
        a: VertexId,
        b: VertexId,
    ) -> Option<EdgeId> {
        let left = self.incident(a)?;
        if a == b {
            return left.iter().copied().find(|id| {
                edges
                    .get(id.get())
                    .is_some_and(|edge| edge.is_self_loop())
            });
        }
        let right = self.incident(b)?;
        let (small, large) = if left.len() <= right.len() {
            (left, right)
        } else {
            (right, left)
        };
        small.iter().copied().find(|id| large.contains(id))
    }
}
