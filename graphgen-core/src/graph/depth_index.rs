//! Depth-level index over vertices.

use super::ids::VertexId;

/// Ordered lists of vertex identifiers, one list per depth level.
///
/// Vertices appear in creation order within each level.
#[derive(Clone, Debug, Default)]
pub(crate) struct DepthIndex {
    levels: Vec<Vec<VertexId>>,
}

impl DepthIndex {
    pub(crate) fn insert(&mut self, depth: usize, vertex: VertexId) {
        if self.levels.len() <= depth {
            self.levels.resize_with(depth + 1, Vec::new);
        }
        if let Some(level) = self.levels.get_mut(depth) {
            level.push(vertex);
        }
    }

    pub(crate) fn level(&self, depth: usize) -> &[VertexId] {
        self.levels.get(depth).map(Vec::as_slice).unwrap_or_default()
    }

    /// Deepest non-empty level, or zero when the index is empty.
    pub(crate) fn max_depth(&self) -> usize {
        self.levels
            .iter()
            .rposition(|level| !level.is_empty())
            .unwrap_or(0)
    }

    pub(crate) fn levels(&self) -> &[Vec<VertexId>] {
        &self.levels
    }
}
