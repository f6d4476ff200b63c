//! Gray-edge tree growth.
//!
//! Two interchangeable strategies grow the tree: [`RecursiveTreeBuilder`] is
//! the single-threaded depth-first baseline, [`PooledTreeBuilder`] spreads the
//! same branching process over a fixed worker pool. Both apply the
//! branching rule encoded in [`TreeShape`] and satisfy the same invariants.

mod pooled;
mod recursive;

use rand::Rng;

use crate::{Result, graph::Graph, graph::VertexId};

pub use self::{pooled::PooledTreeBuilder, recursive::RecursiveTreeBuilder};

/// Selects the strategy used to grow the gray tree.
///
/// # Examples
/// ```
/// use graphgen_core::TreeStrategy;
///
/// let strategy = TreeStrategy::default();
/// assert_eq!(strategy, TreeStrategy::Recursive);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeStrategy {
    /// Depth-first recursion on the calling thread.
    #[default]
    Recursive,
    /// Job queue drained by a fixed pool of worker threads.
    Pooled,
}

/// Depth limit and fan-out shared by every tree strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeShape {
    max_depth: usize,
    branching_factor: usize,
}

impl TreeShape {
    /// Creates a shape bounded by `max_depth` with `branching_factor` child
    /// attempts per vertex.
    #[must_use]
    pub const fn new(max_depth: usize, branching_factor: usize) -> Self {
        Self {
            max_depth,
            branching_factor,
        }
    }

    /// Returns the configured maximum depth.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the number of child attempts per vertex.
    #[must_use]
    pub const fn branching_factor(&self) -> usize {
        self.branching_factor
    }

    /// Probability that one child attempt at `depth` succeeds.
    ///
    /// Falls linearly from 1 at the root to 0 at `max_depth`.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::TreeShape;
    ///
    /// let shape = TreeShape::new(4, 2);
    /// assert_eq!(shape.child_probability(0), 1.0);
    /// assert_eq!(shape.child_probability(1), 0.75);
    /// assert_eq!(shape.child_probability(4), 0.0);
    /// ```
    #[must_use]
    pub fn child_probability(&self, depth: usize) -> f64 {
        if depth >= self.max_depth {
            return 0.0;
        }
        1.0 - depth as f64 / self.max_depth as f64
    }

    /// Runs the branching trials for a vertex at `depth` and returns how many
    /// children it receives.
    pub(crate) fn sample_children<R: Rng + ?Sized>(&self, depth: usize, rng: &mut R) -> usize {
        if depth >= self.max_depth {
            return 0;
        }
        let probability = self.child_probability(depth);
        (0..self.branching_factor)
            .filter(|_| rng.gen_bool(probability))
            .count()
    }
}

/// Grows the gray tree below an existing root vertex.
pub trait TreeBuilder {
    /// Adds gray edges and child vertices below `root`.
    ///
    /// # Errors
    /// Returns a [`crate::GraphError`] when an insertion breaks a graph
    /// contract or shared build state cannot be accessed. The graph must be
    /// discarded in that case.
    fn grow(&self, graph: &mut Graph, root: VertexId) -> Result<()>;
}
