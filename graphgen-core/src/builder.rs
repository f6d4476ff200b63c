//! Builder utilities for configuring graph generation.
//!
//! Exposes the knobs accepted by [`GraphGenerator`] and validates them before
//! a generator is constructed.

use std::num::NonZeroUsize;

use crate::{
    Result, colouring::ColouringMode, error::GraphError, generator::GraphGenerator,
    tree::TreeShape, tree::TreeStrategy,
};

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use graphgen_core::{ColouringMode, GraphGeneratorBuilder, TreeStrategy};
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_max_depth(4)
///     .with_tree_strategy(TreeStrategy::Pooled)
///     .with_colouring(ColouringMode::Concurrent)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.shape().max_depth(), 4);
/// assert_eq!(generator.tree_strategy(), TreeStrategy::Pooled);
/// ```
#[derive(Debug, Clone)]
pub struct GraphGeneratorBuilder {
    max_depth: usize,
    branching_factor: usize,
    tree_strategy: TreeStrategy,
    worker_count: usize,
    colouring: ColouringMode,
    rng_seed: Option<u64>,
}

impl Default for GraphGeneratorBuilder {
    fn default() -> Self {
        Self {
            max_depth: 3,
            branching_factor: 3,
            tree_strategy: TreeStrategy::Recursive,
            worker_count: 4,
            colouring: ColouringMode::Sequential,
            rng_seed: None,
        }
    }
}

impl GraphGeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{ColouringMode, GraphGeneratorBuilder, TreeStrategy};
    ///
    /// let builder = GraphGeneratorBuilder::new();
    /// assert_eq!(builder.max_depth(), 3);
    /// assert_eq!(builder.branching_factor(), 3);
    /// assert_eq!(builder.tree_strategy(), TreeStrategy::Recursive);
    /// assert_eq!(builder.colouring(), ColouringMode::Sequential);
    /// assert_eq!(builder.worker_count(), 4);
    /// assert_eq!(builder.rng_seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the maximum tree depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the configured maximum tree depth.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Overrides the number of child attempts made per vertex.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::GraphGeneratorBuilder;
    ///
    /// let builder = GraphGeneratorBuilder::new().with_branching_factor(5);
    /// assert_eq!(builder.branching_factor(), 5);
    /// ```
    #[must_use]
    pub const fn with_branching_factor(mut self, branching_factor: usize) -> Self {
        self.branching_factor = branching_factor;
        self
    }

    /// Returns the configured branching factor.
    #[must_use]
    pub const fn branching_factor(&self) -> usize {
        self.branching_factor
    }

    /// Selects the strategy used to grow the gray tree.
    #[must_use]
    pub const fn with_tree_strategy(mut self, strategy: TreeStrategy) -> Self {
        self.tree_strategy = strategy;
        self
    }

    /// Returns the configured tree strategy.
    #[must_use]
    pub const fn tree_strategy(&self) -> TreeStrategy {
        self.tree_strategy
    }

    /// Sets the size of the worker pool used by [`TreeStrategy::Pooled`].
    ///
    /// The count is validated by [`Self::build`] regardless of the selected
    /// strategy.
    #[must_use]
    pub const fn with_worker_count(mut self, workers: usize) -> Self {
        self.worker_count = workers;
        self
    }

    /// Returns the configured worker count.
    #[must_use]
    pub const fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Selects how the colour passes are scheduled.
    #[must_use]
    pub const fn with_colouring(mut self, mode: ColouringMode) -> Self {
        self.colouring = mode;
        self
    }

    /// Returns the configured colouring mode.
    #[must_use]
    pub const fn colouring(&self) -> ColouringMode {
        self.colouring
    }

    /// Fixes the base seed so every build is reproducible.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::GraphGeneratorBuilder;
    ///
    /// let builder = GraphGeneratorBuilder::new().with_rng_seed(42);
    /// assert_eq!(builder.rng_seed(), Some(42));
    /// ```
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns the fixed base seed, if any.
    #[must_use]
    pub const fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWorkerCount`] when the worker count is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{GraphErrorCode, GraphGeneratorBuilder};
    ///
    /// let err = GraphGeneratorBuilder::new()
    ///     .with_worker_count(0)
    ///     .build()
    ///     .expect_err("zero workers are rejected");
    /// assert_eq!(err.code(), GraphErrorCode::InvalidWorkerCount);
    /// ```
    pub fn build(self) -> Result<GraphGenerator> {
        let workers = NonZeroUsize::new(self.worker_count).ok_or(
            GraphError::InvalidWorkerCount {
                got: self.worker_count,
            },
        )?;

        Ok(GraphGenerator::new(
            TreeShape::new(self.max_depth, self.branching_factor),
            self.tree_strategy,
            workers,
            self.colouring,
            self.rng_seed,
        ))
    }
}
