//! Worker-pool tree growth.
//!
//! A FIFO queue holds "grow one child under this parent" jobs. A fixed pool
//! of rayon threads drains it; each job creates one vertex and its gray edge
//! under the graph lock, then runs the branching trials for the new vertex
//! and enqueues one job per success. The queue has its own lock, distinct
//! from the graph lock.
//!
//! Completion is tracked with two counters: `issued` is raised before jobs
//! enter the queue and `completed` after a job has issued its children.
//! Reading `completed` before `issued` and finding them equal therefore means
//! no job is queued or running, and none can appear later.

use std::{
    collections::VecDeque,
    mem,
    num::NonZeroUsize,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread,
};

use rand::rngs::SmallRng;
use rayon::ThreadPoolBuilder;
use tracing::{debug, instrument};

use crate::{
    GraphError, Result,
    colour::EdgeColour,
    graph::{Graph, VertexId, shared::SharedGraph},
    rng::{TREE_STREAM, build_worker_rngs, stream_rng},
};

use super::{TreeBuilder, TreeShape};

/// Grows the tree with a fixed-size pool of worker threads.
///
/// The vertex set and depth distribution follow the same rule as
/// [`super::RecursiveTreeBuilder`], but identifiers are assigned in whatever
/// order the workers reach the graph lock.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
///
/// use graphgen_core::{Graph, PooledTreeBuilder, TreeBuilder, TreeShape};
///
/// let workers = NonZeroUsize::new(2).expect("non-zero");
/// let builder = PooledTreeBuilder::new(TreeShape::new(3, 2), workers, 7);
/// let mut graph = Graph::new();
/// let root = graph.add_vertex(0);
/// builder.grow(&mut graph, root)?;
///
/// assert_eq!(graph.vertices_at_depth(1).len(), 2);
/// assert!(graph.max_depth() <= 3);
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PooledTreeBuilder {
    shape: TreeShape,
    workers: NonZeroUsize,
    seed: u64,
}

impl PooledTreeBuilder {
    /// Creates a builder running `workers` threads.
    #[must_use]
    pub const fn new(shape: TreeShape, workers: NonZeroUsize, seed: u64) -> Self {
        Self {
            shape,
            workers,
            seed,
        }
    }

    /// Returns the size of the worker pool.
    #[must_use]
    pub const fn workers(&self) -> NonZeroUsize {
        self.workers
    }
}

impl TreeBuilder for PooledTreeBuilder {
    #[instrument(
        name = "tree.pooled",
        err,
        skip(self, graph),
        fields(
            max_depth = self.shape.max_depth(),
            branching_factor = self.shape.branching_factor(),
            workers = self.workers.get(),
        ),
    )]
    fn grow(&self, graph: &mut Graph, root: VertexId) -> Result<()> {
        let depth = graph
            .vertex(root)
            .map(|vertex| vertex.depth())
            .ok_or(GraphError::UnknownVertex { vertex: root })?;

        let shared = SharedGraph::new(mem::take(graph));
        let state = PoolState::new(&shared, self.shape);
        let mut seed_rng = stream_rng(self.seed, TREE_STREAM);
        state.issue_children(root, depth, &mut seed_rng)?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers.get())
            .thread_name(|index| format!("graphgen-tree-{index}"))
            .build()
            .map_err(|err| GraphError::WorkerPool {
                reason: err.to_string(),
            })?;

        let state_ref = &state;
        pool.scope(|scope| {
            for mut rng in build_worker_rngs(self.seed, self.workers.get()) {
                scope.spawn(move |_| state_ref.run_worker(&mut rng));
            }
        });

        let outcome = state.into_outcome();
        *graph = shared.into_inner()?;
        let jobs = outcome?;
        debug!(jobs, vertices = graph.vertex_count(), "worker pool drained");
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
struct GrowJob {
    parent: VertexId,
    parent_depth: usize,
}

struct PoolState<'graph> {
    graph: &'graph SharedGraph,
    shape: TreeShape,
    queue: Mutex<VecDeque<GrowJob>>,
    issued: AtomicUsize,
    completed: AtomicUsize,
    aborted: AtomicBool,
    failure: Mutex<Option<GraphError>>,
}

impl<'graph> PoolState<'graph> {
    fn new(graph: &'graph SharedGraph, shape: TreeShape) -> Self {
        Self {
            graph,
            shape,
            queue: Mutex::new(VecDeque::new()),
            issued: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            aborted: AtomicBool::new(false),
            failure: Mutex::new(None),
        }
    }

    fn run_worker(&self, rng: &mut SmallRng) {
        let _unwind = AbortOnUnwind::new(&self.aborted);
        loop {
            if self.aborted.load(Ordering::SeqCst) {
                return;
            }
            let step = self.next_job().and_then(|job| match job {
                Some(job) => self.execute(job, rng).map(|()| true),
                None => Ok(false),
            });
            match step {
                Ok(true) => {}
                Ok(false) if self.is_drained() => return,
                Ok(false) => thread::yield_now(),
                Err(err) => {
                    self.abort(err);
                    return;
                }
            }
        }
    }

    fn next_job(&self) -> Result<Option<GrowJob>> {
        let mut queue = self.queue.lock().map_err(|_| GraphError::LockPoisoned {
            resource: "job queue",
        })?;
        Ok(queue.pop_front())
    }

    fn execute(&self, job: GrowJob, rng: &mut SmallRng) -> Result<()> {
        let depth = job.parent_depth + 1;
        let child = self.graph.write(|graph| {
            if graph.vertex(job.parent).is_none() {
                return Err(GraphError::UnknownVertex { vertex: job.parent });
            }
            let child = graph.add_vertex(depth);
            graph
                .add_edge(job.parent, child, EdgeColour::Gray)
                .map(|_| child)
        })??;
        self.issue_children(child, depth, rng)?;
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn issue_children(&self, parent: VertexId, parent_depth: usize, rng: &mut SmallRng) -> Result<()> {
        let children = self.shape.sample_children(parent_depth, rng);
        if children == 0 {
            return Ok(());
        }
        self.issued.fetch_add(children, Ordering::SeqCst);
        let mut queue = self.queue.lock().map_err(|_| GraphError::LockPoisoned {
            resource: "job queue",
        })?;
        queue.extend((0..children).map(|_| GrowJob {
            parent,
            parent_depth,
        }));
        Ok(())
    }

    fn is_drained(&self) -> bool {
        let completed = self.completed.load(Ordering::SeqCst);
        let issued = self.issued.load(Ordering::SeqCst);
        completed == issued
    }

    fn abort(&self, err: GraphError) {
        self.aborted.store(true, Ordering::SeqCst);
        if let Ok(mut slot) = self.failure.lock() {
            slot.get_or_insert(err);
        }
    }

    /// Returns the number of completed jobs, or the first worker failure.
    fn into_outcome(self) -> Result<usize> {
        let failure = self
            .failure
            .into_inner()
            .map_err(|_| GraphError::LockPoisoned {
                resource: "failure slot",
            })?;
        match failure {
            Some(err) => Err(err),
            None => Ok(self.completed.into_inner()),
        }
    }
}

/// Raises the abort flag when a worker unwinds, so its peers stop waiting for
/// a job that will never complete.
struct AbortOnUnwind<'a> {
    aborted: &'a AtomicBool,
}

impl<'a> AbortOnUnwind<'a> {
    const fn new(aborted: &'a AtomicBool) -> Self {
        Self { aborted }
    }
}

impl Drop for AbortOnUnwind<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.aborted.store(true, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::{GraphErrorCode, GraphInvariant};

    fn enqueue(state: &PoolState<'_>, parents: &[usize]) {
        state.issued.fetch_add(parents.len(), Ordering::SeqCst);
        let mut queue = state.queue.lock().expect("queue lock");
        queue.extend(parents.iter().map(|&parent| GrowJob {
            parent: VertexId::new(parent),
            parent_depth: 0,
        }));
    }

    fn drain(state: &PoolState<'_>, workers: usize) {
        thread::scope(|scope| {
            for mut rng in build_worker_rngs(5, workers) {
                scope.spawn(move || state.run_worker(&mut rng));
            }
        });
    }

    #[rstest]
    #[case::one_worker(1)]
    #[case::three_workers(3)]
    fn failing_job_voids_the_build(#[case] workers: usize) {
        let mut graph = Graph::new();
        graph.add_vertex(0);
        let shared = SharedGraph::new(graph);
        let state = PoolState::new(&shared, TreeShape::new(1, 2));
        enqueue(&state, &[0, 99, 0]);

        drain(&state, workers);

        let err = state.into_outcome().expect_err("unknown parent must fail");
        assert_eq!(err, GraphError::UnknownVertex { vertex: VertexId::new(99) });
        assert_eq!(err.code(), GraphErrorCode::UnknownVertex);

        let graph = shared.into_inner().expect("graph lock");
        assert_eq!(graph.vertex_count(), graph.edge_count() + 1);
        graph
            .invariants(1)
            .check(GraphInvariant::GrayTree)
            .expect("failed job must not leave an orphan vertex");
    }

    #[test]
    fn valid_jobs_drain_to_completion() {
        let mut graph = Graph::new();
        graph.add_vertex(0);
        let shared = SharedGraph::new(graph);
        let state = PoolState::new(&shared, TreeShape::new(1, 2));
        enqueue(&state, &[0, 0, 0]);

        drain(&state, 2);

        assert_eq!(state.into_outcome().expect("all jobs succeed"), 3);
        let graph = shared.into_inner().expect("graph lock");
        assert_eq!(graph.vertices_at_depth(1).len(), 3);
    }

    #[test]
    fn unwinding_worker_raises_abort_flag() {
        let aborted = AtomicBool::new(false);
        thread::scope(|scope| {
            let handle = scope.spawn(|| {
                let _unwind = AbortOnUnwind::new(&aborted);
                panic!("worker failed mid-job");
            });
            assert!(handle.join().is_err());
        });
        assert!(aborted.load(Ordering::SeqCst));
    }

    #[test]
    fn returning_worker_leaves_abort_flag_clear() {
        let aborted = AtomicBool::new(false);
        drop(AbortOnUnwind::new(&aborted));
        assert!(!aborted.load(Ordering::SeqCst));
    }
}
