//! Lock-protected graph shared between worker threads.
//!
//! The tree workers and the colour passes mutate one graph. All structural
//! writes go through [`SharedGraph::write`], which holds the exclusive side of
//! a single lock; reads take the shared side and never exclude each other.

use std::sync::RwLock;

use crate::error::{GraphError, Result};

use super::Graph;

#[derive(Debug)]
pub(crate) struct SharedGraph {
    inner: RwLock<Graph>,
}

impl SharedGraph {
    pub(crate) fn new(graph: Graph) -> Self {
        Self {
            inner: RwLock::new(graph),
        }
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&Graph) -> R) -> Result<R> {
        let guard = self.inner.read().map_err(|_| GraphError::LockPoisoned {
            resource: "graph lock",
        })?;
        Ok(f(&guard))
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Graph) -> R) -> Result<R> {
        let mut guard = self.inner.write().map_err(|_| GraphError::LockPoisoned {
            resource: "graph lock",
        })?;
        Ok(f(&mut guard))
    }

    pub(crate) fn into_inner(self) -> Result<Graph> {
        self.inner.into_inner().map_err(|_| GraphError::LockPoisoned {
            resource: "graph lock",
        })
    }
}
