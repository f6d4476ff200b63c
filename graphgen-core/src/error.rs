//! Error types for the graphgen core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias. Contract violations raised by [`crate::Graph::add_edge`] are
//! reported before any mutation takes place, so a failed insert leaves the
//! graph untouched.

use std::fmt;

use thiserror::Error;

use crate::{
    colour::EdgeColour,
    graph::{EdgeId, VertexId},
};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when building graphs or configuring a
/// [`crate::GraphGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex that does not exist.
    #[error("vertex {vertex} does not exist")]
    UnknownVertex {
        /// The identifier that could not be resolved.
        vertex: VertexId,
    },
    /// Self-loops are reserved for green edges, and green edges must be loops.
    #[error("{colour} edge {from}->{to} breaks the self-loop rule")]
    LoopRule {
        /// Colour requested for the edge.
        colour: EdgeColour,
        /// Requested source vertex.
        from: VertexId,
        /// Requested target vertex.
        to: VertexId,
    },
    /// The endpoint depths do not satisfy the colour's depth predicate.
    #[error("{colour} edge {from}->{to} is invalid for depths {from_depth} and {to_depth}")]
    DepthRule {
        /// Colour requested for the edge.
        colour: EdgeColour,
        /// Requested source vertex.
        from: VertexId,
        /// Requested target vertex.
        to: VertexId,
        /// Depth of the source vertex.
        from_depth: usize,
        /// Depth of the target vertex.
        to_depth: usize,
    },
    /// A gray edge must attach a freshly created vertex.
    #[error("gray edge target {vertex} already has {edges} incident edge(s)")]
    TargetNotFresh {
        /// Target vertex that was already linked.
        vertex: VertexId,
        /// Number of edges already incident on the target.
        edges: usize,
    },
    /// The vertex pair is already linked by an edge.
    #[error("vertices {from} and {to} are already connected by edge {existing}")]
    AlreadyConnected {
        /// Requested source vertex.
        from: VertexId,
        /// Requested target vertex.
        to: VertexId,
        /// The edge that already links the pair.
        existing: EdgeId,
    },
    /// The worker pool must contain at least one thread.
    #[error("worker_count must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The invalid worker count supplied by the caller.
        got: usize,
    },
    /// The thread pool backing the pooled tree builder could not be created.
    #[error("failed to start worker pool: {reason}")]
    WorkerPool {
        /// Message reported by the thread pool builder.
        reason: String,
    },
    /// A lock guarding shared build state was poisoned by a panicking thread.
    #[error("{resource} was poisoned by a panicking worker")]
    LockPoisoned {
        /// Name of the poisoned resource.
        resource: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex that does not exist.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// Self-loops are reserved for green edges.
        LoopRule => LoopRule { .. } => "GRAPH_LOOP_RULE",
        /// The endpoint depths do not satisfy the colour's depth predicate.
        DepthRule => DepthRule { .. } => "GRAPH_DEPTH_RULE",
        /// A gray edge must attach a freshly created vertex.
        TargetNotFresh => TargetNotFresh { .. } => "GRAPH_TARGET_NOT_FRESH",
        /// The vertex pair is already linked by an edge.
        AlreadyConnected => AlreadyConnected { .. } => "GRAPH_ALREADY_CONNECTED",
        /// The worker pool must contain at least one thread.
        InvalidWorkerCount => InvalidWorkerCount { .. } => "GRAPH_INVALID_WORKER_COUNT",
        /// The worker pool could not be created.
        WorkerPool => WorkerPool { .. } => "GRAPH_WORKER_POOL",
        /// A lock guarding shared build state was poisoned.
        LockPoisoned => LockPoisoned { .. } => "GRAPH_LOCK_POISONED",
    }
}

impl GraphError {
    /// Returns `true` when the error reports a broken edge-insertion contract
    /// rather than a configuration or runtime failure.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::UnknownVertex { .. }
                | Self::LoopRule { .. }
                | Self::DepthRule { .. }
                | Self::TargetNotFresh { .. }
                | Self::AlreadyConnected { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
