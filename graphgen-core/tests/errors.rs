use graphgen_core::{EdgeColour, EdgeId, GraphError, GraphErrorCode, VertexId};
use rstest::rstest;

fn v(id: usize) -> VertexId {
    VertexId::new(id)
}

#[rstest]
#[case(
    GraphError::UnknownVertex { vertex: v(4) },
    GraphErrorCode::UnknownVertex,
    "GRAPH_UNKNOWN_VERTEX",
    true,
)]
#[case(
    GraphError::LoopRule { colour: EdgeColour::Blue, from: v(1), to: v(1) },
    GraphErrorCode::LoopRule,
    "GRAPH_LOOP_RULE",
    true,
)]
#[case(
    GraphError::DepthRule {
        colour: EdgeColour::Red,
        from: v(1),
        to: v(2),
        from_depth: 1,
        to_depth: 2,
    },
    GraphErrorCode::DepthRule,
    "GRAPH_DEPTH_RULE",
    true,
)]
#[case(
    GraphError::TargetNotFresh { vertex: v(2), edges: 1 },
    GraphErrorCode::TargetNotFresh,
    "GRAPH_TARGET_NOT_FRESH",
    true,
)]
#[case(
    GraphError::AlreadyConnected { from: v(1), to: v(2), existing: EdgeId::new(3) },
    GraphErrorCode::AlreadyConnected,
    "GRAPH_ALREADY_CONNECTED",
    true,
)]
#[case(
    GraphError::InvalidWorkerCount { got: 0 },
    GraphErrorCode::InvalidWorkerCount,
    "GRAPH_INVALID_WORKER_COUNT",
    false,
)]
#[case(
    GraphError::WorkerPool { reason: "spawn failed".to_owned() },
    GraphErrorCode::WorkerPool,
    "GRAPH_WORKER_POOL",
    false,
)]
#[case(
    GraphError::LockPoisoned { resource: "graph lock" },
    GraphErrorCode::LockPoisoned,
    "GRAPH_LOCK_POISONED",
    false,
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] code: &str,
    #[case] contract: bool,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
    assert_eq!(error.is_contract_violation(), contract);
}

#[rstest]
fn messages_name_the_offending_entities() {
    let err = GraphError::AlreadyConnected {
        from: v(1),
        to: v(2),
        existing: EdgeId::new(3),
    };
    assert_eq!(
        err.to_string(),
        "vertices 1 and 2 are already connected by edge 3"
    );
}
