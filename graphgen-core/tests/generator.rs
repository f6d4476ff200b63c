//! Tests for the `GraphGenerator` orchestration API.

mod common;

use std::collections::BTreeSet;

use common::RecordingLayer;
use graphgen_core::{
    ColouringMode, EdgeColour, Graph, GraphErrorCode, GraphGeneratorBuilder, GraphInvariant,
    TreeStrategy,
};
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[rstest]
fn builder_defaults() {
    let builder = GraphGeneratorBuilder::new();
    assert_eq!(builder.max_depth(), 3);
    assert_eq!(builder.branching_factor(), 3);
    assert_eq!(builder.tree_strategy(), TreeStrategy::Recursive);
    assert_eq!(builder.colouring(), ColouringMode::Sequential);
    assert_eq!(builder.worker_count(), 4);

    let generator = builder.build().expect("defaults valid");
    assert_eq!(generator.shape().max_depth(), 3);
    assert_eq!(generator.worker_count().get(), 4);
    assert_eq!(generator.rng_seed(), None);
}

#[rstest]
fn builder_rejects_zero_workers() {
    let err = GraphGeneratorBuilder::new()
        .with_worker_count(0)
        .build()
        .expect_err("zero workers must fail");
    assert_eq!(err.code(), GraphErrorCode::InvalidWorkerCount);
    assert!(!err.is_contract_violation());
}

#[rstest]
#[case::recursive_sequential(TreeStrategy::Recursive, ColouringMode::Sequential)]
#[case::recursive_concurrent(TreeStrategy::Recursive, ColouringMode::Concurrent)]
#[case::pooled_sequential(TreeStrategy::Pooled, ColouringMode::Sequential)]
#[case::pooled_concurrent(TreeStrategy::Pooled, ColouringMode::Concurrent)]
fn generated_graphs_are_valid(#[case] strategy: TreeStrategy, #[case] colouring: ColouringMode) {
    let generator = GraphGeneratorBuilder::new()
        .with_max_depth(6)
        .with_branching_factor(3)
        .with_tree_strategy(strategy)
        .with_worker_count(3)
        .with_colouring(colouring)
        .build()
        .expect("configuration must be valid");
    for seed in [1, 2, 3] {
        let graph = generator
            .generate_with_seed(seed)
            .expect("generation must succeed");
        graph
            .invariants(6)
            .check_all()
            .expect("invariants must hold");
        let ids: Vec<_> = graph.vertices().map(|v| v.id().get()).collect();
        assert_eq!(ids, (0..graph.vertex_count()).collect::<Vec<_>>());
    }
}

#[rstest]
fn unseeded_generation_succeeds() {
    let graph = GraphGeneratorBuilder::new()
        .with_max_depth(4)
        .build()
        .expect("configuration must be valid")
        .generate()
        .expect("generation must succeed");
    assert_eq!(graph.vertices_at_depth(1).len(), 3);
    graph
        .invariants(4)
        .check(GraphInvariant::GrayTree)
        .expect("gray tree must hold");
}

#[rstest]
fn manual_graph_rejects_second_blue_link() {
    let mut graph = Graph::new();
    let root = graph.add_vertex(0);
    let left = graph.add_vertex(1);
    let right = graph.add_vertex(1);
    let leaf = graph.add_vertex(2);
    for (from, to) in [(root, left), (root, right), (left, leaf)] {
        graph
            .add_edge(from, to, EdgeColour::Gray)
            .expect("tree edge must be accepted");
    }
    let blue = graph
        .add_edge(left, right, EdgeColour::Blue)
        .expect("first blue link must be accepted");

    let before: BTreeSet<_> = graph.incident_edges(left).collect();
    let err = graph
        .add_edge(left, right, EdgeColour::Blue)
        .expect_err("second blue link must be rejected");
    assert_eq!(err.code(), GraphErrorCode::AlreadyConnected);
    assert_eq!(err.code().as_str(), "GRAPH_ALREADY_CONNECTED");
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.incident_edges(left).collect::<BTreeSet<_>>(), before);
    assert!(before.contains(&blue));
}

#[rstest]
fn generate_emits_phase_spans_and_events() {
    let generator = GraphGeneratorBuilder::new()
        .with_max_depth(3)
        .with_branching_factor(2)
        .build()
        .expect("configuration must be valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let graph = tracing::subscriber::with_default(subscriber, || generator.generate_with_seed(9))
        .expect("generation must succeed");

    let spans = layer.spans();
    let generate_span = spans
        .iter()
        .find(|span| span.name == "core.generate")
        .expect("core.generate span must exist");
    assert_eq!(generate_span.fields.get("max_depth"), Some(&"3".to_owned()));
    assert_eq!(
        generate_span.fields.get("branching_factor"),
        Some(&"2".to_owned())
    );
    assert_eq!(
        generate_span.fields.get("strategy"),
        Some(&"Recursive".to_owned())
    );
    assert!(spans.iter().any(|span| span.name == "tree.recursive"));
    assert!(spans.iter().any(|span| span.name == "colouring"));

    let events = layer.events();
    let tree_event = events
        .iter()
        .find(|event| event.level == Level::INFO && event.message() == Some("tree grown"))
        .expect("tree phase must be logged");
    assert_eq!(
        tree_event.fields.get("vertices"),
        Some(&graph.vertex_count().to_string())
    );
    assert!(events.iter().any(|event| {
        event.level == Level::INFO && event.message() == Some("colour passes complete")
    }));
    assert_eq!(
        events
            .iter()
            .filter(|event| event.message() == Some("colour pass finished"))
            .count(),
        4
    );
}
