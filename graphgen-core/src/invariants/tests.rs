use rstest::rstest;

use crate::{EdgeColour, Graph, VertexId};

use super::{GraphInvariant, GraphInvariantViolation};

fn v(id: usize) -> VertexId {
    VertexId::new(id)
}

/// Valid tree: `0 -> 1`, `0 -> 2`, `1 -> 3` with depths `[0, 1, 1, 2]`.
fn valid_tree() -> Graph {
    let mut graph = Graph::new();
    for depth in [0, 1, 1, 2] {
        graph.add_vertex(depth);
    }
    for (from, to) in [(0, 1), (0, 2), (1, 3)] {
        graph
            .add_edge(v(from), v(to), EdgeColour::Gray)
            .expect("fixture edges are valid");
    }
    graph
}

#[test]
fn valid_tree_passes_every_invariant() {
    let graph = valid_tree();
    graph.invariants(2).check_all().expect("fixture is valid");
    assert!(graph.invariants(2).collect_all().is_empty());
}

#[test]
fn detects_missing_gray_parent() {
    let mut graph = valid_tree();
    graph.add_vertex(1);
    let err = graph
        .invariants(2)
        .check(GraphInvariant::GrayTree)
        .expect_err("orphan must be reported");
    assert_eq!(
        err,
        GraphInvariantViolation::GrayParentCount {
            vertex: v(4),
            depth: 1,
            parents: 0,
        }
    );
}

#[test]
fn detects_gray_parent_at_wrong_depth() {
    let mut graph = valid_tree();
    let orphan = graph.add_vertex(2);
    graph.insert_unchecked(v(0), orphan, EdgeColour::Gray);
    let err = graph
        .invariants(2)
        .check(GraphInvariant::GrayTree)
        .expect_err("skipped level must be reported");
    assert!(matches!(
        err,
        GraphInvariantViolation::GrayParentDepth { parent_depth: 0, depth: 2, .. }
    ));
}

#[test]
fn detects_depth_above_limit() {
    let graph = valid_tree();
    let err = graph
        .invariants(1)
        .check(GraphInvariant::DepthBounds)
        .expect_err("depth two exceeds one");
    assert_eq!(
        err,
        GraphInvariantViolation::DepthExceeded {
            vertex: v(3),
            depth: 2,
            limit: 1,
        }
    );
}

#[rstest]
#[case::blue_across(0, 3, EdgeColour::Blue)]
#[case::yellow_same(1, 2, EdgeColour::Yellow)]
#[case::red_adjacent(2, 3, EdgeColour::Red)]
#[case::green_pair(1, 2, EdgeColour::Green)]
#[case::blue_loop(2, 2, EdgeColour::Blue)]
fn detects_colour_rule_breaks(#[case] from: usize, #[case] to: usize, #[case] colour: EdgeColour) {
    let mut graph = valid_tree();
    let edge = graph.insert_unchecked(v(from), v(to), colour);
    let err = graph
        .invariants(2)
        .check(GraphInvariant::ColourRules)
        .expect_err("colour rule break must be reported");
    assert!(matches!(err, GraphInvariantViolation::ColourRule { edge: found, .. } if found == edge));
}

#[test]
fn detects_duplicate_links_and_loops() {
    let mut graph = valid_tree();
    graph.insert_unchecked(v(2), v(1), EdgeColour::Blue);
    graph.insert_unchecked(v(1), v(2), EdgeColour::Blue);
    graph.insert_unchecked(v(3), v(3), EdgeColour::Green);
    graph.insert_unchecked(v(3), v(3), EdgeColour::Green);

    let violations = graph.invariants(2).collect_all();
    assert_eq!(
        violations,
        vec![
            GraphInvariantViolation::DuplicateLink {
                first: v(1),
                second: v(2),
                edges: 2,
            },
            GraphInvariantViolation::DuplicateSelfLoop {
                vertex: v(3),
                loops: 2,
            },
        ]
    );
}

#[test]
fn collect_all_reports_every_violation() {
    let mut graph = valid_tree();
    graph.add_vertex(5);
    let violations = graph.invariants(2).collect_all();
    assert_eq!(violations.len(), 2);
    assert!(matches!(
        violations[0],
        GraphInvariantViolation::GrayParentCount { parents: 0, .. }
    ));
    assert!(matches!(
        violations[1],
        GraphInvariantViolation::DepthExceeded { depth: 5, .. }
    ));
}
