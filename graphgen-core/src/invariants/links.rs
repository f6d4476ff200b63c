use std::collections::BTreeMap;

use crate::graph::VertexId;

use super::{EvaluationMode, GraphContext, GraphInvariantViolation};

pub(super) fn check_colour_rules(
    ctx: GraphContext<'_>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), GraphInvariantViolation> {
    let graph = ctx.graph;
    for edge in graph.edges() {
        let depths = graph
            .vertex(edge.from())
            .zip(graph.vertex(edge.to()))
            .map(|(from, to)| (from.depth(), to.depth()));
        let Some((from_depth, to_depth)) = depths else {
            mode.record(GraphInvariantViolation::DanglingEdge { edge: edge.id() })?;
            continue;
        };
        let colour = edge.colour();
        let loop_ok = edge.is_self_loop() == colour.is_loop_colour();
        if !loop_ok || !colour.permits(from_depth, to_depth) {
            mode.record(GraphInvariantViolation::ColourRule {
                edge: edge.id(),
                colour,
                from_depth,
                to_depth,
            })?;
        }
    }
    Ok(())
}

pub(super) fn check_unique_links(
    ctx: GraphContext<'_>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), GraphInvariantViolation> {
    let mut pairs: BTreeMap<(VertexId, VertexId), usize> = BTreeMap::new();
    let mut loops: BTreeMap<VertexId, usize> = BTreeMap::new();
    for edge in ctx.graph.edges() {
        let (from, to) = edge.endpoints();
        if from == to {
            *loops.entry(from).or_default() += 1;
        } else {
            *pairs.entry((from.min(to), from.max(to))).or_default() += 1;
        }
    }

    for ((first, second), edges) in pairs {
        if edges > 1 {
            mode.record(GraphInvariantViolation::DuplicateLink {
                first,
                second,
                edges,
            })?;
        }
    }
    for (vertex, count) in loops {
        if count > 1 {
            mode.record(GraphInvariantViolation::DuplicateSelfLoop {
                vertex,
                loops: count,
            })?;
        }
    }
    Ok(())
}
