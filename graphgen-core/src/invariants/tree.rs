use crate::colour::EdgeColour;

use super::{EvaluationMode, GraphContext, GraphInvariantViolation};

pub(super) fn check_gray_tree(
    ctx: GraphContext<'_>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), GraphInvariantViolation> {
    let graph = ctx.graph;
    let mut parents = vec![Vec::new(); graph.vertex_count()];
    for edge in graph.edges() {
        if edge.colour() != EdgeColour::Gray {
            continue;
        }
        match parents.get_mut(edge.to().get()) {
            Some(slot) => slot.push(edge.from()),
            None => mode.record(GraphInvariantViolation::DanglingEdge { edge: edge.id() })?,
        }
    }

    for (vertex, found) in graph.vertices().zip(&parents) {
        let depth = vertex.depth();
        let expected = usize::from(depth > 0);
        if found.len() != expected {
            mode.record(GraphInvariantViolation::GrayParentCount {
                vertex: vertex.id(),
                depth,
                parents: found.len(),
            })?;
            continue;
        }
        for &parent in found {
            let parent_depth = graph.vertex(parent).map(|p| p.depth());
            if parent_depth.and_then(|d| d.checked_add(1)) != Some(depth) {
                mode.record(GraphInvariantViolation::GrayParentDepth {
                    vertex: vertex.id(),
                    depth,
                    parent,
                    parent_depth: parent_depth.unwrap_or(usize::MAX),
                })?;
            }
        }
    }
    Ok(())
}

pub(super) fn check_depth_bounds(
    ctx: GraphContext<'_>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), GraphInvariantViolation> {
    for vertex in ctx.graph.vertices() {
        if vertex.depth() > ctx.max_depth {
            mode.record(GraphInvariantViolation::DepthExceeded {
                vertex: vertex.id(),
                depth: vertex.depth(),
                limit: ctx.max_depth,
            })?;
        }
    }
    Ok(())
}
