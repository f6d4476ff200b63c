//! Probabilistic colour passes run over a finished gray tree.
//!
//! Four passes add green self-loops, blue same-depth links, yellow links one
//! level down and red links two levels up. The depth index is static once the
//! tree is grown, so every pass works from one snapshot of the levels and
//! only touches the graph to check connectivity or insert an edge.
//!
//! The passes link disjoint classes of vertex pairs, which lets them run
//! concurrently: a connectivity check made under the shared side of the graph
//! lock cannot be invalidated by another pass before the insert.

mod blue;
mod green;
mod red;
mod yellow;

use rand::rngs::SmallRng;
use tracing::{debug, instrument};

use crate::{
    Result,
    colour::EdgeColour,
    graph::{Graph, VertexId, shared::SharedGraph},
    rng::{COLOUR_STREAM_BASE, stream_rng},
};

/// Selects how the colour passes are scheduled.
///
/// Both modes add the same `(source, target, colour)` triples for a given
/// tree and seed; only edge identifiers may differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColouringMode {
    /// Green, blue, yellow and red in that order on the calling thread.
    #[default]
    Sequential,
    /// All four passes as parallel rayon tasks.
    Concurrent,
}

/// Edge counts added by each pass of one colouring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PaintedEdges {
    pub(crate) green: usize,
    pub(crate) blue: usize,
    pub(crate) yellow: usize,
    pub(crate) red: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColourPass {
    Green,
    Blue,
    Yellow,
    Red,
}

impl ColourPass {
    const fn colour(self) -> EdgeColour {
        match self {
            Self::Green => EdgeColour::Green,
            Self::Blue => EdgeColour::Blue,
            Self::Yellow => EdgeColour::Yellow,
            Self::Red => EdgeColour::Red,
        }
    }

    const fn stream(self) -> u64 {
        COLOUR_STREAM_BASE
            + match self {
                Self::Green => 0,
                Self::Blue => 1,
                Self::Yellow => 2,
                Self::Red => 3,
            }
    }

    fn run(self, canvas: &Canvas<'_>, seed: u64) -> Result<usize> {
        let mut rng = stream_rng(seed, self.stream());
        let added = match self {
            Self::Green => green::paint(canvas, &mut rng),
            Self::Blue => blue::paint(canvas, &mut rng),
            Self::Yellow => yellow::paint(canvas, &mut rng),
            Self::Red => red::paint(canvas, &mut rng),
        }?;
        debug!(colour = %self.colour(), added, "colour pass finished");
        Ok(added)
    }
}

/// Shared view handed to every pass.
pub(super) struct Canvas<'a> {
    graph: &'a SharedGraph,
    levels: &'a [Vec<VertexId>],
    max_depth: usize,
}

impl Canvas<'_> {
    fn level(&self, depth: usize) -> &[VertexId] {
        self.levels.get(depth).map(Vec::as_slice).unwrap_or_default()
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.levels.iter().flatten().copied()
    }

    /// Inserts `from -> to` unless the pair is already linked.
    fn link(&self, from: VertexId, to: VertexId, colour: EdgeColour) -> Result<bool> {
        if self.graph.read(|graph| graph.is_connected(from, to))? {
            return Ok(false);
        }
        self.graph.write(|graph| graph.add_edge(from, to, colour))??;
        Ok(true)
    }

    /// Vertices at `depth` not yet linked to `source`, in creation order.
    fn unlinked_at(&self, source: VertexId, depth: usize) -> Result<Vec<VertexId>> {
        let level = self.level(depth);
        self.graph.read(|graph| {
            level
                .iter()
                .copied()
                .filter(|&candidate| !graph.is_connected(source, candidate))
                .collect()
        })
    }

    /// Links `source` to one uniformly chosen unlinked vertex at `depth`.
    fn link_any(
        &self,
        source: VertexId,
        depth: usize,
        colour: EdgeColour,
        rng: &mut SmallRng,
    ) -> Result<bool> {
        use rand::seq::SliceRandom;

        let candidates = self.unlinked_at(source, depth)?;
        match candidates.choose(rng) {
            Some(&target) => self.link(source, target, colour),
            None => Ok(false),
        }
    }
}

/// Runs the four colour passes over `graph` and returns it with the new
/// edges.
///
/// `max_depth` is the configured tree depth, which drives the yellow
/// probabilities. Each pass draws from its own stream of `seed`.
///
/// # Errors
/// Propagates the first [`crate::GraphError`] raised by a pass. The graph is
/// lost in that case.
#[instrument(name = "colouring", err, skip(graph), fields(vertices = graph.vertex_count()))]
pub(crate) fn paint(
    graph: Graph,
    max_depth: usize,
    seed: u64,
    mode: ColouringMode,
) -> Result<(Graph, PaintedEdges)> {
    let levels = graph.depth_levels().to_vec();
    let shared = SharedGraph::new(graph);
    let canvas = Canvas {
        graph: &shared,
        levels: &levels,
        max_depth,
    };

    let painted = match mode {
        ColouringMode::Sequential => PaintedEdges {
            green: ColourPass::Green.run(&canvas, seed)?,
            blue: ColourPass::Blue.run(&canvas, seed)?,
            yellow: ColourPass::Yellow.run(&canvas, seed)?,
            red: ColourPass::Red.run(&canvas, seed)?,
        },
        ColouringMode::Concurrent => {
            let canvas = &canvas;
            let ((green, blue), (yellow, red)) = rayon::join(
                || {
                    rayon::join(
                        || ColourPass::Green.run(canvas, seed),
                        || ColourPass::Blue.run(canvas, seed),
                    )
                },
                || {
                    rayon::join(
                        || ColourPass::Yellow.run(canvas, seed),
                        || ColourPass::Red.run(canvas, seed),
                    )
                },
            );
            PaintedEdges {
                green: green?,
                blue: blue?,
                yellow: yellow?,
                red: red?,
            }
        }
    };
    Ok((shared.into_inner()?, painted))
}
