use rand::{Rng, rngs::SmallRng};

use crate::{Result, colour::EdgeColour};

use super::Canvas;

/// Links vertices strictly inside the configured depth range to a random
/// unlinked vertex one level down.
///
/// A vertex at depth `d` tries with probability `d / max_depth`, so deeper
/// vertices cross-link more often. Roots and vertices on the deepest
/// configured level never try.
pub(super) fn paint(canvas: &Canvas<'_>, rng: &mut SmallRng) -> Result<usize> {
    let mut added = 0;
    for depth in 1..canvas.max_depth {
        let probability = depth as f64 / canvas.max_depth as f64;
        for &source in canvas.level(depth) {
            if rng.gen_bool(probability)
                && canvas.link_any(source, depth + 1, EdgeColour::Yellow, rng)?
            {
                added += 1;
            }
        }
    }
    Ok(added)
}
