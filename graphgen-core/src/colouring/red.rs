use rand::{Rng, rngs::SmallRng};

use crate::{Result, colour::EdgeColour};

use super::Canvas;

const SKIP_PROBABILITY: f64 = 0.33;

/// Links vertices at depth two or more to a random unlinked vertex two
/// levels up, with probability 0.33. The deeper vertex is the source.
pub(super) fn paint(canvas: &Canvas<'_>, rng: &mut SmallRng) -> Result<usize> {
    let mut added = 0;
    for (depth, level) in canvas.levels.iter().enumerate().skip(2) {
        for &source in level {
            if rng.gen_bool(SKIP_PROBABILITY)
                && canvas.link_any(source, depth - 2, EdgeColour::Red, rng)?
            {
                added += 1;
            }
        }
    }
    Ok(added)
}
