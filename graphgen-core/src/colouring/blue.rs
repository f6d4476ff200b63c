use rand::{Rng, rngs::SmallRng};

use crate::{Result, colour::EdgeColour};

use super::Canvas;

const SIBLING_PROBABILITY: f64 = 0.25;

/// Links consecutive vertices of each level, in creation order, with
/// probability 0.25 per pair.
pub(super) fn paint(canvas: &Canvas<'_>, rng: &mut SmallRng) -> Result<usize> {
    let mut added = 0;
    for level in canvas.levels {
        for pair in level.windows(2) {
            let &[left, right] = pair else { continue };
            if rng.gen_bool(SIBLING_PROBABILITY) && canvas.link(left, right, EdgeColour::Blue)? {
                added += 1;
            }
        }
    }
    Ok(added)
}
