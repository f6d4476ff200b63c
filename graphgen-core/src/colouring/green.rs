use rand::{Rng, rngs::SmallRng};

use crate::{Result, colour::EdgeColour};

use super::Canvas;

const LOOP_PROBABILITY: f64 = 0.10;

/// Gives each vertex a self-loop with probability 0.10.
pub(super) fn paint(canvas: &Canvas<'_>, rng: &mut SmallRng) -> Result<usize> {
    let mut added = 0;
    for vertex in canvas.vertices() {
        if rng.gen_bool(LOOP_PROBABILITY) && canvas.link(vertex, vertex, EdgeColour::Green)? {
            added += 1;
        }
    }
    Ok(added)
}
