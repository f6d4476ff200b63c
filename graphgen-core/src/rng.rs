//! Seed derivation for the independent random streams used during a build.
//!
//! A single base seed fans out into one stream per tree worker and one per
//! colour pass, so seeded builds stay reproducible regardless of how the
//! streams are scheduled across threads.

use rand::{SeedableRng, rngs::SmallRng};

/// SplitMix64 increment (the 64-bit golden ratio) used for stream seed
/// derivation.
const STREAM_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Stream used by the recursive tree builder and to seed the pooled queue.
pub(crate) const TREE_STREAM: u64 = 0;
/// First stream reserved for colour passes; passes take consecutive slots.
pub(crate) const COLOUR_STREAM_BASE: u64 = 16;
/// First stream reserved for pooled tree workers.
pub(crate) const WORKER_STREAM_BASE: u64 = 1 << 32;

#[inline]
pub(crate) fn mix_stream_seed(base_seed: u64, stream: u64) -> u64 {
    splitmix64(base_seed ^ stream.wrapping_add(1).wrapping_mul(STREAM_SEED_SPACING))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(STREAM_SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

pub(crate) fn stream_rng(base_seed: u64, stream: u64) -> SmallRng {
    SmallRng::seed_from_u64(mix_stream_seed(base_seed, stream))
}

pub(crate) fn build_worker_rngs(base_seed: u64, workers: usize) -> Vec<SmallRng> {
    (0..workers as u64)
        .map(|idx| stream_rng(base_seed, WORKER_STREAM_BASE + idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use rand::Rng;

    #[test]
    fn streams_are_distinct() {
        let seeds: HashSet<u64> = (0..64).map(|stream| mix_stream_seed(42, stream)).collect();
        assert_eq!(seeds.len(), 64);
    }

    #[test]
    fn stream_rng_is_reproducible() {
        let mut first = stream_rng(7, COLOUR_STREAM_BASE);
        let mut second = stream_rng(7, COLOUR_STREAM_BASE);
        let a: Vec<u32> = (0..8).map(|_| first.r#gen()).collect();
        let b: Vec<u32> = (0..8).map(|_| second.r#gen()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn builds_one_rng_per_worker() {
        assert_eq!(build_worker_rngs(1, 5).len(), 5);
    }
}
