use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed of replicate `index` within the family rooted at `base`.
///
/// SplitMix64 finaliser over `base` advanced by `index + 1` golden-ratio
/// increments. Neighbouring base seeds do not share replicate seeds the way
/// `base + index` would.
pub fn derive_seed(base: u64, index: u64) -> u64 {
    let mut z = base.wrapping_add(GOLDEN_GAMMA.wrapping_mul(index.wrapping_add(1)));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// `n` indices drawn uniformly with replacement from `0..n`.
pub fn draw_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..n)).collect()
}
