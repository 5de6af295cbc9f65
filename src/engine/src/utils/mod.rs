use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();
        let result = action();
        (result, now.elapsed().as_millis())
    }
}

pub struct Logging;

impl Logging {
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let (result, estimated) = TimeEstimation::estimate(action);

        debug!("{}, {} ms", message, estimated);

        result
    }
}

/// RNG stream for one match: root seed plus the season-global match index.
pub fn match_rng(root_seed: u64, match_index: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(root_seed.wrapping_add(match_index))
}

/// RNG stream for the roster fold of one match, disjoint from the match stream.
pub fn update_rng(root_seed: u64, match_index: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_seed(root_seed, match_index))
}

/// Splitmix-style mix of a root seed with a stream id.
pub fn derive_seed(root_seed: u64, stream: u64) -> u64 {
    let mut z = root_seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
