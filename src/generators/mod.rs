use std::time::{SystemTime, UNIX_EPOCH};

use rand::{SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

/// Get a random number generator, optionally seeded for reproducibility.
///
/// Without a seed the generator is seeded from the OS. If that fails, a seed
/// derived from the system clock is used instead so generation can still proceed.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::try_from_os_rng().unwrap_or_else(|err| {
            tracing::warn!("[rng] OS randomness unavailable ({err}), falling back to clock seed");
            StdRng::seed_from_u64(clock_seed())
        }),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
