// Randomness Provider
// Generator behind every prime candidate and primality witness

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generator used by the engine for all random draws
///
/// StdRng is a general-purpose generator, not a CSPRNG; these two
/// constructors are the substitution point for a hardened one.
pub type EngineRng = StdRng;

/// Generator seeded from the operating system, constructed once per process
pub fn from_entropy() -> EngineRng {
    StdRng::from_entropy()
}

/// Deterministic generator for reproducible tests
pub fn from_seed(seed: u64) -> EngineRng {
    StdRng::seed_from_u64(seed)
}
