//! # World Seeds
//!
//! All procedural randomness derives from a [`WorldSeed`].
//!
//! ## Determinism Guarantee
//!
//! Given the same `WorldSeed`, the generator draws **exactly** the same
//! values on any platform, any time. `ChaCha8Rng` is used because its
//! output stream is specified, unlike `StdRng`.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// World seed for deterministic generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSeed(u64);

impl WorldSeed {
    /// Creates a new world seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Seeds from the wall clock, for maps that should differ per run.
    #[must_use]
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self(nanos).derive(0)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose.
    ///
    /// Uses a hash function to create independent streams from one seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }

    /// Creates the random source for this seed.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self(0xF1A7_C4AF_7000_0001)
    }
}

impl From<u64> for WorldSeed {
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = WorldSeed::new(42).rng();
        let mut b = WorldSeed::new(42).rng();

        for _ in 0..64 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }

    #[test]
    fn test_derive_separates_streams() {
        let seed = WorldSeed::new(42);
        assert_ne!(seed.derive(1), seed.derive(2));
        assert_eq!(seed.derive(1), seed.derive(1));
    }
}
