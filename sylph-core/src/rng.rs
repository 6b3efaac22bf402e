//! Bounded-uniform integer source over a raw byte stream
//!
//! Every random decision in the engine goes through [`Prng::next_int`], which
//! draws four bytes from the underlying stream and reduces them modulo the
//! requested range. The stream is either the operating system's CSPRNG (the
//! default) or a seeded deterministic generator for reproducible output; no
//! other module may observe which one is active.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Random integer source backed by an opaque byte stream
pub struct Prng {
    stream: Box<dyn RngCore>,
}

impl Prng {
    /// Creates a source backed by the operating system's CSPRNG
    pub fn secure() -> Self {
        Self {
            stream: Box::new(OsRng),
        }
    }

    /// Creates a deterministic source from a 32-bit seed.
    ///
    /// Identical seeds yield identical byte streams, and therefore identical
    /// generation results for identical configurations.
    pub fn seeded(seed: u32) -> Self {
        Self {
            stream: Box::new(StdRng::seed_from_u64(u64::from(seed))),
        }
    }

    /// Creates a source from an arbitrary byte stream (mainly for tests)
    pub fn from_stream(stream: Box<dyn RngCore>) -> Self {
        Self { stream }
    }

    /// Returns a uniformly distributed integer in `[min, max)`.
    ///
    /// `max` must be strictly greater than `min`. The value is computed as
    /// four stream bytes interpreted as a little-endian `u32`, reduced modulo
    /// the range width.
    pub fn next_int(&mut self, min: u32, max: u32) -> u32 {
        let mut bytes = [0u8; 4];
        self.stream.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes) % (max - min) + min
    }

    /// Returns a uniformly distributed integer in `[0, max)`
    pub fn next_below(&mut self, max: u32) -> u32 {
        self.next_int(0, max)
    }
}

impl std::fmt::Debug for Prng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prng").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_streams_are_reproducible() {
        let mut a = Prng::seeded(1234);
        let mut b = Prng::seeded(1234);
        for _ in 0..64 {
            assert_eq!(a.next_int(0, 1000), b.next_int(0, 1000));
        }
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut a = Prng::seeded(1);
        let mut b = Prng::seeded(2);
        let same = (0..32).all(|_| a.next_int(0, 1 << 30) == b.next_int(0, 1 << 30));
        assert!(!same);
    }

    #[test]
    fn values_stay_in_range() {
        let mut prng = Prng::seeded(99);
        for _ in 0..256 {
            let v = prng.next_int(3, 17);
            assert!((3..17).contains(&v));
        }
        for _ in 0..256 {
            assert!(prng.next_below(2) < 2);
        }
    }

    #[test]
    fn secure_stream_produces_output() {
        let mut prng = Prng::secure();
        // Smoke check only: the values must respect the bound.
        for _ in 0..16 {
            assert!(prng.next_below(10) < 10);
        }
    }
}
