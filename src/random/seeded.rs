//! Reproducible random stream keyed by a string seed

use rand::{Error, RngCore, SeedableRng};

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// Stable 64-bit FNV-1a hash of a seed string
pub fn hash_seed(seed: &str) -> u64 {
    let mut state = FNV_OFFSET_BASIS;
    for &byte in seed.as_bytes() {
        state ^= byte as u64;
        state = state.wrapping_mul(FNV_PRIME);
    }
    state
}

/// SplitMix64 generator seeded from a string.
///
/// The output sequence depends only on the seed string, never on platform,
/// process or `rand` internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn from_seed_str(seed: &str) -> Self {
        Self {
            state: hash_seed(seed),
        }
    }

    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform float in [0, 1)
    #[inline]
    pub fn next_float(&mut self) -> f64 {
        // Top 53 bits fill the mantissa exactly
        (self.step() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform integer in [0, max_exclusive); 0 when `max_exclusive` is 0
    #[inline]
    pub fn next_int(&mut self, max_exclusive: usize) -> usize {
        if max_exclusive == 0 {
            return 0;
        }
        let value = (self.next_float() * max_exclusive as f64) as usize;
        value.min(max_exclusive - 1)
    }

    /// Uniform integer in [low, high]
    pub fn range_inclusive(&mut self, low: u8, high: u8) -> u8 {
        if high <= low {
            return low;
        }
        let span = (high - low) as usize + 1;
        low + self.next_int(span) as u8
    }

    /// Uniform pick from a sequence
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_int(items.len());
        items.get(index)
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self { state }
    }
}
