use crate::foundation::math::Fnv1a64;
use std::hash::{BuildHasher, Hasher};

/// Source of uniform random numbers used by noise, shuffling and SVG turbulence seeds.
///
/// Production code defaults to [`EntropySource`]; tests inject [`SeededSource`] or
/// [`SequenceSource`] to make randomized steps reproducible.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. Returns 0 when `bound == 0`.
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let v = (self.next_f64() * f64::from(bound)).floor() as u32;
        v.min(bound - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// SplitMix64 generator with an explicit seed.
#[derive(Clone, Debug)]
pub struct SeededSource {
    state: u64,
}

impl SeededSource {
    /// Create a generator from `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for SeededSource {
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Unseeded generator: every instance starts from fresh process entropy.
#[derive(Clone, Debug)]
pub struct EntropySource {
    inner: SeededSource,
}

impl EntropySource {
    /// Create a generator seeded from the std hasher keys and the wall clock.
    pub fn new() -> Self {
        let mut keyed = std::collections::hash_map::RandomState::new().build_hasher();
        keyed.write_u64(0x6875_6566_6f72_6765);
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        let mut h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
        h.write_u64(keyed.finish());
        h.write_u64(nanos);
        Self {
            inner: SeededSource::new(h.finish()),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_f64(&mut self) -> f64 {
        self.inner.next_f64()
    }
}

/// Replays a fixed list of values in `[0, 1)`, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    /// Create a source from `values`; each is clamped into `[0, 1)`. An empty list yields 0.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, 1.0 - f64::EPSILON) } else { 0.0 })
            .collect();
        Self { values, pos: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
