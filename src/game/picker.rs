//! Secret word selection
//!
//! Sessions never touch a random number generator directly. They ask a
//! `SecretPicker` for an index into the corpus, which keeps rounds
//! reproducible under a seed or a scripted picker.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Capability for choosing the next secret
pub trait SecretPicker {
    /// Pick an index in `0..corpus_len`
    ///
    /// Called only with `corpus_len > 0`. Out-of-range answers are reduced
    /// modulo `corpus_len` by the session.
    fn pick_index(&mut self, corpus_len: usize) -> usize;
}

/// Uniform random selection backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    /// Picker seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic picker for a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPicker<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SecretPicker for RandomPicker<R> {
    fn pick_index(&mut self, corpus_len: usize) -> usize {
        self.rng.random_range(0..corpus_len)
    }
}

/// Scripted picker that cycles through a list of indices
///
/// Used to replay a known secret, e.g. by the `check` command and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPicker {
    indices: Vec<usize>,
    next: usize,
}

impl FixedPicker {
    /// Cycle through `indices`; an empty list always yields index 0
    #[must_use]
    pub const fn new(indices: Vec<usize>) -> Self {
        Self { indices, next: 0 }
    }

    /// Always pick the same index
    #[must_use]
    pub fn always(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl SecretPicker for FixedPicker {
    fn pick_index(&mut self, _corpus_len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.next % self.indices.len()];
        self.next += 1;
        index
    }
}

impl<P: SecretPicker + ?Sized> SecretPicker for &mut P {
    fn pick_index(&mut self, corpus_len: usize) -> usize {
        (**self).pick_index(corpus_len)
    }
}
