//! Uniform random index draws.
//!
//! The generator never talks to a concrete RNG directly; it draws through
//! the [`RandomSource`] trait so that callers and tests can inject a seeded
//! or scripted source. Every [`rand::Rng`] is a source, including the
//! thread-local RNG and [`rand::rngs::StdRng`].

use rand::Rng;

use crate::error::Error;

/// A stateful source of uniformly distributed random indices.
///
/// Each call advances the source's internal state. A source is not required
/// to be cryptographically secure or reproducible across runs; callers that
/// need determinism should construct a seeded implementation.
///
/// A source must not be shared between concurrent callers without
/// serializing access: the contract is one consistent sequence of draws.
pub trait RandomSource {
    /// Returns the next index, uniformly distributed over `[0, bound)`.
    ///
    /// # Panics
    ///
    /// May panic if `bound` is zero. Use [`RandomSource::try_next_index`] at
    /// boundaries where the bound is not a known positive constant.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Checked variant of [`RandomSource::next_index`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBound`] if `bound` is zero.
    fn try_next_index(&mut self, bound: usize) -> Result<usize, Error> {
        if bound == 0 {
            return Err(Error::InvalidBound);
        }
        Ok(self.next_index(bound))
    }
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
