use crate::buffer::PrimeSet;
use crate::error::Result;

/// A source of the sorted primes under a bound.
///
/// Implementations may keep internal buffers or caches, but the returned set must only
/// depend on `n`: all primes in `[2, n]`, ascending and without duplicates.
pub trait PrimeOracle {
    /// Return the primes in `[2, n]`. Fails with [crate::Error::InvalidArgument] if `n` is negative.
    fn primes_up_to(&mut self, n: i32) -> Result<PrimeSet>;
}

/// A growable list of primes, filled by sieving on demand
pub trait PrimeBuffer<'a> {
    type PrimeIter: Iterator<Item = &'a u32>;

    /// Iterate over all primes currently stored, in ascending order
    fn iter(&'a self) -> Self::PrimeIter;

    /// Make sure every prime not larger than `limit` is stored
    fn reserve(&mut self, limit: u32);

    /// Every prime not larger than this value is stored
    fn bound(&self) -> u32;

    /// Drop the sieved primes and release the memory
    fn clear(&mut self);
}

/// How the prime factor count of each integer is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMethod {
    /// Trial division of each integer by the prime list, in ascending order
    TrialDivision,
    /// Linear sieve of smallest prime factors, the count of i is count(i / spf(i)) + 1
    SmallestFactor,
}

/// How the transformation tree is explored. Both strategies select the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Depth first search over the tree, keeping the smallest successful path. Branches
    /// longer than the best path found so far are cut.
    Exhaustive,
    /// Expand the tree one depth at a time and stop at the first depth that reaches a prime.
    /// Values reached more than once at the same depth are only expanded once.
    LevelOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: SearchStrategy,
}

impl SearchConfig {
    pub fn default() -> Self {
        Self { strategy: SearchStrategy::Exhaustive }
    }

    /// Breadth-first search, which is much faster when the shortest path is short
    pub fn level_order() -> Self {
        Self { strategy: SearchStrategy::LevelOrder }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceConfig {
    /// method used for the prime factor count sequence
    pub count_method: CountMethod,

    /// config for [crate::PrimeFactorSequence::change_to_prime]
    pub search: SearchConfig,
}

impl SequenceConfig {
    pub fn default() -> Self {
        Self {
            count_method: CountMethod::TrialDivision,
            search: SearchConfig::default(),
        }
    }
}
