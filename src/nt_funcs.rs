//! Standalone functions that can be used without keeping a prime buffer.
//!
//! Prime lists are taken from a per-thread [CachedOracle], so repeated calls with the
//! same bound reuse the sieved primes. The cache holds on to the sieve until
//! [clear_prime_cache] is called or the thread exits.

use crate::buffer::{CachedOracle, PrimeSet};
use crate::error::Result;
use crate::factor;
use crate::sequence::{self, IntPair};
use crate::traits::{PrimeOracle, SearchConfig};
use crate::transform::{self, PrimeTransform};
use std::cell::RefCell;

/// Number of prime sets kept by the per-thread cache
pub const PRIME_CACHE_CAPACITY: usize = 16;

thread_local! {
    static ORACLE: RefCell<CachedOracle> = RefCell::new(CachedOracle::new(PRIME_CACHE_CAPACITY));
}

/// Return all primes in `[2, n]`, ascending.
pub fn primes_up_to(n: i32) -> Result<PrimeSet> {
    ORACLE.with(|oracle| oracle.borrow_mut().primes_up_to(n))
}

/// Drop the prime sets and the sieve cached for the current thread
pub fn clear_prime_cache() {
    ORACLE.with(|oracle| oracle.borrow_mut().clear())
}

/// Number of prime sets cached for the current thread
pub fn cached_prime_sets() -> usize {
    ORACLE.with(|oracle| oracle.borrow().cached())
}

/// This function re-exports [crate::factor::factor_counts] with the primes under `bound`
pub fn factor_counts(bound: i32) -> Result<Vec<u32>> {
    let primes = primes_up_to(bound).map_err(|_| crate::Error::InvalidArgument {
        name: "bound",
        value: bound,
    })?;
    factor::factor_counts(bound, primes.as_slice())
}

/// Integers in `[0, bound]` with exactly `m` prime factors, including repeated factors
pub fn numbers_with_m_prime_factors(bound: i32, m: i32) -> Result<Vec<u32>> {
    sequence::filter_by_count(&factor_counts(bound)?, m)
}

/// Adjacent pairs of [numbers_with_m_prime_factors] that differ by at most `gap`
pub fn numbers_with_small_gap(bound: i32, m: i32, gap: i32) -> Result<Vec<IntPair>> {
    sequence::adjacent_gap_pairs(&numbers_with_m_prime_factors(bound, m)?, gap)
}

/// This function re-exports [crate::transform::shortest_prime_transform] with the primes under `bound`
pub fn change_to_prime(n: i32, bound: i32, config: Option<SearchConfig>) -> Result<PrimeTransform> {
    crate::error::non_negative("n", n)?;
    let primes = primes_up_to(bound).map_err(|_| crate::Error::InvalidArgument {
        name: "bound",
        value: bound,
    })?;
    transform::shortest_prime_transform(n, bound, &primes, config)
}
