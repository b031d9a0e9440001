//! Prime factor counting (Ω function) over a range of integers.
//!
//! The count of an integer is the number of its prime factors with multiplicity,
//! e.g. 12 = 2·2·3 has count 3. Both 0 and 1 have count 0.

use crate::error::{non_negative, Result};
use std::collections::BTreeMap;

/// Find factors by trial division, returns a tuple of the found factors and the residual.
///
/// The primes must be ascending. The residual will be Ok(1) if the target is fully factored,
/// otherwise it's Err(residual), where the residual has no factor among the given primes.
pub fn trial_division<I: Iterator<Item = u32>>(
    primes: I,
    target: u32,
) -> (BTreeMap<u32, usize>, std::result::Result<u32, u32>) {
    let mut residual = target;
    let mut result = BTreeMap::new();
    if target == 0 {
        return (result, Err(0));
    }

    for p in primes {
        if residual == 1 {
            break;
        }
        while residual % p == 0 {
            residual /= p;
            *result.entry(p).or_insert(0) += 1;
        }
    }

    if residual == 1 {
        (result, Ok(residual))
    } else {
        (result, Err(residual))
    }
}

/// Count the prime factors of `target` with multiplicity by trial division with the
/// given ascending primes. Zero is not divided at all and has count 0.
#[inline]
pub fn factor_count(target: u32, primes: &[u32]) -> u32 {
    if target == 0 {
        return 0;
    }

    let mut residual = target;
    let mut count = 0;
    for &p in primes {
        if residual == 1 {
            break;
        }
        while residual % p == 0 {
            residual /= p;
            count += 1;
        }
    }
    count
}

/// Return the sequence L[0 ..= bound] where L[i] is the number of prime factors of i,
/// counted with multiplicity.
///
/// `primes` must be ascending and contain every prime not larger than `bound`; a prime
/// missing from the list is not counted.
pub fn factor_counts(bound: i32, primes: &[u32]) -> Result<Vec<u32>> {
    let bound = non_negative("bound", bound)?;
    Ok(counts_by_division(bound, primes))
}

pub(crate) fn counts_by_division(bound: u32, primes: &[u32]) -> Vec<u32> {
    (0..=bound).map(|i| factor_count(i, primes)).collect()
}

/// Same output as [factor_counts], computed with a linear sieve of smallest prime factors
/// instead of trial division, so no prime list is needed.
pub fn factor_counts_sieved(bound: i32) -> Result<Vec<u32>> {
    let bound = non_negative("bound", bound)?;
    Ok(counts_by_sieve(bound))
}

pub(crate) fn counts_by_sieve(bound: u32) -> Vec<u32> {
    let bound = bound as usize;
    let mut min_prime_factor = vec![0u32; bound + 1];
    let mut primes: Vec<u32> = Vec::new();
    let mut counts = vec![0u32; bound + 1];
    for i in 2..=bound {
        if min_prime_factor[i] == 0 {
            min_prime_factor[i] = i as u32;
            primes.push(i as u32);
        }
        for &p in primes.iter() {
            let multi = i * p as usize;
            if p > min_prime_factor[i] || multi > bound {
                break;
            }
            min_prime_factor[multi] = p;
        }
        // Ω(i) = Ω(i / spf(i)) + 1
        counts[i] = counts[i / min_prime_factor[i] as usize] + 1;
    }
    counts
}
