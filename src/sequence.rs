//! Queries on the prime factor count sequence, and [PrimeFactorSequence] which ties them
//! together with the transformation search for a fixed bound.

use crate::buffer::{NaiveBuffer, PrimeSet};
use crate::error::{non_negative, Result};
use crate::factor::{counts_by_division, counts_by_sieve};
use crate::traits::{CountMethod, PrimeOracle, SequenceConfig};
use crate::transform::{shortest_prime_transform, PrimeTransform};
use std::fmt;

/// Two adjacent entries of a filtered sequence, `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntPair {
    pub a: u32,
    pub b: u32,
}

impl IntPair {
    #[inline]
    pub fn gap(&self) -> u32 {
        self.b - self.a
    }
}

impl From<(u32, u32)> for IntPair {
    fn from((a, b): (u32, u32)) -> Self {
        IntPair { a, b }
    }
}

impl From<IntPair> for (u32, u32) {
    fn from(p: IntPair) -> Self {
        (p.a, p.b)
    }
}

impl fmt::Display for IntPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Return the ascending indices i where `seq[i] == m`.
pub fn filter_by_count(seq: &[u32], m: i32) -> Result<Vec<u32>> {
    let m = non_negative("m", m)?;
    Ok(seq
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == m)
        .map(|(i, _)| i as u32)
        .collect())
}

/// Return the pairs of consecutive elements of the ascending `filtered` whose difference
/// is at most `gap`, in the order of `filtered`.
pub fn adjacent_gap_pairs(filtered: &[u32], gap: i32) -> Result<Vec<IntPair>> {
    let gap = non_negative("gap", gap)?;
    Ok(filtered
        .windows(2)
        .filter(|w| w[0] < w[1] && w[1] - w[0] <= gap)
        .map(|w| IntPair { a: w[0], b: w[1] })
        .collect())
}

/// Sequences and prime transformations over the integers in `[0, bound]`.
///
/// The primes under the bound are computed once at construction, every query
/// only reads them, so a sequence can be shared between threads.
///
/// ```
/// use prime_factor_seq::PrimeFactorSequence;
///
/// let seq = PrimeFactorSequence::new(10).unwrap();
/// assert_eq!(seq.prime_factor_sequence(), [0, 0, 1, 1, 2, 1, 2, 1, 3, 2, 2]);
/// assert_eq!(seq.numbers_with_m_prime_factors(1).unwrap(), [2, 3, 5, 7]);
/// assert_eq!(seq.change_to_prime(1).unwrap().to_string(), "0");
/// ```
#[derive(Debug, Clone)]
pub struct PrimeFactorSequence {
    bound: u32,
    primes: PrimeSet,
    config: SequenceConfig,
}

impl PrimeFactorSequence {
    pub fn new(bound: i32) -> Result<Self> {
        Self::with_config(bound, None)
    }

    /// Create the sequence with primes from a fresh [NaiveBuffer], which is dropped
    /// once the primes under `bound` are collected
    pub fn with_config(bound: i32, config: Option<SequenceConfig>) -> Result<Self> {
        Self::with_oracle(bound, &mut NaiveBuffer::new(), config)
    }

    /// Create the sequence with primes from the given oracle, e.g. a [crate::CachedOracle]
    /// shared by several sequences
    pub fn with_oracle<O: PrimeOracle>(
        bound: i32,
        oracle: &mut O,
        config: Option<SequenceConfig>,
    ) -> Result<Self> {
        let checked = non_negative("bound", bound)?;
        let primes = oracle.primes_up_to(bound).map_err(|_| rename_bound(bound))?;
        Ok(Self::from_primes(checked, primes, config))
    }

    fn from_primes(bound: u32, primes: PrimeSet, config: Option<SequenceConfig>) -> Self {
        // an oracle may report a smaller set bound, e.g. the largest prime of a collected set
        debug_assert!(primes.bound() <= bound);
        PrimeFactorSequence {
            bound,
            primes,
            config: config.unwrap_or(SequenceConfig::default()),
        }
    }

    #[inline]
    pub fn bound(&self) -> u32 {
        self.bound
    }

    #[inline]
    pub fn primes(&self) -> &PrimeSet {
        &self.primes
    }

    #[inline]
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Obtain the sequence L[0 ..= bound] where L[i] is the number of prime factors of i,
    /// including repeated factors.
    pub fn prime_factor_sequence(&self) -> Vec<u32> {
        match self.config.count_method {
            CountMethod::TrialDivision => counts_by_division(self.bound, self.primes.as_slice()),
            CountMethod::SmallestFactor => counts_by_sieve(self.bound),
        }
    }

    /// Obtain the ascending integers in `[0, bound]` with exactly `m` prime factors,
    /// including repeated factors.
    pub fn numbers_with_m_prime_factors(&self, m: i32) -> Result<Vec<u32>> {
        filter_by_count(&self.prime_factor_sequence(), m)
    }

    /// Obtain the pairs (a, b) of adjacent entries in [Self::numbers_with_m_prime_factors]
    /// with `b - a <= gap`.
    pub fn numbers_with_m_prime_factors_and_small_gap(&self, m: i32, gap: i32) -> Result<Vec<IntPair>> {
        adjacent_gap_pairs(&self.numbers_with_m_prime_factors(m)?, gap)
    }

    /// Transform n into a prime not larger than the bound with `0` steps (x -> 2x+1)
    /// and `1` steps (x -> x+1), see [crate::transform].
    pub fn change_to_prime(&self, n: i32) -> Result<PrimeTransform> {
        // the bound was validated at construction and fits in i32
        shortest_prime_transform(n, self.bound as i32, &self.primes, Some(self.config.search))
    }
}

#[inline]
fn rename_bound(bound: i32) -> crate::Error {
    crate::Error::InvalidArgument { name: "bound", value: bound }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SearchConfig;
    use crate::{CachedOracle, Error};

    /// Collects the primes by trial division, so the set bound is the largest prime
    struct TrialOracle;

    impl PrimeOracle for TrialOracle {
        fn primes_up_to(&mut self, n: i32) -> Result<PrimeSet> {
            let n = non_negative("n", n)?;
            Ok((2..=n).filter(|&x| (2..x).take_while(|d| d * d <= x).all(|d| x % d != 0)).collect())
        }
    }

    #[test]
    fn filter_by_count_test() {
        let seq = [0, 0, 1, 1, 2, 1, 2, 1, 3, 2, 2];
        assert_eq!(filter_by_count(&seq, 1).unwrap(), [2, 3, 5, 7]);
        assert_eq!(filter_by_count(&seq, 2).unwrap(), [4, 6, 9, 10]);
        assert_eq!(filter_by_count(&seq, 0).unwrap(), [0, 1]);
        assert!(filter_by_count(&seq, 4).unwrap().is_empty());
        assert_eq!(
            filter_by_count(&seq, -1),
            Err(Error::InvalidArgument { name: "m", value: -1 })
        );
    }

    #[test]
    fn adjacent_gap_pairs_test() {
        let pairs = adjacent_gap_pairs(&[2, 3, 5, 7], 2).unwrap();
        assert_eq!(pairs, vec![(2, 3).into(), (3, 5).into(), (5, 7).into()]);
        assert_eq!(adjacent_gap_pairs(&[2, 3, 5, 7], 1).unwrap(), vec![IntPair { a: 2, b: 3 }]);
        assert_eq!(adjacent_gap_pairs(&[4, 6, 9, 10], 0).unwrap(), vec![]);
        assert!(adjacent_gap_pairs(&[5], 10).unwrap().is_empty());
        assert!(adjacent_gap_pairs(&[], 10).unwrap().is_empty());
        assert_eq!(
            adjacent_gap_pairs(&[1, 2], -3),
            Err(Error::InvalidArgument { name: "gap", value: -3 })
        );

        let pair = IntPair { a: 33, b: 34 };
        assert_eq!(pair.gap(), 1);
        assert_eq!(pair.to_string(), "(33, 34)");
        assert_eq!(<(u32, u32)>::from(pair), (33, 34));
    }

    #[test]
    fn sequence_test() {
        let seq = PrimeFactorSequence::new(10).unwrap();
        assert_eq!(seq.bound(), 10);
        assert_eq!(seq.primes().as_slice(), [2, 3, 5, 7]);
        assert_eq!(seq.prime_factor_sequence(), [0, 0, 1, 1, 2, 1, 2, 1, 3, 2, 2]);
        assert_eq!(seq.numbers_with_m_prime_factors(1).unwrap(), [2, 3, 5, 7]);
        assert_eq!(
            seq.numbers_with_m_prime_factors_and_small_gap(1, 2).unwrap(),
            vec![(2, 3).into(), (3, 5).into(), (5, 7).into()]
        );
        assert_eq!(
            seq.numbers_with_m_prime_factors_and_small_gap(2, 1).unwrap(),
            vec![IntPair { a: 9, b: 10 }]
        );

        let seq = PrimeFactorSequence::new(0).unwrap();
        assert_eq!(seq.prime_factor_sequence(), [0]);
        assert_eq!(seq.numbers_with_m_prime_factors(0).unwrap(), [0]);
        assert!(seq.numbers_with_m_prime_factors_and_small_gap(0, 5).unwrap().is_empty());
    }

    #[test]
    fn invalid_argument_test() {
        assert_eq!(
            PrimeFactorSequence::new(-10).unwrap_err(),
            Error::InvalidArgument { name: "bound", value: -10 }
        );
        let seq = PrimeFactorSequence::new(10).unwrap();
        assert!(seq.numbers_with_m_prime_factors(-1).is_err());
        assert_eq!(
            seq.numbers_with_m_prime_factors_and_small_gap(1, -1),
            Err(Error::InvalidArgument { name: "gap", value: -1 })
        );
        assert_eq!(
            seq.change_to_prime(-4),
            Err(Error::InvalidArgument { name: "n", value: -4 })
        );
    }

    #[test]
    fn change_to_prime_test() {
        let seq = PrimeFactorSequence::new(50).unwrap();
        assert_eq!(seq.change_to_prime(4).unwrap().to_string(), "1");
        assert_eq!(seq.change_to_prime(7).unwrap().to_string(), "");
        assert_eq!(seq.change_to_prime(51).unwrap(), PrimeTransform::NoSolution);
        assert_eq!(PrimeFactorSequence::new(3).unwrap().change_to_prime(1).unwrap().to_string(), "0");
    }

    #[test]
    fn config_test() {
        let config = SequenceConfig {
            count_method: CountMethod::SmallestFactor,
            search: SearchConfig::level_order(),
        };
        let sieved = PrimeFactorSequence::with_config(1000, Some(config)).unwrap();
        let default = PrimeFactorSequence::new(1000).unwrap();
        assert_eq!(sieved.prime_factor_sequence(), default.prime_factor_sequence());
        for n in 0..1000 {
            assert_eq!(sieved.change_to_prime(n), default.change_to_prime(n), "n = {}", n);
        }
    }

    #[test]
    fn with_oracle_test() {
        let mut oracle = CachedOracle::new(4);
        let a = PrimeFactorSequence::with_oracle(100, &mut oracle, None).unwrap();
        let b = PrimeFactorSequence::with_oracle(100, &mut oracle, None).unwrap();
        assert_eq!(oracle.cached(), 1);
        assert!(std::ptr::eq(a.primes().as_slice(), b.primes().as_slice()));
        assert_eq!(
            PrimeFactorSequence::with_oracle(-1, &mut oracle, None).unwrap_err(),
            Error::InvalidArgument { name: "bound", value: -1 }
        );
    }

    #[test]
    fn custom_oracle_test() {
        let seq = PrimeFactorSequence::with_oracle(10, &mut TrialOracle, None).unwrap();
        assert_eq!(seq.primes().bound(), 7);
        assert_eq!(seq.bound(), 10);
        assert_eq!(seq.prime_factor_sequence(), [0, 0, 1, 1, 2, 1, 2, 1, 3, 2, 2]);
        assert_eq!(seq.numbers_with_m_prime_factors(2).unwrap(), [4, 6, 9, 10]);
        assert_eq!(
            seq.numbers_with_m_prime_factors_and_small_gap(2, 1).unwrap(),
            vec![IntPair { a: 9, b: 10 }]
        );
        assert_eq!(seq.change_to_prime(4).unwrap().to_string(), "1");
        assert_eq!(seq.change_to_prime(8).unwrap(), PrimeTransform::NoSolution);

        // 10 is not prime, but the search may still pass through it
        let seq = PrimeFactorSequence::with_oracle(12, &mut TrialOracle, None).unwrap();
        assert_eq!(seq.bound(), 12);
        assert_eq!(seq.change_to_prime(9).unwrap().to_string(), "11");

        // the bound is checked before the oracle is asked
        assert_eq!(
            PrimeFactorSequence::with_oracle(-3, &mut TrialOracle, None).unwrap_err(),
            Error::InvalidArgument { name: "bound", value: -3 }
        );
    }

    #[test]
    fn fresh_buffer_test() {
        // an instance does not go through the per-thread cache
        crate::nt_funcs::clear_prime_cache();
        let seq = PrimeFactorSequence::new(5000).unwrap();
        assert_eq!(seq.primes().len(), 669);
        assert_eq!(crate::nt_funcs::cached_prime_sets(), 0);
    }

    #[test]
    fn shared_between_threads_test() {
        let seq = std::sync::Arc::new(PrimeFactorSequence::new(500).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let seq = seq.clone();
                std::thread::spawn(move || {
                    (t * 100..(t + 1) * 100)
                        .map(|n| seq.change_to_prime(n).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for (t, h) in handles.into_iter().enumerate() {
            let results = h.join().unwrap();
            for (i, r) in results.into_iter().enumerate() {
                let n = (t * 100 + i) as i32;
                assert_eq!(r, seq.change_to_prime(n).unwrap());
            }
        }
    }
}
