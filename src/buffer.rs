//! Prime lists: the sieve buffer, the immutable [PrimeSet] handed to the sequence
//! functions, and an LRU cache of prime sets.

use crate::error::{non_negative, Result};
use crate::traits::{PrimeBuffer, PrimeOracle};
use bitvec::bitvec;
use lru::LruCache;
use std::convert::TryFrom;
use std::iter::FromIterator;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Sorted and deduplicated primes, all of them not larger than [PrimeSet::bound].
///
/// The content is shared, so cloning a set is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSet {
    primes: Arc<[u32]>,
    bound: u32,
}

impl PrimeSet {
    /// The bound this set was generated for
    #[inline]
    pub fn bound(&self) -> u32 {
        self.bound
    }

    #[inline]
    pub fn contains(&self, num: u32) -> bool {
        self.primes.binary_search(&num).is_ok()
    }

    /// Same as [PrimeSet::contains], for values that may exceed the u32 range
    #[inline]
    pub fn contains64(&self, num: u64) -> bool {
        u32::try_from(num).map_or(false, |n| self.contains(n))
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.primes.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.primes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }
}

/// Collect a prime set from arbitrary primes. The input is sorted and deduplicated,
/// and the bound is set to the largest element. The elements are not checked for primality.
impl FromIterator<u32> for PrimeSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut primes: Vec<u32> = iter.into_iter().collect();
        primes.sort_unstable();
        primes.dedup();
        let bound = primes.last().copied().unwrap_or(0);
        PrimeSet { primes: primes.into(), bound }
    }
}

impl<'a> IntoIterator for &'a PrimeSet {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// NaiveBuffer implements a list of primes, extended by an odd-only sieve of Eratosthenes
pub struct NaiveBuffer {
    list: Vec<u32>, // list of found prime numbers
    current: u32,   // all primes smaller than this value has to be in the prime list, should be an odd number
}

impl NaiveBuffer {
    #[inline]
    pub fn new() -> Self {
        let list = vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
        NaiveBuffer { list, current: 41 }
    }
}

impl Default for NaiveBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PrimeBuffer<'a> for NaiveBuffer {
    type PrimeIter = std::slice::Iter<'a, u32>;

    fn clear(&mut self) {
        self.list.truncate(12); // keep the seeded primes 2 ~ 37
        self.list.shrink_to_fit();
        self.current = 41;
    }

    fn iter(&'a self) -> Self::PrimeIter {
        self.list.iter()
    }

    fn bound(&self) -> u32 {
        self.current - 1
    }

    fn reserve(&mut self, limit: u32) {
        // sieve the odd numbers in [current, odd_limit), computed in u64 so that
        // limit = u32::MAX does not overflow
        let odd_limit = (limit as u64 + 1) | 1;
        let current = self.current as u64;
        debug_assert!(current % 2 == 1);
        if odd_limit <= current {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(from = current, to = odd_limit, "extending prime sieve");

        // create sieve and filter with existing primes
        let mut sieve = bitvec![0; ((odd_limit - current) / 2) as usize];
        for p in self.list.iter().skip(1).map(|&p| p as u64) {
            // skip pre-filtered 2
            let start = if p * p < current {
                p * ((current / p) | 1) // start from an odd factor
            } else {
                p * p
            };
            for multi in (start..odd_limit).step_by(2 * p as usize) {
                if multi >= current {
                    sieve.set(((multi - current) / 2) as usize, true);
                }
            }
        }

        // sieve with new primes
        for p in (current..num_integer::sqrt(odd_limit) + 1).step_by(2) {
            if sieve[((p - current) / 2) as usize] {
                continue;
            }
            for multi in (p * p..odd_limit).step_by(2 * p as usize) {
                sieve.set(((multi - current) / 2) as usize, true);
            }
        }

        self.list
            .extend(sieve.iter_zeros().map(|x| (x as u64 * 2 + current) as u32));
        // odd_limit is at most 2^32 + 1, in that case every u32 has been sieved
        self.current = u32::try_from(odd_limit).unwrap_or(u32::MAX);
    }
}

impl PrimeOracle for NaiveBuffer {
    fn primes_up_to(&mut self, n: i32) -> Result<PrimeSet> {
        let n = non_negative("n", n)?;
        self.reserve(n);
        let primes: Vec<u32> = self.iter().take_while(|&&p| p <= n).copied().collect();
        Ok(PrimeSet {
            primes: primes.into(),
            bound: n,
        })
    }
}

/// A prime oracle that keeps the prime sets of the most recently requested bounds
pub struct CachedOracle<O = NaiveBuffer> {
    inner: O,
    cache: LruCache<u32, PrimeSet>,
}

impl CachedOracle<NaiveBuffer> {
    /// Create a cache over a [NaiveBuffer]. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self::with_oracle(NaiveBuffer::new(), capacity)
    }
}

impl<O: PrimeOracle> CachedOracle<O> {
    pub fn with_oracle(inner: O, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        CachedOracle {
            inner,
            cache: LruCache::new(capacity),
        }
    }

    /// Number of prime sets currently cached
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl<O> CachedOracle<O>
where
    O: PrimeOracle + for<'a> PrimeBuffer<'a>,
{
    /// Drop every cached prime set and the sieved primes of the inner buffer.
    /// Sets already handed out stay valid.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            cached = self.cache.len(),
            sieved = self.inner.bound(),
            "clearing prime cache"
        );
        self.cache.clear();
        self.inner.clear();
    }

    /// Every prime not larger than this value is held by the inner buffer
    pub fn sieved(&self) -> u32 {
        self.inner.bound()
    }
}

impl<O: PrimeOracle> PrimeOracle for CachedOracle<O> {
    fn primes_up_to(&mut self, n: i32) -> Result<PrimeSet> {
        let bound = non_negative("n", n)?;
        if let Some(set) = self.cache.get(&bound) {
            #[cfg(feature = "tracing")]
            tracing::trace!(bound, "prime set cache hit");
            return Ok(set.clone());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(bound, "prime set cache miss");
        let set = self.inner.primes_up_to(n)?;
        self.cache.put(bound, set.clone());
        Ok(set)
    }
}
