//! Shortest transformation of an integer into a prime.
//!
//! Starting from n, each step either maps x to 2x+1 (a `0` step) or to x+1 (a `1` step).
//! A path stops as soon as it reaches a prime, and is abandoned once its value exceeds the
//! bound. Among all paths reaching a prime, the shortest is chosen, and among the shortest
//! ones the path with the smallest value when read as a binary numeral, which for paths of
//! equal length is the lexicographically smallest one.

use crate::buffer::PrimeSet;
use crate::error::{non_negative, Result};
use crate::traits::{SearchConfig, SearchStrategy};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One transformation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// x -> 2x + 1, written as `0`
    Double,
    /// x -> x + 1, written as `1`
    Increment,
}

impl Step {
    #[inline]
    pub fn apply(self, x: u64) -> u64 {
        match self {
            Step::Double => 2 * x + 1,
            Step::Increment => x + 1,
        }
    }

    #[inline]
    fn checked_apply(self, x: u64) -> Option<u64> {
        match self {
            Step::Double => x.checked_mul(2)?.checked_add(1),
            Step::Increment => x.checked_add(1),
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Step::Double => '0',
            Step::Increment => '1',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid transform step {0:?}, expected '0' or '1'")]
pub struct ParsePathError(pub char);

impl TryFrom<char> for Step {
    type Error = ParsePathError;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            '0' => Ok(Step::Double),
            '1' => Ok(Step::Increment),
            _ => Err(ParsePathError(c)),
        }
    }
}

/// A sequence of steps, ordered by length first and then lexicographically
/// (`0` before `1`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TransformPath(Vec<Step>);

impl TransformPath {
    #[inline]
    pub fn new() -> Self {
        TransformPath(Vec::new())
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn push(&mut self, step: Step) {
        self.0.push(step)
    }

    /// Apply the steps in order to `start`, return None on u64 overflow
    pub fn apply(&self, start: u64) -> Option<u64> {
        self.0.iter().try_fold(start, |x, s| s.checked_apply(x))
    }

    /// Values after each step, the start value excluded
    pub fn trace(&self, start: u64) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().scan(start, |x, s| {
            *x = s.checked_apply(*x)?;
            Some(*x)
        })
    }

    /// Read the path as a binary numeral, the last step being the least significant bit.
    /// Return None if the value doesn't fit in u64.
    pub fn binary_value(&self) -> Option<u64> {
        self.0.iter().try_fold(0u64, |v, s| {
            v.checked_mul(2)?
                .checked_add(if *s == Step::Increment { 1 } else { 0 })
        })
    }
}

impl Ord for TransformPath {
    fn cmp(&self, other: &Self) -> Ordering {
        // for equal lengths, the lexicographic order equals the order of binary values
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for TransformPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Vec<Step>> for TransformPath {
    fn from(steps: Vec<Step>) -> Self {
        TransformPath(steps)
    }
}

impl fmt::Display for TransformPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{}", s.symbol()))
    }
}

impl FromStr for TransformPath {
    type Err = ParsePathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.chars()
            .map(Step::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(TransformPath)
    }
}

/// Outcome of the transformation search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimeTransform {
    /// The selected path, empty if the start is already a prime
    Path(TransformPath),
    /// No path reaches a prime within the bound
    NoSolution,
}

impl PrimeTransform {
    #[inline]
    pub fn path(&self) -> Option<&TransformPath> {
        match self {
            PrimeTransform::Path(p) => Some(p),
            PrimeTransform::NoSolution => None,
        }
    }

    #[inline]
    pub fn into_path(self) -> Option<TransformPath> {
        match self {
            PrimeTransform::Path(p) => Some(p),
            PrimeTransform::NoSolution => None,
        }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, PrimeTransform::Path(_))
    }
}

impl From<Option<TransformPath>> for PrimeTransform {
    fn from(path: Option<TransformPath>) -> Self {
        path.map_or(PrimeTransform::NoSolution, PrimeTransform::Path)
    }
}

/// Paths are printed as `0`/`1` strings, and no solution as `-`
impl fmt::Display for PrimeTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimeTransform::Path(p) => p.fmt(f),
            PrimeTransform::NoSolution => f.write_str("-"),
        }
    }
}

/// Depth first traversal of the transformation tree with an explicit stack.
/// `on_prime` is called with every path that ends at a prime. With `prune` set, a path
/// is not extended beyond the length of the shortest path reported so far.
/// Return the number of visited nodes.
fn explore<F: FnMut(&[Step])>(
    start: u64,
    bound: u64,
    primes: &PrimeSet,
    prune: bool,
    mut on_prime: F,
) -> usize {
    let mut path: Vec<Step> = Vec::new();
    // (value, depth, last step)
    let mut stack: Vec<(u64, usize, Option<Step>)> = vec![(start, 0, None)];
    let mut limit = usize::MAX;
    let mut visited = 0;

    while let Some((value, depth, step)) = stack.pop() {
        // pushed before a shorter path was found
        if depth > limit {
            continue;
        }
        visited += 1;
        path.truncate(depth.saturating_sub(1));
        if let Some(s) = step {
            path.push(s);
        }
        debug_assert_eq!(path.len(), depth);

        if value > bound {
            continue;
        }
        if primes.contains64(value) {
            on_prime(&path);
            if prune {
                limit = limit.min(depth);
            }
            continue;
        }
        if depth + 1 > limit {
            continue;
        }

        // the 0 step is explored first
        stack.push((Step::Increment.apply(value), depth + 1, Some(Step::Increment)));
        stack.push((Step::Double.apply(value), depth + 1, Some(Step::Double)));
    }
    visited
}

/// Breadth first search, stopping at the first depth that contains a prime. The frontier
/// is kept in lexicographic order, so the first prime found is the selected one.
fn level_order(start: u64, bound: u64, primes: &PrimeSet) -> (Option<TransformPath>, usize) {
    let mut frontier = vec![(start, TransformPath::new())];
    frontier.retain(|(v, _)| *v <= bound);
    let mut seen = HashSet::new();
    let mut visited = 1;

    while !frontier.is_empty() {
        if let Some((_, path)) = frontier.iter().find(|(v, _)| primes.contains64(*v)) {
            return (Some(path.clone()), visited);
        }

        seen.clear();
        let mut next = Vec::with_capacity(frontier.len() * 2);
        for (value, path) in frontier {
            for &step in &[Step::Double, Step::Increment] {
                visited += 1;
                let v = step.apply(value);
                // a value already reached at this depth has the same subtree,
                // and was reached with a smaller path
                if v > bound || !seen.insert(v) {
                    continue;
                }
                let mut p = path.clone();
                p.push(step);
                next.push((v, p));
            }
        }
        frontier = next;
    }
    (None, visited)
}

/// Find every path turning `n` into a prime in `primes` without exceeding `bound`.
///
/// The paths are returned in depth first order, `0` steps before `1` steps. The result
/// is empty if no path exists, and contains only the empty path if `n` is a prime.
pub fn enumerate_prime_paths(n: i32, bound: i32, primes: &PrimeSet) -> Result<Vec<TransformPath>> {
    let start = non_negative("n", n)?;
    let bound = non_negative("bound", bound)?;

    let mut paths = Vec::new();
    explore(start as u64, bound as u64, primes, false, |p| {
        paths.push(TransformPath::from(p.to_vec()))
    });
    Ok(paths)
}

/// Find the shortest path turning `n` into a prime in `primes` without exceeding `bound`,
/// ties broken by the smallest binary value of the path.
///
/// `primes` should contain all primes up to `bound`. Both search strategies in [SearchConfig]
/// give the same result, the default one is [SearchStrategy::Exhaustive].
pub fn shortest_prime_transform(
    n: i32,
    bound: i32,
    primes: &PrimeSet,
    config: Option<SearchConfig>,
) -> Result<PrimeTransform> {
    let start = non_negative("n", n)? as u64;
    let bound = non_negative("bound", bound)? as u64;
    let config = config.unwrap_or(SearchConfig::default());

    let (best, visited) = match config.strategy {
        SearchStrategy::Exhaustive => {
            let mut best: Option<Vec<Step>> = None;
            let visited = explore(start, bound, primes, true, |p| {
                let better = match &best {
                    None => true,
                    Some(b) => (p.len(), p) < (b.len(), b.as_slice()),
                };
                if better {
                    best = Some(p.to_vec());
                }
            });
            (best.map(TransformPath::from), visited)
        }
        SearchStrategy::LevelOrder => level_order(start, bound, primes),
    };
    let outcome = PrimeTransform::from(best);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        n,
        bound,
        strategy = ?config.strategy,
        visited,
        outcome = %outcome,
        "prime transform search finished"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = visited;

    Ok(outcome)
}
