//! This crate computes prime factor count sequences over a bounded range `[0, bound]`,
//! the integers with an exact number of prime factors and the close pairs among them,
//! and the shortest transformation of an integer into a prime with the steps
//! x -> 2x+1 and x -> x+1.
//!
//! ```
//! use prime_factor_seq::PrimeFactorSequence;
//!
//! let seq = PrimeFactorSequence::new(50).unwrap();
//! assert_eq!(seq.numbers_with_m_prime_factors(3).unwrap(), [8, 12, 18, 20, 27, 28, 30, 42, 44, 45, 50]);
//! assert_eq!(seq.change_to_prime(4).unwrap().to_string(), "1");
//! ```
//!
//! The free functions in [nt_funcs] do the same without an instance, and the modules
//! [factor], [sequence] and [transform] expose the underlying steps on explicit prime lists.

mod buffer;
mod error;
pub mod factor;
pub mod nt_funcs;
pub mod sequence;
mod traits;
pub mod transform;

pub use buffer::{CachedOracle, NaiveBuffer, PrimeSet};
pub use error::{Error, Result};
pub use sequence::{IntPair, PrimeFactorSequence};
pub use traits::{CountMethod, PrimeBuffer, PrimeOracle, SearchConfig, SearchStrategy, SequenceConfig};
pub use transform::{PrimeTransform, Step, TransformPath};
