//! Error type shared by all boundary operations

use std::convert::TryFrom;
use thiserror::Error;

/// Result type alias for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the sequence and transformation functions. Every argument
/// arrives as an `i32` and is rejected when negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter that must be non-negative was given a negative value
    #[error("invalid argument `{name}`: {value} must be non-negative")]
    InvalidArgument {
        /// Name of the rejected parameter
        name: &'static str,
        /// The rejected value
        value: i32,
    },
}

/// Convert a signed boundary argument into the unsigned domain used internally.
#[inline]
pub(crate) fn non_negative(name: &'static str, value: i32) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::InvalidArgument { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_test() {
        assert_eq!(non_negative("bound", 0), Ok(0));
        assert_eq!(non_negative("bound", i32::MAX), Ok(i32::MAX as u32));
        assert_eq!(
            non_negative("gap", -1),
            Err(Error::InvalidArgument { name: "gap", value: -1 })
        );
    }

    #[test]
    fn display_test() {
        let err = non_negative("n", -3).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument `n`: -3 must be non-negative");
    }
}
