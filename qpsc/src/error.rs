//======================================================================
// qpsc/src/error.rs
// Error kinds for the public cipher surface.
//======================================================================

use thiserror::Error;

/// Errors reported by the cipher surface. All of them are synchronous,
/// structural, and fatal for the call that produced them; nothing is
/// retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QpscError {
    /// The prime modulus does not satisfy p = 2 (mod 3), or is below 2^16.
    #[error("prime modulus must satisfy p = 2 (mod 3) and p >= 2^16")]
    InvalidPrime,

    /// An input vector did not have the required length.
    #[error("expected a vector of {expected} field elements, got {got}")]
    InvalidShape { expected: usize, got: usize },

    /// The truncation width exceeds the state width.
    #[error("truncation width must be at most 36")]
    InvalidTruncation,

    /// `generate_keystream` was called before `init`.
    #[error("cipher has not been initialized with a master key")]
    NotInitialized,

    /// The extendable-output function failed. Reserved: the SHAKE128
    /// binding in this crate cannot fail on a correct host.
    #[error("extendable-output function failure")]
    XofFailure,
}
