//======================================================================
// qpsc-fhe/src/error.rs
// Error kinds for the facade surface.
//======================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FheError {
    /// The requested security level is not one the backends parameterize.
    #[error("security level must be 80 or 128, got {0}")]
    InvalidSecurityLevel(u32),

    /// The plaintext modulus cannot carry the cipher's field.
    #[error("plain modulus must satisfy p = 2 (mod 3)")]
    InvalidPlainModulus,

    /// Two vectors that must be combined element-wise differ in length.
    #[error("expected {expected} elements, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}
