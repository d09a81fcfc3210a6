//======================================================================
// qpsc-fhe/src/params.rs
// Scheme selection and backend parameter surface.
//======================================================================

use qpsc::field::is_p_2mod3;
use serde::{Deserialize, Serialize};

use crate::error::FheError;

/// The homomorphic scheme family a backend implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// BGV-style leveled scheme.
    Bgv,
    /// BFV-style scale-invariant scheme.
    Bfv,
}

/// Parameters handed to a backend at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FheParams {
    /// Security level in bits; 80 or 128.
    pub security_level: u32,
    /// Ring dimension of the backend's plaintext/ciphertext polynomials.
    pub poly_modulus_degree: usize,
    /// Plaintext modulus; must equal the cipher's field modulus.
    pub plain_modulus: u64,
    /// Bit budget of the ciphertext modulus chain.
    pub cipher_modulus_bits: u32,
}

impl FheParams {
    /// Check the parameter invariants shared by every backend: an
    /// admissible security level and a plaintext modulus that carries
    /// the cipher's field.
    pub fn validate(&self) -> Result<(), FheError> {
        if self.security_level != 80 && self.security_level != 128 {
            return Err(FheError::InvalidSecurityLevel(self.security_level));
        }
        if !is_p_2mod3(self.plain_modulus) {
            return Err(FheError::InvalidPlainModulus);
        }
        Ok(())
    }
}
