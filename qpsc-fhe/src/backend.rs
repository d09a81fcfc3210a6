//======================================================================
// qpsc-fhe/src/backend.rs
// The backend contract and the uniform facade over it.
//======================================================================

use crate::error::FheError;
use crate::params::{FheParams, Scheme};

/// What the transciphering pipeline expects of a homomorphic backend.
///
/// A backend owns its keys and encoding; the facade never sees them.
/// `encrypt` may batch its input into fewer ciphertexts than elements
/// (one per slot group); `decrypt` must return the elements in their
/// original order.
pub trait FheBackend {
    /// Opaque ciphertext handle.
    type Ciphertext: Clone;

    /// Number of plaintext slots a single ciphertext carries.
    fn slot_count(&self) -> usize;

    /// Encrypt a vector of field elements.
    fn encrypt(&self, plain: &[u64]) -> Vec<Self::Ciphertext>;

    /// Decrypt a vector of ciphertexts back into field elements.
    fn decrypt(&self, cipher: &[Self::Ciphertext]) -> Vec<u64>;

    /// Homomorphic addition.
    fn add(&self, a: &Self::Ciphertext, b: &Self::Ciphertext) -> Self::Ciphertext;

    /// Homomorphic multiplication followed by relinearization.
    fn mul_relin(&self, a: &Self::Ciphertext, b: &Self::Ciphertext) -> Self::Ciphertext;
}

/// A scheme-tagged wrapper presenting one surface over either backend
/// family. Construction validates the shared parameter invariants; all
/// operations delegate to the backend.
pub struct FheFacade<B: FheBackend> {
    scheme: Scheme,
    params: FheParams,
    backend: B,
}

impl<B: FheBackend> FheFacade<B> {
    pub fn new(scheme: Scheme, params: FheParams, backend: B) -> Result<Self, FheError> {
        params.validate()?;
        Ok(Self {
            scheme,
            params,
            backend,
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn params(&self) -> &FheParams {
        &self.params
    }

    /// Group field elements into slot-sized batches, one batch per
    /// ciphertext the backend will produce. The final batch may be
    /// short; order is preserved.
    pub fn pack_plaintext(&self, data: &[u64]) -> Vec<Vec<u64>> {
        data.chunks(self.backend.slot_count().max(1))
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    pub fn encrypt(&self, plain: &[u64]) -> Vec<B::Ciphertext> {
        self.backend.encrypt(plain)
    }

    pub fn decrypt(&self, cipher: &[B::Ciphertext]) -> Vec<u64> {
        self.backend.decrypt(cipher)
    }

    pub fn add(&self, a: &B::Ciphertext, b: &B::Ciphertext) -> B::Ciphertext {
        self.backend.add(a, b)
    }

    pub fn mul_relin(&self, a: &B::Ciphertext, b: &B::Ciphertext) -> B::Ciphertext {
        self.backend.mul_relin(a, b)
    }

    /// Pairwise homomorphic product of two ciphertext vectors, each
    /// product relinearized. Fails when the vectors differ in length.
    pub fn evaluate_product(
        &self,
        a: &[B::Ciphertext],
        b: &[B::Ciphertext],
    ) -> Result<Vec<B::Ciphertext>, FheError> {
        if a.len() != b.len() {
            return Err(FheError::LengthMismatch {
                expected: a.len(),
                got: b.len(),
            });
        }
        Ok(a.iter()
            .zip(b.iter())
            .map(|(x, y)| self.backend.mul_relin(x, y))
            .collect())
    }
}
