//======================================================================
// qpsc-fhe/src/plain.rs
// A no-encryption reference backend. It mirrors the slot batching and
// arithmetic of a real backend so the facade and the transciphering
// pipeline can be exercised without an FHE library.
//======================================================================

use qpsc::field::{modadd, modmul};
use serde::{Deserialize, Serialize};

use crate::backend::FheBackend;

/// "Ciphertext" of the reference backend: the slot values themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainCiphertext(pub Vec<u64>);

/// Reference backend over F_p with a fixed slot count.
#[derive(Debug, Clone)]
pub struct PlainBackend {
    p: u64,
    slots: usize,
}

impl PlainBackend {
    pub fn new(p: u64, slots: usize) -> Self {
        Self {
            p,
            slots: slots.max(1),
        }
    }
}

impl FheBackend for PlainBackend {
    type Ciphertext = PlainCiphertext;

    fn slot_count(&self) -> usize {
        self.slots
    }

    fn encrypt(&self, plain: &[u64]) -> Vec<PlainCiphertext> {
        plain
            .chunks(self.slots)
            .map(|chunk| PlainCiphertext(chunk.to_vec()))
            .collect()
    }

    fn decrypt(&self, cipher: &[PlainCiphertext]) -> Vec<u64> {
        cipher.iter().flat_map(|c| c.0.iter().copied()).collect()
    }

    fn add(&self, a: &PlainCiphertext, b: &PlainCiphertext) -> PlainCiphertext {
        debug_assert_eq!(a.0.len(), b.0.len());
        PlainCiphertext(
            a.0.iter()
                .zip(b.0.iter())
                .map(|(&x, &y)| modadd(x, y, self.p))
                .collect(),
        )
    }

    fn mul_relin(&self, a: &PlainCiphertext, b: &PlainCiphertext) -> PlainCiphertext {
        debug_assert_eq!(a.0.len(), b.0.len());
        PlainCiphertext(
            a.0.iter()
                .zip(b.0.iter())
                .map(|(&x, &y)| modmul(x, y, self.p))
                .collect(),
        )
    }
}
