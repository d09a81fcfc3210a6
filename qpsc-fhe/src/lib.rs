#![cfg_attr(docsrs, feature(doc_cfg))]

//======================================================================
// qpsc-fhe/src/lib.rs
// Crate entry point for the FHE transciphering facade.
//======================================================================

//! Uniform facade over BGV/BFV-style homomorphic backends for
//! transciphering with the `qpsc` stream cipher.
//!
//! The cipher core is oblivious to whether its inputs are plaintext or
//! ciphertext; this crate pins down the boundary it expects of a
//! backend (encrypt, decrypt, homomorphic add, homomorphic multiply
//! with relinearization) and the plaintext-domain masking that a client
//! performs before handing data to the server.

// --- Module declarations ---
pub mod backend;
pub mod error;
pub mod params;
pub mod plain;
pub mod transcipher;

// --- Convenience re-exports ---
pub use crate::backend::{FheBackend, FheFacade};
pub use crate::error::FheError;
pub use crate::params::{FheParams, Scheme};
pub use crate::plain::{PlainBackend, PlainCiphertext};
pub use crate::transcipher::{mask, throughput_kb_s, unmask};

// --- Test module ---
#[cfg(test)]
mod tests;
