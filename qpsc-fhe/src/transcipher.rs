//======================================================================
// qpsc-fhe/src/transcipher.rs
// Plaintext-domain masking for transciphering, and the throughput
// report used when benchmarking a backend.
//======================================================================

use std::time::Duration;

use qpsc::field::{modadd, modsub, reduce};

use crate::error::FheError;

/// Client-side encryption: mask each plaintext element with the
/// matching keystream element, `c_i = m_i + ks_i mod p`.
pub fn mask(plain: &[u64], keystream: &[u64], p: u64) -> Result<Vec<u64>, FheError> {
    if plain.len() != keystream.len() {
        return Err(FheError::LengthMismatch {
            expected: plain.len(),
            got: keystream.len(),
        });
    }
    Ok(plain
        .iter()
        .zip(keystream.iter())
        .map(|(&m, &k)| modadd(reduce(m, p), reduce(k, p), p))
        .collect())
}

/// Inverse of [`mask`]: `m_i = c_i - ks_i mod p`.
pub fn unmask(masked: &[u64], keystream: &[u64], p: u64) -> Result<Vec<u64>, FheError> {
    if masked.len() != keystream.len() {
        return Err(FheError::LengthMismatch {
            expected: masked.len(),
            got: keystream.len(),
        });
    }
    Ok(masked
        .iter()
        .zip(keystream.iter())
        .map(|(&c, &k)| modsub(reduce(c, p), reduce(k, p), p))
        .collect())
}

/// Throughput of a homomorphic evaluation in KB/s.
pub fn throughput_kb_s(data_size_bytes: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (data_size_bytes as f64 / 1024.0) / secs
    } else {
        0.0
    }
}
