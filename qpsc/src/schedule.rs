//======================================================================
// qpsc/src/schedule.rs
// The XOF-driven round-constant and round-key schedule.
//======================================================================

use crate::consts::{STATE_WIDTH, XOF_OUTPUT_BYTES};
use crate::field::{modadd, modmul};
use crate::xof::shake128;

/// Derives the per-(round, block) constants and keys of the keystream
/// engine from the nonce fixed at `init`.
#[derive(Debug, Clone)]
pub struct RoundSchedule {
    nonce: Vec<u8>,
    rounds: u32,
}

impl RoundSchedule {
    pub fn new(nonce: &[u8], rounds: u32) -> Self {
        Self {
            nonce: nonce.to_vec(),
            rounds,
        }
    }

    /// Number of full rounds the schedule drives.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Round-constant vector for round `r` of block `j`.
    ///
    /// The XOF input is `nonce || j_LE32 || r_LE32`; its 288 output
    /// bytes are consumed as 36 big-endian 64-bit words, each reduced
    /// mod p with zero mapped to one so every constant is invertible.
    /// The same (nonce, j, r, p) always yields the same vector.
    pub fn round_constant(&self, r: u32, j: u32, p: u64) -> [u64; STATE_WIDTH] {
        let mut input = Vec::with_capacity(self.nonce.len() + 8);
        input.extend_from_slice(&self.nonce);
        input.extend_from_slice(&j.to_le_bytes());
        input.extend_from_slice(&r.to_le_bytes());

        let mut bytes = [0u8; XOF_OUTPUT_BYTES];
        shake128(&input, &mut bytes);

        let mut rc = [0u64; STATE_WIDTH];
        for (k, chunk) in bytes.chunks_exact(8).enumerate() {
            let word = u64::from_be_bytes(chunk.try_into().unwrap());
            let elem = word % p;
            rc[k] = if elem == 0 { 1 } else { elem };
        }
        rc
    }

    /// Round key: element-wise product of the master key and a
    /// round-constant vector.
    pub fn round_key(
        key: &[u64; STATE_WIDTH],
        rc: &[u64; STATE_WIDTH],
        p: u64,
    ) -> [u64; STATE_WIDTH] {
        let mut rk = [0u64; STATE_WIDTH];
        for (out, (&k, &c)) in rk.iter_mut().zip(key.iter().zip(rc.iter())) {
            *out = modmul(k, c, p);
        }
        rk
    }
}

/// Add a round key into the state, element-wise mod p.
pub fn add_round_key(state: &mut [u64; STATE_WIDTH], rk: &[u64; STATE_WIDTH], p: u64) {
    for (s, &k) in state.iter_mut().zip(rk.iter()) {
        *s = modadd(*s, k, p);
    }
}
