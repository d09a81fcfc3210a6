//======================================================================
// qpsc/src/stream.rs
// The keystream engine: per-block pipeline, block counter, and the
// public cipher surface.
//======================================================================

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backends;
use crate::consts::{MIN_PRIME, STATE_WIDTH};
use crate::error::QpscError;
use crate::field::is_p_2mod3;
use crate::linear::LinearLayer;
use crate::sbox::SBox;
use crate::schedule::{add_round_key, RoundSchedule};
use crate::variant::SecurityLevel;

/// The core engine for the quadratic-permutation stream cipher.
///
/// A core is created with its modulus, security level and truncation
/// width, populated with key material via [`init`](Self::init), and then
/// produces keystream deterministically from the stored (key, nonce) and
/// a persistent block counter. The master key copy is wiped on drop.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct QpscCore {
    #[zeroize(skip)]
    p: u64,
    #[zeroize(skip)]
    level: SecurityLevel,
    #[zeroize(skip)]
    trunc_m: usize,
    #[zeroize(skip)]
    sbox: SBox,
    #[zeroize(skip)]
    linear: LinearLayer,
    #[zeroize(skip)]
    schedule: RoundSchedule,
    master_key: Option<[u64; STATE_WIDTH]>,
    /// The block counter advanced by `generate_keystream`.
    #[zeroize(skip)]
    counter: u32,
}

impl QpscCore {
    /// Create a cipher instance over the prime `p`.
    ///
    /// `p` must satisfy p = 2 (mod 3) and p >= 2^16; primality itself is
    /// the caller's contract (see [`field::generate_prime`]). `trunc_m`
    /// is the number of leading state elements discarded from every
    /// output block and must be at most 36.
    ///
    /// [`field::generate_prime`]: crate::field::generate_prime
    pub fn new(p: u64, level: SecurityLevel, trunc_m: usize) -> Result<Self, QpscError> {
        if !is_p_2mod3(p) || p < MIN_PRIME {
            return Err(QpscError::InvalidPrime);
        }
        if trunc_m > STATE_WIDTH {
            return Err(QpscError::InvalidTruncation);
        }
        Ok(Self {
            p,
            level,
            trunc_m,
            sbox: SBox::new(p)?,
            linear: LinearLayer::new(),
            schedule: RoundSchedule::new(&[], level.rounds()),
            master_key: None,
            counter: 0,
        })
    }

    /// Install the master key and nonce.
    ///
    /// `key` must hold exactly 36 field elements. The nonce may have any
    /// length (12 bytes or more is recommended); it must never be reused
    /// for a different stream under the same key. Re-initializing wipes
    /// the previous key copy and resets the block counter to 0.
    pub fn init(&mut self, key: &[u64], nonce: &[u8]) -> Result<(), QpscError> {
        if key.len() != STATE_WIDTH {
            return Err(QpscError::InvalidShape {
                expected: STATE_WIDTH,
                got: key.len(),
            });
        }
        let mut stored = [0u64; STATE_WIDTH];
        stored.copy_from_slice(key);

        self.master_key.zeroize();
        self.master_key = Some(stored);
        self.schedule = RoundSchedule::new(nonce, self.level.rounds());
        self.counter = 0;
        Ok(())
    }

    /// Generate `n` blocks of keystream, `36 - trunc_m` elements each,
    /// in block order. Advances the block counter by `n`, so successive
    /// calls continue the stream instead of repeating it.
    pub fn generate_keystream(&mut self, n: usize) -> Result<Vec<u64>, QpscError> {
        let key = self.master_key.ok_or(QpscError::NotInitialized)?;
        let out = backends::generate_blocks(self, &key, self.counter, n);
        self.counter = self.counter.wrapping_add(n as u32);
        Ok(out)
    }

    /// Stateless block primitive: the truncated keystream block at index
    /// `j`, independent of the internal counter.
    pub fn generate_block(&self, j: u32) -> Result<Vec<u64>, QpscError> {
        let key = self.master_key.ok_or(QpscError::NotInitialized)?;
        Ok(self.truncated_block(&key, j))
    }

    /// Current block position.
    pub fn block_pos(&self) -> u32 {
        self.counter
    }

    /// Reposition the block counter so the next `generate_keystream`
    /// call starts at block `pos`.
    pub fn seek(&mut self, pos: u32) {
        self.counter = pos;
    }

    /// The prime modulus of this instance.
    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// The security level of this instance.
    pub fn level(&self) -> SecurityLevel {
        self.level
    }

    /// The truncation width of this instance.
    pub fn trunc_m(&self) -> usize {
        self.trunc_m
    }

    /// The S-box of this instance, for its permutation and uniformity
    /// reports.
    pub fn sbox(&self) -> &SBox {
        &self.sbox
    }

    /// The linear layer of this instance, for its branch-number reports.
    pub fn linear_layer(&self) -> &LinearLayer {
        &self.linear
    }

    /// One full block, truncated for output.
    pub(crate) fn truncated_block(&self, key: &[u64; STATE_WIDTH], j: u32) -> Vec<u64> {
        self.block(key, j)[self.trunc_m..].to_vec()
    }

    /// The per-block pipeline:
    /// counter vector -> whitening -> R x (SL -> LP -> AK) -> final LP.
    fn block(&self, key: &[u64; STATE_WIDTH], j: u32) -> [u64; STATE_WIDTH] {
        let p = self.p;

        // 1. Counter vector CV_j[i] = (i + 1 + j) mod p, a unique
        //    position-dependent offset per block index.
        let mut state = [0u64; STATE_WIDTH];
        for (i, s) in state.iter_mut().enumerate() {
            *s = (i as u64 + 1 + j as u64) % p;
        }

        // 2. Whitening with the round-0 key.
        let rc0 = self.schedule.round_constant(0, j, p);
        let rk0 = RoundSchedule::round_key(key, &rc0, p);
        add_round_key(&mut state, &rk0, p);

        // 3. Full rounds.
        for r in 1..=self.schedule.rounds() {
            let rc = self.schedule.round_constant(r, j, p);
            let rk = RoundSchedule::round_key(key, &rc, p);
            self.sbox.apply_layer(&mut state);
            state = self.linear.apply(&state, p);
            add_round_key(&mut state, &rk, p);
        }

        // 4. Final diffusion.
        self.linear.apply(&state, p)
    }
}
