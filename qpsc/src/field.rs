//======================================================================
// qpsc/src/field.rs
// Arithmetic over F_p for a runtime prime modulus, plus the byte
// conversion boundary and prime-generation helpers.
//======================================================================

use rand::Rng;

use crate::consts::MIN_PRIME;

use primality_test::IsPrime;

/// Whether `p` is prime, via the Miller-Rabin test.
#[inline]
pub fn is_prime(p: u64) -> bool {
    p.is_prime()
}

// The field fits in a machine word for every admissible modulus
// (17..64 bits), so elements are plain u64 values in [0, p) and only
// products are widened to u128.

/// Reduce an arbitrary word to its canonical residue in [0, p).
#[inline(always)]
pub fn reduce(a: u64, p: u64) -> u64 {
    a % p
}

/// Modular addition of canonical residues.
#[inline(always)]
pub fn modadd(a: u64, b: u64, p: u64) -> u64 {
    // The wrap check keeps this correct for moduli close to the word size.
    let r = a.wrapping_add(b);
    if r >= p || r < a {
        r.wrapping_sub(p)
    } else {
        r
    }
}

/// Modular subtraction of canonical residues.
#[inline(always)]
pub fn modsub(a: u64, b: u64, p: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

/// Modular negation of a canonical residue.
#[inline(always)]
pub fn modneg(a: u64, p: u64) -> u64 {
    if a == 0 {
        0
    } else {
        p - a
    }
}

/// Modular multiplication of canonical residues.
#[inline(always)]
pub fn modmul(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}

/// Serialize a field element as 8 big-endian bytes
/// (most significant byte first).
#[inline]
pub fn element_to_be_bytes(a: u64) -> [u8; 8] {
    a.to_be_bytes()
}

/// Deserialize 8 big-endian bytes into a word. The caller reduces the
/// result mod p where a canonical residue is needed.
#[inline]
pub fn element_from_be_bytes(bytes: [u8; 8]) -> u64 {
    u64::from_be_bytes(bytes)
}

/// Whether p satisfies the S-box validity condition p = 2 (mod 3).
/// Under this condition x -> x^3 is a bijection on F_p, which is what
/// makes the cubic S-box a permutation.
#[inline]
pub fn is_p_2mod3(p: u64) -> bool {
    p % 3 == 2
}

/// Sample a random prime of the given bit length with p = 2 (mod 3) and
/// p >= 2^16, suitable as a cipher modulus.
pub fn generate_prime<R: Rng + ?Sized>(bits: u32, rng: &mut R) -> u64 {
    let bits = bits.clamp(17, 63);
    let lo = 1u64 << (bits - 1);
    let hi = (1u64 << bits) - 1;
    loop {
        let candidate = rng.random_range(lo..=hi) | 1;
        if candidate >= MIN_PRIME && is_p_2mod3(candidate) && is_prime(candidate) {
            return candidate;
        }
    }
}
