//======================================================================
// qpsc/src/xof.rs
// SHAKE128 binding for the round-constant schedule.
//======================================================================

use digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake128;

/// One-shot SHAKE128 of `input`, filling `output` completely. Each call
/// uses a fresh digest context; no state is shared between calls.
pub fn shake128(input: &[u8], output: &mut [u8]) {
    let mut hasher = Shake128::default();
    hasher.update(input);
    hasher.finalize_xof().read(output);
}
