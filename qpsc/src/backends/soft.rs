//======================================================================
// qpsc/src/backends/soft.rs
// Software (serial) block scheduler.
//======================================================================

use crate::consts::STATE_WIDTH;
use crate::stream::QpscCore;

/// Produce the truncated blocks `start .. start + n` one after another,
/// appending each to the keystream in block order.
pub(crate) fn generate_blocks(
    core: &QpscCore,
    key: &[u64; STATE_WIDTH],
    start: u32,
    n: usize,
) -> Vec<u64> {
    let per_block = STATE_WIDTH - core.trunc_m();
    let mut keystream = Vec::with_capacity(n * per_block);
    for k in 0..n {
        let j = start.wrapping_add(k as u32);
        keystream.extend_from_slice(&core.truncated_block(key, j));
    }
    keystream
}
