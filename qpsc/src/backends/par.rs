//======================================================================
// qpsc/src/backends/par.rs
// Rayon-parallel block scheduler. Distinct blocks depend only on
// (key, nonce, j), so they fan out freely; the collect keeps block
// order, so the concatenated keystream is identical to the serial
// backend's output.
//======================================================================

use rayon::prelude::*;

use crate::consts::STATE_WIDTH;
use crate::stream::QpscCore;

pub(crate) fn generate_blocks(
    core: &QpscCore,
    key: &[u64; STATE_WIDTH],
    start: u32,
    n: usize,
) -> Vec<u64> {
    let blocks: Vec<Vec<u64>> = (0..n)
        .into_par_iter()
        .map(|k| core.truncated_block(key, start.wrapping_add(k as u32)))
        .collect();
    blocks.concat()
}
