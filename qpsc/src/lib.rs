#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// qpsc/src/lib.rs
// Crate entry point. Declares the public API and wires the modules.
//======================================================================

// --- Module declarations ---
pub mod consts;
pub mod error;
pub mod field;
pub mod linear;
pub mod sbox;
pub mod schedule;
pub mod stream;
pub mod variant;
pub mod xof;

mod backends;

// --- Convenience re-exports ---
pub use crate::error::QpscError;
pub use crate::linear::LinearLayer;
pub use crate::sbox::SBox;
pub use crate::schedule::{add_round_key, RoundSchedule};
pub use crate::stream::QpscCore;
pub use crate::variant::SecurityLevel;

/// A cipher state: 36 field elements, the sole carrier of inter-round
/// data.
pub type StateVector = [u64; consts::STATE_WIDTH];


pub use digest;
pub use zeroize;
