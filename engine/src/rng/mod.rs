//! Deterministic random number generation
//!
//! A Park-Miller linear congruential generator with a 32-entry Bays-Durham
//! shuffle table, sequence-compatible with the legacy engine it reproduces.
//! CRITICAL: All gameplay randomness MUST go through this module.

mod uniform;

pub(crate) use uniform::GeneratorState;
pub use uniform::{RandomStreamError, UniformRandomStream};
