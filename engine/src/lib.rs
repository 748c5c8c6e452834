//! Uniform Random Stream - Deterministic RNG Engine
//!
//! Reimplementation of a legacy game engine's uniform-random module,
//! reproducing its numeric sequences for a given seed so that replays,
//! gameplay logic, and tests behave identically across implementations.
//!
//! # Architecture
//!
//! - **rng**: the Park-Miller / Bays-Durham generator and the sampling
//!   functions built on top of it
//! - **checkpoint**: snapshot/restore of complete stream state for
//!   pause/resume and replay
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same sequence (verified against fixed
//!    seed->sequence vectors)
//! 2. Every 32-bit rounding point in the float path is intentional and
//!    must not be promoted to double precision
//! 3. Sampling before `set_seed` fails with `RandomStreamError::Unseeded`

// Module declarations
pub mod checkpoint;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{SnapshotError, StreamSnapshot};
pub use rng::{RandomStreamError, UniformRandomStream};
