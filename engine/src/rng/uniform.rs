//! Park-Miller "minimal standard" generator with a Bays-Durham shuffle
//!
//! This is the uniform-random stream of the legacy engine this crate
//! reproduces. The constants, the 32-entry shuffle table, and every
//! rounding point in the float path must stay exactly as they are:
//! sequence compatibility is the contract, and it can only be checked
//! against known seed->sequence vectors, never by inspection.
//!
//! # Algorithm
//!
//! The core step is a Schrage-factored linear congruential generator,
//! `idum = 16807 * idum mod (2^31 - 1)`. A 32-slot shuffle table
//! decorrelates consecutive outputs: each draw selects a table slot from
//! the previous output and refills that slot with the fresh LCG value.
//!
//! # Determinism
//!
//! Same seed -> same sequence of random numbers. This is CRITICAL for:
//! - Replaying recorded gameplay and simulations
//! - Cross-implementation compatibility with the reference engine
//! - Regression testing against fixed vectors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of entries in the Bays-Durham shuffle table
const NTAB: usize = 32;

/// LCG multiplier (7^5, the Park-Miller minimal standard)
const IA: i64 = 16807;

/// LCG modulus (2^31 - 1, a Mersenne prime)
const IM: i64 = 2147483647;

/// Schrage factorization quotient (IM / IA)
const IQ: i64 = 127773;

/// Schrage factorization remainder (IM mod IA)
const IR: i64 = 2836;

/// Maps raw draws onto shuffle-table indices in [0, 31]
const NDIV: i64 = 1 + (IM - 1) / NTAB as i64;

/// Largest span `random_int` maps without falling back to `low`
const MAX_RANDOM_RANGE: i64 = 0x7FFF_FFFF;

/// Scales raw 31-bit draws into [0, 1)
const AM: f64 = 1.0 / IM as f64;

/// Upper clamp for the float path (1 - 1.2e-7)
const RNMX: f64 = 1.0 - 1.2e-7;

/// Errors that can occur when drawing from a stream
#[derive(Debug, Error, PartialEq)]
pub enum RandomStreamError {
    /// A sampling call arrived before any `set_seed(...)`
    #[error("seed is not set, call set_seed(...) first")]
    Unseeded,
}

/// Derived generator state, materialized lazily on the first draw after
/// (re-)seeding.
///
/// `iy == 0` doubles as the "table not yet bootstrapped" marker, exactly
/// as in the reference engine. The bootstrap check also fires when `idum`
/// is non-positive, which holds for a freshly negated seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct GeneratorState {
    /// Evolving algorithmic seed, kept in [1, IM-1] once bootstrapped
    pub(crate) idum: i64,

    /// Current shuffle output cache (0 = table not yet bootstrapped)
    pub(crate) iy: i64,

    /// Bays-Durham shuffle table
    pub(crate) iv: [i64; NTAB],
}

impl GeneratorState {
    /// State that triggers the table bootstrap on the next draw.
    ///
    /// A non-negative seed is stored negated and a negative seed is kept
    /// as-is, so the bootstrap always sees a non-positive `idum` and
    /// normalizes it to `max(|seed|, 1)`. Seeds `s` and `-s` therefore
    /// produce identical sequences, as do seeds 0 and 1.
    fn from_seed(seed: i32) -> Self {
        let idum = if seed >= 0 {
            -i64::from(seed)
        } else {
            i64::from(seed)
        };
        Self {
            idum,
            iy: 0,
            iv: [0; NTAB],
        }
    }

    /// One Schrage-factored LCG step: `idum = IA * idum mod IM` computed
    /// without overflowing the 31-bit intermediate range.
    fn advance(&mut self) {
        let k = self.idum / IQ;
        self.idum = IA * (self.idum - k * IQ) - IR * k;
        if self.idum < 0 {
            self.idum += IM;
        }
    }

    /// Fill the shuffle table: 40 LCG steps with the first 8 discarded,
    /// the remaining 32 stored into `iv[31]` down to `iv[0]`, then
    /// `iy` primed from `iv[0]`.
    fn bootstrap(&mut self) {
        self.idum = if -self.idum < 1 { 1 } else { -self.idum };
        for j in (0..NTAB + 8).rev() {
            self.advance();
            if j < NTAB {
                self.iv[j] = self.idum;
            }
        }
        self.iy = self.iv[0];
    }
}

/// Deterministic uniform-random stream, sequence-compatible with the
/// reference engine
///
/// Every sampling call reads and advances the internal state, so callers
/// needing concurrent access must wrap the stream in a lock or give each
/// thread its own instance. Instances are fully independent; there is no
/// global stream.
///
/// # Example
/// ```
/// use uniform_random_core_rs::UniformRandomStream;
///
/// let mut rng = UniformRandomStream::new();
/// rng.set_seed(72);
///
/// let fl = rng.random_float(0.0, 1.0).unwrap();
/// assert!(fl >= 0.0 && fl < 1.0);
///
/// let n = rng.random_int(1, 6).unwrap();
/// assert!(n >= 1 && n <= 6);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniformRandomStream {
    /// Seed as handed to `set_seed` (None until first seeded)
    pub(crate) seed: Option<i32>,

    /// Lazily materialized table state; None forces a bootstrap on the
    /// next draw
    pub(crate) state: Option<GeneratorState>,
}

impl UniformRandomStream {
    /// Create an unseeded stream
    ///
    /// Sampling calls fail with [`RandomStreamError::Unseeded`] until
    /// `set_seed` is called.
    ///
    /// # Example
    /// ```
    /// use uniform_random_core_rs::UniformRandomStream;
    ///
    /// let mut rng = UniformRandomStream::new();
    /// assert!(rng.random_float(0.0, 1.0).is_err());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new seed and discard all derived state
    ///
    /// Any value is accepted, including 0 and negatives. The next draw
    /// re-bootstraps the shuffle table from this seed, so re-seeding with
    /// the current value restarts the sequence from the beginning.
    ///
    /// # Example
    /// ```
    /// use uniform_random_core_rs::UniformRandomStream;
    ///
    /// let mut rng = UniformRandomStream::new();
    /// rng.set_seed(555);
    /// let first = rng.random_int(0, 10).unwrap();
    ///
    /// rng.set_seed(555); // restart the sequence
    /// assert_eq!(rng.random_int(0, 10).unwrap(), first);
    /// ```
    pub fn set_seed(&mut self, seed: i32) {
        self.seed = Some(seed);
        self.state = None;
    }

    /// Raw 31-bit draw in [1, IM-1], advancing `idum`, `iy`, and `iv`
    fn generate_random_number(&mut self) -> Result<i64, RandomStreamError> {
        let seed = self.seed.ok_or(RandomStreamError::Unseeded)?;
        let state = self
            .state
            .get_or_insert_with(|| GeneratorState::from_seed(seed));

        if state.idum <= 0 || state.iy == 0 {
            state.bootstrap();
        }

        state.advance();
        let j = (state.iy / NDIV) as usize;
        state.iy = state.iv[j];
        state.iv[j] = state.idum;
        Ok(state.iy)
    }

    /// Draw in [0, 1) with the reference float pipeline: round the raw
    /// draw to f32, scale by AM in f64, clamp at RNMX.
    fn base_float(&mut self) -> Result<f64, RandomStreamError> {
        let n = self.generate_random_number()?;
        let fl = AM * f64::from(n as f32);
        Ok(if fl > RNMX { RNMX } else { fl })
    }

    /// Generate a uniform float in [low, high)
    ///
    /// # Example
    /// ```
    /// use uniform_random_core_rs::UniformRandomStream;
    ///
    /// let mut rng = UniformRandomStream::new();
    /// rng.set_seed(42);
    ///
    /// for _ in 0..100 {
    ///     let fl = rng.random_float(-5.0, 5.0).unwrap();
    ///     assert!(fl >= -5.0 && fl < 5.0);
    /// }
    /// ```
    pub fn random_float(&mut self, low: f64, high: f64) -> Result<f64, RandomStreamError> {
        let fl = self.base_float()?;
        Ok(fl * (high - low) + low)
    }

    /// Generate a float in [min_val, max_val) with an exponent-skewed
    /// distribution
    ///
    /// The base draw in [0, 1) is raised to `exponent` (rounded back to
    /// f32) before scaling; `exponent == 1.0` leaves the distribution
    /// uniform and skips the power step entirely.
    pub fn random_float_exp(
        &mut self,
        min_val: f64,
        max_val: f64,
        exponent: f64,
    ) -> Result<f64, RandomStreamError> {
        let mut fl = self.base_float()?;
        if exponent != 1.0 {
            fl = f64::from(fl.powf(exponent) as f32);
        }
        Ok(fl * (max_val - min_val) + min_val)
    }

    /// Generate a uniform integer in [low, high], both ends inclusive
    ///
    /// Degenerate spans (empty, inverted, or wider than
    /// `MAX_RANDOM_RANGE`) return `low` unchanged rather than failing.
    ///
    /// # Example
    /// ```
    /// use uniform_random_core_rs::UniformRandomStream;
    ///
    /// let mut rng = UniformRandomStream::new();
    /// rng.set_seed(1);
    ///
    /// let roll = rng.random_int(1, 6).unwrap();
    /// assert!(roll >= 1 && roll <= 6);
    /// assert_eq!(rng.random_int(5, 5).unwrap(), 5);
    /// ```
    pub fn random_int(&mut self, low: i32, high: i32) -> Result<i32, RandomStreamError> {
        let span = i64::from(high) - i64::from(low) + 1;
        if span <= 1 || span - 1 > MAX_RANDOM_RANGE {
            return Ok(low);
        }

        // Rejection bound: draws above it would bias `n % span` toward
        // the low residues. Even for the worst-case span at most half of
        // all draws are rejected, so the expected iteration count is
        // bounded by 2 and close to 1 for small spans.
        let max_acceptable = MAX_RANDOM_RANGE - ((MAX_RANDOM_RANGE + 1) % span);
        let n = loop {
            let n = self.generate_random_number()?;
            if n <= max_acceptable {
                break n;
            }
        };

        Ok(low + (n % span) as i32)
    }
}
