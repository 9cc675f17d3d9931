//! Uniform random indices from a cryptographically secure byte source.
//!
//! An index in `[0, max)` is drawn by reading just enough big-endian bytes to
//! cover `ceil(log2(max))` bits, shifting away the surplus low-order bits, and
//! rejecting values that still land at or above `max`. Taking `bytes % max`
//! instead would favour the low end of the range whenever `max` is not a
//! power of two.

use std::io;

use rand::RngCore;
use rand::rngs::OsRng;
use tracing::trace;

use crate::error::Error;

/// Upper bound on redraws for a single index.
///
/// Each draw is rejected with probability below 1/2, so reaching this bound
/// means the entropy source is not producing random bytes.
pub const MAX_DRAW_ATTEMPTS: u32 = 128;

/// Draws indices in `[0, max)` for a fixed `max`.
///
/// The bit and byte widths are computed once, so sampling many indices for
/// the same range (one per password character) only pays for the draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSampler {
    max: u64,
    bits: u32,
    bytes: usize,
    shift: u32,
}

impl IndexSampler {
    /// Creates a sampler for `[0, max)`. `max` must be at least 1.
    pub fn new(max: u64) -> Result<Self, Error> {
        if max == 0 {
            return Err(Error::InvalidArgument("max must be at least 1".into()));
        }

        // Bits needed to represent max - 1, i.e. ceil(log2(max)).
        let bits = u64::BITS - (max - 1).leading_zeros();
        let bytes = bits.div_ceil(8) as usize;
        let shift = bytes as u32 * 8 - bits;

        Ok(Self {
            max,
            bits,
            bytes,
            shift,
        })
    }

    /// Exclusive upper bound of the sampled range.
    #[inline]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Number of random bits kept from each draw.
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of random bytes consumed by each draw.
    #[inline]
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// Draws one index in `[0, max)`.
    ///
    /// A sampler over a single value returns 0 without reading from `rng`.
    /// A failing entropy source is reported as [`Error::Io`].
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<u64, Error> {
        if self.max == 1 {
            return Ok(0);
        }

        let mut buf = [0u8; 8];
        for attempt in 0..MAX_DRAW_ATTEMPTS {
            // Fill only the low-order end so from_be_bytes sees a k-byte integer.
            let draw = &mut buf[8 - self.bytes..];
            rng.try_fill_bytes(draw).map_err(io::Error::from)?;
            let value = u64::from_be_bytes(buf) >> self.shift;

            if value < self.max {
                return Ok(value);
            }
            trace!(max = self.max, value, attempt, "rejected draw");
        }

        Err(Error::EntropyExhausted {
            max: self.max,
            attempts: MAX_DRAW_ATTEMPTS,
        })
    }
}

/// Returns a uniformly distributed integer in `[0, max)` drawn from the
/// operating system's CSPRNG.
pub fn random_index(max: u64) -> Result<u64, Error> {
    IndexSampler::new(max)?.sample(&mut OsRng)
}
