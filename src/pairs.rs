//! ## Vector pairs
//! Parallel array of `pairs` entries made of two equal-width fields.
//!
//! - bit-packed size: `bits * 2 * pairs / 8`
//! - native size:     `2 * byte_width(bits) * pairs`

use std::fmt::{Debug, Formatter};

use crate::error::Result;
use crate::estimator::{Detail, Param, SizeEstimator};
use crate::flat::bits_to_bytes;
use crate::width::{byte_width, min_bits};

/// Vector pairs estimator
#[derive(Clone, PartialEq, Eq)]
pub struct Pairs {
    pairs: u64,
    bits: u32,
    /// Native container width in bytes, resolved from `bits`
    bytes: u32,
}

impl Pairs {
    /// Create new `Pairs` whose fields are wide enough to index the pairs themselves
    #[inline]
    pub fn new(pairs: u64) -> Result<Self> {
        Self::with_bits(pairs, min_bits(pairs))
    }

    /// Create new `Pairs` with explicit field width
    #[inline]
    pub fn with_bits(pairs: u64, bits: u32) -> Result<Self> {
        let bytes = byte_width(bits)?;
        Ok(Self { pairs, bits, bytes })
    }

    /// Return number of pairs
    #[inline]
    pub fn pairs(&self) -> u64 {
        self.pairs
    }

    /// Return width of one field in bits
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl SizeEstimator for Pairs {
    fn kind(&self) -> &'static str {
        "Pairs"
    }

    #[inline]
    fn size(&self) -> u64 {
        bits_to_bytes(u128::from(self.bits) * 2 * u128::from(self.pairs))
    }

    #[inline]
    fn native_size(&self) -> u64 {
        let bytes = u128::from(self.bytes) * 2 * u128::from(self.pairs);
        u64::try_from(bytes).unwrap_or(u64::MAX)
    }

    fn detail(&self) -> Detail {
        Detail::new(self)
            .param("pairs", Param::Count(self.pairs))
            .param("bits", Param::Bits(self.bits))
    }
}

impl Debug for Pairs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
