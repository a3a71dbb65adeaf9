//! ## Flat vector
//! Fixed-width array of `elems` entries, each `bits` wide.
//!
//! - bit-packed size: `elems * bits / 8`
//! - native size:     `elems * byte_width(bits)`

use std::fmt::{Debug, Formatter};

use crate::error::Result;
use crate::estimator::{Detail, Param, SizeEstimator};
use crate::width::{byte_width, min_bits};

/// Flat vector estimator
#[derive(Clone, PartialEq, Eq)]
pub struct FlatVec {
    elems: u64,
    bits: u32,
    /// Native container width in bytes, resolved from `bits`
    bytes: u32,
}

impl FlatVec {
    /// Create new `FlatVec` wide enough to index its own elements
    #[inline]
    pub fn new(elems: u64) -> Result<Self> {
        Self::with_bits(elems, min_bits(elems))
    }

    /// Create new `FlatVec` with explicit field width
    #[inline]
    pub fn with_bits(elems: u64, bits: u32) -> Result<Self> {
        let bytes = byte_width(bits)?;
        Ok(Self { elems, bits, bytes })
    }

    /// Return number of elements
    #[inline]
    pub fn elems(&self) -> u64 {
        self.elems
    }

    /// Return field width in bits
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl SizeEstimator for FlatVec {
    fn kind(&self) -> &'static str {
        "FlatVec"
    }

    #[inline]
    fn size(&self) -> u64 {
        bits_to_bytes(u128::from(self.elems) * u128::from(self.bits))
    }

    #[inline]
    fn native_size(&self) -> u64 {
        self.elems.saturating_mul(u64::from(self.bytes))
    }

    fn detail(&self) -> Detail {
        Detail::new(self)
            .param("elems", Param::Count(self.elems))
            .param("bits", Param::Bits(self.bits))
    }
}

impl Debug for FlatVec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Convert a bit count into whole bytes, saturating at `u64::MAX`
#[inline]
pub(crate) fn bits_to_bytes(bits: u128) -> u64 {
    u64::try_from(bits / 8).unwrap_or(u64::MAX)
}
