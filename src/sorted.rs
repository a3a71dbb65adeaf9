//! ## Sorted vector
//! Sorted array stored as periodic full-width beacons with small forward
//! differences in between. Random access walks at most `beacon_every - 1`
//! differences from the preceding beacon.
//!
//! Layout:
//! - beacons[0..elems / beacon_every] - `bits` wide absolute values
//! - diffs[0..elems]                  - `diff_bits` wide deltas from the previous element
//! - overflow slots                   - deltas which do not fit `diff_bits`
//!
//! The overflow slots are not derived from any key distribution: they are
//! accounted as a fixed proportional margin `overflow_coef` on top of the
//! beacon and diff bits.
//!
//! - bit-packed size: `floor((beacons * bits + elems * diff_bits) * (1 + overflow_coef)) / 8`
//! - native size:     `floor((beacons * byte_width(bits) + elems * byte_width(diff_bits)) * (1 + overflow_coef))`

use std::fmt::{Debug, Formatter};

use crate::error::{EstimateError, Result};
use crate::estimator::{Detail, Param, SizeEstimator};
use crate::flat::bits_to_bytes;
use crate::width::{byte_width, min_bits};

/// Default distance between two beacons
pub const DEFAULT_BEACON_EVERY: u64 = 32;
/// Default width of a stored difference
pub const DEFAULT_DIFF_BITS: u32 = 8;
/// Default proportional margin reserved for overflowing differences
pub const DEFAULT_OVERFLOW_COEF: f64 = 0.05;

/// Tunable encoding parameters of `SortedVec`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortedParams {
    /// Every `beacon_every`-th element is stored at full width
    pub beacon_every: u64,
    /// Width of the differences stored between beacons
    pub diff_bits: u32,
    /// Proportional safety margin for differences overflowing `diff_bits`
    pub overflow_coef: f64,
}

impl Default for SortedParams {
    fn default() -> Self {
        Self {
            beacon_every: DEFAULT_BEACON_EVERY,
            diff_bits: DEFAULT_DIFF_BITS,
            overflow_coef: DEFAULT_OVERFLOW_COEF,
        }
    }
}

impl SortedParams {
    /// Ensure parameters describe a valid encoding
    pub fn validate(&self) -> Result<()> {
        if self.beacon_every == 0 {
            return Err(EstimateError::InvalidParameter(
                "beacon interval must be positive",
            ));
        }
        if self.diff_bits == 0 {
            return Err(EstimateError::InvalidParameter(
                "difference width must be positive",
            ));
        }
        if !self.overflow_coef.is_finite() || self.overflow_coef < 0.0 {
            return Err(EstimateError::InvalidParameter(
                "overflow coefficient must be a non-negative number",
            ));
        }
        byte_width(self.diff_bits)?;
        Ok(())
    }
}

/// Sorted vector estimator
#[derive(Clone, PartialEq)]
pub struct SortedVec {
    elems: u64,
    bits: u32,
    params: SortedParams,
}

impl SortedVec {
    /// Create new `SortedVec` with default encoding parameters
    #[inline]
    pub fn new(elems: u64, bits: u32) -> Result<Self> {
        Self::with_params(elems, bits, SortedParams::default())
    }

    /// Create new `SortedVec` wide enough to index its own elements
    #[inline]
    pub fn indexing(elems: u64, params: SortedParams) -> Result<Self> {
        Self::with_params(elems, min_bits(elems), params)
    }

    /// Create new `SortedVec` with explicit encoding parameters
    pub fn with_params(elems: u64, bits: u32, params: SortedParams) -> Result<Self> {
        byte_width(bits)?;
        params.validate()?;
        Ok(Self {
            elems,
            bits,
            params,
        })
    }

    /// Return number of elements
    #[inline]
    pub fn elems(&self) -> u64 {
        self.elems
    }

    /// Return beacon width in bits
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Return encoding parameters
    #[inline]
    pub fn params(&self) -> SortedParams {
        self.params
    }

    /// Return number of full-width beacons
    #[inline]
    pub fn num_beacons(&self) -> u64 {
        self.elems / self.params.beacon_every
    }

    /// Apply the overflow margin to `units` and floor the result
    #[inline]
    fn with_overflow(&self, units: u128) -> u128 {
        // f64 loses precision above 2^53 units, far beyond any realistic index
        (units as f64 * (1.0 + self.params.overflow_coef)).floor() as u128
    }

    /// Return total number of bits before the overflow margin is applied
    #[inline]
    fn raw_bits(&self) -> u128 {
        let beacon_bits = u128::from(self.num_beacons()) * u128::from(self.bits);
        let diff_bits = u128::from(self.elems) * u128::from(self.params.diff_bits);
        beacon_bits + diff_bits
    }
}

impl SizeEstimator for SortedVec {
    fn kind(&self) -> &'static str {
        "SortedVec"
    }

    #[inline]
    fn size(&self) -> u64 {
        bits_to_bytes(self.with_overflow(self.raw_bits()))
    }

    fn native_size(&self) -> u64 {
        // widths were validated on construction
        let beacon_bytes = u128::from(byte_width(self.bits).unwrap_or(8));
        let diff_bytes = u128::from(byte_width(self.params.diff_bits).unwrap_or(8));
        let raw =
            u128::from(self.num_beacons()) * beacon_bytes + u128::from(self.elems) * diff_bytes;
        u64::try_from(self.with_overflow(raw)).unwrap_or(u64::MAX)
    }

    fn detail(&self) -> Detail {
        Detail::new(self)
            .param("elems", Param::Count(self.elems))
            .param("bits", Param::Bits(self.bits))
            .param("beacon_every", Param::Count(self.params.beacon_every))
            .param("diff_bits", Param::Bits(self.params.diff_bits))
            .param("overflow_coef", Param::Ratio(self.params.overflow_coef))
    }
}

impl Debug for SortedVec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1000, 16, 32, 8, 0.05 => "{ elems: 1000, bits: 16, beacon_every: 32, diff_bits: 8, overflow_coef: 0.05, size: 1115 }")]
    #[test_case(1000, 16, 32, 8, 0.0 => "{ elems: 1000, bits: 16, beacon_every: 32, diff_bits: 8, overflow_coef: 0, size: 1062 }")]
    #[test_case(31, 16, 32, 8, 0.0 => "{ elems: 31, bits: 16, beacon_every: 32, diff_bits: 8, overflow_coef: 0, size: 31 }")]
    #[test_case(64, 32, 32, 4, 0.5 => "{ elems: 64, bits: 32, beacon_every: 32, diff_bits: 4, overflow_coef: 0.5, size: 60 }")]
    #[test_case(0, 8, 1, 1, 0.05 => "{ elems: 0, bits: 8, beacon_every: 1, diff_bits: 1, overflow_coef: 0.05, size: 0 }")]
    #[test_case(4_194_304, 22, 32, 8, 0.05 => "{ elems: 4194304, bits: 22, beacon_every: 32, diff_bits: 8, overflow_coef: 0.05, size: 4782489 }")]
    fn test_sorted_vec(
        elems: u64,
        bits: u32,
        beacon_every: u64,
        diff_bits: u32,
        overflow_coef: f64,
    ) -> String {
        let params = SortedParams {
            beacon_every,
            diff_bits,
            overflow_coef,
        };
        SortedVec::with_params(elems, bits, params)
            .unwrap()
            .summary()
    }

    #[test_case(1000, 32 => 31)]
    #[test_case(1024, 32 => 32)]
    #[test_case(1000, 1000 => 1)]
    #[test_case(999, 1000 => 0)]
    fn test_num_beacons(elems: u64, beacon_every: u64) -> u64 {
        let params = SortedParams {
            beacon_every,
            ..Default::default()
        };
        SortedVec::with_params(elems, 16, params)
            .unwrap()
            .num_beacons()
    }

    #[test]
    fn test_native_size() {
        // 31 beacons * 2 bytes + 1000 diffs * 1 byte = 1062, plus 5%
        let vec = SortedVec::new(1000, 16).unwrap();
        assert_eq!(vec.native_size(), 1115);

        let vec = SortedVec::new(1000, 17).unwrap();
        assert_eq!(vec.native_size(), 1180);
    }

    #[test]
    fn test_overflow_margin_grows_size() {
        let base = SortedParams {
            overflow_coef: 0.0,
            ..Default::default()
        };
        let mut prev = SortedVec::with_params(1_000_000, 20, base).unwrap().size();
        for coef in [0.01, 0.05, 0.1, 0.5, 1.0] {
            let params = SortedParams {
                overflow_coef: coef,
                ..base
            };
            let size = SortedVec::with_params(1_000_000, 20, params).unwrap().size();
            assert!(size >= prev);
            prev = size;
        }
        assert_eq!(prev, 2 * SortedVec::with_params(1_000_000, 20, base).unwrap().size());
    }

    #[test]
    fn test_indexing_width() {
        let vec = SortedVec::indexing(1000, SortedParams::default()).unwrap();
        assert_eq!(vec.bits(), 10);
    }

    #[test_case(0, 8, 0.05; "zero beacon interval")]
    #[test_case(32, 0, 0.05; "zero diff width")]
    #[test_case(32, 65, 0.05; "diff wider than native")]
    #[test_case(32, 8, -0.1; "negative overflow")]
    #[test_case(32, 8, f64::NAN; "nan overflow")]
    fn test_invalid_params(beacon_every: u64, diff_bits: u32, overflow_coef: f64) {
        let params = SortedParams {
            beacon_every,
            diff_bits,
            overflow_coef,
        };
        assert!(SortedVec::with_params(1000, 16, params).is_err());
    }

    #[test]
    fn test_unsupported_beacon_width() {
        assert_eq!(
            SortedVec::new(1000, 65),
            Err(EstimateError::UnsupportedWidth { bits: 65 })
        );
    }
}
