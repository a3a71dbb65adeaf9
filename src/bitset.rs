//! ## Tiered bitset
//! One presence bit per trie node of a 4-ary k-mer trie.
//!
//! When inner nodes are not counted by the caller, `kmers` is the size of the
//! deepest tier only and the two shallower tiers are approximated with the
//! geometric series `kmers + kmers / 4 + kmers / 16`. When inner nodes are
//! counted, `kmers` already is the aggregate over all tiers.
//!
//! - bit-packed size: `effective_kmers / 8`
//! - native size:     same as bit-packed, presence bits are always packed

use std::fmt::{Debug, Formatter};

use crate::estimator::{Detail, Param, SizeEstimator};

/// Letters per trie level
const BRANCHING: u64 = 4;

/// Tiered bitset estimator
#[derive(Clone, PartialEq, Eq)]
pub struct TieredBitset {
    kmers: u64,
    allow_inner: bool,
}

impl TieredBitset {
    /// Create new `TieredBitset` over `kmers` trie nodes
    #[inline]
    pub fn new(kmers: u64, allow_inner: bool) -> Self {
        Self { kmers, allow_inner }
    }

    /// Return number of k-mers supplied by the caller
    #[inline]
    pub fn kmers(&self) -> u64 {
        self.kmers
    }

    /// Return whether inner trie nodes were counted by the caller
    #[inline]
    pub fn allow_inner(&self) -> bool {
        self.allow_inner
    }

    /// Return number of presence bits after tier correction
    #[inline]
    pub fn effective_kmers(&self) -> u64 {
        if self.allow_inner {
            return self.kmers;
        }
        let tier_1 = self.kmers / BRANCHING;
        let tier_2 = self.kmers / (BRANCHING * BRANCHING);
        self.kmers.saturating_add(tier_1).saturating_add(tier_2)
    }
}

impl SizeEstimator for TieredBitset {
    fn kind(&self) -> &'static str {
        "TieredBitset"
    }

    #[inline]
    fn size(&self) -> u64 {
        self.effective_kmers() / 8
    }

    #[inline]
    fn native_size(&self) -> u64 {
        self.size()
    }

    fn detail(&self) -> Detail {
        Detail::new(self)
            .param("kmers", Param::Count(self.kmers))
            .param("allow_inner", Param::Flag(self.allow_inner))
            .param("effective_kmers", Param::Count(self.effective_kmers()))
    }
}

impl Debug for TieredBitset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1000, false => "{ kmers: 1000, allow_inner: false, effective_kmers: 1312, size: 164 }")]
    #[test_case(1000, true => "{ kmers: 1000, allow_inner: true, effective_kmers: 1000, size: 125 }")]
    #[test_case(0, false => "{ kmers: 0, allow_inner: false, effective_kmers: 0, size: 0 }")]
    #[test_case(15, false => "{ kmers: 15, allow_inner: false, effective_kmers: 18, size: 2 }")]
    #[test_case(4_194_304, false => "{ kmers: 4194304, allow_inner: false, effective_kmers: 5505024, size: 688128 }")]
    fn test_tiered_bitset(kmers: u64, allow_inner: bool) -> String {
        TieredBitset::new(kmers, allow_inner).summary()
    }

    #[test]
    fn test_correction_matches_integer_series() {
        let bitset = TieredBitset::new(1000, false);
        assert_eq!(bitset.size(), (1000 + 250 + 62) / 8);
        assert_eq!(bitset.native_size(), bitset.size());
    }

    #[test]
    fn test_effective_kmers_saturates() {
        assert_eq!(TieredBitset::new(u64::MAX, false).effective_kmers(), u64::MAX);
    }
}
