//! ## Dense multimap
//! Maps `keys` dense keys onto a flat array of `vals` values.
//!
//! - begin[0..keys] - offset of the first value of every key, either a
//!   `FlatVec` or, when offsets are stored as a sorted sequence, a `SortedVec`
//! - elems[0..vals] - values of all keys laid out back to back
//!
//! Both arrays share the same field width. The choice of index layout only
//! selects the size formula, it never changes what the map can answer.

use std::fmt::{Debug, Formatter};

use crate::error::Result;
use crate::estimator::{Detail, Index, Param, SizeEstimator};
use crate::flat::FlatVec;
use crate::sorted::{SortedParams, SortedVec};

/// Layout of the key index
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IndexLayout {
    /// Fixed-width offsets
    #[default]
    Flat,
    /// Beacon/diff encoded offsets
    Sorted(SortedParams),
}

impl IndexLayout {
    /// Sorted layout with default encoding parameters
    pub fn sorted() -> Self {
        IndexLayout::Sorted(SortedParams::default())
    }

    /// Return whether offsets are stored as a sorted sequence
    pub fn is_sorted(&self) -> bool {
        matches!(self, IndexLayout::Sorted(_))
    }
}

/// Dense multimap estimator
#[derive(Clone, PartialEq)]
pub struct DmMap {
    begin: Index,
    elems: FlatVec,
}

impl DmMap {
    /// Create new `DmMap` of `keys` keys and `vals` values with `bits` wide fields
    pub fn new(keys: u64, vals: u64, bits: u32, layout: IndexLayout) -> Result<Self> {
        let begin: Index = match layout {
            IndexLayout::Flat => FlatVec::with_bits(keys, bits)?.into(),
            IndexLayout::Sorted(params) => SortedVec::with_params(keys, bits, params)?.into(),
        };
        let elems = FlatVec::with_bits(vals, bits)?;
        log::trace!("dmmap keys={} vals={} bits={} {:?}", keys, vals, bits, layout);
        Ok(Self { begin, elems })
    }

    /// Return key index estimator
    #[inline]
    pub fn begin(&self) -> &Index {
        &self.begin
    }

    /// Return value array estimator
    #[inline]
    pub fn elems(&self) -> &FlatVec {
        &self.elems
    }

    /// Return whether the key index uses the sorted layout
    #[inline]
    pub fn is_sorted(&self) -> bool {
        matches!(self.begin, Index::Sorted(_))
    }
}

impl SizeEstimator for DmMap {
    fn kind(&self) -> &'static str {
        "DmMap"
    }

    #[inline]
    fn size(&self) -> u64 {
        self.begin.size().saturating_add(self.elems.size())
    }

    #[inline]
    fn native_size(&self) -> u64 {
        self.begin
            .native_size()
            .saturating_add(self.elems.native_size())
    }

    fn detail(&self) -> Detail {
        Detail::new(self)
            .param("keys", Param::Count(self.begin.elems()))
            .param("vals", Param::Count(self.elems.elems()))
            .param("bits", Param::Bits(self.elems.bits()))
            .param("sorted", Param::Flag(self.is_sorted()))
            .child("begin", self.begin.detail())
            .child("elems", self.elems.detail())
    }
}

impl Debug for DmMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
