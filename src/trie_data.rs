//! ## Trie data
//! Memory model of a complete bidirectional triegraph mapping:
//! - t2g  - `DmMap` from trie k-mers to graph locations (`kmers` keys, `pairs` values)
//! - g2t  - `DmMap` from graph locations to trie k-mers (`locs` keys, `pairs` values)
//! - trie - `TieredBitset` recording which trie nodes are present
//!
//! All map fields share a single width, wide enough to index the largest of
//! `kmers`, `locs` and `pairs`, unless the caller overrides it.

use std::fmt::{Debug, Formatter};

use crate::bitset::TieredBitset;
use crate::dmmap::{DmMap, IndexLayout};
use crate::error::Result;
use crate::estimator::{Detail, Param, SizeEstimator};
use crate::width::min_bits;

/// Structural counts of a triegraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrieShape {
    /// Number of trie k-mers
    pub kmers: u64,
    /// Number of graph locations
    pub locs: u64,
    /// Number of k-mer/location pairs
    pub pairs: u64,
    /// Whether `kmers` already counts inner trie nodes
    pub allow_inner: bool,
}

impl TrieShape {
    /// Return minimum width able to index every count of the shape
    #[inline]
    pub fn min_bits(&self) -> u32 {
        min_bits(self.kmers.max(self.locs).max(self.pairs))
    }
}

/// Trie data estimator
#[derive(Clone, PartialEq)]
pub struct TrieData {
    shape: TrieShape,
    bits: u32,
    t2g: DmMap,
    g2t: DmMap,
    trie: TieredBitset,
}

impl TrieData {
    /// Create new `TrieData` with the shared width derived from `shape`
    #[inline]
    pub fn new(shape: TrieShape, layout: IndexLayout) -> Result<Self> {
        Self::with_bits(shape, shape.min_bits(), layout)
    }

    /// Create new `TrieData` with explicit shared width
    pub fn with_bits(shape: TrieShape, bits: u32, layout: IndexLayout) -> Result<Self> {
        let t2g = DmMap::new(shape.kmers, shape.pairs, bits, layout)?;
        let g2t = DmMap::new(shape.locs, shape.pairs, bits, layout)?;
        let trie = TieredBitset::new(shape.kmers, shape.allow_inner);
        Ok(Self {
            shape,
            bits,
            t2g,
            g2t,
            trie,
        })
    }

    /// Return structural counts
    #[inline]
    pub fn shape(&self) -> TrieShape {
        self.shape
    }

    /// Return shared field width
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Return k-mer to location map
    #[inline]
    pub fn t2g(&self) -> &DmMap {
        &self.t2g
    }

    /// Return location to k-mer map
    #[inline]
    pub fn g2t(&self) -> &DmMap {
        &self.g2t
    }

    /// Return trie presence bitset
    #[inline]
    pub fn trie(&self) -> &TieredBitset {
        &self.trie
    }
}

impl SizeEstimator for TrieData {
    fn kind(&self) -> &'static str {
        "TrieData"
    }

    #[inline]
    fn size(&self) -> u64 {
        self.t2g
            .size()
            .saturating_add(self.g2t.size())
            .saturating_add(self.trie.size())
    }

    #[inline]
    fn native_size(&self) -> u64 {
        self.t2g
            .native_size()
            .saturating_add(self.g2t.native_size())
            .saturating_add(self.trie.native_size())
    }

    fn detail(&self) -> Detail {
        Detail::new(self)
            .param("kmers", Param::Count(self.shape.kmers))
            .param("locs", Param::Count(self.shape.locs))
            .param("pairs", Param::Count(self.shape.pairs))
            .param("bits", Param::Bits(self.bits))
            .param("allow_inner", Param::Flag(self.shape.allow_inner))
            .child("t2g", self.t2g.detail())
            .child("g2t", self.g2t.detail())
            .child("trie", self.trie.detail())
    }
}

impl Debug for TrieData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
