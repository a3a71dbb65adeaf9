//! Estimation plan: turns the user-facing parameters of a triegraph (graph
//! size, load factor, trie depth adjustment) into structural counts and
//! builds the estimators for them.
//!
//! Derivation:
//! - `n      = graph_locations * (2 if reverse_complement else 1)`
//! - `k      = log4(n) + rel_trie_depth`
//! - `kmers  = 4^k` leaves, or `(4^(k+1) - 1) / 3` trie nodes when inner nodes are allowed
//! - `npairs = floor(ff * n)`

use crate::dmmap::IndexLayout;
use crate::error::{EstimateError, Result};
use crate::estimator::SizeEstimator;
use crate::pairs::Pairs;
use crate::trie_data::{TrieData, TrieShape};
use crate::width::{log2, log4};

/// Default number of k-mer/location pairs per location
pub const DEFAULT_FF: f64 = 2.0;

/// User-facing parameters of an estimation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanConfig {
    /// Number of locations (letters) in the genome graph
    pub graph_locations: u64,
    /// Whether the reverse complement strand is indexed as well
    pub reverse_complement: bool,
    /// Load factor, expected pairs per location
    pub ff: f64,
    /// Adjustment applied to the natural trie depth `log4(n)`
    pub rel_trie_depth: i32,
    /// Whether inner trie nodes are stored alongside leaves
    pub allow_inner: bool,
    /// Layout of the map key indices
    pub layout: IndexLayout,
    /// Shared field width, derived from the counts when unset
    pub bits: Option<u32>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            graph_locations: 0,
            reverse_complement: false,
            ff: DEFAULT_FF,
            rel_trie_depth: 0,
            allow_inner: false,
            layout: IndexLayout::Flat,
            bits: None,
        }
    }
}

/// Derived structural counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    /// Effective number of locations
    pub n: u64,
    /// Trie depth
    pub k: u32,
    /// Number of trie k-mers
    pub kmers: u64,
    /// Number of k-mer/location pairs
    pub npairs: u64,
    /// Bits needed by a k-mer of length `k` plus its length marker
    pub bits_per_kmer: u32,
    /// Bits needed to address a location
    pub bits_per_loc: u32,
}

impl Derived {
    /// Derive structural counts from `config`
    pub fn from_config(config: &PlanConfig) -> Result<Self> {
        let strands = if config.reverse_complement { 2 } else { 1 };
        let n = config
            .graph_locations
            .checked_mul(strands)
            .ok_or(EstimateError::InvalidParameter("too many graph locations"))?;
        if n == 0 {
            return Err(EstimateError::InvalidParameter(
                "graph must have at least one location",
            ));
        }

        let k = i64::from(log4(n)) + i64::from(config.rel_trie_depth);
        if k < 0 {
            return Err(EstimateError::InvalidParameter("trie depth is negative"));
        }
        let k = u32::try_from(k)
            .map_err(|_| EstimateError::InvalidParameter("trie depth is too large"))?;
        let kmers = count_kmers(k, config.allow_inner)
            .ok_or(EstimateError::InvalidParameter("trie depth is too large"))?;

        if !config.ff.is_finite() || config.ff < 0.0 {
            return Err(EstimateError::InvalidParameter(
                "load factor must be a non-negative number",
            ));
        }
        let npairs = config.ff * n as f64;
        if npairs >= u64::MAX as f64 {
            return Err(EstimateError::InvalidParameter("too many pairs"));
        }

        Ok(Self {
            n,
            k,
            kmers,
            npairs: npairs as u64,
            bits_per_kmer: k * 2 + 1,
            bits_per_loc: log2(n),
        })
    }

    /// Return structural counts handed to `TrieData`
    pub fn shape(&self, allow_inner: bool) -> TrieShape {
        TrieShape {
            kmers: self.kmers,
            locs: self.n,
            pairs: self.npairs,
            allow_inner,
        }
    }
}

/// Return number of trie k-mers of depth `k`, `None` on overflow
fn count_kmers(k: u32, allow_inner: bool) -> Option<u64> {
    if allow_inner {
        // 1 + 4 + 16 + ... + 4^k
        Some((4u64.checked_pow(k + 1)? - 1) / 3)
    } else {
        4u64.checked_pow(k)
    }
}

/// Complete estimation run
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    config: PlanConfig,
    derived: Derived,
    trie_data: TrieData,
    pairs: Pairs,
}

impl Plan {
    /// Derive counts from `config` and build all estimators
    pub fn new(config: PlanConfig) -> Result<Self> {
        let derived = Derived::from_config(&config)?;
        let shape = derived.shape(config.allow_inner);
        let bits = config.bits.unwrap_or_else(|| shape.min_bits());
        log::debug!(
            "n={} k={} kmers={} npairs={} bits={}",
            derived.n,
            derived.k,
            derived.kmers,
            derived.npairs,
            bits
        );

        let trie_data = TrieData::with_bits(shape, bits, config.layout)?;
        let pairs = Pairs::new(derived.npairs)?;
        log::debug!(
            "trie_data={} pairs={}",
            trie_data.size(),
            pairs.size()
        );
        Ok(Self {
            config,
            derived,
            trie_data,
            pairs,
        })
    }

    /// Return plan built from the same parameters with another index layout
    pub fn with_layout(&self, layout: IndexLayout) -> Result<Self> {
        Self::new(PlanConfig {
            layout,
            ..self.config
        })
    }

    /// Return user-facing parameters
    #[inline]
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Return derived structural counts
    #[inline]
    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    /// Return trie data estimator
    #[inline]
    pub fn trie_data(&self) -> &TrieData {
        &self.trie_data
    }

    /// Return raw pairs estimator
    #[inline]
    pub fn pairs(&self) -> &Pairs {
        &self.pairs
    }
}
