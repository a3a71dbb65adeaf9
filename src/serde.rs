//! # Serde module for estimation reports
//!
//! This module provides serde-based serialization of [`Detail`] records and
//! complete [`Plan`]s, so reports can be consumed by other tools (e.g. as
//! JSON via `--json`).
//!
//! A `Detail` is serialized as a struct with its fields in declaration order.
//! Parameters become a map keyed by parameter name, preserving the order in
//! which the estimator declared them:
//!
//! ```text
//! { "label": "t2g", "kind": "DmMap", "size": 22534336, "native_size": 32777216,
//!   "params": { "keys": 4194304, "vals": 4000000, "bits": 22, "sorted": false },
//!   "children": [ ... ] }
//! ```
//!
//! A `Plan` also carries the configuration that produced it (inner nodes,
//! index layout) and the derived widths.
//!
//! Reports are output only: there is no deserialization.
use serde::ser::{SerializeMap, SerializeStruct, SerializeStructVariant};
use serde::{Serialize, Serializer};

use crate::dmmap::IndexLayout;
use crate::estimator::{Detail, Param, SizeEstimator};
use crate::plan::Plan;

impl Serialize for Param {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Param::Count(n) => serializer.serialize_u64(*n),
            Param::Bits(b) => serializer.serialize_u32(*b),
            Param::Ratio(r) => serializer.serialize_f64(*r),
            Param::Flag(b) => serializer.serialize_bool(*b),
        }
    }
}

impl Serialize for IndexLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IndexLayout::Flat => serializer.serialize_unit_variant("IndexLayout", 0, "flat"),
            IndexLayout::Sorted(params) => {
                let mut s =
                    serializer.serialize_struct_variant("IndexLayout", 1, "sorted", 3)?;
                s.serialize_field("beacon_every", &params.beacon_every)?;
                s.serialize_field("diff_bits", &params.diff_bits)?;
                s.serialize_field("overflow_coef", &params.overflow_coef)?;
                s.end()
            }
        }
    }
}

/// Ordered view of the parameters of a `Detail`
struct Params<'a>(&'a [(&'static str, Param)]);

impl Serialize for Params<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Detail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Detail", 6)?;
        s.serialize_field("label", self.label)?;
        s.serialize_field("kind", self.kind)?;
        s.serialize_field("size", &self.size)?;
        s.serialize_field("native_size", &self.native_size)?;
        s.serialize_field("params", &Params(&self.params))?;
        s.serialize_field("children", &self.children)?;
        s.end()
    }
}

impl Serialize for Plan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let config = self.config();
        let derived = self.derived();

        let mut s = serializer.serialize_struct("Plan", 15)?;
        s.serialize_field("graph_locations", &config.graph_locations)?;
        s.serialize_field("reverse_complement", &config.reverse_complement)?;
        s.serialize_field("ff", &config.ff)?;
        s.serialize_field("rel_trie_depth", &config.rel_trie_depth)?;
        s.serialize_field("allow_inner", &config.allow_inner)?;
        s.serialize_field("layout", &config.layout)?;
        s.serialize_field("n", &derived.n)?;
        s.serialize_field("k", &derived.k)?;
        s.serialize_field("kmers", &derived.kmers)?;
        s.serialize_field("npairs", &derived.npairs)?;
        s.serialize_field("bits_per_kmer", &derived.bits_per_kmer)?;
        s.serialize_field("bits_per_loc", &derived.bits_per_loc)?;
        s.serialize_field("bits", &self.trie_data().bits())?;
        s.serialize_field("trie_data", &self.trie_data().detail())?;
        s.serialize_field("pairs", &self.pairs().detail())?;
        s.end()
    }
}
