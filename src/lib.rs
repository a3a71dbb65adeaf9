//! `trie-footprint` is a Rust crate designed to project the memory footprint of a triegraph
//! genome index before it is built.
//!
//! The index is described by a few structural parameters (graph locations, load factor,
//! trie depth), which are turned into element counts and field widths and fed into composable
//! closed-form size estimators.
pub mod bitset;
pub mod dmmap;
pub mod error;
pub mod estimator;
pub mod flat;
pub mod human;
pub mod pairs;
pub mod plan;
pub mod report;
#[cfg(feature = "with_serde")]
mod serde;
pub mod sorted;
pub mod trie_data;
pub mod width;

pub use crate::bitset::TieredBitset;
pub use crate::dmmap::{DmMap, IndexLayout};
pub use crate::error::{EstimateError, Result};
pub use crate::estimator::{Detail, Index, Param, SizeEstimator};
pub use crate::flat::FlatVec;
pub use crate::pairs::Pairs;
pub use crate::plan::{Derived, Plan, PlanConfig};
pub use crate::sorted::{SortedParams, SortedVec};
pub use crate::trie_data::{TrieData, TrieShape};
