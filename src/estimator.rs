//! Size estimators project the byte footprint of a data structure from a
//! handful of structural parameters (element counts and field widths),
//! without ever allocating the structure itself.
//!
//! # Estimator contract
//!
//! Every estimator implements [`SizeEstimator`]:
//! - `size()`        - bytes used when every field is bit-packed to its exact width
//! - `native_size()` - bytes used when every field lives in the smallest native
//!   unsigned integer (`u8`, `u16`, `u32` or `u64`) holding its width
//! - `detail()`      - ordered [`Detail`] record with parameters and child records
//!
//! # Estimator tree
//!
//! ```text
//! TrieData
//! ├── t2g: DmMap  (kmers -> pairs)
//! │   ├── begin: FlatVec | SortedVec
//! │   └── elems: FlatVec
//! ├── g2t: DmMap  (locs -> pairs)
//! │   ├── begin: FlatVec | SortedVec
//! │   └── elems: FlatVec
//! └── trie: TieredBitset
//! ```
//!
//! Estimators are immutable once built. Field widths are resolved during
//! construction, so a width which does not fit a native container is reported
//! as an error by the constructor and never by `size()`.

use enum_dispatch::enum_dispatch;

use crate::flat::FlatVec;
use crate::sorted::SortedVec;

/// Key index estimators supported by `DmMap`
#[derive(Clone, PartialEq)]
#[enum_dispatch]
pub enum Index {
    Flat(FlatVec),
    Sorted(SortedVec),
}

/// Estimator trait which must be implemented by all estimators.
#[enum_dispatch(Index)]
pub trait SizeEstimator {
    /// Return name of the estimated structure
    fn kind(&self) -> &'static str;
    /// Return bit-packed size in bytes
    fn size(&self) -> u64;
    /// Return size in bytes when fields are stored in native containers
    fn native_size(&self) -> u64;
    /// Return structured breakdown of the estimate
    fn detail(&self) -> Detail;
    /// Return one-line summary, e.g. `{ elems: 1000, bits: 8, size: 1000 }`
    fn summary(&self) -> String {
        self.detail().summary()
    }
}

impl Index {
    /// Return number of indexed elements
    #[inline]
    pub fn elems(&self) -> u64 {
        match self {
            Index::Flat(v) => v.elems(),
            Index::Sorted(v) => v.elems(),
        }
    }
}

impl std::fmt::Debug for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Value of a single estimator parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Param {
    /// Number of elements
    Count(u64),
    /// Field width in bits
    Bits(u32),
    /// Proportional coefficient
    Ratio(f64),
    /// Boolean switch
    Flag(bool),
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Param::Count(n) => write!(f, "{}", n),
            Param::Bits(b) => write!(f, "{}", b),
            Param::Ratio(r) => write!(f, "{}", r),
            Param::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Structured breakdown of one estimator.
///
/// Parameters and children keep the order in which the estimator declares
/// them, which is the order used for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    /// Role of the structure within its parent (equals `kind` at the root)
    pub label: &'static str,
    /// Name of the estimated structure
    pub kind: &'static str,
    /// Bit-packed size in bytes
    pub size: u64,
    /// Native-container size in bytes
    pub native_size: u64,
    /// Estimator parameters
    pub params: Vec<(&'static str, Param)>,
    /// Breakdown of nested estimators
    pub children: Vec<Detail>,
}

impl Detail {
    /// Create new leaf record for given estimator
    pub fn new<E: SizeEstimator + ?Sized>(estimator: &E) -> Self {
        Self {
            label: estimator.kind(),
            kind: estimator.kind(),
            size: estimator.size(),
            native_size: estimator.native_size(),
            params: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn param(mut self, name: &'static str, value: Param) -> Self {
        self.params.push((name, value));
        self
    }

    /// Append a child record under given role
    pub fn child(mut self, label: &'static str, detail: Detail) -> Self {
        self.children.push(detail.labeled(label));
        self
    }

    /// Rename the role of this record
    pub fn labeled(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Return parameter value by name
    pub fn get(&self, name: &str) -> Option<Param> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// Return child record by role
    pub fn find(&self, label: &str) -> Option<&Detail> {
        self.children.iter().find(|c| c.label == label)
    }

    /// Visit this record and all nested records depth-first with their depth
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(usize, &'a Detail)) {
        self.walk_at(0, f);
    }

    fn walk_at<'a>(&'a self, depth: usize, f: &mut impl FnMut(usize, &'a Detail)) {
        f(depth, self);
        for child in &self.children {
            child.walk_at(depth + 1, f);
        }
    }

    /// Return one-line summary of parameters and size
    pub fn summary(&self) -> String {
        let mut out = String::from("{ ");
        for (name, value) in &self.params {
            out.push_str(&format!("{}: {}, ", name, value));
        }
        out.push_str(&format!("size: {} }}", self.size));
        out
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::dmmap::{DmMap, IndexLayout};

    #[test]
    fn test_index_dispatch() {
        let flat: Index = FlatVec::with_bits(1000, 8).unwrap().into();
        let sorted: Index = SortedVec::new(1000, 16).unwrap().into();

        assert_eq!(flat.kind(), "FlatVec");
        assert_eq!(flat.size(), 1000);
        assert_eq!(sorted.kind(), "SortedVec");
        assert_eq!(sorted.size(), 1115);
        assert_eq!(format!("{:?}", flat), "{ elems: 1000, bits: 8, size: 1000 }");
    }

    #[test]
    fn test_detail_builder_keeps_order() {
        let vec = FlatVec::with_bits(10, 3).unwrap();
        let detail = Detail::new(&vec)
            .param("b", Param::Count(2))
            .param("a", Param::Flag(true));

        let names: Vec<_> = detail.params.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(detail.get("a"), Some(Param::Flag(true)));
        assert_eq!(detail.get("c"), None);
    }

    #[test]
    fn test_detail_walk() {
        let map = DmMap::new(100, 200, 8, IndexLayout::Flat).unwrap();
        let mut seen = Vec::new();
        map.detail().walk(&mut |depth, d| seen.push((depth, d.label)));

        assert_eq!(seen, [(0, "DmMap"), (1, "begin"), (1, "elems")]);
        assert_eq!(map.detail().find("elems").map(|d| d.size), Some(200));
    }
}
