//! Console rendering of an estimation plan.
//!
//! The report has two tables:
//! - derived parameters (`n`, `k`, number of k-mers and pairs, widths)
//! - footprint breakdown, one row per estimator, nested estimators indented
//!   under their parent

use tabled::settings::{Settings, Style};
use tabled::{Table, Tabled};

use crate::estimator::{Detail, Param, SizeEstimator};
use crate::human::{human_bytes, human_bytes_signed, human_cnt};
use crate::plan::Plan;

/// Indentation of one nesting level in the breakdown table
const INDENT: &str = "  ";

#[derive(Tabled)]
struct ParamRecord {
    parameter: &'static str,
    value: String,
}

#[derive(Tabled)]
struct SizeRecord {
    structure: String,
    kind: &'static str,
    params: String,
    #[tabled(rename = "packed")]
    size: String,
    #[tabled(rename = "native")]
    native_size: String,
}

impl SizeRecord {
    fn new(depth: usize, detail: &Detail) -> Self {
        let params = detail
            .params
            .iter()
            .map(|(name, value)| format!("{}={}", name, human_param(value)))
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            structure: format!("{}{}", INDENT.repeat(depth), detail.label),
            kind: detail.kind,
            params,
            size: human_bytes(detail.size),
            native_size: human_bytes(detail.native_size),
        }
    }
}

/// Render a parameter value, counts in human notation
fn human_param(value: &Param) -> String {
    match value {
        Param::Count(n) => human_cnt(*n),
        other => other.to_string(),
    }
}

fn render_table<T: Tabled>(records: Vec<T>) -> String {
    let table_config = Settings::default().with(Style::psql());
    Table::new(records).with(table_config).to_string()
}

/// Render derived parameters of `plan`
pub fn derived_table(plan: &Plan) -> String {
    let config = plan.config();
    let derived = plan.derived();
    let records = vec![
        ParamRecord {
            parameter: "n",
            value: human_cnt(derived.n),
        },
        ParamRecord {
            parameter: "ff",
            value: format!("{:.1}", config.ff),
        },
        ParamRecord {
            parameter: "k = log4(n) + rel",
            value: derived.k.to_string(),
        },
        ParamRecord {
            parameter: "num kmers",
            value: human_cnt(derived.kmers),
        },
        ParamRecord {
            parameter: "num pairs",
            value: human_cnt(derived.npairs),
        },
        ParamRecord {
            parameter: "bits per kmer",
            value: derived.bits_per_kmer.to_string(),
        },
        ParamRecord {
            parameter: "bits per loc",
            value: derived.bits_per_loc.to_string(),
        },
        ParamRecord {
            parameter: "shared bits",
            value: plan.trie_data().bits().to_string(),
        },
    ];
    render_table(records)
}

/// Render footprint breakdown of any estimator tree
pub fn breakdown_table(details: &[Detail]) -> String {
    let mut records = Vec::new();
    for detail in details {
        detail.walk(&mut |depth, d| records.push(SizeRecord::new(depth, d)));
    }
    render_table(records)
}

/// Render the complete report of `plan`
pub fn render(plan: &Plan) -> String {
    let breakdown = breakdown_table(&[
        plan.trie_data().detail(),
        plan.pairs().detail(),
    ]);
    format!(
        "{}\n\n{}\n\ntrie data total {} packed, {} native",
        derived_table(plan),
        breakdown,
        human_bytes(plan.trie_data().size()),
        human_bytes(plan.trie_data().native_size()),
    )
}

/// Render the size difference of the sorted-index plan `other` against the flat-index plan `base`
pub fn layout_delta(base: &Plan, other: &Plan) -> String {
    let delta = |a: u64, b: u64| {
        human_bytes_signed(i64::try_from(i128::from(b) - i128::from(a)).unwrap_or(i64::MAX))
    };
    format!(
        "sorted index delta {} packed, {} native",
        delta(base.trie_data().size(), other.trie_data().size()),
        delta(
            base.trie_data().native_size(),
            other.trie_data().native_size()
        ),
    )
}
