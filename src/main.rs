use std::process::ExitCode;

use clap::Parser;
use trie_footprint::human::{parse_human, parse_ratio};
use trie_footprint::report;
use trie_footprint::sorted::{DEFAULT_BEACON_EVERY, DEFAULT_DIFF_BITS, DEFAULT_OVERFLOW_COEF};
use trie_footprint::{IndexLayout, Plan, PlanConfig, SortedParams};

/// Project the memory footprint of a triegraph index before building it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of graph locations, e.g. `3.1b`, `250m`, `15000`
    #[arg(value_parser = parse_human)]
    graph_locations: u64,

    /// Index the reverse complement strand as well (doubles the locations)
    #[arg(long)]
    reverse_complement: bool,

    /// Load factor, expected k-mer/location pairs per location
    #[arg(long, default_value = "2.0", value_parser = parse_ratio)]
    ff: f64,

    /// Adjustment of the trie depth relative to log4(locations)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    rel_trie_depth: i32,

    /// Store inner trie nodes alongside leaves
    #[arg(long)]
    allow_inner: bool,

    /// Override the shared field width in bits
    #[arg(long)]
    bits: Option<u32>,

    /// Store map key offsets as beacon/diff encoded sorted vectors
    #[arg(long)]
    sorted_index: bool,

    /// Beacon interval of sorted key offsets
    #[arg(long, default_value_t = DEFAULT_BEACON_EVERY)]
    beacon_every: u64,

    /// Width in bits of the differences between beacons
    #[arg(long, default_value_t = DEFAULT_DIFF_BITS)]
    diff_bits: u32,

    /// Proportional margin reserved for overflowing differences
    #[arg(long, default_value_t = DEFAULT_OVERFLOW_COEF, value_parser = parse_ratio)]
    overflow_coef: f64,

    /// Also report the difference between the sorted and flat key layouts
    #[arg(long)]
    compare_layouts: bool,

    /// Print the report as JSON
    #[cfg(feature = "with_serde")]
    #[arg(long)]
    json: bool,
}

impl Args {
    fn sorted_layout(&self) -> IndexLayout {
        IndexLayout::Sorted(SortedParams {
            beacon_every: self.beacon_every,
            diff_bits: self.diff_bits,
            overflow_coef: self.overflow_coef,
        })
    }

    fn plan_config(&self) -> PlanConfig {
        let layout = if self.sorted_index {
            self.sorted_layout()
        } else {
            IndexLayout::Flat
        };
        PlanConfig {
            graph_locations: self.graph_locations,
            reverse_complement: self.reverse_complement,
            ff: self.ff,
            rel_trie_depth: self.rel_trie_depth,
            allow_inner: self.allow_inner,
            layout,
            bits: self.bits,
        }
    }
}

fn run(args: &Args) -> trie_footprint::Result<()> {
    let plan = Plan::new(args.plan_config())?;

    #[cfg(feature = "with_serde")]
    if args.json {
        let json = serde_json::to_string_pretty(&plan)
            .map_err(|e| trie_footprint::EstimateError::Render(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", report::render(&plan));
    if args.compare_layouts {
        let flat = plan.with_layout(IndexLayout::Flat)?;
        let sorted = plan.with_layout(args.sorted_layout())?;
        println!("{}", report::layout_delta(&flat, &sorted));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
