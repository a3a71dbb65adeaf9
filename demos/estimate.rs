use trie_footprint::human::{human_bytes, parse_human};
use trie_footprint::{report, IndexLayout, Plan, PlanConfig, SizeEstimator};

fn main() -> trie_footprint::Result<()> {
    let config = PlanConfig {
        graph_locations: parse_human("3.1b")?,
        reverse_complement: true,
        ..Default::default()
    };

    let flat = Plan::new(config)?;
    println!("{}", report::render(&flat));

    let sorted = flat.with_layout(IndexLayout::sorted())?;
    println!(
        "sorted trie data = {}",
        human_bytes(sorted.trie_data().size())
    );
    println!("{}", report::layout_delta(&flat, &sorted));
    Ok(())
}
