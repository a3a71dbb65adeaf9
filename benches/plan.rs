use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use tabled::settings::{Settings, Style};
use tabled::{Table, Tabled};
use trie_footprint::human::{human_bytes, human_cnt};
use trie_footprint::{report, IndexLayout, Plan, PlanConfig, SizeEstimator};

/// Plans are benchmarked against graph sizes ranging from 1k locations up to
/// `DEFAULT_MAX_LOCATIONS` or environment variable `N` (if defined), with the size multiplied by
/// ten with every iteration.
const DEFAULT_MAX_LOCATIONS: u64 = 10_000_000_000;

criterion_group!(benches, benchmark);
criterion_main!(benches);

fn benchmark(c: &mut Criterion) {
    let max_locations = std::env::var("N")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_LOCATIONS);

    let sizes: Vec<u64> = (3..)
        .map(|e| 10u64.pow(e))
        .take_while(|&n| n <= max_locations)
        .collect();

    let mut group = c.benchmark_group("plan");
    group.throughput(Throughput::Elements(1));
    for &graph_locations in &sizes {
        bench_plan(&mut group, "flat", IndexLayout::Flat, graph_locations);
        bench_plan(&mut group, "sorted", IndexLayout::sorted(), graph_locations);
    }
    group.finish();

    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));
    for &graph_locations in &sizes {
        let plan = Plan::new(config(graph_locations, IndexLayout::Flat)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("report", graph_locations),
            &plan,
            |b, plan| b.iter(|| report::render(black_box(plan))),
        );
    }
    group.finish();

    if let Ok(bench_results_path) = std::env::var("BENCH_RESULTS_PATH") {
        let results: Vec<SizeRecord> = sizes.iter().map(|&n| SizeRecord::new(n)).collect();
        let table_config = Settings::default().with(Style::markdown());
        std::fs::write(
            format!("{}/trie_footprint.md", bench_results_path),
            Table::new(results).with(table_config).to_string(),
        )
        .unwrap();
    }
}

fn config(graph_locations: u64, layout: IndexLayout) -> PlanConfig {
    PlanConfig {
        graph_locations,
        reverse_complement: true,
        layout,
        ..Default::default()
    }
}

fn bench_plan(
    group: &mut BenchmarkGroup<WallTime>,
    name: &str,
    layout: IndexLayout,
    graph_locations: u64,
) {
    group.bench_with_input(
        BenchmarkId::new(name, graph_locations),
        &graph_locations,
        |b, &graph_locations| {
            b.iter(|| Plan::new(config(black_box(graph_locations), layout)).unwrap());
        },
    );
}

#[derive(Tabled)]
struct SizeRecord {
    graph_locations: String,
    flat: String,
    sorted: String,
    pairs: String,
}

impl SizeRecord {
    fn new(graph_locations: u64) -> Self {
        let flat = Plan::new(config(graph_locations, IndexLayout::Flat)).unwrap();
        let sorted = flat.with_layout(IndexLayout::sorted()).unwrap();
        Self {
            graph_locations: human_cnt(graph_locations),
            flat: format!(
                "{} / {}",
                human_bytes(flat.trie_data().size()),
                human_bytes(flat.trie_data().native_size())
            ),
            sorted: format!(
                "{} / {}",
                human_bytes(sorted.trie_data().size()),
                human_bytes(sorted.trie_data().native_size())
            ),
            pairs: human_bytes(flat.pairs().size()),
        }
    }
}
