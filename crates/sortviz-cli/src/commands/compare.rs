//! Run every sorter over one array and tabulate the operation counts.

use crate::controller::Controller;
use clap::Args;
use serde::Serialize;
use sortviz_config::Settings;
use sortviz_core::{MemoryVisualizer, NullRenderer, Silence};
use sortviz_registry::SorterRegistry;

#[derive(Args)]
pub struct CompareArgs {
    /// Number of bars (10-100)
    #[arg(short, long, default_value_t = 100)]
    size: usize,

    /// Generator seed; every sorter sees the same array
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Row {
    id: &'static str,
    name: &'static str,
    reads: u64,
    writes: u64,
    comparisons: u64,
    swaps: u64,
    accesses: u64,
}

#[derive(Debug, Serialize)]
struct Report {
    size: usize,
    seed: u64,
    results: Vec<Row>,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let settings = Settings {
        delay_ms: 0,
        array_size: args.size,
        seed: Some(args.seed),
        ..Settings::default()
    };
    settings.validate()?;

    let registry = SorterRegistry::new();
    let mut controller = Controller::new(
        &settings,
        Box::new(MemoryVisualizer::default()),
        Box::new(Silence),
    )?;

    let mut results = Vec::with_capacity(registry.len());
    for descriptor in registry.all_sorters() {
        controller.reset();
        controller.select_sorter(descriptor.id)?;
        let outcome = controller.start(&mut NullRenderer)?;
        let stats = outcome.stats();
        results.push(Row {
            id: descriptor.id,
            name: descriptor.name,
            reads: stats.reads,
            writes: stats.writes,
            comparisons: stats.comparisons,
            swaps: stats.swaps,
            accesses: stats.accesses(),
        });
    }

    let report = Report {
        size: args.size,
        seed: args.seed,
        results,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} bars, seed {}", report.size, report.seed);
    println!();
    println!(
        "  {:12}  {:>8}  {:>8}  {:>11}  {:>8}",
        "Sorter", "Reads", "Writes", "Comparisons", "Swaps"
    );
    for row in &report.results {
        println!(
            "  {:12}  {:>8}  {:>8}  {:>11}  {:>8}",
            row.id, row.reads, row.writes, row.comparisons, row.swaps
        );
    }
    Ok(())
}
