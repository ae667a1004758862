//! Sorter listing and information command.

#![allow(clippy::print_literal)]

use clap::Args;
use sortviz_registry::{SorterCategory, SorterRegistry};

#[derive(Args)]
pub struct SortersArgs {
    /// Show details for a specific sorter
    #[arg(value_name = "SORTER")]
    sorter: Option<String>,
}

const CATEGORIES: [SorterCategory; 5] = [
    SorterCategory::Exchange,
    SorterCategory::Selection,
    SorterCategory::Insertion,
    SorterCategory::Merge,
    SorterCategory::Distribution,
];

pub fn run(args: SortersArgs) -> anyhow::Result<()> {
    let registry = SorterRegistry::new();

    if let Some(id) = &args.sorter {
        let sorter = registry
            .all_sorters()
            .into_iter()
            .find(|d| d.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| anyhow::anyhow!("Unknown sorter: {}", id))?;

        println!("{}", sorter.name);
        println!("{}", "=".repeat(sorter.name.len()));
        println!();
        println!("{}", sorter.description);
        println!();
        println!("  id:         {}", sorter.id);
        println!("  category:   {}", sorter.category.name());
        println!("  complexity: {}", sorter.complexity);
        println!("  stable:     {}", if sorter.stable { "yes" } else { "no" });
        println!();
        println!("Example usage:");
        println!();
        println!("  sortviz run --sorter {} --delay 10", sorter.id);
        return Ok(());
    }

    println!("Available Sorters");
    println!("=================");
    println!();
    println!("  {:12}  {:18}  {:12}  {}", "ID", "Name", "Complexity", "Description");
    println!("  {:12}  {:18}  {:12}  {}", "--", "----", "----------", "-----------");

    for category in CATEGORIES {
        for sorter in registry.sorters_in_category(category) {
            println!(
                "  {:12}  {:18}  {:12}  {}",
                sorter.id, sorter.name, sorter.complexity, sorter.description
            );
        }
    }

    println!();
    println!("Default: {}", registry.default_id());
    println!("Use 'sortviz sorters <SORTER>' for details.");

    Ok(())
}
