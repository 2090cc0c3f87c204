//! Basic usage example for fokodb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled administrative tree
//! - Inspect level statistics and list regions
//! - Run ranked searches, with and without a level filter

use fokodb_core::{Gazetteer, HierarchyLevel, LevelFilter, Result};

fn main() -> Result<()> {
    println!("=== fokodb-rs Basic Search Example ===\n");

    println!("Loading administrative tree...");
    let path = Gazetteer::default_data_dir().join(Gazetteer::default_dataset_filename());
    let db = Gazetteer::load_from_path(path)?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: Statistics
    println!("--- Example 1: Statistics ---");
    let stats = db.stats();
    println!(
        "{} regions, {} districts, {} communes, {} fokontany\n",
        stats.regions, stats.districts, stats.communes, stats.fokontany
    );

    // Example 2: Regions by name
    println!("--- Example 2: Regions by name ---");
    for (i, region) in db.sorted_regions().iter().enumerate() {
        println!("{}. {}", i + 1, region.name());
    }
    println!();

    // Example 3: Search every level
    println!("--- Example 3: Search \"ambo\" across all levels ---");
    let summary = db.search_with_summary("ambo", LevelFilter::All);
    println!("{} match(es)", summary.total_matches);
    for hit in &summary.results {
        let path: Vec<&str> = hit.hierarchy_path.iter().map(|s| s.name.as_str()).collect();
        println!(
            "  [{:>4}] {} ({}) in {}",
            hit.match_score,
            hit.name,
            hit.level,
            path.join(" › ")
        );
    }
    println!();

    // Example 4: Restrict to one level
    println!("--- Example 4: Communes only ---");
    for hit in db.search("an", LevelFilter::Only(HierarchyLevel::Commune)) {
        println!(
            "  {} — {} fokontany",
            hit.name, hit.children_count.fokontany
        );
    }
    println!();

    // Example 5: Terms that are too short are a no-op
    println!("--- Example 5: Short terms ---");
    println!("  \"a\" -> {} result(s)", db.search("a", LevelFilter::All).len());

    Ok(())
}
