//! fokodb — Command-line interface for fokodb-core
//!
//! Loads the administrative tree once and answers one query against it.
//!
//! Usage examples
//! --------------
//!
//! - Show how many nodes each level holds
//!   $ fokodb stats
//!
//! - List regions, optionally filtered by name
//!   $ fokodb regions
//!   $ fokodb regions --query ana
//!
//! - Ranked search, optionally restricted to one level
//!   $ fokodb search ambohimanambola
//!   $ fokodb search antsirabe --level commune --limit 5
//!
//! - Parents, children and siblings of the best (or n-th) match
//!   $ fokodb context alasora
//!   $ fokodb context ambohi --pick 2
//!
//! - One-level tree under a match
//!   $ fokodb tree avaradrano --limit 5
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `data/reg.json` bundled with `fokodb-core`. Use
//! `--input <path>` or the `FOKODB_DATA` environment variable to point to
//! another dataset; `.json.gz` files are decompressed transparently. Add
//! `--json` to any command for machine-readable output.
use anyhow::{bail, Context as _};
use clap::Parser;
use fokodb_cli::args::{CliArgs, Commands, SearchArgs};
use fokodb_cli::init_logging;
use fokodb_core::{build_tree, collect_descendants, expand, Gazetteer, SearchResult};
use serde::Serialize;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // Determine input file (default dataset inside fokodb-core)
    let input_path = args.input.clone().unwrap_or_else(|| {
        Gazetteer::default_data_dir().join(Gazetteer::default_dataset_filename())
    });

    debug!(path = %input_path.display(), "using dataset");
    let db = Gazetteer::load_from_path(&input_path)
        .with_context(|| format!("loading dataset {}", input_path.display()))?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            if args.json {
                return print_json(&stats);
            }
            println!("Dataset statistics:");
            println!("  Regions: {}", stats.regions);
            println!("  Districts: {}", stats.districts);
            println!("  Communes: {}", stats.communes);
            println!("  Fokontany: {}", stats.fokontany);
        }

        Commands::Regions { query } => {
            let regions = db.filter_regions(query.as_deref().unwrap_or(""));
            if args.json {
                let names: Vec<&str> = regions.iter().map(|r| r.name()).collect();
                return print_json(&names);
            }
            for r in regions {
                println!("{}", r.name());
            }
        }

        Commands::Search { search, limit } => {
            let mut summary = db.search_with_summary(&search.term, search.level);
            if let Some(limit) = limit {
                summary.results.truncate(limit);
            }
            if args.json {
                return print_json(&summary);
            }
            if summary.results.is_empty() {
                println!("No matches for: {}", search.term);
                return Ok(());
            }
            println!(
                "{} match(es) in {} ms (level: {})",
                summary.total_matches,
                summary.search_time.as_millis(),
                search.level
            );
            for r in &summary.results {
                print_result_line(r);
            }
        }

        Commands::Context { search, pick } => {
            let results = db.search(&search.term, search.level);
            let result = pick_result(&results, &search, pick)?;
            let ctx = db.context(result);
            if args.json {
                return print_json(&ctx);
            }
            print!("{}", ctx.to_text());
            if !ctx.siblings.is_empty() {
                println!("\nSiblings:");
                for s in &ctx.siblings {
                    println!("  {}: {}", result.level, s.name());
                }
            }
        }

        Commands::Tree {
            search,
            pick,
            limit,
            all,
        } => {
            let results = db.search(&search.term, search.level);
            let result = pick_result(&results, &search, pick)?;
            if all {
                let expanded = expand(result);
                if args.json {
                    return print_json(&expanded);
                }
                println!("{} ({})", result.name, result.level);
                for child in expanded.children.unwrap_or_default() {
                    println!("  └─ {}", child.name());
                }
            } else {
                let tree = build_tree(result, limit);
                if args.json {
                    return print_json(&tree);
                }
                println!("{} ({})", result.name, result.level);
                for branch in &tree.children {
                    println!("  └─ {} ({})", branch.node.name(), branch.level);
                }
                let total = collect_descendants(result.node, result.level).len();
                if total > tree.children.len() {
                    println!("  … {} more", total - tree.children.len());
                }
            }
        }
    }

    Ok(())
}

fn pick_result<'r, 'a>(
    results: &'r [SearchResult<'a>],
    search: &SearchArgs,
    pick: usize,
) -> anyhow::Result<&'r SearchResult<'a>> {
    if results.is_empty() {
        bail!("no matches for: {}", search.term);
    }
    results.get(pick).with_context(|| {
        format!(
            "only {} match(es) for {:?}, cannot pick #{pick}",
            results.len(),
            search.term
        )
    })
}

fn print_result_line(r: &SearchResult<'_>) {
    let path: Vec<&str> = r.hierarchy_path.iter().map(|s| s.name.as_str()).collect();
    let marker = if r.is_exact_match { "=" } else { "~" };
    println!(
        "{marker} [{:>5}] {} ({}) — {}",
        r.match_score,
        r.name,
        r.level,
        path.join(" › ")
    );
    let c = &r.children_count;
    if c.districts + c.communes + c.fokontany > 0 {
        println!(
            "          districts: {}, communes: {}, fokontany: {}",
            c.districts, c.communes, c.fokontany
        );
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
