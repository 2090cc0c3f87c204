//! Hierarchy context example for fokodb-rs
//!
//! Picks a search result and walks around it: parents, children, siblings,
//! a capped tree view and the plain-text report.

use fokodb_core::search::find_result_for_segment;
use fokodb_core::{build_tree, AdministrativeNode, Gazetteer, HierarchyLevel, LevelFilter};

fn main() {
    println!("=== fokodb-rs Hierarchy Context Example ===\n");

    let db = Gazetteer::new(vec![AdministrativeNode::new("Analamanga").with_children(
        HierarchyLevel::District,
        vec![AdministrativeNode::new("Avaradrano").with_children(
            HierarchyLevel::Commune,
            vec![
                AdministrativeNode::new("Alasora").with_children(
                    HierarchyLevel::Fokontany,
                    ["Alasora", "Ambodivona", "Ankadindratombo"]
                        .into_iter()
                        .map(AdministrativeNode::new)
                        .collect(),
                ),
                AdministrativeNode::new("Sabotsy Namehana"),
            ],
        )],
    )]);

    let hits = db.search("ala", LevelFilter::All);
    let Some(commune) = hits.iter().find(|h| h.level == HierarchyLevel::Commune) else {
        println!("no commune matched");
        return;
    };

    // Example 1: Full context
    println!("--- Example 1: Context of {} ---", commune.name);
    let ctx = db.context(commune);
    print!("{}", ctx.to_text());
    println!("\nSiblings:");
    for s in &ctx.siblings {
        println!("  {}", s.name());
    }
    println!();

    // Example 2: Capped tree
    println!("--- Example 2: Tree (2 children max) ---");
    let tree = build_tree(commune, 2);
    for branch in &tree.children {
        println!("  └─ {} ({})", branch.node.name(), branch.level);
    }
    println!();

    // Example 3: Jump to a parent that is itself a match
    println!("--- Example 3: Parent lookup among results ---");
    for segment in ctx.parents.iter() {
        match find_result_for_segment(&hits, segment) {
            Some(r) => println!("  {} ({}) is a match, score {}", r.name, r.level, r.match_score),
            None => println!("  {} ({}) did not match", segment.name, segment.level),
        }
    }
}
