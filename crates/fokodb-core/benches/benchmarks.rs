use criterion::{criterion_group, criterion_main, Criterion};
use fokodb_core::score::score;
use fokodb_core::{build_context, search, AdministrativeNode, HierarchyLevel, LevelFilter};
use std::hint::black_box;

/// 22 regions × 5 districts × 10 communes × 15 fokontany, roughly the size of
/// the real dataset.
fn synthetic_tree() -> Vec<AdministrativeNode> {
    (0..22)
        .map(|r| {
            let districts = (0..5)
                .map(|d| {
                    let communes = (0..10)
                        .map(|c| {
                            let fokontany = (0..15)
                                .map(|f| AdministrativeNode::new(format!("Ambohi {r}-{d}-{c}-{f}")))
                                .collect();
                            AdministrativeNode::new(format!("Commune Ankazo {r}-{d}-{c}"))
                                .with_children(HierarchyLevel::Fokontany, fokontany)
                        })
                        .collect();
                    AdministrativeNode::new(format!("District {r}-{d}"))
                        .with_children(HierarchyLevel::Commune, communes)
                })
                .collect();
            AdministrativeNode::new(format!("Region {r}")).with_children(HierarchyLevel::District, districts)
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let tree = synthetic_tree();

    c.bench_function("search_all_levels", |b| {
        b.iter(|| search(black_box("ambohi 3-"), &tree, LevelFilter::All))
    });

    c.bench_function("search_commune_only", |b| {
        b.iter(|| search(black_box("ankazo"), &tree, LevelFilter::Only(HierarchyLevel::Commune)))
    });

    let hits = search("commune ankazo 7-2-", &tree, LevelFilter::All);
    c.bench_function("build_context", |b| b.iter(|| build_context(black_box(&hits[0]), &tree)));
}

fn bench_score(c: &mut Criterion) {
    c.bench_function("score_long_name", |b| {
        b.iter(|| score(black_box("Antananarivo Renivohitra Ville"), black_box("antananarivo")))
    });
}

criterion_group!(benches, bench_search, bench_score);
criterion_main!(benches);
