use fokodb_core::score::score;
use fokodb_core::{
    build_context, collect_descendants, collect_descendants_at, count_descendants, search,
    AdministrativeNode, Gazetteer, HierarchyLevel, LevelFilter, SegmentLevel,
};
use HierarchyLevel::*;

fn node(name: &str) -> AdministrativeNode {
    AdministrativeNode::new(name)
}

/// One region → one district → one commune → one fokontany, where the commune
/// and the fokontany share their name.
fn single_chain() -> Vec<AdministrativeNode> {
    vec![node("Analamanga").with_children(
        District,
        vec![node("Avaradrano").with_children(
            Commune,
            vec![node("Ambohimanambola").with_children(Fokontany, vec![node("Ambohimanambola")])],
        )],
    )]
}

fn bundled() -> Gazetteer {
    let path = Gazetteer::default_data_dir().join(Gazetteer::default_dataset_filename());
    Gazetteer::load_from_path(path).expect("bundled dataset loads")
}

#[test]
fn ambohimanambola_scenario() {
    let tree = single_chain();
    let hits = search("ambohimanambola", &tree, LevelFilter::All);
    assert_eq!(hits.len(), 2);

    let (commune, fokontany) = (&hits[0], &hits[1]);
    assert_eq!(commune.level, Commune);
    assert_eq!(fokontany.level, Fokontany);
    assert!(commune.is_exact_match && fokontany.is_exact_match);
    assert!(commune.match_score >= fokontany.match_score);

    let chain = |path: &fokodb_core::HierarchyPath| -> Vec<(SegmentLevel, String)> {
        path.iter().map(|s| (s.level, s.name.clone())).collect()
    };
    assert_eq!(
        chain(&commune.hierarchy_path),
        vec![
            (SegmentLevel::Country, "Madagascar".to_string()),
            (SegmentLevel::Admin(Region), "Analamanga".to_string()),
            (SegmentLevel::Admin(District), "Avaradrano".to_string()),
        ]
    );
    assert_eq!(fokontany.hierarchy_path.len(), 4);
    assert_eq!(
        fokontany.hierarchy_path.last().map(|s| (s.level, s.name.as_str())),
        Some((SegmentLevel::Admin(Commune), "Ambohimanambola"))
    );

    assert_eq!(commune.children_count.fokontany, 1);
    assert_eq!(commune.children_count.districts, 0);
}

#[test]
fn context_of_only_commune() {
    let tree = single_chain();
    let hits = search("ambohimanambola", &tree, LevelFilter::All);
    let ctx = build_context(&hits[0], &tree);

    assert!(ctx.siblings.is_empty());
    assert_eq!(ctx.children.len(), 1);
    assert_eq!(ctx.children[0].name, "Ambohimanambola");
    assert_eq!(ctx.complete_hierarchy.len(), 5);
}

#[test]
fn short_terms_never_match() {
    let db = bundled();
    for term in ["", " ", "a", " A ", "\tm\n"] {
        assert!(db.search(term, LevelFilter::All).is_empty(), "term {term:?}");
    }
}

#[test]
fn path_length_matches_level_depth() {
    let db = bundled();
    for term in ["an", "ambo", "mahajanga", "antsirabe", "ka", "ra"] {
        for hit in db.search(term, LevelFilter::All) {
            assert_eq!(hit.hierarchy_path.len(), hit.level.depth(), "{} ({})", hit.name, hit.level);
            assert_eq!(hit.hierarchy_path.segments()[0].level, SegmentLevel::Country);
        }
    }
}

#[test]
fn region_fokontany_count_is_sum_of_districts() {
    let db = bundled();
    for region in db.regions() {
        let sum: usize = collect_descendants(region, Region)
            .into_iter()
            .map(|d| count_descendants(d, District, Fokontany))
            .sum();
        assert_eq!(count_descendants(region, Region, Fokontany), sum);
        assert_eq!(collect_descendants_at(region, Region, Fokontany).len(), sum);
    }
}

#[test]
fn equal_keys_sort_alphabetically() {
    // Same length and shape: equal scores, same depth, neither exact.
    let tree = vec![node("Zone").with_children(District, vec![node("Beta-xy"), node("Alfa-xy")])];
    assert_eq!(score("Beta-xy", "xy"), score("Alfa-xy", "xy"));

    let hits = search("xy", &tree, LevelFilter::All);
    let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["Alfa-xy", "Beta-xy"]);
}

#[test]
fn generic_labels_rank_lower() {
    assert!(score("Antananarivo", "antananarivo") > score("Antananarivo Ville", "antananarivo"));
}

#[test]
fn leaf_fokontany_has_no_descendants() {
    let leaf = node("Isoraka");
    assert!(collect_descendants(&leaf, Fokontany).is_empty());
    for level in HierarchyLevel::ALL {
        assert!(collect_descendants_at(&leaf, Fokontany, level).is_empty());
        assert_eq!(count_descendants(&leaf, Fokontany, level), 0);
    }
}

#[test]
fn filter_descends_through_unreported_levels() {
    let db = bundled();
    let hits = db.search("ambo", LevelFilter::Only(Fokontany));
    let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
    assert!(names.contains(&"Ambohimanambola"));
    assert!(names.contains(&"Ambodivona"));
    assert!(hits.iter().all(|h| h.level == Fokontany));
}

#[test]
fn searches_share_a_tree_across_threads() {
    let db = bundled();
    let terms = ["ambo", "antsirabe", "mahajanga", "ala"];
    let expected: Vec<usize> = terms.iter().map(|t| db.search(t, LevelFilter::All).len()).collect();

    let db = &db;
    std::thread::scope(|s| {
        let handles: Vec<_> = terms
            .iter()
            .map(|t| s.spawn(move || db.search(t, LevelFilter::All).len()))
            .collect();
        let got: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(got, expected);
    });
}

#[test]
fn empty_tree_yields_nothing() {
    let db = Gazetteer::default();
    assert!(db.search("analamanga", LevelFilter::All).is_empty());
    assert_eq!(db.stats().regions, 0);
}
